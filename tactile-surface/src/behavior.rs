use tactile_common::time::Instant;
use tactile_common::types::InteractionId;

use crate::store::ControlStore;

/// Capability interface one surface variant implements.
///
/// Replaces the usual widget-inheritance chain: the session tracker is
/// generic over this trait and owns all pointer-wiring logic, while each
/// variant supplies only target resolution and value mutation policy.
///
/// Points are normalized surface coordinates. Every implementation ignores
/// non-finite points, which is how degenerate surface geometry surfaces here.
pub trait ControlBehavior {
    type Value: Clone + PartialEq + Send + Sync + 'static;

    /// A new interaction touched down at `point`
    fn on_start(&mut self, interaction: InteractionId, point: [f32; 2], now: Instant);

    /// An active interaction moved to `point`
    fn on_move(&mut self, interaction: InteractionId, point: [f32; 2]);

    /// An interaction ended or was cancelled
    fn on_end(&mut self, interaction: InteractionId);

    /// Fixed-cadence physics advance, independent of pointer events
    fn tick(&mut self, _dt: f32) {}

    fn store(&self) -> &ControlStore<Self::Value>;

    fn store_mut(&mut self) -> &mut ControlStore<Self::Value>;
}

/// Whether both components of a normalized point are usable for targeting
pub(crate) fn is_finite_point(point: [f32; 2]) -> bool {
    point[0].is_finite() && point[1].is_finite()
}
