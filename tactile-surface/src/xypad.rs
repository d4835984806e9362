#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tactile_common::time::Instant;
use tactile_common::types::InteractionId;

use crate::behavior::{is_finite_point, ControlBehavior};
use crate::store::ControlStore;

/// Physics tick deltas are clamped to this range, in seconds, so a stalled
/// or zero-length frame gap cannot destabilize the rubber integration
pub const MIN_TICK_DT: f32 = 0.00001;
pub const MAX_TICK_DT: f32 = 0.05;

const CENTER: [f32; 2] = [0.5, 0.5];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum XyPadMode {
    /// The knob snaps to the pointer on every start/move
    Instant,
    /// Pointer events move only the target; the physics tick glides the
    /// knob toward it
    #[default]
    Rubber,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct XyPadConfig {
    pub mode: XyPadMode,
    pub rubber_strength: f32,
    /// Glide back to (0.5, 0.5) when the interaction ends
    pub default_to_center: bool,
}

impl Default for XyPadConfig {
    fn default() -> Self {
        Self {
            mode: XyPadMode::Rubber,
            rubber_strength: 0.5,
            default_to_center: true,
        }
    }
}

/// A single 2D knob driven by one pointer at a time.
///
/// In rubber mode the physics tick is the only writer of the knob value;
/// pointer events mutate the target position alone.
#[derive(Debug, Clone)]
pub struct XyPad {
    store: ControlStore<[f32; 2]>,
    target: [f32; 2],
    owner: Option<InteractionId>,
    mode: XyPadMode,
    rubber_strength: f32,
    default_to_center: bool,
}

impl XyPad {
    pub fn new(config: &XyPadConfig) -> Self {
        Self {
            store: ControlStore::new(1, CENTER),
            target: CENTER,
            owner: None,
            mode: config.mode,
            rubber_strength: config.rubber_strength,
            default_to_center: config.default_to_center,
        }
    }

    pub fn mode(&self) -> XyPadMode {
        self.mode
    }

    /// Whether a pointer currently holds the knob
    pub fn is_interacting(&self) -> bool {
        self.owner.is_some()
    }

    pub fn position(&self) -> [f32; 2] {
        *self.store.value(0)
    }

    pub fn target(&self) -> [f32; 2] {
        self.target
    }

    fn apply_point(&mut self, point: [f32; 2]) {
        match self.mode {
            XyPadMode::Instant => self.store.write(0, point),
            XyPadMode::Rubber => self.target = point,
        }
    }
}

impl ControlBehavior for XyPad {
    type Value = [f32; 2];

    fn on_start(&mut self, interaction: InteractionId, point: [f32; 2], _now: Instant) {
        if !is_finite_point(point) {
            return;
        }
        self.owner = Some(interaction);
        self.apply_point(point);
    }

    fn on_move(&mut self, _interaction: InteractionId, point: [f32; 2]) {
        if !is_finite_point(point) {
            return;
        }
        self.apply_point(point);
    }

    fn on_end(&mut self, interaction: InteractionId) {
        if self.owner != Some(interaction) {
            return;
        }
        self.owner = None;
        if self.mode == XyPadMode::Rubber && self.default_to_center {
            self.target = CENTER;
        }
    }

    fn tick(&mut self, dt: f32) {
        if self.mode != XyPadMode::Rubber {
            return;
        }
        let dt = dt.clamp(MIN_TICK_DT, MAX_TICK_DT);
        let step = self.rubber_strength * 5.0 * dt;
        let position = *self.store.value(0);
        self.store.write(
            0,
            [
                position[0] + (self.target[0] - position[0]) * step,
                position[1] + (self.target[1] - position[1]) * step,
            ],
        );
    }

    fn store(&self) -> &ControlStore<[f32; 2]> {
        &self.store
    }

    fn store_mut(&mut self) -> &mut ControlStore<[f32; 2]> {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_instant_mode_snaps_to_pointer() {
        let mut pad = XyPad::new(&XyPadConfig {
            mode: XyPadMode::Instant,
            ..Default::default()
        });
        pad.on_start(InteractionId::Mouse, [0.2, 0.8], Instant::now());
        assert_approx_eq!(f32, pad.position()[0], 0.2);
        assert_approx_eq!(f32, pad.position()[1], 0.8);
        assert!(pad.is_interacting());
        pad.on_move(InteractionId::Mouse, [0.6, 0.4]);
        assert_approx_eq!(f32, pad.position()[0], 0.6);
        pad.on_end(InteractionId::Mouse);
        assert!(!pad.is_interacting());
        // Value stays at its last position when not interacting
        assert_approx_eq!(f32, pad.position()[0], 0.6);
    }

    #[test]
    fn test_rubber_pointer_events_only_move_the_target() {
        let mut pad = XyPad::new(&XyPadConfig::default());
        pad.on_start(InteractionId::Mouse, [0.2, 0.8], Instant::now());
        assert_approx_eq!(f32, pad.target()[0], 0.2);
        assert_approx_eq!(f32, pad.position()[0], 0.5);
        assert!(pad.store_mut().take_changed().is_empty());
    }

    #[test]
    fn test_rubber_converges_monotonically() {
        let mut pad = XyPad::new(&XyPadConfig {
            default_to_center: false,
            ..Default::default()
        });
        pad.on_start(InteractionId::Mouse, [1.0, 0.0], Instant::now());
        pad.on_end(InteractionId::Mouse);

        let mut last = pad.position();
        for _ in 0..2000 {
            pad.tick(0.016);
            let position = pad.position();
            assert!(position[0] >= last[0]);
            assert!(position[1] <= last[1]);
            last = position;
        }
        assert_approx_eq!(f32, last[0], 1.0, epsilon = 1e-4);
        assert_approx_eq!(f32, last[1], 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_end_with_default_to_center_glides_home() {
        let mut pad = XyPad::new(&XyPadConfig::default());
        pad.on_start(InteractionId::Mouse, [0.2, 0.8], Instant::now());
        pad.on_end(InteractionId::Mouse);
        assert_approx_eq!(f32, pad.target()[0], 0.5);
        assert_approx_eq!(f32, pad.target()[1], 0.5);
        for _ in 0..2000 {
            pad.tick(0.016);
        }
        assert_approx_eq!(f32, pad.position()[0], 0.5, epsilon = 1e-4);
        assert_approx_eq!(f32, pad.position()[1], 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut near = XyPad::new(&XyPadConfig {
            default_to_center: false,
            ..Default::default()
        });
        let mut far = near.clone();
        near.on_start(InteractionId::Mouse, [1.0, 1.0], Instant::now());
        far.on_start(InteractionId::Mouse, [1.0, 1.0], Instant::now());

        // A huge frame gap behaves exactly like the maximum step
        near.tick(MAX_TICK_DT);
        far.tick(10.0);
        assert_approx_eq!(f32, near.position()[0], far.position()[0]);

        // A zero gap still advances by the minimum step
        let before = near.position()[0];
        near.tick(0.0);
        assert!(near.position()[0] > before);
    }

    #[test]
    fn test_stray_end_from_non_owner_keeps_target() {
        let mut pad = XyPad::new(&XyPadConfig::default());
        pad.on_start(InteractionId::Touch(3), [0.1, 0.1], Instant::now());
        pad.on_end(InteractionId::Mouse);
        assert!(pad.is_interacting());
        assert_approx_eq!(f32, pad.target()[0], 0.1);
    }
}
