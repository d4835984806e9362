use tactile_common::canvas::SurfaceBounds;
use tactile_common::time::Instant;
use tactile_eventstream::manager::SurfaceEventManager;
use tactile_eventstream::stream::ChangeHandler;
use tactile_eventstream::window::WindowEvent;
use tactile_surface::behavior::ControlBehavior;

use crate::error::TactileAppError;

/// Host-facing wrapper around one control surface.
///
/// Feeds window events and physics ticks into the session tracker and hands
/// back a fresh state snapshot whenever the surface needs repainting. The
/// app never issues drawing commands and holds no global references; the
/// host owns the clock, the geometry, and the renderer.
pub struct SurfaceApp<B: ControlBehavior> {
    manager: SurfaceEventManager<B>,
}

impl<B: ControlBehavior> SurfaceApp<B> {
    pub fn new(
        behavior: B,
        bounds: SurfaceBounds,
        change_handlers: Vec<ChangeHandler<B::Value>>,
    ) -> Self {
        let mut manager = SurfaceEventManager::new(behavior, bounds);
        for handler in change_handlers {
            manager.register_handler(handler);
        }
        Self { manager }
    }

    /// Handle one window event; returns a snapshot iff a repaint is needed
    pub fn update(&mut self, event: &WindowEvent, instant: Instant) -> Option<Vec<B::Value>> {
        let status = self.manager.dispatch_event(event, instant);
        if status.rerender || status.rebuild_geometry {
            Some(self.values())
        } else {
            None
        }
    }

    /// Advance surface physics; returns a snapshot iff a repaint is needed
    pub fn tick(&mut self, instant: Instant) -> Option<Vec<B::Value>> {
        let status = self.manager.dispatch_tick(instant);
        if status.rerender {
            Some(self.values())
        } else {
            None
        }
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.manager.on_resize(width, height);
    }

    /// Overwrite every element's value without firing change notifications
    pub fn set_values(&mut self, values: &[B::Value]) -> Result<(), TactileAppError> {
        self.manager.behavior_mut().store_mut().set_values(values)?;
        Ok(())
    }

    /// Full current-state snapshot
    pub fn values(&self) -> Vec<B::Value> {
        self.manager.behavior().store().values()
    }

    /// Pending-change indices, cleared on read. The change-and-notify cycle
    /// consumes these itself; this entry point serves polling hosts that
    /// registered no handler.
    pub fn read_and_reset_changed_values(&mut self) -> Vec<usize> {
        self.manager.behavior_mut().store_mut().take_changed()
    }

    pub fn behavior(&self) -> &B {
        self.manager.behavior()
    }

    pub fn behavior_mut(&mut self) -> &mut B {
        self.manager.behavior_mut()
    }
}
