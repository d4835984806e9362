use std::collections::HashSet;

use tactile_common::canvas::SurfaceBounds;
use tactile_common::time::Instant;
use tactile_common::types::InteractionId;
use tactile_surface::behavior::ControlBehavior;

use crate::stream::{ChangeHandler, UpdateStatus};
use crate::window::{ElementState, MouseButton, TouchPhase, WindowEvent};

/// Routes window-level pointer events onto one surface behavior and runs the
/// change-and-notify cycle after every event.
///
/// The mouse is one interaction gated by its button state; each concurrent
/// touch id is its own interaction, active from its Started phase until its
/// Ended or Cancelled phase. Events are handled to completion, in arrival
/// order, on the caller's thread.
pub struct SurfaceEventManager<B: ControlBehavior> {
    behavior: B,
    bounds: SurfaceBounds,
    handlers: Vec<ChangeHandler<B::Value>>,
    mouse_down: bool,
    active_touches: HashSet<u64>,
    current_cursor_position: Option<[f32; 2]>,
    last_tick: Option<Instant>,
}

impl<B: ControlBehavior> SurfaceEventManager<B> {
    pub fn new(behavior: B, bounds: SurfaceBounds) -> Self {
        Self {
            behavior,
            bounds,
            handlers: Vec::new(),
            mouse_down: false,
            active_touches: HashSet::new(),
            current_cursor_position: None,
            last_tick: None,
        }
    }

    /// Register a change callback, invoked synchronously whenever at least
    /// one element's value changed during an event or tick
    pub fn register_handler(&mut self, handler: ChangeHandler<B::Value>) {
        self.handlers.push(handler);
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    pub fn behavior_mut(&mut self) -> &mut B {
        &mut self.behavior
    }

    pub fn bounds(&self) -> SurfaceBounds {
        self.bounds
    }

    /// Explicit geometry update; the engine holds no global resize listener
    pub fn on_resize(&mut self, width: f32, height: f32) -> UpdateStatus {
        self.bounds.size = [width, height];
        UpdateStatus {
            rerender: true,
            rebuild_geometry: true,
        }
    }

    pub fn dispatch_event(&mut self, event: &WindowEvent, instant: Instant) -> UpdateStatus {
        tracing::trace!(?event, "dispatching window event");
        match event {
            WindowEvent::WindowResize(e) => {
                return self.on_resize(e.size[0], e.size[1]);
            }
            WindowEvent::MouseInput(input) => match (input.state, input.button) {
                (ElementState::Pressed, MouseButton::Left) => {
                    if let Some(position) = self.current_cursor_position {
                        self.mouse_down = true;
                        let point = self.bounds.normalize(position);
                        self.behavior.on_start(InteractionId::Mouse, point, instant);
                    }
                }
                (ElementState::Released, MouseButton::Left) => {
                    if self.mouse_down {
                        self.mouse_down = false;
                        self.behavior.on_end(InteractionId::Mouse);
                    }
                }
                _ => {}
            },
            WindowEvent::CursorMoved(e) => {
                self.current_cursor_position = Some(e.position);
                if self.mouse_down {
                    let point = self.bounds.normalize(e.position);
                    self.behavior.on_move(InteractionId::Mouse, point);
                }
            }
            WindowEvent::CursorLeft => {
                // The cursor leaving the window ends the mouse interaction
                if self.mouse_down {
                    self.mouse_down = false;
                    self.behavior.on_end(InteractionId::Mouse);
                }
            }
            WindowEvent::Touch(touch) => {
                let interaction = InteractionId::Touch(touch.id);
                match touch.phase {
                    TouchPhase::Started => {
                        self.active_touches.insert(touch.id);
                        let point = self.bounds.normalize(touch.position);
                        self.behavior.on_start(interaction, point, instant);
                    }
                    TouchPhase::Moved => {
                        // A move for a touch the engine never saw start is a
                        // stray event, consumed silently
                        if self.active_touches.contains(&touch.id) {
                            let point = self.bounds.normalize(touch.position);
                            self.behavior.on_move(interaction, point);
                        }
                    }
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        if self.active_touches.remove(&touch.id) {
                            self.behavior.on_end(interaction);
                        }
                    }
                }
            }
        }
        self.run_change_cycle()
    }

    /// Fixed-cadence physics advance, independent of pointer events.
    ///
    /// Runs even while no interaction is active; rubber settling produces
    /// change notifications with no pointer event involved.
    pub fn dispatch_tick(&mut self, instant: Instant) -> UpdateStatus {
        let dt = match self.last_tick {
            Some(last) => instant.duration_since(last).as_secs_f32(),
            None => 1.0 / 60.0,
        };
        self.last_tick = Some(instant);
        self.behavior.tick(dt);
        self.run_change_cycle()
    }

    /// Diff pass: snapshot previous values and notify handlers of changes.
    /// A no-op event never reaches the handlers, and each distinct change is
    /// reported exactly once.
    fn run_change_cycle(&mut self) -> UpdateStatus {
        let changed = self.behavior.store_mut().take_changed();
        if changed.is_empty() {
            return UpdateStatus::default();
        }
        tracing::trace!(count = changed.len(), "control values changed");
        let values = self.behavior.store().values();
        for handler in &self.handlers {
            handler(&changed, &values);
        }
        UpdateStatus {
            rerender: true,
            rebuild_geometry: false,
        }
    }
}
