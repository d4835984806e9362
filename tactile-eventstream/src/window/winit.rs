use super::*;
use ::winit::event::{
    ElementState as WinitElementState, MouseButton as WinitMouseButton,
    TouchPhase as WinitTouchPhase, WindowEvent as WinitEvent,
};

impl WindowEvent {
    /// Convert a winit WindowEvent into a tactile WindowEvent
    ///
    /// Tactile's window events use logical coordinates, so scale is required
    /// for the conversion. Events the engine has no use for map to None.
    pub fn from_winit_event(event: WinitEvent, scale: f32) -> Option<Self> {
        match event {
            WinitEvent::Resized(size) => Some(Self::WindowResize(WindowResizeEvent {
                size: [size.width as f32 / scale, size.height as f32 / scale],
            })),

            WinitEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved(WindowCursorMoved {
                    position: [position.x as f32 / scale, position.y as f32 / scale],
                }))
            }

            WinitEvent::CursorLeft { .. } => Some(Self::CursorLeft),

            WinitEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseInput(WindowMouseInput {
                    state: match state {
                        WinitElementState::Pressed => ElementState::Pressed,
                        WinitElementState::Released => ElementState::Released,
                    },
                    button: match button {
                        WinitMouseButton::Left => MouseButton::Left,
                        WinitMouseButton::Right => MouseButton::Right,
                        WinitMouseButton::Middle => MouseButton::Middle,
                        WinitMouseButton::Back => MouseButton::Back,
                        WinitMouseButton::Forward => MouseButton::Forward,
                        WinitMouseButton::Other(val) => MouseButton::Other(val),
                    },
                }))
            }

            WinitEvent::Touch(touch) => Some(Self::Touch(WindowTouch {
                phase: match touch.phase {
                    WinitTouchPhase::Started => TouchPhase::Started,
                    WinitTouchPhase::Moved => TouchPhase::Moved,
                    WinitTouchPhase::Ended => TouchPhase::Ended,
                    WinitTouchPhase::Cancelled => TouchPhase::Cancelled,
                },
                id: touch.id,
                position: [
                    touch.location.x as f32 / scale,
                    touch.location.y as f32 / scale,
                ],
            })),

            _ => None,
        }
    }
}
