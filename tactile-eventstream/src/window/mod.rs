#[cfg(feature = "winit_support")]
mod winit;

/// Native window events the surface engine consumes, in logical coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    WindowResize(WindowResizeEvent),
    MouseInput(WindowMouseInput),
    CursorMoved(WindowCursorMoved),
    CursorLeft,
    Touch(WindowTouch),
}

impl WindowEvent {
    pub fn position(&self) -> Option<[f32; 2]> {
        match self {
            Self::CursorMoved(event) => Some(event.position),
            Self::Touch(event) => Some(event.position),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowResizeEvent {
    pub size: [f32; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowMouseInput {
    pub state: ElementState,
    pub button: MouseButton,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowCursorMoved {
    pub position: [f32; 2],
}

/// Touch contact data; `id` is the host's identifier for this contact and
/// stays stable across the contact's phases
#[derive(Debug, Clone, PartialEq)]
pub struct WindowTouch {
    pub phase: TouchPhase,
    pub id: u64,
    pub position: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}
