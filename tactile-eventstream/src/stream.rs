use std::sync::Arc;

/// Change callback invoked at the end of an event-handling cycle with the
/// indices that changed and the full state snapshot
pub type ChangeHandler<V> = Arc<dyn Fn(&[usize], &[V])>;

/// What the host needs to do after an event was dispatched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateStatus {
    /// At least one control value changed; the renderer should repaint
    pub rerender: bool,
    /// The surface geometry changed; hit-target math must be refreshed
    pub rebuild_geometry: bool,
}
