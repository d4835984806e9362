use tactile_surface::error::TactileSurfaceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TactileAppError {
    #[error("Internal error: `{0}`")]
    InternalError(String),

    #[error(transparent)]
    Surface(#[from] TactileSurfaceError),
}
