#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TactileSurfaceError {
    #[error("Element count must be non-zero")]
    ZeroElementCount,

    #[error("Grid dimensions must be non-zero: {rows}x{columns}")]
    ZeroGridDimension { rows: usize, columns: usize },

    #[error("Value range is empty or inverted: [{min}, {max}]")]
    InvalidValueRange { min: f32, max: f32 },

    #[error("Value count ({provided}) does not match element count ({expected})")]
    ValueCountMismatch { expected: usize, provided: usize },
}
