use thiserror::Error;

/// Errors produced by the blur library
#[derive(Debug, Error)]
pub enum BlurError {
    #[error("sigma must be finite and greater than zero, got {0}")]
    InvalidSigma(f32),

    #[error("radius must be at most {max}, got {0}", max = crate::kernel::MAX_RADIUS)]
    InvalidRadius(usize),

    #[error("output size {actual:?} does not match input size {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("row {row} has {actual} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("grid data has {actual} values, expected {expected}")]
    DataLength { expected: usize, actual: usize },

    #[error("texture has no channel {0}")]
    MissingChannel(usize),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlurError>;
