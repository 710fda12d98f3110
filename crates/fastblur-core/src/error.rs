use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlurError {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Buffer length {actual} does not match image size (expected {expected})")]
    BufferLength { expected: usize, actual: usize },

    #[error("Unsupported channel count {channels} (expected {expected})")]
    UnsupportedChannels { channels: usize, expected: usize },

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Filter config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BlurError>;

/// Check that `len` samples cover exactly `width * height` pixels of `stride` bytes.
pub(crate) fn check_buffer(len: usize, width: usize, height: usize, stride: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(BlurError::InvalidDimensions { width, height });
    }
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(stride))
        .ok_or(BlurError::InvalidDimensions { width, height })?;
    if len != expected {
        return Err(BlurError::BufferLength {
            expected,
            actual: len,
        });
    }
    Ok(())
}
