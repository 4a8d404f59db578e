use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("Buffer size mismatch: expected {expected}, got {actual} bytes")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Empty image dimensions: {width}x{height}")]
    EmptyDimension { width: u32, height: u32 },

    #[error("Expected batch size 1, got {0}")]
    BatchSize(usize),

    #[error("Expected 3 channels, got {0}")]
    Channels(usize),

    #[error("Tensor shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formatting() {
        let err = PreprocessError::SizeMismatch {
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "Buffer size mismatch: expected 16, got 12 bytes"
        );

        let err = PreprocessError::BatchSize(4);
        assert_eq!(err.to_string(), "Expected batch size 1, got 4");

        let err = PreprocessError::EmptyDimension {
            width: 0,
            height: 10,
        };
        assert_eq!(err.to_string(), "Empty image dimensions: 0x10");
    }
}
