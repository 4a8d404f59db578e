use crate::PreprocessError;

/// Row-major RGBA image with its origin at the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub const CHANNELS: usize = 4;

    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PreprocessError> {
        if width == 0 || height == 0 {
            return Err(PreprocessError::EmptyDimension { width, height });
        }

        let expected = width as usize * height as usize * Self::CHANNELS;
        if data.len() != expected {
            return Err(PreprocessError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Fully transparent black buffer, the state of a surface nothing was drawn on.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * Self::CHANNELS],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_mismatch_detection() {
        let result = PixelBuffer::new(10, 10, vec![0u8; 200]);
        assert!(matches!(
            result,
            Err(PreprocessError::SizeMismatch {
                expected: 400,
                actual: 200
            })
        ));
    }

    #[test]
    fn test_zero_sized_buffer_rejected() {
        assert!(matches!(
            PixelBuffer::new(0, 4, vec![]),
            Err(PreprocessError::EmptyDimension { .. })
        ));
    }

    #[test]
    fn test_pixel_addressing_is_row_major() {
        // 2x2: red, green / blue, white
        let data = vec![
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 255,
        ];
        let buffer = PixelBuffer::new(2, 2, data).unwrap();

        assert_eq!(buffer.pixel(1, 0), Some([0, 255, 0, 255]));
        assert_eq!(buffer.pixel(0, 1), Some([0, 0, 255, 255]));
        assert_eq!(buffer.pixel(2, 0), None);
    }

    #[test]
    fn test_blank_buffer_is_transparent() {
        let buffer = PixelBuffer::blank(3, 2);
        assert_eq!(buffer.as_bytes().len(), 24);
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
    }
}
