use crate::config::DEFAULT_INPUT_SIZE;
use crate::resize::resize_bilinear;
use crate::{PixelBuffer, PreprocessError};
use common::span;
use ndarray::{Array3, Array4, Axis};

/// Turns a display-resolution pixel buffer into the batched model input.
#[derive(Debug, Clone)]
pub struct PreProcessor {
    input_size: u32,
}

impl PreProcessor {
    pub fn new(input_size: u32) -> Self {
        Self { input_size }
    }

    pub fn input_size(&self) -> u32 {
        self.input_size
    }

    /// Produces a `(1, input, input, 3)` tensor with values in `[0, 1]`.
    pub fn preprocess(&self, pixels: &PixelBuffer) -> Result<Array4<f32>, PreprocessError> {
        let _s = span!("preprocess");

        tracing::trace!(
            width = pixels.width(),
            height = pixels.height(),
            input_size = self.input_size,
            "Preprocessing pixel buffer"
        );

        let rgb = from_pixels(pixels)?;
        let float = rgb.mapv(f32::from);
        let normalized = normalize(float);
        let size = self.input_size as usize;
        let resized = resize_bilinear(normalized.view(), size, size)?;

        Ok(resized.insert_axis(Axis(0)))
    }
}

impl Default for PreProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_SIZE)
    }
}

/// Interprets RGBA samples as an HxWx3 tensor, dropping alpha.
pub fn from_pixels(pixels: &PixelBuffer) -> Result<Array3<u8>, PreprocessError> {
    let rgb: Vec<u8> = pixels
        .as_bytes()
        .chunks_exact(PixelBuffer::CHANNELS)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    Ok(Array3::from_shape_vec(
        (pixels.height() as usize, pixels.width() as usize, 3),
        rgb,
    )?)
}

pub fn normalize(tensor: Array3<f32>) -> Array3<f32> {
    tensor.mapv_into(|v| v / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(size: u32) -> PixelBuffer {
        let mut data = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                data.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 128, 255]);
            }
        }
        PixelBuffer::new(size, size, data).unwrap()
    }

    #[test]
    fn test_rgba_preprocessing() {
        let pixels = PixelBuffer::new(
            2,
            2,
            vec![
                255, 0, 0, 255, // Red pixel
                0, 255, 0, 255, // Green pixel
                0, 0, 255, 255, // Blue pixel
                255, 255, 255, 0, // White pixel, transparent
            ],
        )
        .unwrap();

        let output = PreProcessor::new(2).preprocess(&pixels).unwrap();

        assert_eq!(output.shape(), &[1, 2, 2, 3]);
        assert_eq!(output[[0, 0, 0, 0]], 1.0);
        assert_eq!(output[[0, 0, 1, 1]], 1.0);
        assert_eq!(output[[0, 1, 0, 2]], 1.0);
        assert_eq!(output[[0, 1, 1, 0]], 1.0, "alpha must not affect color");
    }

    #[test]
    fn test_output_targets_input_resolution() {
        let output = PreProcessor::default().preprocess(&gradient(256)).unwrap();
        assert_eq!(output.shape(), &[1, 104, 104, 3]);
    }

    #[test]
    fn test_values_are_normalized() {
        let output = PreProcessor::default().preprocess(&gradient(256)).unwrap();
        assert!(output.iter().all(|&v| (0.0..=1.0).contains(&v)));

        let mid = output[[0, 50, 50, 2]];
        assert!((mid - 128.0 / 255.0).abs() < 1e-6, "got {mid}");
    }

    #[test]
    fn test_from_pixels_drops_alpha() {
        let pixels = PixelBuffer::new(1, 1, vec![1, 2, 3, 4]).unwrap();
        let rgb = from_pixels(&pixels).unwrap();
        assert_eq!(rgb.as_slice().unwrap(), &[1, 2, 3]);
    }
}
