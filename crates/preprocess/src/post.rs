use crate::config::DEFAULT_DISPLAY_SIZE;
use crate::resize::resize_bilinear;
use crate::{PixelBuffer, PreprocessError};
use common::span;
use ndarray::{Array3, Array4, ArrayView3, Axis};

/// Turns the batched model output into display-resolution pixels.
#[derive(Debug, Clone)]
pub struct PostProcessor {
    display_size: u32,
}

impl PostProcessor {
    pub fn new(display_size: u32) -> Self {
        Self { display_size }
    }

    pub fn display_size(&self) -> u32 {
        self.display_size
    }

    pub fn postprocess(&self, output: Array4<f32>) -> Result<PixelBuffer, PreprocessError> {
        let _s = span!("postprocess");

        let unbatched = unbatch(output)?;
        let size = self.display_size as usize;
        let resized = resize_bilinear(unbatched.view(), size, size)?;

        to_pixels(resized.view())
    }
}

impl Default for PostProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_SIZE)
    }
}

/// Removes the leading batch axis of a `(1, H, W, 3)` tensor.
pub fn unbatch(tensor: Array4<f32>) -> Result<Array3<f32>, PreprocessError> {
    let shape = tensor.shape();
    if shape[0] != 1 {
        return Err(PreprocessError::BatchSize(shape[0]));
    }
    if shape[3] != 3 {
        return Err(PreprocessError::Channels(shape[3]));
    }
    Ok(tensor.index_axis_move(Axis(0), 0))
}

/// Converts an HxWx3 tensor in `[0, 1]` to opaque RGBA pixels.
pub fn to_pixels(tensor: ArrayView3<f32>) -> Result<PixelBuffer, PreprocessError> {
    let (height, width, channels) = tensor.dim();
    if channels != 3 {
        return Err(PreprocessError::Channels(channels));
    }

    let mut data = Vec::with_capacity(height * width * PixelBuffer::CHANNELS);
    for row in tensor.outer_iter() {
        for px in row.outer_iter() {
            data.extend_from_slice(&[to_sample(px[0]), to_sample(px[1]), to_sample(px[2]), 255]);
        }
    }

    PixelBuffer::new(width as u32, height as u32, data)
}

/// Out-of-range model output is clamped before scaling.
pub fn to_sample(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PreProcessor;

    #[test]
    fn test_normalization_round_trip_recovers_every_sample() {
        for v in 0..=255u8 {
            let normalized = f32::from(v) / 255.0;
            let back = to_sample(normalized);
            assert!(
                (i16::from(back) - i16::from(v)).abs() <= 1,
                "{v} came back as {back}"
            );
        }
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        assert_eq!(to_sample(-0.5), 0);
        assert_eq!(to_sample(1.7), 255);
    }

    #[test]
    fn test_unbatch_rejects_larger_batches() {
        let tensor = Array4::<f32>::zeros((2, 4, 4, 3));
        assert!(matches!(unbatch(tensor), Err(PreprocessError::BatchSize(2))));
    }

    #[test]
    fn test_unbatch_rejects_wrong_channel_count() {
        let tensor = Array4::<f32>::zeros((1, 4, 4, 4));
        assert!(matches!(unbatch(tensor), Err(PreprocessError::Channels(4))));
    }

    #[test]
    fn test_output_targets_display_resolution() {
        let output = Array4::from_elem((1, 104, 104, 3), 0.5f32);
        let pixels = PostProcessor::default().postprocess(output).unwrap();

        assert_eq!((pixels.width(), pixels.height()), (256, 256));
        assert_eq!(pixels.pixel(128, 128), Some([128, 128, 128, 255]));
    }

    #[test]
    fn test_identity_round_trip_restores_display_size() {
        for (w, h) in [(256, 256), (64, 64), (300, 300)] {
            let pixels = PixelBuffer::new(w, h, vec![77u8; (w * h * 4) as usize]).unwrap();
            let input = PreProcessor::default().preprocess(&pixels).unwrap();
            let restored = PostProcessor::default().postprocess(input).unwrap();

            assert_eq!((restored.width(), restored.height()), (256, 256));
            assert_eq!(restored.pixel(10, 200), Some([77, 77, 77, 255]));
        }
    }
}
