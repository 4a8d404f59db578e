use crate::{PixelBuffer, PreprocessError};
use common::span;
use fast_image_resize::{
    FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer,
    images::{Image, ImageRef},
};

/// Draws an RGBA image onto a square canvas of side `size`, stretching it to
/// fill the canvas, and returns the canvas contents.
pub fn draw_onto_canvas(
    rgba: &[u8],
    width: u32,
    height: u32,
    size: u32,
) -> Result<PixelBuffer, PreprocessError> {
    let _s = span!("draw_onto_canvas");

    if width == 0 || height == 0 {
        return Err(PreprocessError::EmptyDimension { width, height });
    }
    if size == 0 {
        return Err(PreprocessError::EmptyDimension {
            width: size,
            height: size,
        });
    }

    let expected = width as usize * height as usize * PixelBuffer::CHANNELS;
    if rgba.len() != expected {
        return Err(PreprocessError::SizeMismatch {
            expected,
            actual: rgba.len(),
        });
    }

    tracing::trace!(width, height, size, "Drawing image onto canvas");

    let src = ImageRef::new(width, height, rgba, PixelType::U8x4)?;
    let mut canvas = Image::new(size, size, PixelType::U8x4);

    Resizer::new().resize(
        &src,
        &mut canvas,
        &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear)),
    )?;

    PixelBuffer::new(size, size, canvas.buffer().to_vec())
}
