use image::{ColorType, ImageFormat, ImageResult};
use preprocess::PixelBuffer;
use std::io::Cursor;

pub fn pixels_to_png(pixels: &PixelBuffer) -> ImageResult<Vec<u8>> {
    let mut png = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut png),
        pixels.as_bytes(),
        pixels.width(),
        pixels.height(),
        ColorType::Rgba8,
        ImageFormat::Png,
    )?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_round_trip_preserves_pixels() {
        let data: Vec<u8> = (0..4 * 4 * 4).map(|i| (i * 3) as u8).collect();
        let pixels = PixelBuffer::new(4, 4, data.clone()).unwrap();

        let png = pixels_to_png(&pixels).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(decoded.into_raw(), data);
    }
}
