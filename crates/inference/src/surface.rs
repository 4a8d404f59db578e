use preprocess::PixelBuffer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    Source,
    Styled,
}

/// Square drawable target holding display-resolution pixels.
///
/// Every draw replaces the whole content.
#[derive(Debug, Clone)]
pub struct Surface {
    pixels: PixelBuffer,
    draws: u64,
}

impl Surface {
    pub fn new(size: u32) -> Self {
        Self {
            pixels: PixelBuffer::blank(size, size),
            draws: 0,
        }
    }

    pub fn draw(&mut self, pixels: PixelBuffer) {
        debug_assert_eq!(
            (pixels.width(), pixels.height()),
            (self.pixels.width(), self.pixels.height()),
            "surfaces only accept display-resolution pixels"
        );
        self.pixels = pixels;
        self.draws += 1;
    }

    pub fn clear(&mut self) {
        self.pixels = PixelBuffer::blank(self.pixels.width(), self.pixels.height());
        self.draws += 1;
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Number of draw or clear calls since creation.
    pub fn draw_count(&self) -> u64 {
        self.draws
    }
}
