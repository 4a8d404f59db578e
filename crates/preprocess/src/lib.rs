pub mod canvas;
pub mod config;
pub mod error;
pub mod pixels;
pub mod post;
pub mod pre;
pub mod resize;

pub use canvas::draw_onto_canvas;
pub use config::{DEFAULT_DISPLAY_SIZE, DEFAULT_INPUT_SIZE, Dimensions};
pub use error::PreprocessError;
pub use pixels::PixelBuffer;
pub use post::PostProcessor;
pub use pre::PreProcessor;
pub use resize::resize_bilinear;
