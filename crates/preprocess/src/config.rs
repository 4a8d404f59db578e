use crate::PreprocessError;

/// Spatial size the style model was trained on.
pub const DEFAULT_INPUT_SIZE: u32 = 104;
/// Side length of the square display surfaces.
pub const DEFAULT_DISPLAY_SIZE: u32 = 256;

/// The two fixed square resolutions every image is converted between.
///
/// The model always receives `input × input` tensors and surfaces always
/// hold `display × display` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub input: u32,
    pub display: u32,
}

impl Dimensions {
    pub fn new(input: u32, display: u32) -> Result<Self, PreprocessError> {
        if input == 0 || display == 0 {
            return Err(PreprocessError::EmptyDimension {
                width: input,
                height: display,
            });
        }
        Ok(Self { input, display })
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT_SIZE,
            display: DEFAULT_DISPLAY_SIZE,
        }
    }
}
