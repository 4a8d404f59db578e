use crate::source::ExampleAsset;
use preprocess::Dimensions;

#[derive(Debug, Clone)]
pub struct StylingConfig {
    pub dimensions: Dimensions,
    pub model_location: String,
    pub example: ExampleAsset,
    /// Request the example image as soon as the controller starts.
    pub load_example_on_start: bool,
}

impl StylingConfig {
    pub fn new(model_location: impl Into<String>) -> Self {
        Self {
            dimensions: Dimensions::default(),
            model_location: model_location.into(),
            example: ExampleAsset::Bundled,
            load_example_on_start: true,
        }
    }

    /// Create default configuration for testing
    #[cfg(test)]
    pub fn test_default() -> Self {
        Self::new("/models/style.onnx")
    }
}
