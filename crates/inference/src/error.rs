use preprocess::PreprocessError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Preprocessing failed: {0}")]
    Preprocess(#[from] PreprocessError),

    #[error("Model inference failed: {0:#}")]
    Inference(anyhow::Error),

    #[error("Model output shape {actual:?} does not match input shape {expected:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to read example asset {}: {source}", .path.display())]
    ExampleAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Upload contained no data")]
    EmptyUpload,

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Styling controller is no longer running")]
    ControllerClosed,
}
