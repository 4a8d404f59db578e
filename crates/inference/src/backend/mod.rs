use ndarray::Array4;
use serde::Deserialize;

pub mod identity;

#[cfg(feature = "ort-backend")]
pub mod ort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionProvider {
    Cpu,
    Cuda,
}

/// A loaded style model.
pub trait StyleBackend: Send + 'static {
    /// Load a model from a filesystem path or an `http(s)://` URL.
    fn load_model(location: &str) -> anyhow::Result<Self>
    where
        Self: Sized;

    /// Run the model on a `(1, H, W, 3)` batch with values in `[0, 1]`.
    ///
    /// The output must have the same shape as the input.
    fn predict(&mut self, input: &Array4<f32>) -> anyhow::Result<Array4<f32>>;
}
