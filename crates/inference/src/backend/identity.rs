use super::StyleBackend;
use ndarray::Array4;

/// Returns its input unchanged. Useful for checking the pipeline without a model.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityBackend;

impl StyleBackend for IdentityBackend {
    fn load_model(location: &str) -> anyhow::Result<Self> {
        tracing::info!(location, "Using identity backend, model location ignored");
        Ok(Self)
    }

    fn predict(&mut self, input: &Array4<f32>) -> anyhow::Result<Array4<f32>> {
        Ok(input.clone())
    }
}
