use super::{ExecutionProvider, StyleBackend};
use ndarray::{Array4, Ix4};
use ort::{
    session::{Session, builder::GraphOptimizationLevel},
    value::TensorRef,
};

pub struct OrtBackend {
    session: Session,
}

impl OrtBackend {
    /// Load model with specified execution provider
    pub fn load_model_with_provider(
        location: &str,
        provider: ExecutionProvider,
    ) -> anyhow::Result<Self> {
        // Initialize ORT environment (idempotent)
        let _ = ort::init().commit();

        #[allow(unused_mut)]
        let mut builder = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(4)?;

        match provider {
            #[cfg(feature = "cuda")]
            ExecutionProvider::Cuda => {
                tracing::info!("Initializing ONNX Runtime with CUDA execution provider");
                builder = builder.with_execution_providers([
                    ort::execution_providers::CUDAExecutionProvider::default()
                        .with_device_id(0)
                        .build()
                        .error_on_failure(),
                ])?;
            }
            #[cfg(not(feature = "cuda"))]
            ExecutionProvider::Cuda => {
                anyhow::bail!("CUDA execution provider requested but the `cuda` feature is disabled")
            }
            ExecutionProvider::Cpu => {
                tracing::info!("Initializing ONNX Runtime with CPU execution provider");
            }
        }

        let session = if is_remote(location) {
            builder.commit_from_url(location)?
        } else {
            builder.commit_from_file(location)?
        };

        tracing::info!("Model loaded from {}", location);
        Ok(Self { session })
    }
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

impl StyleBackend for OrtBackend {
    fn load_model(location: &str) -> anyhow::Result<Self> {
        Self::load_model_with_provider(location, ExecutionProvider::Cpu)
    }

    fn predict(&mut self, input: &Array4<f32>) -> anyhow::Result<Array4<f32>> {
        let outputs = self
            .session
            .run(ort::inputs![TensorRef::from_array_view(input.view().into_dyn())?])?;

        let styled = outputs[0].try_extract_array::<f32>()?;

        Ok(styled.into_owned().into_dimensionality::<Ix4>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_locations_detected() {
        assert!(is_remote("https://example.org/models/style.onnx"));
        assert!(is_remote("http://localhost:3000/style.onnx"));
        assert!(!is_remote("models/style.onnx"));
        assert!(!is_remote("/opt/models/http.onnx"));
    }
}
