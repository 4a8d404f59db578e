use crate::backend::StyleBackend;
use crate::context::SessionContext;
use crate::surface::Surface;
use crate::StyleError;
use common::{span, span_debug};
use preprocess::{Dimensions, PostProcessor, PreProcessor};
use serde::Serialize;

/// Progress of a single styling invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Idle,
    PreprocessingDone,
    Inferred,
    Rendered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    ModelNotLoaded,
    NoSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StyleOutcome {
    Rendered,
    Skipped { reason: SkipReason },
}

/// Pre-process → infer → post-process → render.
#[derive(Debug, Clone)]
pub struct StylePipeline {
    dimensions: Dimensions,
    preprocessor: PreProcessor,
    postprocessor: PostProcessor,
}

impl StylePipeline {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            preprocessor: PreProcessor::new(dimensions.input),
            postprocessor: PostProcessor::new(dimensions.display),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Styles the current source onto `destination`.
    ///
    /// Returns a skip outcome without touching anything when the model or the
    /// source is missing. On error `destination` is left as it was.
    pub fn run<B: StyleBackend>(
        &self,
        context: &mut SessionContext<B>,
        destination: &mut Surface,
    ) -> Result<StyleOutcome, StyleError> {
        let _s = span!("style_image");

        let (model, source) = context.parts_mut();

        let Some(model) = model else {
            tracing::debug!("Model not loaded yet, styling skipped");
            return Ok(StyleOutcome::Skipped {
                reason: SkipReason::ModelNotLoaded,
            });
        };
        let Some(source) = source else {
            tracing::debug!("No source image yet, styling skipped");
            return Ok(StyleOutcome::Skipped {
                reason: SkipReason::NoSource,
            });
        };

        let mut stage = PipelineStage::Idle;

        let input = {
            let _s = span_debug!("preprocess");
            self.preprocessor.preprocess(source)?
        };
        stage = advance(stage, PipelineStage::PreprocessingDone);

        let output = {
            let _s = span!("model_inference");
            model.predict(&input).map_err(StyleError::Inference)?
        };

        if output.shape() != input.shape() {
            return Err(StyleError::ShapeMismatch {
                expected: input.shape().to_vec(),
                actual: output.shape().to_vec(),
            });
        }
        stage = advance(stage, PipelineStage::Inferred);

        let pixels = {
            let _s = span_debug!("postprocess");
            self.postprocessor.postprocess(output)?
        };
        destination.draw(pixels);
        advance(stage, PipelineStage::Rendered);

        Ok(StyleOutcome::Rendered)
    }
}

fn advance(from: PipelineStage, to: PipelineStage) -> PipelineStage {
    tracing::trace!(from = ?from, to = ?to, "Pipeline stage");
    to
}
