use crate::StyleError;
use preprocess::PixelBuffer;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ModelState {
    Loading,
    Ready,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SourceState {
    Empty,
    Pending { generation: u64 },
    Ready { generation: u64 },
    Failed { generation: u64, reason: String },
}

/// What a decode completion did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceUpdate {
    /// A newer request exists, the completion was discarded.
    Stale,
    Ready,
    Failed { reason: String },
}

/// Mutable state of one styling session: the model handle and the current source image.
///
/// Only load completions write the model and source; everything else reads.
pub struct SessionContext<B> {
    model: Option<B>,
    model_state: ModelState,
    source: Option<PixelBuffer>,
    source_state: SourceState,
    latest_request: u64,
}

impl<B> SessionContext<B> {
    pub fn new() -> Self {
        Self {
            model: None,
            model_state: ModelState::Loading,
            source: None,
            source_state: SourceState::Empty,
            latest_request: 0,
        }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub fn model_state(&self) -> &ModelState {
        &self.model_state
    }

    pub fn install_model(&mut self, model: B) {
        self.model = Some(model);
        self.model_state = ModelState::Ready;
    }

    pub fn model_failed(&mut self, reason: String) {
        self.model = None;
        self.model_state = ModelState::Failed { reason };
    }

    pub fn source(&self) -> Option<&PixelBuffer> {
        self.source.as_ref()
    }

    pub fn source_state(&self) -> &SourceState {
        &self.source_state
    }

    /// Model and source borrowed together for a pipeline run.
    pub fn parts_mut(&mut self) -> (Option<&mut B>, Option<&PixelBuffer>) {
        (self.model.as_mut(), self.source.as_ref())
    }

    /// Registers a new source request and returns its generation.
    ///
    /// The current source stays readable until the request completes.
    pub fn begin_source_request(&mut self) -> u64 {
        self.latest_request += 1;
        self.source_state = SourceState::Pending {
            generation: self.latest_request,
        };
        self.latest_request
    }

    /// Applies a decode completion if it belongs to the latest request.
    pub fn complete_source(
        &mut self,
        generation: u64,
        result: Result<PixelBuffer, StyleError>,
    ) -> SourceUpdate {
        if generation != self.latest_request {
            return SourceUpdate::Stale;
        }

        match result {
            Ok(pixels) => {
                self.source = Some(pixels);
                self.source_state = SourceState::Ready { generation };
                SourceUpdate::Ready
            }
            Err(e) => {
                let reason = e.to_string();
                self.source = None;
                self.source_state = SourceState::Failed {
                    generation,
                    reason: reason.clone(),
                };
                SourceUpdate::Failed { reason }
            }
        }
    }
}

impl<B> Default for SessionContext<B> {
    fn default() -> Self {
        Self::new()
    }
}
