pub mod backend;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod source;
pub mod surface;

// Re-export commonly used types for convenience
pub use backend::{ExecutionProvider, StyleBackend, identity::IdentityBackend};
pub use config::StylingConfig;
pub use context::{ModelState, SessionContext, SourceState};
pub use controller::{Controller, ControllerHandle, SessionStatus};
pub use error::StyleError;
pub use pipeline::{SkipReason, StyleOutcome, StylePipeline};
pub use source::{ExampleAsset, SourceOrigin};
pub use surface::{Surface, SurfaceKind};
