use common::{Environment, LogLevel};
use inference::{ExampleAsset, ExecutionProvider, StylingConfig};
use preprocess::{DEFAULT_DISPLAY_SIZE, DEFAULT_INPUT_SIZE, Dimensions};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// ONNX Runtime session loaded from `model_location`
    Onnx,
    /// Passes the input through unchanged
    Identity,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub log_level: LogLevel,
    pub environment: Environment,
    pub bind_address: String,
    pub backend: BackendKind,
    pub model_location: String,
    pub example_path: Option<PathBuf>,
    pub input_resolution: u32,
    pub display_resolution: u32,
    pub execution_provider: ExecutionProvider,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn styling(&self) -> anyhow::Result<StylingConfig> {
        let dimensions = Dimensions::new(self.input_resolution, self.display_resolution)?;

        Ok(StylingConfig {
            dimensions,
            model_location: self.model_location.clone(),
            example: self
                .example_path
                .clone()
                .map(ExampleAsset::Path)
                .unwrap_or_default(),
            load_example_on_start: true,
        })
    }
}

pub fn get_configuration() -> Result<Config, config::ConfigError> {
    let config = config::Config::builder()
        .set_default("log_level", "info")?
        .set_default("environment", "development")?
        .set_default("bind_address", "0.0.0.0:3000")?
        .set_default("backend", "onnx")?
        .set_default("model_location", "models/style.onnx")?
        .set_default("input_resolution", i64::from(DEFAULT_INPUT_SIZE))?
        .set_default("display_resolution", i64::from(DEFAULT_DISPLAY_SIZE))?
        .set_default("execution_provider", "cpu")?
        .set_default("max_upload_bytes", 10 * 1024 * 1024_i64)?
        .add_source(
            config::Environment::with_prefix("STYLER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = config.try_deserialize::<Config>()?;

    Ok(config)
}
