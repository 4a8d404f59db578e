use crate::StyleError;
use common::span;
use preprocess::{PixelBuffer, draw_onto_canvas};
use std::path::PathBuf;

/// Example image compiled into the binary.
pub static BUNDLED_EXAMPLE: &[u8] = include_bytes!("../assets/example.png");

#[derive(Debug, Clone, Default)]
pub enum ExampleAsset {
    #[default]
    Bundled,
    Path(PathBuf),
}

impl ExampleAsset {
    pub async fn read(&self) -> Result<Vec<u8>, StyleError> {
        match self {
            ExampleAsset::Bundled => Ok(BUNDLED_EXAMPLE.to_vec()),
            ExampleAsset::Path(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| StyleError::ExampleAsset {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}

/// Where a source image comes from.
#[derive(Debug, Clone)]
pub enum SourceOrigin {
    Example,
    Upload(Vec<u8>),
}

impl SourceOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            SourceOrigin::Example => "example",
            SourceOrigin::Upload(_) => "upload",
        }
    }
}

/// Reads and decodes a source image, then draws it onto a `display × display` canvas.
pub async fn acquire_source(
    origin: SourceOrigin,
    example: &ExampleAsset,
    display: u32,
) -> Result<PixelBuffer, StyleError> {
    let bytes = match origin {
        SourceOrigin::Example => example.read().await?,
        SourceOrigin::Upload(bytes) => bytes,
    };

    tokio::task::spawn_blocking(move || decode_source(&bytes, display)).await?
}

pub fn decode_source(bytes: &[u8], size: u32) -> Result<PixelBuffer, StyleError> {
    let _s = span!("decode_source");

    if bytes.is_empty() {
        return Err(StyleError::EmptyUpload);
    }

    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    tracing::debug!(width, height, display = size, "Decoded source image");

    Ok(draw_onto_canvas(rgba.as_raw(), width, height, size)?)
}
