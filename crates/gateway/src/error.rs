use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use inference::StyleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("Unknown surface: {0}")]
    UnknownSurface(String),

    #[error("Failed to encode surface: {0}")]
    Encoding(#[from] image::ImageError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Style(StyleError::EmptyUpload | StyleError::Decode(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Style(StyleError::ControllerClosed) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Style(_) | ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnknownSurface(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
