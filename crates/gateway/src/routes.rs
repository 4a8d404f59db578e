use crate::{encoding::pixels_to_png, error::ApiError, state::AppState};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use inference::{SessionStatus, SourceOrigin, StyleOutcome, SurfaceKind};
use serde::Serialize;
use tower_http::cors::CorsLayer;

#[derive(Debug, Serialize)]
pub struct SourceAccepted {
    pub generation: u64,
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/status", get(status))
        .route("/source", post(upload_source))
        .route("/source/example", post(load_example))
        .route("/style", post(style))
        .route("/surfaces/:name", get(surface_png))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn status(State(state): State<AppState>) -> Result<Json<SessionStatus>, ApiError> {
    Ok(Json(state.controller.status().await?))
}

async fn upload_source(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SourceAccepted>), ApiError> {
    tracing::info!(bytes = body.len(), "Received source upload");

    let generation = state
        .controller
        .load_source(SourceOrigin::Upload(body.to_vec()))
        .await?;

    Ok((StatusCode::ACCEPTED, Json(SourceAccepted { generation })))
}

async fn load_example(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SourceAccepted>), ApiError> {
    let generation = state.controller.load_source(SourceOrigin::Example).await?;
    Ok((StatusCode::ACCEPTED, Json(SourceAccepted { generation })))
}

async fn style(State(state): State<AppState>) -> Result<Json<StyleOutcome>, ApiError> {
    let outcome = state.controller.style().await?;
    tracing::info!(outcome = ?outcome, "Style request handled");
    Ok(Json(outcome))
}

async fn surface_png(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = match name.as_str() {
        "source.png" => SurfaceKind::Source,
        "styled.png" => SurfaceKind::Styled,
        _ => return Err(ApiError::UnknownSurface(name)),
    };

    let pixels = state.controller.snapshot(kind).await?;
    let png = pixels_to_png(&pixels)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
