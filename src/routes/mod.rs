use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    error::{AppError, AppResult},
    middleware::{make_span_with_request_id, request_id_middleware},
    services::{MetadataProvider, PipelineSettings},
};

pub mod genres;
pub mod recommendations;
pub mod titles;

/// Shared handler state: the injected provider and pipeline bounds
pub struct AppState {
    pub provider: Arc<dyn MetadataProvider>,
    pub settings: PipelineSettings,
}

impl AppState {
    pub fn new(provider: Arc<dyn MetadataProvider>, settings: PipelineSettings) -> Self {
        Self { provider, settings }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movie", get(titles::movie_details))
        .route("/episode", get(titles::episode_details))
        .route("/movies/genre", get(genres::top_by_genre))
        .route("/recommendations", get(recommendations::recommend))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Returns the trimmed parameter, or `InvalidInput` with `message` when missing or blank
pub(crate) fn required(value: Option<String>, message: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::InvalidInput(message.to_string()))
}
