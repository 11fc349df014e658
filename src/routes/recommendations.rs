use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::Recommendations,
    routes::{required, AppState},
    services::recommendations,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    favorite_movie: Option<String>,
}

/// Handler for GET /api/recommendations?favorite_movie=
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendationParams>,
) -> AppResult<Json<Recommendations>> {
    let favorite = required(params.favorite_movie, "favorite_movie parameter is required")?;

    tracing::info!(
        request_id = %request_id,
        favorite_movie = %favorite,
        "Processing recommendation request"
    );

    let recommendations =
        recommendations::recommend(state.provider.as_ref(), &favorite, &state.settings).await?;

    tracing::info!(
        request_id = %request_id,
        tiers = recommendations.tiers.len(),
        "Recommendations completed"
    );

    Ok(Json(recommendations))
}
