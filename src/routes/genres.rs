use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::GenreRanking,
    routes::{required, AppState},
    services::genre_ranking,
};

#[derive(Debug, Deserialize)]
pub struct GenreParams {
    genre: Option<String>,
}

/// Handler for GET /api/movies/genre?genre=
pub async fn top_by_genre(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<GenreParams>,
) -> AppResult<Json<GenreRanking>> {
    let genre = required(params.genre, "Genre parameter is required")?;

    tracing::info!(request_id = %request_id, genre = %genre, "Processing genre ranking request");

    let ranking = genre_ranking::rank_genre(state.provider.as_ref(), &genre, &state.settings).await?;

    tracing::info!(
        request_id = %request_id,
        total = ranking.total,
        "Genre ranking completed"
    );

    Ok(Json(ranking))
}
