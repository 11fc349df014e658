use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{Lookup, OmdbRating, OmdbTitle, TitleQuery},
    routes::{required, AppState},
};

#[derive(Debug, Deserialize)]
pub struct MovieParams {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EpisodeParams {
    series_title: Option<String>,
    season: Option<String>,
    episode_number: Option<String>,
}

/// Movie detail view
#[derive(Debug, Serialize)]
pub struct MovieDetailsResponse {
    pub title: String,
    pub year: String,
    pub plot: String,
    pub country: String,
    pub awards: String,
    pub director: String,
    pub ratings: Vec<OmdbRating>,
}

impl From<OmdbTitle> for MovieDetailsResponse {
    fn from(movie: OmdbTitle) -> Self {
        Self {
            title: movie.title,
            year: movie.year,
            plot: movie.plot,
            country: movie.country,
            awards: movie.awards,
            director: movie.director,
            ratings: movie.ratings,
        }
    }
}

/// Episode detail view
#[derive(Debug, Serialize)]
pub struct EpisodeDetailsResponse {
    pub title: String,
    pub series_title: String,
    pub season: String,
    pub episode: String,
    pub year: String,
    pub plot: String,
    pub director: String,
    pub actors: String,
    pub imdb_rating: String,
    pub ratings: Vec<OmdbRating>,
}

impl EpisodeDetailsResponse {
    fn new(series_title: String, episode: OmdbTitle) -> Self {
        Self {
            title: episode.title,
            series_title,
            season: episode.season,
            episode: episode.episode,
            year: episode.year,
            plot: episode.plot,
            director: episode.director,
            actors: episode.actors,
            imdb_rating: episode.imdb_rating,
            ratings: episode.ratings,
        }
    }
}

fn parse_number(raw: &str, message: &str) -> AppResult<u32> {
    raw.parse()
        .map_err(|_| AppError::InvalidInput(message.to_string()))
}

async fn lookup(state: &AppState, query: &TitleQuery) -> AppResult<OmdbTitle> {
    match state.provider.lookup_title(query).await? {
        Lookup::Found(title) => Ok(title),
        Lookup::NotFound(reason) => Err(AppError::NotFound(reason)),
    }
}

/// Handler for GET /api/movie?title=
pub async fn movie_details(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<MovieParams>,
) -> AppResult<Json<MovieDetailsResponse>> {
    let title = required(params.title, "Title parameter is required")?;

    tracing::info!(request_id = %request_id, title = %title, "Fetching movie details");

    let movie = lookup(&state, &TitleQuery::Movie(title)).await?;
    Ok(Json(MovieDetailsResponse::from(movie)))
}

/// Handler for GET /api/episode?series_title=&season=&episode_number=
pub async fn episode_details(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<EpisodeParams>,
) -> AppResult<Json<EpisodeDetailsResponse>> {
    let message = "series_title, season, and episode_number parameters are required";
    let series = required(params.series_title, message)?;
    let season = required(params.season, message)?;
    let episode = required(params.episode_number, message)?;

    let season = parse_number(&season, "Season must be a valid number")?;
    let episode = parse_number(&episode, "Episode number must be a valid number")?;

    tracing::info!(
        request_id = %request_id,
        series = %series,
        season,
        episode,
        "Fetching episode details"
    );

    let query = TitleQuery::Episode {
        series: series.clone(),
        season,
        episode,
    };
    let details = lookup(&state, &query).await?;
    Ok(Json(EpisodeDetailsResponse::new(series, details)))
}
