use chrono::{Datelike, Utc};
use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::GenreRanking,
    services::{
        fanout::fan_out,
        providers::MetadataProvider,
        ranking::{dedup_and_bound, filter_and_dedup},
        resolver::{resolve_candidates, Relevance},
        PipelineSettings,
    },
};

/// Search terms used to discover titles in `genre`
///
/// OMDb has no genre filter, so discovery leans on free-text variations:
/// the bare genre, "<genre> movie", "best <genre>", then "<genre> <year>"
/// for `recent_years` years counting back from `current_year`.
pub fn genre_search_terms(genre: &str, current_year: i32, recent_years: i32) -> Vec<String> {
    let mut terms = vec![
        genre.to_string(),
        format!("{} movie", genre),
        format!("best {}", genre),
    ];

    terms.extend((0..recent_years).map(|offset| format!("{} {}", genre, current_year - offset)));
    terms
}

/// Top-rated titles for `genre`, searching the years leading up to today
pub async fn rank_genre(
    provider: &dyn MetadataProvider,
    genre: &str,
    settings: &PipelineSettings,
) -> AppResult<GenreRanking> {
    rank_genre_as_of(provider, genre, Utc::now().year(), settings).await
}

/// Top-rated titles for `genre`, with year-based search terms anchored at `current_year`
///
/// Returns `AppError::NoResults` when nothing survives filtering. Failed
/// search terms are skipped, so upstream trouble degrades the ranking rather
/// than failing it.
#[instrument(skip(provider, settings), fields(upstream = provider.name()))]
pub async fn rank_genre_as_of(
    provider: &dyn MetadataProvider,
    genre: &str,
    current_year: i32,
    settings: &PipelineSettings,
) -> AppResult<GenreRanking> {
    let terms = genre_search_terms(genre, current_year, settings.recent_years);

    let candidates = fan_out(
        terms,
        settings.concurrency,
        Some(settings.candidate_cap),
        |term: String| async move {
            resolve_candidates(provider, &term, Relevance::Genre(genre), settings.concurrency)
                .await
        },
    )
    .await;

    let candidate_count = candidates.len();
    let filtered = filter_and_dedup(candidates, genre);
    let movies = dedup_and_bound(filtered, settings.genre_limit);

    tracing::info!(
        genre = %genre,
        candidates = candidate_count,
        ranked = movies.len(),
        "Genre ranking completed"
    );

    if movies.is_empty() {
        return Err(AppError::NoResults(format!(
            "No movies found for genre '{}'",
            genre
        )));
    }

    Ok(GenreRanking::new(genre, movies))
}
