use futures::{future, stream, StreamExt};

use crate::{
    error::AppResult,
    models::{Lookup, Search, SearchHit, TitleQuery, TitleSummary},
    services::providers::MetadataProvider,
};

/// Which resolved candidates a search keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance<'a> {
    /// Keep everything
    Any,
    /// Keep titles whose genre field contains this (case-insensitive)
    Genre(&'a str),
    /// Drop titles equal to this one (case-insensitive)
    Exclude(&'a str),
}

impl Relevance<'_> {
    fn admits_hit(&self, hit: &SearchHit) -> bool {
        match self {
            Relevance::Exclude(excluded) => !same_title(&hit.title, excluded),
            _ => true,
        }
    }

    fn admits(&self, summary: &TitleSummary) -> bool {
        match self {
            Relevance::Any => true,
            Relevance::Genre(genre) => summary.has_genre(genre),
            Relevance::Exclude(excluded) => !same_title(&summary.title, excluded),
        }
    }
}

fn same_title(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Searches for `term` and resolves every hit to a [`TitleSummary`]
///
/// Costs one search call plus one lookup per surviving hit. Hits are looked up
/// by title, not identifier. A hit whose lookup fails or comes back not found
/// is skipped; a failed search is returned to the caller. Output keeps the
/// order the search reported, unranked.
pub async fn resolve_candidates(
    provider: &dyn MetadataProvider,
    term: &str,
    relevance: Relevance<'_>,
    concurrency: usize,
) -> AppResult<Vec<TitleSummary>> {
    let hits = match provider.search_titles(term).await? {
        Search::Hits(hits) => hits,
        Search::NoResults(reason) => {
            tracing::debug!(term = %term, reason = %reason, "Search returned no results");
            return Ok(Vec::new());
        }
    };

    let hit_count = hits.len();
    let hits: Vec<SearchHit> = hits
        .into_iter()
        .filter(|hit| relevance.admits_hit(hit))
        .collect();

    let mut candidates: Vec<TitleSummary> = stream::iter(hits)
        .map(|hit| resolve_hit(provider, hit))
        .buffered(concurrency.max(1))
        .filter_map(future::ready)
        .collect()
        .await;
    candidates.retain(|summary| relevance.admits(summary));

    tracing::debug!(
        term = %term,
        hits = hit_count,
        candidates = candidates.len(),
        provider = provider.name(),
        "Resolved search candidates"
    );

    Ok(candidates)
}

async fn resolve_hit(provider: &dyn MetadataProvider, hit: SearchHit) -> Option<TitleSummary> {
    match provider.lookup_title(&TitleQuery::movie(hit.title.as_str())).await {
        Ok(Lookup::Found(title)) => Some(TitleSummary::from(title)),
        Ok(Lookup::NotFound(reason)) => {
            tracing::debug!(title = %hit.title, reason = %reason, "Search hit not found, skipping");
            None
        }
        Err(e) => {
            tracing::debug!(title = %hit.title, error = %e, "Search hit lookup failed, skipping");
            None
        }
    }
}
