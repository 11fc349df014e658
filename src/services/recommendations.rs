use futures::future;
use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{
        title::{split_all, split_list},
        Lookup, OmdbTitle, RecommendationTier, Recommendations, TierKind,
        TitleQuery, TitleSummary,
    },
    services::{
        fanout::fan_out,
        providers::MetadataProvider,
        ranking::dedup_and_bound,
        resolver::{resolve_candidates, Relevance},
        PipelineSettings,
    },
};

/// Search values derived from the seed title, one set per tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAttributes {
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub actors: Vec<String>,
}

impl SeedAttributes {
    pub fn from_title(title: &OmdbTitle, lead_actors: usize) -> Self {
        Self {
            genres: split_all(&title.genre),
            directors: split_list(&title.director),
            actors: split_list(&title.actors)
                .into_iter()
                .take(lead_actors)
                .collect(),
        }
    }

    pub fn values(&self, kind: TierKind) -> &[String] {
        match kind {
            TierKind::Genre => &self.genres,
            TierKind::Director => &self.directors,
            TierKind::Actor => &self.actors,
        }
    }
}

/// Generates tiered recommendations from a user's favorite title
///
/// 1. Resolve the seed; a missing seed is `AppError::NotFound`
/// 2. Split its genres, directors and lead actors into search values; every
///    genre value is searched, unknown directors and actors are not
/// 3. Search every value, excluding the seed itself, and rank each tier
///    independently
/// 4. Drop empty tiers
///
/// Only a failed seed lookup fails the whole request. Individual value
/// searches that fail are skipped.
#[instrument(skip(provider, settings), fields(upstream = provider.name()))]
pub async fn recommend(
    provider: &dyn MetadataProvider,
    seed_title: &str,
    settings: &PipelineSettings,
) -> AppResult<Recommendations> {
    let seed = match provider.lookup_title(&TitleQuery::movie(seed_title)).await? {
        Lookup::Found(seed) => seed,
        Lookup::NotFound(reason) => {
            tracing::info!(seed = %seed_title, reason = %reason, "Favorite movie not found");
            return Err(AppError::NotFound(format!(
                "Favorite movie not found: {}",
                seed_title
            )));
        }
    };

    let attributes = SeedAttributes::from_title(&seed, settings.lead_actors);

    let tiers: Vec<RecommendationTier> = future::join_all(
        TierKind::ALL
            .into_iter()
            .map(|kind| build_tier(provider, kind, &attributes, seed_title, settings)),
    )
    .await
    .into_iter()
    .flatten()
    .collect();

    tracing::info!(
        seed = %seed_title,
        tiers = tiers.len(),
        "Recommendations generated"
    );

    Ok(Recommendations {
        seed: TitleSummary::from(seed),
        tiers,
    })
}

async fn build_tier(
    provider: &dyn MetadataProvider,
    kind: TierKind,
    attributes: &SeedAttributes,
    seed_title: &str,
    settings: &PipelineSettings,
) -> Option<RecommendationTier> {
    let values = attributes.values(kind).to_vec();
    if values.is_empty() {
        tracing::debug!(tier = kind.level(), "No search values for tier");
        return None;
    }

    let candidates = fan_out(values, settings.concurrency, None, |value: String| async move {
        resolve_candidates(
            provider,
            &value,
            Relevance::Exclude(seed_title),
            settings.concurrency,
        )
        .await
    })
    .await;

    let members = dedup_and_bound(candidates, settings.tier_limit);

    tracing::debug!(tier = kind.level(), members = members.len(), "Tier ranked");

    RecommendationTier::non_empty(kind, members)
}
