use serde::Serialize;

use super::TitleSummary;

/// The three recommendation tiers, from most general to most specific
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierKind {
    Genre,
    Director,
    Actor,
}

impl TierKind {
    pub const ALL: [TierKind; 3] = [TierKind::Genre, TierKind::Director, TierKind::Actor];

    pub fn level(self) -> u8 {
        match self {
            TierKind::Genre => 1,
            TierKind::Director => 2,
            TierKind::Actor => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TierKind::Genre => "Movies in the same genre",
            TierKind::Director => "Movies by the same director",
            TierKind::Actor => "Movies with the same main actors",
        }
    }
}

/// One labeled, independently ranked group of recommendations
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationTier {
    pub level: u8,
    #[serde(rename = "description")]
    pub label: String,
    #[serde(rename = "movies")]
    pub members: Vec<TitleSummary>,
}

impl RecommendationTier {
    /// Builds a tier, or `None` when nothing survived ranking
    pub fn non_empty(kind: TierKind, members: Vec<TitleSummary>) -> Option<Self> {
        if members.is_empty() {
            return None;
        }

        Some(Self {
            level: kind.level(),
            label: kind.label().to_string(),
            members,
        })
    }
}

/// Seed summary plus the non-empty tiers derived from it
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    #[serde(rename = "favorite_movie")]
    pub seed: TitleSummary,
    #[serde(rename = "recommendations")]
    pub tiers: Vec<RecommendationTier>,
}

/// Top-rated titles for one genre
#[derive(Debug, Clone, Serialize)]
pub struct GenreRanking {
    pub genre: String,
    pub movies: Vec<TitleSummary>,
    pub total: usize,
}

impl GenreRanking {
    pub fn new(genre: impl Into<String>, movies: Vec<TitleSummary>) -> Self {
        Self {
            genre: genre.into(),
            total: movies.len(),
            movies,
        }
    }
}
