pub mod fanout;
pub mod genre_ranking;
pub mod providers;
pub mod ranking;
pub mod recommendations;
pub mod resolver;

pub use providers::{MetadataProvider, OmdbProvider};

/// Bounds and tuning shared by the aggregation pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Units resolved at once during fan-out; 1 means strictly sequential
    pub concurrency: usize,
    /// Size of a genre ranking
    pub genre_limit: usize,
    /// Raw candidates after which the genre pipeline stops launching search terms
    pub candidate_cap: usize,
    /// Size of each recommendation tier
    pub tier_limit: usize,
    /// Leading actors searched for the actor tier
    pub lead_actors: usize,
    /// Years searched for a genre, counting back from the current year
    pub recent_years: i32,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            concurrency: 4,
            genre_limit: 15,
            candidate_cap: 50,
            tier_limit: 20,
            lead_actors: 2,
            recent_years: 11,
        }
    }
}

impl PipelineSettings {
    /// Settings that reproduce one-at-a-time upstream traffic
    pub fn sequential() -> Self {
        Self {
            concurrency: 1,
            ..Self::default()
        }
    }
}
