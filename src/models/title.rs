use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{OmdbSearchHit, OmdbTitle, NOT_AVAILABLE};

/// What a single-title lookup asks the provider for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleQuery {
    /// A movie by its title
    Movie(String),
    /// One episode of a series
    Episode {
        series: String,
        season: u32,
        episode: u32,
    },
}

impl TitleQuery {
    pub fn movie(title: impl Into<String>) -> Self {
        TitleQuery::Movie(title.into())
    }
}

impl Display for TitleQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TitleQuery::Movie(title) => write!(f, "{}", title),
            TitleQuery::Episode {
                series,
                season,
                episode,
            } => write!(f, "{} S{:02}E{:02}", series, season, episode),
        }
    }
}

/// Raw free-text search hit, not yet resolved to full detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub year: String,
    pub identifier: String,
}

impl From<OmdbSearchHit> for SearchHit {
    fn from(hit: OmdbSearchHit) -> Self {
        Self {
            title: hit.title,
            year: hit.year,
            identifier: hit.imdb_id,
        }
    }
}

/// Brief, detail-resolved view of a title returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleSummary {
    pub title: String,
    pub year: String,
    #[serde(rename = "imdb_rating")]
    pub rating: String,
    #[serde(rename = "genre")]
    pub genres: String,
    pub director: String,
    #[serde(rename = "plot")]
    pub synopsis: String,
}

impl From<OmdbTitle> for TitleSummary {
    fn from(title: OmdbTitle) -> Self {
        Self {
            title: title.title,
            year: title.year,
            rating: title.imdb_rating,
            genres: title.genre,
            director: title.director,
            synopsis: title.plot,
        }
    }
}

impl TitleSummary {
    /// Dedup identity: lowercased title followed by lowercased year
    pub fn canonical_key(&self) -> String {
        format!("{}{}", self.title, self.year).to_lowercase()
    }

    /// Parsed rating, or `None` when it is missing, `N/A`, non-numeric or not positive
    pub fn rating_value(&self) -> Option<f64> {
        parse_rating(&self.rating)
    }

    /// Case-insensitive substring match against the comma-separated genre field
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.to_lowercase().contains(&genre.to_lowercase())
    }
}

pub fn parse_rating(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() || raw == NOT_AVAILABLE {
        return None;
    }

    raw.parse::<f64>()
        .ok()
        .filter(|rating| rating.is_finite() && *rating > 0.0)
}

/// Splits an OMDb comma-separated list, dropping blanks and the `N/A` placeholder
/// Splits a comma-separated field, keeping every non-blank value as-is
pub fn split_all(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn split_list(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != NOT_AVAILABLE)
        .map(str::to_string)
        .collect()
}
