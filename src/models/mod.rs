use serde::{Deserialize, Serialize};

pub mod recommendation;
pub mod title;

pub use recommendation::{GenreRanking, RecommendationTier, Recommendations, TierKind};
pub use title::{SearchHit, TitleQuery, TitleSummary};

/// Placeholder OMDb uses for fields it has no data for
pub const NOT_AVAILABLE: &str = "N/A";

// ============================================================================
// OMDb API Types
// ============================================================================

/// Raw detail payload returned by an OMDb title lookup
///
/// OMDb answers "not found" with a 200 and `Response: "False"`, so every field
/// defaults to empty and the flag decides which [`Lookup`] variant it becomes.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct OmdbTitle {
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: String,
    pub ratings: Vec<OmdbRating>,
    pub metascore: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub title_type: String,
    pub season: String,
    pub episode: String,
    pub response: String,
    pub error: String,
}

/// Individual rating from a single source (IMDb, Rotten Tomatoes, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OmdbRating {
    #[serde(rename(deserialize = "Source", serialize = "source"))]
    pub source: String,
    #[serde(rename(deserialize = "Value", serialize = "value"))]
    pub value: String,
}

/// Raw payload returned by an OMDb free-text search
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OmdbSearchResponse {
    pub search: Vec<OmdbSearchHit>,
    #[serde(rename = "totalResults")]
    pub total_results: String,
    pub response: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OmdbSearchHit {
    pub title: String,
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub title_type: String,
    pub poster: String,
}

fn is_success(flag: &str) -> bool {
    flag.eq_ignore_ascii_case("true")
}

/// Outcome of a single-title lookup
///
/// A missing title is a normal result rather than an error; transport and
/// parse failures travel separately as `AppError`.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(OmdbTitle),
    NotFound(String),
}

impl From<OmdbTitle> for Lookup {
    fn from(title: OmdbTitle) -> Self {
        if is_success(&title.response) {
            Lookup::Found(title)
        } else if title.error.is_empty() {
            Lookup::NotFound("Unknown error".to_string())
        } else {
            Lookup::NotFound(title.error)
        }
    }
}

/// Outcome of a free-text search
#[derive(Debug, Clone, PartialEq)]
pub enum Search {
    Hits(Vec<SearchHit>),
    NoResults(String),
}

impl From<OmdbSearchResponse> for Search {
    fn from(response: OmdbSearchResponse) -> Self {
        if !is_success(&response.response) {
            return Search::NoResults(response.error);
        }

        Search::Hits(response.search.into_iter().map(SearchHit::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omdb_title_deserialization() {
        let json = r#"{
            "Title": "Inception",
            "Year": "2010",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
            "Plot": "A thief who steals corporate secrets.",
            "Ratings": [{"Source": "Internet Movie Database", "Value": "8.8/10"}],
            "imdbRating": "8.8",
            "imdbID": "tt1375666",
            "Type": "movie",
            "Response": "True"
        }"#;

        let title: OmdbTitle = serde_json::from_str(json).unwrap();
        assert_eq!(title.title, "Inception");
        assert_eq!(title.imdb_rating, "8.8");
        assert_eq!(title.imdb_id, "tt1375666");
        assert_eq!(title.ratings[0].source, "Internet Movie Database");
        assert_eq!(title.country, "");
        assert!(matches!(Lookup::from(title), Lookup::Found(_)));
    }

    #[test]
    fn test_not_found_payload_becomes_not_found() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let title: OmdbTitle = serde_json::from_str(json).unwrap();
        assert_eq!(
            Lookup::from(title),
            Lookup::NotFound("Movie not found!".to_string())
        );
    }

    #[test]
    fn test_search_response_hits() {
        let json = r#"{
            "Search": [
                {"Title": "Alien", "Year": "1979", "imdbID": "tt0078748", "Type": "movie", "Poster": "N/A"},
                {"Title": "Aliens", "Year": "1986", "imdbID": "tt0090605", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;

        let response: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        match Search::from(response) {
            Search::Hits(hits) => {
                assert_eq!(hits.len(), 2);
                assert_eq!(hits[1].title, "Aliens");
                assert_eq!(hits[1].identifier, "tt0090605");
            }
            other => panic!("expected hits, got {:?}", other),
        }
    }

    #[test]
    fn test_search_response_false_flag() {
        let json = r#"{"Response": "False", "Error": "Too many results."}"#;
        let response: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            Search::from(response),
            Search::NoResults("Too many results.".to_string())
        );
    }
}
