/// OMDb API provider
///
/// OMDb exposes a single GET endpoint driven by query parameters:
/// 1. Title lookup: `?t=<title>&type=movie` → full detail record
/// 2. Episode lookup: `?t=<series>&Season=<n>&Episode=<n>`
/// 3. Search: `?s=<term>&type=movie` → list of brief hits
///
/// Every response is a 200 with a `Response: "True" | "False"` flag.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, AppResult},
    models::{Lookup, OmdbSearchResponse, OmdbTitle, Search, TitleQuery},
    services::providers::MetadataProvider,
};

const MOVIE_TYPE: &str = "movie";

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    /// Creates a new OMDb provider whose every request is bounded by `timeout`
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }

    fn lookup_params(&self, query: &TitleQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![("apikey", self.api_key.clone())];

        match query {
            TitleQuery::Movie(title) => {
                params.push(("t", title.clone()));
                params.push(("type", MOVIE_TYPE.to_string()));
            }
            TitleQuery::Episode {
                series,
                season,
                episode,
            } => {
                params.push(("t", series.clone()));
                params.push(("Season", season.to_string()));
                params.push(("Episode", episode.to_string()));
            }
        }

        params
    }

    fn search_params(&self, term: &str) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", self.api_key.clone()),
            ("s", term.to_string()),
            ("type", MOVIE_TYPE.to_string()),
        ]
    }

    async fn get<T: DeserializeOwned>(&self, params: &[(&'static str, String)]) -> AppResult<T> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(params)
            .send()
            .await
            .map_err(AppError::from_transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let body = response.text().await.map_err(AppError::from_transport)?;
        parse_payload(&body)
    }
}

fn parse_payload<T: DeserializeOwned>(body: &str) -> AppResult<T> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = %e, response = %body, "Failed to deserialize OMDb response");
        AppError::ExternalApi(format!("Failed to parse OMDb response: {}", e))
    })
}

#[async_trait::async_trait]
impl MetadataProvider for OmdbProvider {
    async fn lookup_title(&self, query: &TitleQuery) -> AppResult<Lookup> {
        let params = self.lookup_params(query);
        let title: OmdbTitle = self.get(&params).await?;
        let lookup = Lookup::from(title);

        tracing::debug!(
            query = %query,
            found = matches!(lookup, Lookup::Found(_)),
            provider = "omdb",
            "Title lookup completed"
        );

        Ok(lookup)
    }

    async fn search_titles(&self, term: &str) -> AppResult<Search> {
        let params = self.search_params(term);
        let response: OmdbSearchResponse = self.get(&params).await?;
        let search = Search::from(response);
        let hits = match &search {
            Search::Hits(hits) => hits.len(),
            Search::NoResults(_) => 0,
        };

        tracing::debug!(
            term = %term,
            hits,
            provider = "omdb",
            "Title search completed"
        );

        Ok(search)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
