//! In-memory provider used by pipeline tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::{Lookup, OmdbTitle, Search, SearchHit, TitleQuery},
    services::providers::MetadataProvider,
};

/// Catalog-backed provider with scripted search results and failure injection
#[derive(Default)]
pub struct MockCatalog {
    titles: HashMap<String, OmdbTitle>,
    searches: HashMap<String, Vec<SearchHit>>,
    failing_searches: HashSet<String>,
    failing_lookups: HashSet<String>,
    searched_terms: Mutex<Vec<String>>,
    lookups: AtomicUsize,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a title that lookups will find
    pub fn with_title(
        mut self,
        title: &str,
        year: &str,
        rating: &str,
        genre: &str,
        director: &str,
        actors: &str,
    ) -> Self {
        self.titles.insert(
            title.to_lowercase(),
            OmdbTitle {
                title: title.to_string(),
                year: year.to_string(),
                imdb_rating: rating.to_string(),
                genre: genre.to_string(),
                director: director.to_string(),
                actors: actors.to_string(),
                plot: format!("Plot of {}", title),
                response: "True".to_string(),
                ..OmdbTitle::default()
            },
        );
        self
    }

    /// Scripts the hits a search term returns
    pub fn with_search(mut self, term: &str, titles: &[&str]) -> Self {
        let hits = titles
            .iter()
            .enumerate()
            .map(|(i, title)| SearchHit {
                title: title.to_string(),
                year: String::new(),
                identifier: format!("tt{:07}", i),
            })
            .collect();
        self.searches.insert(term.to_string(), hits);
        self
    }

    pub fn with_failing_search(mut self, term: &str) -> Self {
        self.failing_searches.insert(term.to_string());
        self
    }

    pub fn with_failing_lookup(mut self, title: &str) -> Self {
        self.failing_lookups.insert(title.to_lowercase());
        self
    }

    pub fn searched_terms(&self) -> Vec<String> {
        self.searched_terms
            .lock()
            .map(|terms| terms.clone())
            .unwrap_or_default()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl MetadataProvider for MockCatalog {
    async fn lookup_title(&self, query: &TitleQuery) -> AppResult<Lookup> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        let key = match query {
            TitleQuery::Movie(title) => title.to_lowercase(),
            TitleQuery::Episode { series, .. } => series.to_lowercase(),
        };

        if self.failing_lookups.contains(&key) {
            return Err(AppError::ExternalApi(format!("lookup failed: {}", key)));
        }

        Ok(match self.titles.get(&key) {
            Some(title) => Lookup::Found(title.clone()),
            None => Lookup::NotFound("Movie not found!".to_string()),
        })
    }

    async fn search_titles(&self, term: &str) -> AppResult<Search> {
        if let Ok(mut terms) = self.searched_terms.lock() {
            terms.push(term.to_string());
        }

        if self.failing_searches.contains(term) {
            return Err(AppError::ExternalApi(format!("search failed: {}", term)));
        }

        Ok(match self.searches.get(term) {
            Some(hits) => Search::Hits(hits.clone()),
            None => Search::NoResults("Movie not found!".to_string()),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
