/// Movie metadata provider abstraction
///
/// The pipelines only ever talk to the upstream through this trait, so the
/// provider is constructed once at startup and injected wherever it is needed.
/// Tests substitute an in-memory catalog or a `mockall` mock.
use crate::{
    error::AppResult,
    models::{Lookup, Search, TitleQuery},
};

pub mod omdb;

#[cfg(test)]
pub mod mock;

pub use omdb::OmdbProvider;

/// Trait for movie metadata providers
///
/// Both operations issue exactly one upstream call. "Not found" is reported
/// through the returned enum; `Err` is reserved for transport and parse failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch full detail for a single movie or episode
    async fn lookup_title(&self, query: &TitleQuery) -> AppResult<Lookup>;

    /// Free-text title search
    ///
    /// Hits carry only title, year and identifier; callers resolve detail
    /// through [`MetadataProvider::lookup_title`].
    async fn search_titles(&self, term: &str) -> AppResult<Search>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
