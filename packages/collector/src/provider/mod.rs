//! Search provider trait for result-page discovery.
//!
//! The collector never talks to a search engine directly. It hands a target
//! engine URL and query terms to a `SearchProvider` and gets back parsed
//! result pages. This keeps the run coordinator testable (mock provider) and
//! isolates the one component allowed to do network I/O.
//!
//! # Implementations
//!
//! - `AgentQlSearchProvider` - AgentQL query-data API
//! - `MockSearchProvider` - For testing

pub mod agentql;

pub use agentql::AgentQlSearchProvider;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{ProviderError, ProviderResult};

/// One entry on a search result page.
///
/// Every field is optional: result markup varies between engines and between
/// result types, and a missing field must never fail the page. Entries
/// without a usable `url` are counted and skipped downstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub about: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

impl SearchHit {
    /// Create a hit for a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            title: None,
            about: None,
            url: Some(url.into()),
        }
    }

    /// Add a title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add an about/description snippet.
    pub fn with_about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }
}

/// One fetched search result page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultPage {
    #[serde(default)]
    pub search_results: Vec<SearchHit>,
}

impl ResultPage {
    pub fn new(search_results: Vec<SearchHit>) -> Self {
        Self { search_results }
    }
}

/// Search provider trait: fetch up to `max_pages` result pages for a query.
///
/// Pages are fetched strictly in order and the reply is all-or-nothing. A
/// provider that fails on page three returns `Err`, not the two pages it
/// already had; the caller treats any `Err` as "nothing fetched".
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run `terms` against the engine at `target` and collect result pages.
    async fn fetch_result_pages(
        &self,
        target: &str,
        terms: &str,
        max_pages: u32,
    ) -> ProviderResult<Vec<ResultPage>>;
}

/// Mock search provider for testing.
///
/// Returns its canned pages as-is, ignoring `max_pages` (the coordinator
/// enforces the cap). `failing()` builds one that always errors.
#[derive(Default)]
pub struct MockSearchProvider {
    pages: Vec<ResultPage>,
    fail: bool,
}

impl MockSearchProvider {
    /// Create a new mock provider with no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page of hits.
    pub fn with_page(mut self, hits: Vec<SearchHit>) -> Self {
        self.pages.push(ResultPage::new(hits));
        self
    }

    /// Create a provider that fails every fetch.
    pub fn failing() -> Self {
        Self {
            pages: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn fetch_result_pages(
        &self,
        _target: &str,
        _terms: &str,
        _max_pages: u32,
    ) -> ProviderResult<Vec<ResultPage>> {
        if self.fail {
            return Err(ProviderError::Fetch(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                "mock provider failure",
            ))));
        }
        Ok(self.pages.clone())
    }
}
