//! AgentQL-backed search provider.
//!
//! Drives a search engine through the AgentQL `query-data` API: one request
//! per result page, with the engine's own `start` offset parameter doing the
//! pagination. AgentQL renders the page and extracts the result entries
//! matching [`SEARCH_RESULTS_QUERY`], so no HTML parsing happens here.

use async_trait::async_trait;
use tracing::{debug, info};

use agentql_client::AgentQlClient;

use crate::error::{ProviderError, ProviderResult};
use crate::provider::{ResultPage, SearchProvider};

/// AgentQL query describing one search result page.
const SEARCH_RESULTS_QUERY: &str = r#"
{
    search_results[]
    {
        title
        about
        url
    }
}
"#;

/// Result entries per page used for the engine's pagination offset.
const PAGE_STRIDE: u32 = 10;

pub struct AgentQlSearchProvider {
    client: AgentQlClient,
}

impl AgentQlSearchProvider {
    pub fn new(client: AgentQlClient) -> Self {
        Self { client }
    }

    /// Build the engine URL for one result page (zero-based index).
    fn page_url(target: &str, terms: &str, page_index: u32) -> String {
        let base = format!(
            "{}/search?q={}",
            target.trim_end_matches('/'),
            urlencoding::encode(terms)
        );
        if page_index == 0 {
            base
        } else {
            format!("{}&start={}", base, page_index * PAGE_STRIDE)
        }
    }
}

#[async_trait]
impl SearchProvider for AgentQlSearchProvider {
    async fn fetch_result_pages(
        &self,
        target: &str,
        terms: &str,
        max_pages: u32,
    ) -> ProviderResult<Vec<ResultPage>> {
        let mut pages = Vec::new();

        for page_index in 0..max_pages {
            let url = Self::page_url(target, terms, page_index);
            debug!(page = page_index + 1, %url, "Fetching search result page");

            let page: ResultPage = self
                .client
                .query_data(&url, SEARCH_RESULTS_QUERY)
                .await
                .map_err(|e| ProviderError::Fetch(Box::new(e)))?;

            if page.search_results.is_empty() {
                debug!(page = page_index + 1, "Empty result page, stopping pagination");
                break;
            }

            info!(
                page = page_index + 1,
                results = page.search_results.len(),
                "Fetched search result page"
            );
            pages.push(page);
        }

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_offset() {
        let url = AgentQlSearchProvider::page_url(
            "https://www.google.com",
            "site:github.com inurl:docker-compose.yml",
            0,
        );
        assert_eq!(
            url,
            "https://www.google.com/search?q=site%3Agithub.com%20inurl%3Adocker-compose.yml"
        );
    }

    #[test]
    fn later_pages_carry_start_offset() {
        let url = AgentQlSearchProvider::page_url("https://www.google.com", "rust sqlx", 2);
        assert_eq!(url, "https://www.google.com/search?q=rust%20sqlx&start=20");
    }

    #[test]
    fn trailing_slash_on_target_is_tolerated() {
        let url = AgentQlSearchProvider::page_url("https://www.google.com/", "x", 0);
        assert_eq!(url, "https://www.google.com/search?q=x");
    }
}
