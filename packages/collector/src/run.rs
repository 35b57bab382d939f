//! Collection run coordinator
//!
//! One run is one pass over the provider's result pages:
//! 1. Fetch up to `max_pages` result pages for the configured query
//! 2. Skip entries that carry no URL
//! 3. Reduce each remaining URL to its repository identity
//! 4. Upsert every entry inside a single transaction
//!
//! The transaction is the atomicity boundary. A provider failure means
//! nothing is opened at all; a persistence failure abandons the run and the
//! transaction rolls back on drop, so a run never half-applies.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::github::RepoIdentity;
use crate::models::{GithubRepository, RepositoryPatch};
use crate::provider::SearchProvider;

/// Statistics for one collection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub pages_fetched: usize,
    pub entries_seen: usize,
    pub entries_skipped: usize,
    pub repositories_upserted: usize,
}

/// Run one collection pass and commit the results.
///
/// A failed or empty fetch completes the run as a no-op with zeroed stats.
/// Any persistence failure abandons the whole run; no partial state survives.
pub async fn run_collection(
    provider: &dyn SearchProvider,
    pool: &PgPool,
    target: &str,
    terms: &str,
    max_pages: u32,
) -> Result<RunReport> {
    info!(%target, %terms, max_pages, "Starting collection run");

    let mut pages = match provider.fetch_result_pages(target, terms, max_pages).await {
        Ok(pages) => pages,
        Err(e) => {
            warn!(error = %e, "Search provider failed, nothing to process");
            return Ok(RunReport::default());
        }
    };
    pages.truncate(max_pages as usize);

    if pages.is_empty() {
        info!("No result pages returned, nothing to process");
        return Ok(RunReport::default());
    }

    let mut report = RunReport {
        pages_fetched: pages.len(),
        ..RunReport::default()
    };

    let mut tx = pool
        .begin()
        .await
        .context("Failed to open run transaction")?;

    for page in &pages {
        for hit in &page.search_results {
            report.entries_seen += 1;

            let url = match hit.url.as_deref() {
                Some(u) if !u.is_empty() => u,
                _ => {
                    debug!(title = ?hit.title, "Result entry has no URL, skipping");
                    report.entries_skipped += 1;
                    continue;
                }
            };

            let identity = RepoIdentity::parse(url);

            let mut patch = RepositoryPatch::new();
            if let Some(about) = &hit.about {
                patch = patch.about(about.clone());
            }

            match GithubRepository::add_or_update(&mut *tx, &identity, patch).await {
                Ok(record) => {
                    debug!(url = %record.url, title = ?hit.title, "Upserted repository");
                    report.repositories_upserted += 1;
                }
                Err(StoreError::MissingIdentity) => {
                    warn!(raw_url = url, "Result entry has no usable identity, skipping");
                    report.entries_skipped += 1;
                }
                Err(e) => {
                    return Err(e).context("Repository upsert failed, abandoning run");
                }
            }
        }
    }

    tx.commit().await.context("Failed to commit run transaction")?;

    info!(
        pages_fetched = report.pages_fetched,
        entries_seen = report.entries_seen,
        entries_skipped = report.entries_skipped,
        repositories_upserted = report.repositories_upserted,
        "Collection run committed"
    );

    Ok(report)
}
