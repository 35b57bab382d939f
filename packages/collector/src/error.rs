//! Typed errors for the collector core.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on what went wrong; the binary and the run coordinator add `anyhow`
//! context on top.

use thiserror::Error;

/// Errors that can occur while persisting repositories.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Upsert was invoked with an identity that has no URL
    #[error("repository identity has no URL")]
    MissingIdentity,

    /// The underlying database operation failed
    #[error("persistence failed: {0}")]
    Persistence(#[from] sqlx::Error),
}

/// Errors that can occur while fetching search result pages.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The upstream search service failed or returned an unusable reply
    #[error("search fetch failed: {0}")]
    Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for provider operations.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
