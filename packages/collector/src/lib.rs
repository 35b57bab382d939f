//! GitHub repository collector
//!
//! Discovers GitHub repositories through search engine queries and keeps
//! their metadata in Postgres. A run asks the search provider for result
//! pages, reduces every result URL to its canonical
//! `https://github.com/<developer>/<name>` form, and upserts one row per
//! repository inside a single transaction.
//!
//! # Modules
//!
//! - [`github`] - repository identity parsing
//! - [`models`] - `github_repositories` row type, update patches, queries
//! - [`provider`] - search provider trait, AgentQL adapter, test mock
//! - [`run`] - the run coordinator (fetch, parse, upsert, commit)
//! - [`config`] - environment configuration
//! - [`error`] - typed store and provider errors

pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod provider;
pub mod run;

// Re-export core types at crate root
pub use config::Config;
pub use error::{ProviderError, StoreError};
pub use github::RepoIdentity;
pub use models::{Field, GithubRepository, RepositoryPatch};
pub use provider::{
    AgentQlSearchProvider, MockSearchProvider, ResultPage, SearchHit, SearchProvider,
};
pub use run::{run_collection, RunReport};
