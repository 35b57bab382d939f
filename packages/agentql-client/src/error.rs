//! Error types for the AgentQL client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentQlError {
    /// Transport-level failure before a response arrived.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("AgentQL API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, AgentQlError>;
