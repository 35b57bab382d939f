//! Pure AgentQL REST API client.
//!
//! A minimal client for the AgentQL `query-data` endpoint. Send an AgentQL
//! query plus a page URL, get the extracted data back as your own type.
//!
//! # Example
//!
//! ```rust,ignore
//! use agentql_client::AgentQlClient;
//!
//! let client = AgentQlClient::new("your-api-key".into());
//!
//! let prices: Prices = client
//!     .query_data("https://example.com/store", "{ products[] { name price } }")
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{AgentQlError, Result};
pub use types::{QueryParams, QueryResponse, ResponseMetadata};

use serde::de::DeserializeOwned;
use types::QueryDataRequest;

const BASE_URL: &str = "https://api.agentql.com/v1";

pub struct AgentQlClient {
    client: reqwest::Client,
    api_key: String,
    params: QueryParams,
}

impl AgentQlClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            params: QueryParams::default(),
        }
    }

    /// Replace the query params sent with every request.
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Run an AgentQL query against a live page and deserialize the
    /// extracted data.
    pub async fn query_data<T: DeserializeOwned>(&self, url: &str, query: &str) -> Result<T> {
        let request = QueryDataRequest {
            query,
            url,
            params: self.params.clone(),
        };

        tracing::debug!(url, "Posting query-data request");
        let resp = self
            .client
            .post(format!("{}/query-data", BASE_URL))
            .header("X-API-Key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AgentQlError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let api_resp: QueryResponse<T> = resp.json().await?;
        if let Some(metadata) = &api_resp.metadata {
            tracing::debug!(request_id = ?metadata.request_id, "query-data request served");
        }
        Ok(api_resp.data)
    }
}
