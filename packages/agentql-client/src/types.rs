use serde::{Deserialize, Serialize};

/// Request body for the `query-data` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct QueryDataRequest<'a> {
    pub query: &'a str,
    pub url: &'a str,
    pub params: QueryParams,
}

/// Tuning knobs accepted by `query-data`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryParams {
    /// Seconds to wait for the page to settle before extraction.
    pub wait_for: u32,
    pub is_scroll_to_bottom_enabled: bool,
    /// `"fast"` or `"standard"`.
    pub mode: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            wait_for: 0,
            is_scroll_to_bottom_enabled: false,
            mode: "fast".to_string(),
        }
    }
}

impl QueryParams {
    pub fn with_wait_for(mut self, seconds: u32) -> Self {
        self.wait_for = seconds;
        self
    }

    pub fn with_scroll_to_bottom(mut self, enabled: bool) -> Self {
        self.is_scroll_to_bottom_enabled = enabled;
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }
}

/// Wrapper for AgentQL API responses. The extracted payload always sits
/// under `data`.
#[derive(Debug, Deserialize)]
pub struct QueryResponse<T> {
    pub data: T,
    #[serde(default)]
    pub metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub request_id: Option<String>,
}
