use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use shared::Endpoint;
use thiserror::Error;

use crate::state::sync::Slice;
use crate::state::{FetchOutcome, FetchRequest};

/// Backend address used when no override is compiled in
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Base URL baked in at build time via `DASHBOARD_API_URL`, if set
pub fn configured_base_url() -> &'static str {
    option_env!("DASHBOARD_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// A failed read: network error, non-success status, or undecodable body
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Request to {endpoint} failed: {reason}")]
pub struct FetchError {
    pub endpoint: Endpoint,
    pub reason: String,
}

impl FetchError {
    pub fn new(endpoint: Endpoint, reason: impl Into<String>) -> Self {
        Self {
            endpoint,
            reason: reason.into(),
        }
    }
}

/// API client for the transactions backend
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL
    pub fn new() -> Self {
        Self::with_base_url(configured_base_url().to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// URL and query parameters actually sent for `request`
    pub fn plan(&self, request: &FetchRequest) -> (String, Vec<(&'static str, String)>) {
        (self.url_for(request.endpoint()), request.query_pairs())
    }

    /// Run a planned request and tag the result with its slice
    pub async fn execute(&self, request: &FetchRequest) -> FetchOutcome {
        match request.slice() {
            Slice::Transactions => FetchOutcome::Transactions(self.get_json(request).await),
            Slice::Statistics => FetchOutcome::Statistics(self.get_json(request).await),
            Slice::BarChart => FetchOutcome::BarChart(self.get_json(request).await),
            Slice::PieChart => FetchOutcome::PieChart(self.get_json(request).await),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, request: &FetchRequest) -> Result<T, FetchError> {
        let endpoint = request.endpoint();
        let (url, params) = self.plan(request);

        let response = Request::get(&url)
            .query(params.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await
            .map_err(|e| FetchError::new(endpoint, format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(FetchError::new(
                endpoint,
                format!("Server error {}: {}", response.status(), response.status_text()),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::new(endpoint, format!("Failed to parse response: {}", e)))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
