//! HTTP access to the Jellyfin REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::error::{JellyfinError, JellyfinResult};
use crate::core::config::JellyfinConfig;

/// Per-request timeout for Jellyfin calls.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Ordered query parameters for a single GET request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    /// Append a parameter only when the caller supplied a non-empty value.
    pub fn with_non_empty(self, key: &'static str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.with(key, value)
        }
    }

    /// First value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read-only access to a media server.
///
/// Implementations perform exactly one GET per call and return the parsed
/// JSON body. The `api_key` parameter is added by the implementation.
#[async_trait]
pub trait MediaApi: Send + Sync {
    async fn get(&self, path: &str, query: &QueryParams) -> JellyfinResult<Value>;
}

/// `reqwest`-backed Jellyfin client.
pub struct JellyfinClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl JellyfinClient {
    /// Create a client for the configured server.
    ///
    /// The connection settings are not validated here; incomplete settings are
    /// rejected per call before any request is made.
    pub fn new(jellyfin: &JellyfinConfig) -> JellyfinResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| JellyfinError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: jellyfin.url.clone(),
            api_key: jellyfin.api_key.clone(),
        })
    }
}

#[async_trait]
impl MediaApi for JellyfinClient {
    #[instrument(skip(self, query), fields(params = query.len()))]
    async fn get(&self, path: &str, query: &QueryParams) -> JellyfinResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .query(query.as_slice())
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| JellyfinError::from_request(path, e))?;

        let status = response.status();
        if !status.is_success() {
            error!("Jellyfin returned {} for {}", status, path);
            return Err(JellyfinError::Status {
                path: path.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| JellyfinError::from_request(path, e))?;

        debug!("Response received: {} bytes", body.len());

        Ok(serde_json::from_slice(&body)?)
    }
}
