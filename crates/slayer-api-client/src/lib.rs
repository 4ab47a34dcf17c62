//! Shared HTTP client for the Manga Slayer API.
//!
//! Provides a minimal client with generic GET/POST/DELETE helpers and domain
//! methods (sources, search, downloads, preferences, progress). The CLI uses
//! this client directly.

pub mod api;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Route prefix of every API endpoint.
pub const API_PREFIX: &str = "/api";

/// Default server address when `SLAYER_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8001";

/// HTTP client for the Manga Slayer API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create client from environment: SLAYER_API_URL, defaulting to localhost:8001.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("SLAYER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an API path, e.g. `/sources` → `{base}/api/sources`.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// GET request with optional query parameters. Deserializes JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let mut request = self.client.get(self.build_url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        send_json(request).await
    }

    /// POST JSON body and deserialize response.
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        send_json(self.client.post(self.build_url(path)).json(body)).await
    }

    /// POST without a body; parameters travel in the query string.
    pub async fn post_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        send_json(self.client.post(self.build_url(path)).query(query)).await
    }

    /// DELETE request and deserialize response.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        send_json(self.client.delete(self.build_url(path))).await
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await.context("Failed to send request")?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(anyhow::anyhow!(
            "API request failed with status {}: {}",
            status,
            error_text
        ));
    }

    response
        .json()
        .await
        .context("Failed to parse response as JSON")
}

// Re-export domain response types for convenience.
pub use slayer_core::models::{
    Chapter, ChapterMessageResponse, DownloadStats, DownloadsResponse, MangaDetail,
    MangaDownloadResponse, MessageResponse, ReadingProgress, SearchResponse,
    SourceCreatedResponse, SourcesResponse, UserPreferences,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8001/".to_string()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8001");
        assert_eq!(
            client.build_url("/sources"),
            "http://localhost:8001/api/sources"
        );
    }
}
