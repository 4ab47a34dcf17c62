//! Reachability check run before a custom source is saved.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

/// Result of probing a source URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered with a status below 400
    Reachable,
    /// The server answered with an error status
    Rejected(u16),
    /// The URL is malformed or the request failed before a response
    Unreachable(String),
}

#[async_trait]
pub trait SourceProbe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Probe issuing a single HTTP HEAD request
#[derive(Clone)]
pub struct HttpSourceProbe {
    client: Client,
}

impl HttpSourceProbe {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client for source probe: {}", e))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl SourceProbe for HttpSourceProbe {
    #[tracing::instrument(skip(self))]
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => return ProbeOutcome::Unreachable(format!("invalid URL: {}", e)),
        };

        if !matches!(parsed.scheme(), "http" | "https") {
            return ProbeOutcome::Unreachable(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            ));
        }

        match self.client.head(parsed).send().await {
            Ok(response) if response.status().as_u16() >= 400 => {
                let status = response.status().as_u16();
                tracing::debug!(status, "Source probe rejected");
                ProbeOutcome::Rejected(status)
            }
            Ok(_) => ProbeOutcome::Reachable,
            Err(e) => {
                tracing::debug!(error = %e, "Source probe failed");
                ProbeOutcome::Unreachable(e.to_string())
            }
        }
    }
}
