//! Source catalog search.

use anyhow::Result;
use async_trait::async_trait;
use slayer_core::models::MangaSummary;
use uuid::Uuid;

const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/300x400";

/// Looks up manga on one source.
#[async_trait]
pub trait MangaCatalog: Send + Sync {
    /// Search the source at `source_url`. An empty query lists the source's catalog.
    async fn search(&self, source_url: &str, query: &str) -> Result<Vec<MangaSummary>>;
}

/// Catalog returning the same two titles for every source and query.
#[derive(Debug, Clone, Default)]
pub struct SampleCatalog;

impl SampleCatalog {
    pub fn new() -> Self {
        SampleCatalog
    }

    fn summary_id() -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("manga_{}", &hex[..8])
    }

    fn summary(source_url: &str, title: &str, title_ar: &str, chapters_count: i64) -> MangaSummary {
        MangaSummary {
            id: Self::summary_id(),
            title: title.to_string(),
            title_ar: title_ar.to_string(),
            cover_image: PLACEHOLDER_COVER.to_string(),
            chapters_count,
            source: source_url.to_string(),
        }
    }
}

#[async_trait]
impl MangaCatalog for SampleCatalog {
    #[tracing::instrument(skip(self))]
    async fn search(&self, source_url: &str, query: &str) -> Result<Vec<MangaSummary>> {
        Ok(vec![
            Self::summary(source_url, "One Piece", "قطعة واحدة", 1000),
            Self::summary(source_url, "Naruto", "ناروتو", 700),
        ])
    }
}
