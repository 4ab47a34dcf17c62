use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Manga;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Download state shared by manga and chapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "download_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum DownloadStatus {
    #[default]
    NotDownloaded,
    Downloading,
    Completed,
}

impl DownloadStatus {
    /// Whether an item in this state shows up in the downloads list.
    pub fn is_tracked(&self) -> bool {
        matches!(self, DownloadStatus::Downloading | DownloadStatus::Completed)
    }
}

impl std::fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadStatus::NotDownloaded => write!(f, "not_downloaded"),
            DownloadStatus::Downloading => write!(f, "downloading"),
            DownloadStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Aggregate numbers for the downloads page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DownloadStats {
    pub total_manga: i64,
    pub total_chapters: i64,
    pub total_size: u64,
    pub total_size_mb: f64,
    pub available_space: u64,
    pub available_space_gb: f64,
}

impl DownloadStats {
    pub fn from_parts(
        total_manga: i64,
        total_chapters: i64,
        total_size: u64,
        available_space: u64,
    ) -> Self {
        DownloadStats {
            total_manga,
            total_chapters,
            total_size,
            total_size_mb: round2(total_size as f64 / BYTES_PER_MB),
            available_space,
            available_space_gb: round2(available_space as f64 / BYTES_PER_GB),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DownloadsResponse {
    pub downloads: Vec<Manga>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MangaDownloadResponse {
    pub message: String,
    pub manga_id: String,
    pub status: DownloadStatus,
}
