use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::{Chapter, DownloadStatus};

/// A stored manga
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Manga {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub title_ar: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_ar: String,
    #[serde(default)]
    pub cover_image: String,
    pub source: String,
    /// Size on disk in bytes
    #[serde(default)]
    pub total_size: i64,
    #[serde(default)]
    pub download_status: DownloadStatus,
}

impl Manga {
    pub fn new(id: impl Into<String>, title: impl Into<String>, source: impl Into<String>) -> Self {
        Manga {
            id: id.into(),
            title: title.into(),
            title_ar: String::new(),
            description: String::new(),
            description_ar: String::new(),
            cover_image: String::new(),
            source: source.into(),
            total_size: 0,
            download_status: DownloadStatus::NotDownloaded,
        }
    }

    /// Attach chapters, sorted by chapter number.
    pub fn with_chapters(self, mut chapters: Vec<Chapter>) -> MangaDetail {
        sort_chapters(&mut chapters);
        MangaDetail {
            manga: self,
            chapters,
        }
    }
}

/// Manga with its chapters, as returned by the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MangaDetail {
    #[serde(flatten)]
    pub manga: Manga,
    pub chapters: Vec<Chapter>,
}

/// Sort chapters by ascending chapter number.
pub fn sort_chapters(chapters: &mut [Chapter]) {
    chapters.sort_by(|a, b| a.chapter_number.total_cmp(&b.chapter_number));
}

/// One search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MangaSummary {
    pub id: String,
    pub title: String,
    pub title_ar: String,
    pub cover_image: String,
    pub chapters_count: i64,
    /// URL of the source the hit came from
    pub source: String,
}

/// Query parameters of `GET /api/manga/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    #[serde(default)]
    #[validate(length(max = 512, message = "Query must be at most 512 characters"))]
    pub query: String,
    #[serde(default)]
    pub source_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub results: Vec<MangaSummary>,
    pub count: usize,
}

impl From<Vec<MangaSummary>> for SearchResponse {
    fn from(results: Vec<MangaSummary>) -> Self {
        SearchResponse {
            count: results.len(),
            results,
        }
    }
}
