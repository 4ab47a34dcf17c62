use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::DownloadStatus;

/// A chapter of a stored manga
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Chapter {
    pub id: String,
    pub manga_id: String,
    pub chapter_number: f64,
    pub title: String,
    #[serde(default)]
    pub title_ar: String,
    /// Page image URLs in reading order
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub download_status: DownloadStatus,
    #[serde(default)]
    pub download_path: String,
}

impl Chapter {
    pub fn new(
        id: impl Into<String>,
        manga_id: impl Into<String>,
        chapter_number: f64,
        title: impl Into<String>,
    ) -> Self {
        Chapter {
            id: id.into(),
            manga_id: manga_id.into(),
            chapter_number,
            title: title.into(),
            title_ar: String::new(),
            pages: Vec::new(),
            size: 0,
            download_status: DownloadStatus::NotDownloaded,
            download_path: String::new(),
        }
    }

    /// Directory name the chapter is downloaded into, e.g. `chapter_1.0` or `chapter_10.5`.
    pub fn dir_name(&self) -> String {
        chapter_dir_name(self.chapter_number)
    }
}

/// Whole numbers keep one decimal place.
pub fn chapter_dir_name(chapter_number: f64) -> String {
    if chapter_number.is_finite() && chapter_number.fract() == 0.0 {
        format!("chapter_{:.1}", chapter_number)
    } else {
        format!("chapter_{}", chapter_number)
    }
}

/// Query parameters of `POST /api/translate`
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct TranslateQuery {
    #[validate(length(min = 1, message = "chapter_id must not be empty"))]
    pub chapter_id: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

fn default_target_lang() -> String {
    "ar".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChaptersResponse {
    pub chapters: Vec<Chapter>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_name_formats_like_float() {
        assert_eq!(chapter_dir_name(1.0), "chapter_1.0");
        assert_eq!(chapter_dir_name(10.5), "chapter_10.5");
        assert_eq!(chapter_dir_name(120.0), "chapter_120.0");
        assert_eq!(chapter_dir_name(0.25), "chapter_0.25");
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let chapter: Chapter = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "manga_id": "m1",
            "chapter_number": 3.0,
            "title": "Three"
        }))
        .unwrap();
        assert_eq!(chapter.title_ar, "");
        assert!(chapter.pages.is_empty());
        assert_eq!(chapter.download_status, DownloadStatus::NotDownloaded);
        assert_eq!(chapter.dir_name(), "chapter_3.0");
    }
}
