use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Where the reader stopped in a manga. At most one per manga.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ReadingProgress {
    pub manga_id: String,
    pub chapter_id: Option<String>,
    pub page: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ReadingProgress {
    /// Progress reported for a manga nobody has opened yet.
    pub fn unread(manga_id: impl Into<String>) -> Self {
        ReadingProgress {
            manga_id: manga_id.into(),
            chapter_id: None,
            page: 0,
            timestamp: None,
        }
    }
}

/// Query parameters of `POST /api/reading-progress`
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct ReadingProgressUpdate {
    #[validate(length(min = 1, message = "manga_id must not be empty"))]
    pub manga_id: String,
    #[serde(default)]
    pub chapter_id: Option<String>,
    #[validate(range(min = 0, message = "Page must not be negative"))]
    pub page: i32,
}

impl ReadingProgressUpdate {
    pub fn into_progress(self) -> ReadingProgress {
        ReadingProgress {
            manga_id: self.manga_id,
            chapter_id: self.chapter_id.filter(|c| !c.is_empty()),
            page: self.page,
            timestamp: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_progress_serializes_null_chapter() {
        let json = serde_json::to_value(ReadingProgress::unread("m1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"manga_id": "m1", "chapter_id": null, "page": 0})
        );
    }

    #[test]
    fn negative_page_is_invalid() {
        let update = ReadingProgressUpdate {
            manga_id: "m1".to_string(),
            chapter_id: Some("c1".to_string()),
            page: -1,
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn into_progress_stamps_time_and_drops_empty_chapter() {
        let progress = ReadingProgressUpdate {
            manga_id: "m1".to_string(),
            chapter_id: Some(String::new()),
            page: 4,
        }
        .into_progress();
        assert!(progress.timestamp.is_some());
        assert_eq!(progress.chapter_id, None);
        assert_eq!(progress.page, 4);
    }
}
