use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Where a source definition comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "source_type"))]
pub enum SourceType {
    /// Compiled into the server, never stored
    #[serde(rename = "built-in")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "built-in"))]
    BuiltIn,
    /// Added by the user through the API
    #[default]
    #[serde(rename = "custom")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "custom"))]
    Custom,
}

/// A site manga can be searched on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MangaSource {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type", default)]
    pub source_type: SourceType,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_date: Option<DateTime<Utc>>,
}

fn default_enabled() -> bool {
    true
}

impl MangaSource {
    /// Build a new custom source with a fresh id from a create request.
    pub fn new_custom(request: CreateSourceRequest) -> Self {
        MangaSource {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            url: request.url,
            source_type: SourceType::Custom,
            enabled: request.enabled.unwrap_or(true),
            added_date: Some(Utc::now()),
        }
    }

    pub fn is_built_in(&self) -> bool {
        self.source_type == SourceType::BuiltIn
    }
}

/// Request DTO for adding a custom source
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateSourceRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Source name must be between 1 and 255 characters"
    ))]
    pub name: String,
    #[validate(length(min = 1, max = 2048, message = "Source URL must not be empty"))]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SourcesResponse {
    pub sources: Vec<MangaSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SourceCreatedResponse {
    pub message: String,
    pub source: MangaSource,
}
