use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Page direction for the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "reading_direction", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum ReadingDirection {
    #[default]
    Rtl,
    Ltr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct AutoScrollSettings {
    /// Scroll speed on a 1..=10 scale
    #[serde(default = "default_speed")]
    #[validate(range(min = 1, max = 10, message = "Auto-scroll speed must be between 1 and 10"))]
    pub speed: i32,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub pause_on_tap: bool,
}

impl Default for AutoScrollSettings {
    fn default() -> Self {
        AutoScrollSettings {
            speed: default_speed(),
            enabled: false,
            pause_on_tap: true,
        }
    }
}

/// Reader preferences of the single implicit user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct UserPreferences {
    #[serde(default)]
    #[validate(nested)]
    pub auto_scroll: AutoScrollSettings,
    #[serde(default = "default_language")]
    #[validate(length(min = 1, max = 16, message = "Language must be between 1 and 16 characters"))]
    pub language: String,
    #[serde(default)]
    pub reading_direction: ReadingDirection,
    #[serde(default = "default_true")]
    pub auto_translate: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        UserPreferences {
            auto_scroll: AutoScrollSettings::default(),
            language: default_language(),
            reading_direction: ReadingDirection::Rtl,
            auto_translate: true,
        }
    }
}

fn default_speed() -> i32 {
    3
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    "ar".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reader_defaults() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.auto_scroll.speed, 3);
        assert!(!prefs.auto_scroll.enabled);
        assert!(prefs.auto_scroll.pause_on_tap);
        assert_eq!(prefs.language, "ar");
        assert_eq!(prefs.reading_direction, ReadingDirection::Rtl);
        assert!(prefs.auto_translate);

        let parsed: UserPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, prefs);
    }

    #[test]
    fn speed_out_of_range_is_invalid() {
        let mut prefs = UserPreferences::default();
        prefs.auto_scroll.speed = 11;
        assert!(prefs.validate().is_err());

        prefs.auto_scroll.speed = 0;
        assert!(prefs.validate().is_err());

        prefs.auto_scroll.speed = 10;
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn unknown_reading_direction_is_rejected() {
        let result: Result<UserPreferences, _> =
            serde_json::from_str(r#"{"reading_direction":"up"}"#);
        assert!(result.is_err());
    }
}
