use async_trait::async_trait;
use slayer_core::{
    models::{AutoScrollSettings, ReadingDirection, UserPreferences},
    AppError,
};
use sqlx::{FromRow, PgPool, Postgres};

#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    async fn get(&self, user: &str) -> Result<Option<UserPreferences>, AppError>;

    async fn upsert(&self, user: &str, preferences: &UserPreferences) -> Result<(), AppError>;
}

/// Flattened `user_preferences` row
#[derive(Debug, FromRow)]
struct PreferencesRow {
    auto_scroll_speed: i32,
    auto_scroll_enabled: bool,
    auto_scroll_pause_on_tap: bool,
    language: String,
    reading_direction: ReadingDirection,
    auto_translate: bool,
}

impl From<PreferencesRow> for UserPreferences {
    fn from(row: PreferencesRow) -> Self {
        UserPreferences {
            auto_scroll: AutoScrollSettings {
                speed: row.auto_scroll_speed,
                enabled: row.auto_scroll_enabled,
                pause_on_tap: row.auto_scroll_pause_on_tap,
            },
            language: row.language,
            reading_direction: row.reading_direction,
            auto_translate: row.auto_translate,
        }
    }
}

/// Repository for the `user_preferences` table
#[derive(Clone)]
pub struct PostgresPreferencesRepository {
    pool: PgPool,
}

impl PostgresPreferencesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferencesRepository for PostgresPreferencesRepository {
    #[tracing::instrument(skip(self), fields(db.table = "user_preferences", db.operation = "select"))]
    async fn get(&self, user: &str) -> Result<Option<UserPreferences>, AppError> {
        let row = sqlx::query_as::<Postgres, PreferencesRow>(
            r#"
            SELECT auto_scroll_speed, auto_scroll_enabled, auto_scroll_pause_on_tap,
                   language, reading_direction, auto_translate
            FROM user_preferences
            WHERE user_id = $1
            "#,
        )
        .bind(user)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserPreferences::from))
    }

    #[tracing::instrument(skip(self, preferences), fields(db.table = "user_preferences", db.operation = "upsert"))]
    async fn upsert(&self, user: &str, preferences: &UserPreferences) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO user_preferences (
                user_id, auto_scroll_speed, auto_scroll_enabled, auto_scroll_pause_on_tap,
                language, reading_direction, auto_translate, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                auto_scroll_speed = EXCLUDED.auto_scroll_speed,
                auto_scroll_enabled = EXCLUDED.auto_scroll_enabled,
                auto_scroll_pause_on_tap = EXCLUDED.auto_scroll_pause_on_tap,
                language = EXCLUDED.language,
                reading_direction = EXCLUDED.reading_direction,
                auto_translate = EXCLUDED.auto_translate,
                updated_at = NOW()
            "#,
        )
        .bind(user)
        .bind(preferences.auto_scroll.speed)
        .bind(preferences.auto_scroll.enabled)
        .bind(preferences.auto_scroll.pause_on_tap)
        .bind(&preferences.language)
        .bind(preferences.reading_direction)
        .bind(preferences.auto_translate)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
