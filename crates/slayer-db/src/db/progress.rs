use async_trait::async_trait;
use slayer_core::{models::ReadingProgress, AppError};
use sqlx::{PgPool, Postgres};

#[async_trait]
pub trait ReadingProgressRepository: Send + Sync {
    async fn get(&self, manga_id: &str) -> Result<Option<ReadingProgress>, AppError>;

    /// Replace the progress of `progress.manga_id`
    async fn upsert(&self, progress: &ReadingProgress) -> Result<(), AppError>;
}

/// Repository for the `reading_progress` table
#[derive(Clone)]
pub struct PostgresReadingProgressRepository {
    pool: PgPool,
}

impl PostgresReadingProgressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadingProgressRepository for PostgresReadingProgressRepository {
    #[tracing::instrument(skip(self), fields(db.table = "reading_progress", db.operation = "select", db.record_id = %manga_id))]
    async fn get(&self, manga_id: &str) -> Result<Option<ReadingProgress>, AppError> {
        let progress = sqlx::query_as::<Postgres, ReadingProgress>(
            "SELECT manga_id, chapter_id, page, timestamp FROM reading_progress WHERE manga_id = $1",
        )
        .bind(manga_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(progress)
    }

    #[tracing::instrument(skip(self, progress), fields(db.table = "reading_progress", db.operation = "upsert", db.record_id = %progress.manga_id))]
    async fn upsert(&self, progress: &ReadingProgress) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO reading_progress (manga_id, chapter_id, page, timestamp)
            VALUES ($1, $2, $3, COALESCE($4, NOW()))
            ON CONFLICT (manga_id) DO UPDATE SET
                chapter_id = EXCLUDED.chapter_id,
                page = EXCLUDED.page,
                timestamp = EXCLUDED.timestamp
            "#,
        )
        .bind(&progress.manga_id)
        .bind(&progress.chapter_id)
        .bind(progress.page)
        .bind(progress.timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
