use async_trait::async_trait;
use slayer_core::{
    models::{Chapter, DownloadStatus},
    AppError,
};
use sqlx::{PgPool, Postgres};

const CHAPTER_COLUMNS: &str =
    "id, manga_id, chapter_number, title, title_ar, pages, size, download_status, download_path";

#[async_trait]
pub trait ChapterRepository: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<Chapter>, AppError>;

    /// Chapters of a manga in ascending chapter order
    async fn list_for_manga(&self, manga_id: &str) -> Result<Vec<Chapter>, AppError>;

    /// Flag a chapter as downloading into `download_path`.
    async fn mark_downloading(&self, id: &str, download_path: &str) -> Result<bool, AppError>;

    async fn set_title_ar(&self, id: &str, title_ar: &str) -> Result<bool, AppError>;

    async fn count_by_status(&self, status: DownloadStatus) -> Result<i64, AppError>;

    async fn upsert(&self, chapter: &Chapter) -> Result<(), AppError>;
}

/// Repository for the `chapters` table
#[derive(Clone)]
pub struct PostgresChapterRepository {
    pool: PgPool,
}

impl PostgresChapterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChapterRepository for PostgresChapterRepository {
    #[tracing::instrument(skip(self), fields(db.table = "chapters", db.operation = "select", db.record_id = %id))]
    async fn get(&self, id: &str) -> Result<Option<Chapter>, AppError> {
        let chapter = sqlx::query_as::<Postgres, Chapter>(&format!(
            "SELECT {} FROM chapters WHERE id = $1",
            CHAPTER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(chapter)
    }

    #[tracing::instrument(skip(self), fields(db.table = "chapters", db.operation = "select"))]
    async fn list_for_manga(&self, manga_id: &str) -> Result<Vec<Chapter>, AppError> {
        let chapters = sqlx::query_as::<Postgres, Chapter>(&format!(
            "SELECT {} FROM chapters WHERE manga_id = $1 ORDER BY chapter_number ASC, id ASC",
            CHAPTER_COLUMNS
        ))
        .bind(manga_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(chapters)
    }

    #[tracing::instrument(skip(self), fields(db.table = "chapters", db.operation = "update", db.record_id = %id))]
    async fn mark_downloading(&self, id: &str, download_path: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE chapters SET download_status = $2, download_path = $3 WHERE id = $1",
        )
        .bind(id)
        .bind(DownloadStatus::Downloading)
        .bind(download_path)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self), fields(db.table = "chapters", db.operation = "update", db.record_id = %id))]
    async fn set_title_ar(&self, id: &str, title_ar: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE chapters SET title_ar = $2 WHERE id = $1")
            .bind(id)
            .bind(title_ar)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self), fields(db.table = "chapters", db.operation = "count"))]
    async fn count_by_status(&self, status: DownloadStatus) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<Postgres, i64>(
            "SELECT COUNT(*) FROM chapters WHERE download_status = $1",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    #[tracing::instrument(skip(self, chapter), fields(db.table = "chapters", db.operation = "upsert", db.record_id = %chapter.id))]
    async fn upsert(&self, chapter: &Chapter) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO chapters (id, manga_id, chapter_number, title, title_ar, pages, size, download_status, download_path)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                manga_id = EXCLUDED.manga_id,
                chapter_number = EXCLUDED.chapter_number,
                title = EXCLUDED.title,
                title_ar = EXCLUDED.title_ar,
                pages = EXCLUDED.pages,
                size = EXCLUDED.size,
                download_status = EXCLUDED.download_status,
                download_path = EXCLUDED.download_path
            "#,
        )
        .bind(&chapter.id)
        .bind(&chapter.manga_id)
        .bind(chapter.chapter_number)
        .bind(&chapter.title)
        .bind(&chapter.title_ar)
        .bind(&chapter.pages)
        .bind(chapter.size)
        .bind(chapter.download_status)
        .bind(&chapter.download_path)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
