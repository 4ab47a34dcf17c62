use async_trait::async_trait;
use slayer_core::{
    models::{DownloadStatus, Manga},
    AppError,
};
use sqlx::{PgPool, Postgres};

const MANGA_COLUMNS: &str = "id, title, title_ar, description, description_ar, cover_image, source, total_size, download_status";

#[async_trait]
pub trait MangaRepository: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<Manga>, AppError>;

    /// Update the download status. Returns false when the manga does not exist.
    async fn set_download_status(&self, id: &str, status: DownloadStatus)
        -> Result<bool, AppError>;

    /// Manga that are downloading or completed
    async fn list_tracked(&self) -> Result<Vec<Manga>, AppError>;

    async fn count_by_status(&self, status: DownloadStatus) -> Result<i64, AppError>;

    /// Insert or replace a manga record
    async fn upsert(&self, manga: &Manga) -> Result<(), AppError>;
}

/// Repository for the `manga` table
#[derive(Clone)]
pub struct PostgresMangaRepository {
    pool: PgPool,
}

impl PostgresMangaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MangaRepository for PostgresMangaRepository {
    #[tracing::instrument(skip(self), fields(db.table = "manga", db.operation = "select", db.record_id = %id))]
    async fn get(&self, id: &str) -> Result<Option<Manga>, AppError> {
        let manga = sqlx::query_as::<Postgres, Manga>(&format!(
            "SELECT {} FROM manga WHERE id = $1",
            MANGA_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(manga)
    }

    #[tracing::instrument(skip(self), fields(db.table = "manga", db.operation = "update", db.record_id = %id))]
    async fn set_download_status(
        &self,
        id: &str,
        status: DownloadStatus,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE manga SET download_status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self), fields(db.table = "manga", db.operation = "select"))]
    async fn list_tracked(&self) -> Result<Vec<Manga>, AppError> {
        let manga = sqlx::query_as::<Postgres, Manga>(&format!(
            "SELECT {} FROM manga WHERE download_status IN ($1, $2) ORDER BY title ASC, id ASC",
            MANGA_COLUMNS
        ))
        .bind(DownloadStatus::Downloading)
        .bind(DownloadStatus::Completed)
        .fetch_all(&self.pool)
        .await?;

        Ok(manga)
    }

    #[tracing::instrument(skip(self), fields(db.table = "manga", db.operation = "count"))]
    async fn count_by_status(&self, status: DownloadStatus) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<Postgres, i64>(
            "SELECT COUNT(*) FROM manga WHERE download_status = $1",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    #[tracing::instrument(skip(self, manga), fields(db.table = "manga", db.operation = "upsert", db.record_id = %manga.id))]
    async fn upsert(&self, manga: &Manga) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO manga (id, title, title_ar, description, description_ar, cover_image, source, total_size, download_status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                title_ar = EXCLUDED.title_ar,
                description = EXCLUDED.description,
                description_ar = EXCLUDED.description_ar,
                cover_image = EXCLUDED.cover_image,
                source = EXCLUDED.source,
                total_size = EXCLUDED.total_size,
                download_status = EXCLUDED.download_status
            "#,
        )
        .bind(&manga.id)
        .bind(&manga.title)
        .bind(&manga.title_ar)
        .bind(&manga.description)
        .bind(&manga.description_ar)
        .bind(&manga.cover_image)
        .bind(&manga.source)
        .bind(manga.total_size)
        .bind(manga.download_status)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
