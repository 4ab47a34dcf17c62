use async_trait::async_trait;
use slayer_core::{
    models::{MangaSource, SourceType},
    AppError,
};
use sqlx::{PgPool, Postgres};

/// Storage of user-added sources. Built-ins never reach this layer.
#[async_trait]
pub trait SourceRepository: Send + Sync {
    /// Custom sources ordered by the time they were added
    async fn list_custom(&self) -> Result<Vec<MangaSource>, AppError>;

    async fn get(&self, id: &str) -> Result<Option<MangaSource>, AppError>;

    async fn insert(&self, source: &MangaSource) -> Result<(), AppError>;

    /// Delete a custom source. Returns false when nothing matched.
    async fn delete_custom(&self, id: &str) -> Result<bool, AppError>;
}

/// Repository for the `sources` table
#[derive(Clone)]
pub struct PostgresSourceRepository {
    pool: PgPool,
}

impl PostgresSourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SourceRepository for PostgresSourceRepository {
    #[tracing::instrument(skip(self), fields(db.table = "sources", db.operation = "select"))]
    async fn list_custom(&self) -> Result<Vec<MangaSource>, AppError> {
        let sources = sqlx::query_as::<Postgres, MangaSource>(
            r#"
            SELECT id, name, url, source_type, enabled, added_date
            FROM sources
            WHERE source_type = $1
            ORDER BY added_date ASC NULLS LAST, id ASC
            "#,
        )
        .bind(SourceType::Custom)
        .fetch_all(&self.pool)
        .await?;

        Ok(sources)
    }

    #[tracing::instrument(skip(self), fields(db.table = "sources", db.operation = "select", db.record_id = %id))]
    async fn get(&self, id: &str) -> Result<Option<MangaSource>, AppError> {
        let source = sqlx::query_as::<Postgres, MangaSource>(
            "SELECT id, name, url, source_type, enabled, added_date FROM sources WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(source)
    }

    #[tracing::instrument(skip(self, source), fields(db.table = "sources", db.operation = "insert", db.record_id = %source.id))]
    async fn insert(&self, source: &MangaSource) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO sources (id, name, url, source_type, enabled, added_date)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
            "#,
        )
        .bind(&source.id)
        .bind(&source.name)
        .bind(&source.url)
        .bind(source.source_type)
        .bind(source.enabled)
        .bind(source.added_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(db.table = "sources", db.operation = "delete", db.record_id = %id))]
    async fn delete_custom(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM sources WHERE id = $1 AND source_type = $2")
            .bind(id)
            .bind(SourceType::Custom)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
