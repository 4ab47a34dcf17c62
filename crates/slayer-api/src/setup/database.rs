//! Postgres pool and schema migrations for the manga store

use anyhow::{Context, Result};
use slayer_core::Config;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// `migrations/` at the workspace root
fn migrations_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations")
}

/// Connect to Postgres and bring the sources, manga, chapters, preferences and
/// reading progress tables up to date.
pub async fn setup_database(config: &Config) -> Result<PgPool> {
    let pool = connect_pool(config).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

async fn connect_pool(config: &Config) -> Result<PgPool> {
    tracing::info!(
        max_connections = config.db_max_connections(),
        acquire_timeout_secs = config.db_timeout_seconds(),
        "Connecting to manga store"
    );

    PgPoolOptions::new()
        .max_connections(config.db_max_connections())
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds()))
        .connect(config.database_url())
        .await
        .context("Failed to connect to manga store database")
}

async fn load_migrator() -> Result<Migrator> {
    let dir = migrations_dir();
    Migrator::new(dir.clone())
        .await
        .with_context(|| format!("Failed to load migrations from {}", dir.display()))
}

async fn run_migrations(pool: &PgPool) -> Result<()> {
    let migrator = load_migrator().await?;
    let latest = migrator.iter().map(|m| m.version).max();

    migrator
        .run(pool)
        .await
        .context("Failed to run manga store migrations")?;

    tracing::info!(
        migrations = migrator.iter().count(),
        latest_version = ?latest,
        "Manga store schema up to date"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initial_schema_migration_is_found() {
        let migrator = load_migrator().await.unwrap();

        let versions: Vec<i64> = migrator.iter().map(|m| m.version).collect();
        assert!(versions.contains(&20250101000000));
    }

    #[tokio::test]
    async fn test_initial_schema_creates_manga_tables() {
        let sql = tokio::fs::read_to_string(
            migrations_dir().join("20250101000000_initial_schema.sql"),
        )
        .await
        .unwrap();

        for table in ["sources", "manga", "chapters", "user_preferences", "reading_progress"] {
            assert!(sql.contains(table), "missing table {table}");
        }
    }
}
