//! Service initialization and application state setup

use crate::state::{AppState, DbState, ServiceState};
use anyhow::{Context, Result};
use slayer_core::Config;
use slayer_db::{
    PostgresChapterRepository, PostgresMangaRepository, PostgresPreferencesRepository,
    PostgresReadingProgressRepository, PostgresSourceRepository,
};
use slayer_services::{HttpSourceProbe, MarkerTranslator, SampleCatalog};
use slayer_storage::DownloadStorage;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// Initialize all services and repositories, returning the application state
pub fn initialize_services(
    config: &Config,
    pool: PgPool,
    downloads: Arc<dyn DownloadStorage>,
) -> Result<Arc<AppState>> {
    let db = DbState {
        sources: Arc::new(PostgresSourceRepository::new(pool.clone())),
        manga: Arc::new(PostgresMangaRepository::new(pool.clone())),
        chapters: Arc::new(PostgresChapterRepository::new(pool.clone())),
        preferences: Arc::new(PostgresPreferencesRepository::new(pool.clone())),
        progress: Arc::new(PostgresReadingProgressRepository::new(pool.clone())),
        pool,
    };

    let probe_timeout = Duration::from_secs(config.source_probe_timeout_secs());
    let probe = HttpSourceProbe::new(probe_timeout).context("Failed to build source probe")?;
    tracing::info!(
        probe_timeout_secs = config.source_probe_timeout_secs(),
        "Source probe initialized"
    );

    let services = ServiceState {
        catalog: Arc::new(SampleCatalog::new()),
        probe: Arc::new(probe),
        translator: Arc::new(MarkerTranslator::new()),
    };

    Ok(Arc::new(AppState {
        config: config.clone(),
        db,
        downloads,
        services,
    }))
}
