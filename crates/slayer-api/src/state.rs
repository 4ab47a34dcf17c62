//! Application state.
//!
//! Repositories, storage and services are held behind trait objects so the
//! integration tests can swap in in-memory implementations.

use slayer_core::Config;
use slayer_db::{
    ChapterRepository, MangaRepository, PreferencesRepository, ReadingProgressRepository,
    SourceRepository,
};
use slayer_services::{MangaCatalog, SourceProbe, Translator};
use slayer_storage::DownloadStorage;
use sqlx::PgPool;
use std::sync::Arc;

/// Database pool and repositories
#[derive(Clone)]
pub struct DbState {
    /// Used directly by the health and readiness probes
    pub pool: PgPool,
    pub sources: Arc<dyn SourceRepository>,
    pub manga: Arc<dyn MangaRepository>,
    pub chapters: Arc<dyn ChapterRepository>,
    pub preferences: Arc<dyn PreferencesRepository>,
    pub progress: Arc<dyn ReadingProgressRepository>,
}

/// Pluggable placeholder services
#[derive(Clone)]
pub struct ServiceState {
    pub catalog: Arc<dyn MangaCatalog>,
    pub probe: Arc<dyn SourceProbe>,
    pub translator: Arc<dyn Translator>,
}

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DbState,
    pub downloads: Arc<dyn DownloadStorage>,
    pub services: ServiceState,
}
