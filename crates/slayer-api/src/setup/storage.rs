//! Downloads directory setup

use anyhow::{Context, Result};
use slayer_core::Config;
use slayer_storage::{DownloadStorage, LocalDownloadStorage};
use std::sync::Arc;

/// Create the downloads root if needed and wrap it in the storage abstraction.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn DownloadStorage>> {
    tracing::info!(downloads_dir = %config.downloads_dir(), "Initializing downloads storage...");
    let storage = LocalDownloadStorage::new(config.downloads_dir())
        .await
        .with_context(|| format!("Failed to prepare downloads directory {}", config.downloads_dir()))?;
    tracing::info!(root = %storage.root().display(), "Downloads storage initialized successfully");

    Ok(Arc::new(storage))
}
