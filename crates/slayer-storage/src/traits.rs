//! Download storage abstraction

use async_trait::async_trait;
use slayer_core::AppError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Download storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid path component: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            other => AppError::Storage(other.to_string()),
        }
    }
}

/// Where downloaded chapters live
#[async_trait]
pub trait DownloadStorage: Send + Sync {
    /// Root of the downloads tree
    fn root(&self) -> &Path;

    /// Create (if missing) the directory of one chapter and return its path.
    async fn ensure_chapter_dir(&self, manga_id: &str, chapter_dir: &str)
        -> StorageResult<PathBuf>;

    /// Total size in bytes of every file under the root
    async fn total_size(&self) -> StorageResult<u64>;

    /// Free bytes on the disk holding the root
    async fn available_space(&self) -> StorageResult<u64>;
}
