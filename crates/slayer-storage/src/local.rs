use crate::traits::{DownloadStorage, StorageError, StorageResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use sysinfo::Disks;
use tokio::fs;

/// Downloads kept on the local filesystem
#[derive(Clone, Debug)]
pub struct LocalDownloadStorage {
    base_path: PathBuf,
}

impl LocalDownloadStorage {
    /// Create the storage, making sure the root directory exists.
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create downloads directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalDownloadStorage { base_path })
    }

    /// Validate a single path component taken from an id.
    fn check_component(component: &str) -> StorageResult<&str> {
        if component.is_empty()
            || component == "."
            || component.contains("..")
            || component.contains('/')
            || component.contains('\\')
            || component.contains('\0')
        {
            return Err(StorageError::InvalidKey(format!(
                "'{}' cannot be used as a directory name",
                component
            )));
        }
        Ok(component)
    }

    fn chapter_path(&self, manga_id: &str, chapter_dir: &str) -> StorageResult<PathBuf> {
        Ok(self
            .base_path
            .join(Self::check_component(manga_id)?)
            .join(Self::check_component(chapter_dir)?))
    }
}

/// Sum file sizes below `path`. Unreadable entries are skipped.
fn directory_size(path: &Path) -> u64 {
    let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(_) => return 0,
    };

    entries
        .filter_map(Result::ok)
        .map(|entry| match entry.file_type() {
            Ok(ft) if ft.is_dir() => directory_size(&entry.path()),
            Ok(ft) if ft.is_file() => entry.metadata().map(|m| m.len()).unwrap_or(0),
            _ => 0,
        })
        .sum()
}

/// Free space on the disk whose mount point is the longest prefix of `path`.
fn disk_available_space(path: &Path) -> StorageResult<Option<u64>> {
    let canonical = path.canonicalize()?;
    let disks = Disks::new_with_refreshed_list();

    Ok(disks
        .iter()
        .filter(|disk| canonical.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len())
        .map(|disk| disk.available_space()))
}

#[async_trait]
impl DownloadStorage for LocalDownloadStorage {
    fn root(&self) -> &Path {
        &self.base_path
    }

    async fn ensure_chapter_dir(
        &self,
        manga_id: &str,
        chapter_dir: &str,
    ) -> StorageResult<PathBuf> {
        let path = self.chapter_path(manga_id, chapter_dir)?;
        fs::create_dir_all(&path).await?;

        tracing::debug!(path = %path.display(), "Chapter directory ready");
        Ok(path)
    }

    async fn total_size(&self) -> StorageResult<u64> {
        let root = self.base_path.clone();
        tokio::task::spawn_blocking(move || directory_size(&root))
            .await
            .map_err(|e| StorageError::BackendError(format!("size walk failed: {}", e)))
    }

    async fn available_space(&self) -> StorageResult<u64> {
        let root = self.base_path.clone();
        let space = tokio::task::spawn_blocking(move || disk_available_space(&root))
            .await
            .map_err(|e| StorageError::BackendError(format!("disk query failed: {}", e)))??;

        match space {
            Some(bytes) => Ok(bytes),
            None => {
                tracing::warn!(
                    path = %self.base_path.display(),
                    "Could not determine the disk of the downloads directory"
                );
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_storage() -> (LocalDownloadStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalDownloadStorage::new(temp_dir.path().join("downloads"))
            .await
            .unwrap();
        (storage, temp_dir)
    }

    #[tokio::test]
    async fn test_ensure_chapter_dir_creates_nested_dirs() {
        let (storage, _temp) = create_test_storage().await;

        let path = storage
            .ensure_chapter_dir("manga_1", "chapter_1.0")
            .await
            .unwrap();
        assert!(path.is_dir());
        assert!(path.ends_with("manga_1/chapter_1.0"));

        // Idempotent
        let again = storage
            .ensure_chapter_dir("manga_1", "chapter_1.0")
            .await
            .unwrap();
        assert_eq!(path, again);
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let (storage, _temp) = create_test_storage().await;

        for bad in ["..", "../etc", "a/b", "a\\b", ""] {
            let result = storage.ensure_chapter_dir(bad, "chapter_1.0").await;
            assert!(
                matches!(result, Err(StorageError::InvalidKey(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_total_size_is_recursive() {
        let (storage, _temp) = create_test_storage().await;
        assert_eq!(storage.total_size().await.unwrap(), 0);

        let dir = storage
            .ensure_chapter_dir("manga_1", "chapter_2.5")
            .await
            .unwrap();
        std::fs::write(dir.join("001.jpg"), vec![0u8; 1000]).unwrap();
        std::fs::write(dir.join("002.jpg"), vec![0u8; 24]).unwrap();
        std::fs::write(storage.root().join("index.json"), b"{}").unwrap();

        assert_eq!(storage.total_size().await.unwrap(), 1026);
    }

    #[tokio::test]
    async fn test_available_space_does_not_fail() {
        let (storage, _temp) = create_test_storage().await;
        assert!(storage.available_space().await.is_ok());
    }

    #[test]
    fn test_invalid_key_maps_to_bad_request() {
        use slayer_core::ErrorMetadata;
        let err: slayer_core::AppError = StorageError::InvalidKey("..".to_string()).into();
        assert_eq!(err.http_status_code(), 400);
    }
}
