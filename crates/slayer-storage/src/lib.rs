//! Manga Slayer Download Storage
//!
//! This crate owns the downloads directory: chapter folders are created under
//! `<root>/<manga_id>/chapter_<n>`, and the directory's size and the free space
//! of the disk holding it feed the download statistics.
//!
//! Path components coming from ids must not contain `..`, `/`, `\` or NUL and
//! must not be empty.

pub mod local;
pub mod traits;

pub use local::LocalDownloadStorage;
pub use traits::{DownloadStorage, StorageError, StorageResult};
