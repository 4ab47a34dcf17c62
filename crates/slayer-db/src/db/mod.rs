//! Database repositories for data access layer
//!
//! Each repository is a trait so the HTTP layer can be exercised without a
//! database. The `Postgres*` types are the production implementations.

mod chapter;
mod manga;
mod preferences;
mod progress;
mod source;

pub use chapter::{ChapterRepository, PostgresChapterRepository};
pub use manga::{MangaRepository, PostgresMangaRepository};
pub use preferences::{PostgresPreferencesRepository, PreferencesRepository};
pub use progress::{PostgresReadingProgressRepository, ReadingProgressRepository};
pub use source::{PostgresSourceRepository, SourceRepository};
