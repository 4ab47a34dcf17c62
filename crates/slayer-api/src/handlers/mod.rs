pub mod downloads;
pub mod manga;
pub mod preferences;
pub mod reading_progress;
pub mod search;
pub mod sources;
pub mod translate;
