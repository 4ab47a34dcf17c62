//! Mock repository implementations for testing
//!
//! These mocks allow testing handlers without database dependencies.

use async_trait::async_trait;
use slayer_core::models::{
    sort_chapters, Chapter, DownloadStatus, Manga, MangaSource, ReadingProgress, SourceType,
    UserPreferences,
};
use slayer_core::AppError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::db::{
    ChapterRepository, MangaRepository, PreferencesRepository, ReadingProgressRepository,
    SourceRepository,
};

/// Mock source repository keeping insertion order
#[derive(Clone, Default)]
pub struct MockSourceRepository {
    sources: Arc<Mutex<Vec<MangaSource>>>,
}

impl MockSourceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source(&self, source: MangaSource) {
        self.sources.lock().unwrap().push(source);
    }

    pub fn len(&self) -> usize {
        self.sources.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SourceRepository for MockSourceRepository {
    async fn list_custom(&self) -> Result<Vec<MangaSource>, AppError> {
        let mut sources: Vec<MangaSource> = self
            .sources
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.source_type == SourceType::Custom)
            .cloned()
            .collect();
        sources.sort_by_key(|s| s.added_date);
        Ok(sources)
    }

    async fn get(&self, id: &str) -> Result<Option<MangaSource>, AppError> {
        Ok(self
            .sources
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn insert(&self, source: &MangaSource) -> Result<(), AppError> {
        self.add_source(source.clone());
        Ok(())
    }

    async fn delete_custom(&self, id: &str) -> Result<bool, AppError> {
        let mut sources = self.sources.lock().unwrap();
        let before = sources.len();
        sources.retain(|s| !(s.id == id && s.source_type == SourceType::Custom));
        Ok(sources.len() < before)
    }
}

/// Mock manga repository for testing without database
#[derive(Clone, Default)]
pub struct MockMangaRepository {
    manga: Arc<Mutex<HashMap<String, Manga>>>,
}

impl MockMangaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_manga(&self, manga: Manga) {
        self.manga.lock().unwrap().insert(manga.id.clone(), manga);
    }

    pub fn status_of(&self, id: &str) -> Option<DownloadStatus> {
        self.manga
            .lock()
            .unwrap()
            .get(id)
            .map(|m| m.download_status)
    }
}

#[async_trait]
impl MangaRepository for MockMangaRepository {
    async fn get(&self, id: &str) -> Result<Option<Manga>, AppError> {
        Ok(self.manga.lock().unwrap().get(id).cloned())
    }

    async fn set_download_status(
        &self,
        id: &str,
        status: DownloadStatus,
    ) -> Result<bool, AppError> {
        match self.manga.lock().unwrap().get_mut(id) {
            Some(manga) => {
                manga.download_status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_tracked(&self) -> Result<Vec<Manga>, AppError> {
        let mut manga: Vec<Manga> = self
            .manga
            .lock()
            .unwrap()
            .values()
            .filter(|m| m.download_status.is_tracked())
            .cloned()
            .collect();
        manga.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        Ok(manga)
    }

    async fn count_by_status(&self, status: DownloadStatus) -> Result<i64, AppError> {
        Ok(self
            .manga
            .lock()
            .unwrap()
            .values()
            .filter(|m| m.download_status == status)
            .count() as i64)
    }

    async fn upsert(&self, manga: &Manga) -> Result<(), AppError> {
        self.add_manga(manga.clone());
        Ok(())
    }
}

/// Mock chapter repository for testing without database
#[derive(Clone, Default)]
pub struct MockChapterRepository {
    chapters: Arc<Mutex<HashMap<String, Chapter>>>,
}

impl MockChapterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_chapter(&self, chapter: Chapter) {
        self.chapters
            .lock()
            .unwrap()
            .insert(chapter.id.clone(), chapter);
    }

    pub fn chapter(&self, id: &str) -> Option<Chapter> {
        self.chapters.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl ChapterRepository for MockChapterRepository {
    async fn get(&self, id: &str) -> Result<Option<Chapter>, AppError> {
        Ok(self.chapter(id))
    }

    async fn list_for_manga(&self, manga_id: &str) -> Result<Vec<Chapter>, AppError> {
        let mut chapters: Vec<Chapter> = self
            .chapters
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.manga_id == manga_id)
            .cloned()
            .collect();
        sort_chapters(&mut chapters);
        Ok(chapters)
    }

    async fn mark_downloading(&self, id: &str, download_path: &str) -> Result<bool, AppError> {
        match self.chapters.lock().unwrap().get_mut(id) {
            Some(chapter) => {
                chapter.download_status = DownloadStatus::Downloading;
                chapter.download_path = download_path.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_title_ar(&self, id: &str, title_ar: &str) -> Result<bool, AppError> {
        match self.chapters.lock().unwrap().get_mut(id) {
            Some(chapter) => {
                chapter.title_ar = title_ar.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_by_status(&self, status: DownloadStatus) -> Result<i64, AppError> {
        Ok(self
            .chapters
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.download_status == status)
            .count() as i64)
    }

    async fn upsert(&self, chapter: &Chapter) -> Result<(), AppError> {
        self.add_chapter(chapter.clone());
        Ok(())
    }
}

/// Mock preferences repository. `set_failing(true)` makes every call fail
/// like an unreachable database.
#[derive(Clone, Default)]
pub struct MockPreferencesRepository {
    preferences: Arc<Mutex<HashMap<String, UserPreferences>>>,
    failing: Arc<AtomicBool>,
}

impl MockPreferencesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn stored(&self, user: &str) -> Option<UserPreferences> {
        self.preferences.lock().unwrap().get(user).cloned()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl PreferencesRepository for MockPreferencesRepository {
    async fn get(&self, user: &str) -> Result<Option<UserPreferences>, AppError> {
        self.check()?;
        Ok(self.stored(user))
    }

    async fn upsert(&self, user: &str, preferences: &UserPreferences) -> Result<(), AppError> {
        self.check()?;
        self.preferences
            .lock()
            .unwrap()
            .insert(user.to_string(), preferences.clone());
        Ok(())
    }
}

/// Mock reading progress repository for testing without database
#[derive(Clone, Default)]
pub struct MockReadingProgressRepository {
    progress: Arc<Mutex<HashMap<String, ReadingProgress>>>,
}

impl MockReadingProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.progress.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReadingProgressRepository for MockReadingProgressRepository {
    async fn get(&self, manga_id: &str) -> Result<Option<ReadingProgress>, AppError> {
        Ok(self.progress.lock().unwrap().get(manga_id).cloned())
    }

    async fn upsert(&self, progress: &ReadingProgress) -> Result<(), AppError> {
        self.progress
            .lock()
            .unwrap()
            .insert(progress.manga_id.clone(), progress.clone());
        Ok(())
    }
}
