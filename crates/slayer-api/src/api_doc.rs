//! OpenAPI documentation served at `/api/openapi.json`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use slayer_core::models;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Manga Slayer API",
        version = "0.1.0",
        description = "Manga reading and download tracking API. Search sources, browse manga and chapters, track downloads, and keep reader preferences and progress. All endpoints live under /api/."
    ),
    paths(
        // Sources
        handlers::sources::list_sources,
        handlers::sources::create_source,
        handlers::sources::delete_source,
        // Manga
        handlers::search::search_manga,
        handlers::manga::get_manga,
        handlers::manga::get_manga_chapters,
        handlers::manga::get_chapter,
        // Downloads
        handlers::downloads::download_manga,
        handlers::downloads::download_chapter,
        handlers::downloads::download_stats,
        handlers::downloads::list_downloads,
        // Translation
        handlers::translate::translate_chapter,
        // Reader
        handlers::preferences::get_preferences,
        handlers::preferences::update_preferences,
        handlers::reading_progress::update_reading_progress,
        handlers::reading_progress::get_reading_progress,
    ),
    components(
        schemas(
            models::MangaSource,
            models::SourceType,
            models::CreateSourceRequest,
            models::SourcesResponse,
            models::SourceCreatedResponse,
            models::Manga,
            models::MangaDetail,
            models::MangaSummary,
            models::SearchResponse,
            models::Chapter,
            models::ChaptersResponse,
            models::DownloadStatus,
            models::DownloadStats,
            models::DownloadsResponse,
            models::MangaDownloadResponse,
            models::UserPreferences,
            models::AutoScrollSettings,
            models::ReadingDirection,
            models::ReadingProgress,
            models::MessageResponse,
            models::ChapterMessageResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "sources", description = "Built-in and custom manga sources"),
        (name = "manga", description = "Search, manga details and chapters"),
        (name = "downloads", description = "Download tracking and disk usage"),
        (name = "translation", description = "Chapter title translation"),
        (name = "preferences", description = "Reader preferences"),
        (name = "reading-progress", description = "Per-manga reading position"),
    )
)]
pub struct ApiDoc;
