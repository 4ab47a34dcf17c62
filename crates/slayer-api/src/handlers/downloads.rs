//! Download tracking handlers
//!
//! Starting a download only records the intent: the status flips to
//! `downloading` and, for chapters, the target directory is created.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::error::HttpAppError;
use crate::state::AppState;
use slayer_core::models::{
    ChapterMessageResponse, DownloadStats, DownloadStatus, DownloadsResponse,
    MangaDownloadResponse,
};
use slayer_core::AppError;

/// Start downloading a whole manga
#[utoipa::path(
    post,
    path = "/api/download/manga/{manga_id}",
    params(
        ("manga_id" = String, Path, description = "Manga ID")
    ),
    responses(
        (status = 200, description = "Download started", body = MangaDownloadResponse)
    ),
    tag = "downloads"
)]
#[tracing::instrument(skip(state))]
pub async fn download_manga(
    State(state): State<Arc<AppState>>,
    Path(manga_id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let updated = state
        .db
        .manga
        .set_download_status(&manga_id, DownloadStatus::Downloading)
        .await?;
    if !updated {
        tracing::debug!("Download requested for a manga that is not stored");
    }

    Ok(Json(MangaDownloadResponse {
        message: "Download started".to_string(),
        manga_id,
        status: DownloadStatus::Downloading,
    }))
}

/// Start downloading one chapter
#[utoipa::path(
    post,
    path = "/api/download/chapter/{chapter_id}",
    params(
        ("chapter_id" = String, Path, description = "Chapter ID")
    ),
    responses(
        (status = 200, description = "Chapter download started", body = ChapterMessageResponse),
        (status = 400, description = "Manga ID cannot be used as a directory name", body = crate::error::ErrorResponse),
        (status = 404, description = "Chapter not found", body = crate::error::ErrorResponse)
    ),
    tag = "downloads"
)]
#[tracing::instrument(skip(state))]
pub async fn download_chapter(
    State(state): State<Arc<AppState>>,
    Path(chapter_id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let chapter = state
        .db
        .chapters
        .get(&chapter_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Chapter not found".to_string()))?;

    let chapter_dir = state
        .downloads
        .ensure_chapter_dir(&chapter.manga_id, &chapter.dir_name())
        .await?;
    let download_path = chapter_dir.to_string_lossy();

    state
        .db
        .chapters
        .mark_downloading(&chapter_id, &download_path)
        .await?;
    tracing::info!(path = %download_path, "Chapter download started");

    Ok(Json(ChapterMessageResponse {
        message: "Chapter download started".to_string(),
        chapter_id,
    }))
}

/// Download statistics
#[utoipa::path(
    get,
    path = "/api/downloads/stats",
    responses(
        (status = 200, description = "Completed counts and disk usage", body = DownloadStats),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    ),
    tag = "downloads"
)]
#[tracing::instrument(skip(state))]
pub async fn download_stats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let (total_manga, total_chapters) = tokio::try_join!(
        state.db.manga.count_by_status(DownloadStatus::Completed),
        state.db.chapters.count_by_status(DownloadStatus::Completed),
    )?;
    let (total_size, available_space) = tokio::try_join!(
        state.downloads.total_size(),
        state.downloads.available_space(),
    )?;

    Ok(Json(DownloadStats::from_parts(
        total_manga,
        total_chapters,
        total_size,
        available_space,
    )))
}

/// Manga that are downloading or downloaded
#[utoipa::path(
    get,
    path = "/api/downloads",
    responses(
        (status = 200, description = "Tracked manga", body = DownloadsResponse)
    ),
    tag = "downloads"
)]
#[tracing::instrument(skip(state))]
pub async fn list_downloads(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let downloads = state.db.manga.list_tracked().await?;
    Ok(Json(DownloadsResponse { downloads }))
}
