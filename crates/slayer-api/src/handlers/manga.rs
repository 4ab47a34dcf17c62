//! Manga and chapter lookup handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::error::HttpAppError;
use crate::state::AppState;
use slayer_core::models::{Chapter, ChaptersResponse, MangaDetail};
use slayer_core::AppError;

/// Get a manga with its chapters
#[utoipa::path(
    get,
    path = "/api/manga/{manga_id}",
    params(
        ("manga_id" = String, Path, description = "Manga ID")
    ),
    responses(
        (status = 200, description = "Manga with chapters sorted by number", body = MangaDetail),
        (status = 404, description = "Manga not found", body = crate::error::ErrorResponse)
    ),
    tag = "manga"
)]
#[tracing::instrument(skip(state))]
pub async fn get_manga(
    State(state): State<Arc<AppState>>,
    Path(manga_id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let manga = state
        .db
        .manga
        .get(&manga_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Manga not found".to_string()))?;

    let chapters = state.db.chapters.list_for_manga(&manga_id).await?;

    Ok(Json(manga.with_chapters(chapters)))
}

/// List the chapters of a manga
#[utoipa::path(
    get,
    path = "/api/manga/{manga_id}/chapters",
    params(
        ("manga_id" = String, Path, description = "Manga ID")
    ),
    responses(
        (status = 200, description = "Chapters sorted by number, empty for an unknown manga", body = ChaptersResponse)
    ),
    tag = "manga"
)]
#[tracing::instrument(skip(state))]
pub async fn get_manga_chapters(
    State(state): State<Arc<AppState>>,
    Path(manga_id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let chapters = state.db.chapters.list_for_manga(&manga_id).await?;
    Ok(Json(ChaptersResponse { chapters }))
}

/// Get a chapter with its pages
#[utoipa::path(
    get,
    path = "/api/chapter/{chapter_id}",
    params(
        ("chapter_id" = String, Path, description = "Chapter ID")
    ),
    responses(
        (status = 200, description = "Chapter", body = Chapter),
        (status = 404, description = "Chapter not found", body = crate::error::ErrorResponse)
    ),
    tag = "manga"
)]
#[tracing::instrument(skip(state))]
pub async fn get_chapter(
    State(state): State<Arc<AppState>>,
    Path(chapter_id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let chapter = state
        .db
        .chapters
        .get(&chapter_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Chapter not found".to_string()))?;

    Ok(Json(chapter))
}
