//! Reading progress handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use validator::Validate;

use crate::error::{HttpAppError, ValidatedQuery};
use crate::state::AppState;
use slayer_core::models::{MessageResponse, ReadingProgress, ReadingProgressUpdate};

/// Record where the reader is in a manga
#[utoipa::path(
    post,
    path = "/api/reading-progress",
    params(ReadingProgressUpdate),
    responses(
        (status = 200, description = "Progress stored", body = MessageResponse),
        (status = 400, description = "Missing manga or negative page", body = crate::error::ErrorResponse)
    ),
    tag = "reading-progress"
)]
#[tracing::instrument(skip(state))]
pub async fn update_reading_progress(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(update): ValidatedQuery<ReadingProgressUpdate>,
) -> Result<impl IntoResponse, HttpAppError> {
    update.validate()?;
    state.db.progress.upsert(&update.into_progress()).await?;

    Ok(Json(MessageResponse::new("Progress updated")))
}

/// Get the progress of a manga
#[utoipa::path(
    get,
    path = "/api/reading-progress/{manga_id}",
    params(
        ("manga_id" = String, Path, description = "Manga ID")
    ),
    responses(
        (status = 200, description = "Stored progress, or page 0 when the manga was never opened", body = ReadingProgress)
    ),
    tag = "reading-progress"
)]
#[tracing::instrument(skip(state))]
pub async fn get_reading_progress(
    State(state): State<Arc<AppState>>,
    Path(manga_id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let progress = state
        .db
        .progress
        .get(&manga_id)
        .await?
        .unwrap_or_else(|| ReadingProgress::unread(manga_id));

    Ok(Json(progress))
}
