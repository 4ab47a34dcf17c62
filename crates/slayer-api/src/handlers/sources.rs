//! Manga source management handlers
//!
//! Built-in sources are compiled in; custom sources are probed once when added
//! and stored in the database.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use validator::Validate;

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;
use slayer_core::built_in_sources;
use slayer_core::models::{
    CreateSourceRequest, MangaSource, MessageResponse, SourceCreatedResponse, SourcesResponse,
};
use slayer_core::AppError;
use slayer_services::ProbeOutcome;

/// List built-in sources followed by custom sources
#[utoipa::path(
    get,
    path = "/api/sources",
    responses(
        (status = 200, description = "All sources, built-ins first", body = SourcesResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    ),
    tag = "sources"
)]
#[tracing::instrument(skip(state))]
pub async fn list_sources(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let mut sources = built_in_sources();
    sources.extend(state.db.sources.list_custom().await?);

    Ok(Json(SourcesResponse { sources }))
}

/// Add a custom source after checking that its URL answers
#[utoipa::path(
    post,
    path = "/api/sources",
    request_body = CreateSourceRequest,
    responses(
        (status = 200, description = "Source added", body = SourceCreatedResponse),
        (status = 400, description = "Empty field or URL not accessible", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    ),
    tag = "sources"
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_source(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateSourceRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate()?;
    if request.name.trim().is_empty() || request.url.trim().is_empty() {
        return Err(AppError::InvalidInput("Source name and URL are required".to_string()).into());
    }

    let source = MangaSource::new_custom(request);
    tracing::debug!(source.url = %source.url, "Probing custom source");

    match state.services.probe.probe(&source.url).await {
        ProbeOutcome::Reachable => {}
        ProbeOutcome::Rejected(status) => {
            tracing::info!(status, "Source URL answered with an error status");
            return Err(AppError::BadRequest("URL is not accessible".to_string()).into());
        }
        ProbeOutcome::Unreachable(reason) => {
            tracing::info!(reason = %reason, "Source URL could not be reached");
            return Err(AppError::BadRequest("Invalid or inaccessible URL".to_string()).into());
        }
    }

    state.db.sources.insert(&source).await?;
    tracing::info!(source.id = %source.id, "Custom source added");

    Ok(Json(SourceCreatedResponse {
        message: "Source added successfully".to_string(),
        source,
    }))
}

/// Delete a custom source
#[utoipa::path(
    delete,
    path = "/api/sources/{source_id}",
    params(
        ("source_id" = String, Path, description = "Custom source ID")
    ),
    responses(
        (status = 200, description = "Source deleted", body = MessageResponse),
        (status = 404, description = "Unknown or built-in source", body = crate::error::ErrorResponse)
    ),
    tag = "sources"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_source(
    State(state): State<Arc<AppState>>,
    Path(source_id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    if !state.db.sources.delete_custom(&source_id).await? {
        return Err(AppError::NotFound("Source not found or cannot be deleted".to_string()).into());
    }

    Ok(Json(MessageResponse::new("Source deleted successfully")))
}
