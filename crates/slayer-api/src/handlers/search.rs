//! Manga search across sources

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use futures::future::join_all;
use std::sync::Arc;
use validator::Validate;

use crate::error::{HttpAppError, ValidatedQuery};
use crate::state::AppState;
use slayer_core::models::{MangaSource, MangaSummary, SearchQuery, SearchResponse};
use slayer_core::{built_in_sources, find_built_in, AppError};

/// Sources a search runs against, in listing order.
async fn resolve_sources(
    state: &AppState,
    source_id: &str,
) -> Result<Vec<MangaSource>, AppError> {
    if !source_id.is_empty() {
        if let Some(source) = find_built_in(source_id) {
            return Ok(vec![source]);
        }
        return Ok(state.db.sources.get(source_id).await?.into_iter().collect());
    }

    // Every stored source is searched, enabled or not.
    let mut sources = built_in_sources();
    sources.extend(state.db.sources.list_custom().await?);
    Ok(sources)
}

/// Search manga on one source or on every known source
#[utoipa::path(
    get,
    path = "/api/manga/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 400, description = "Invalid query", body = crate::error::ErrorResponse)
    ),
    tag = "manga"
)]
#[tracing::instrument(skip(state))]
pub async fn search_manga(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(params): ValidatedQuery<SearchQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    params.validate()?;

    let sources = resolve_sources(&state, &params.source_id).await?;
    if sources.is_empty() {
        tracing::debug!(source_id = %params.source_id, "No source matched search");
    }

    let catalog = &state.services.catalog;
    let query = params.query.as_str();
    let searches = sources.iter().map(|source| async move {
        match catalog.search(&source.url, query).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(source.id = %source.id, error = %e, "Source search failed");
                Vec::new()
            }
        }
    });

    let results: Vec<MangaSummary> = join_all(searches).await.into_iter().flatten().collect();

    Ok(Json(SearchResponse::from(results)))
}
