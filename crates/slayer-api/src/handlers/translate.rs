//! Chapter translation

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use validator::Validate;

use crate::error::{HttpAppError, ValidatedQuery};
use crate::state::AppState;
use slayer_core::models::{ChapterMessageResponse, TranslateQuery};
use slayer_core::AppError;
use slayer_services::translate_or_original;

/// Translate a chapter title unless it already has one
#[utoipa::path(
    post,
    path = "/api/translate",
    params(TranslateQuery),
    responses(
        (status = 200, description = "Translation completed", body = ChapterMessageResponse),
        (status = 404, description = "Chapter not found", body = crate::error::ErrorResponse)
    ),
    tag = "translation"
)]
#[tracing::instrument(skip(state))]
pub async fn translate_chapter(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(params): ValidatedQuery<TranslateQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    params.validate()?;

    let chapter = state
        .db
        .chapters
        .get(&params.chapter_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Chapter not found".to_string()))?;

    if chapter.title_ar.is_empty() {
        let translated = translate_or_original(
            state.services.translator.as_ref(),
            &chapter.title,
            &params.target_lang,
        )
        .await;
        state
            .db
            .chapters
            .set_title_ar(&chapter.id, &translated)
            .await?;
    }

    Ok(Json(ChapterMessageResponse {
        message: "Translation completed".to_string(),
        chapter_id: params.chapter_id,
    }))
}
