//! Reader preferences of the single implicit user

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use validator::Validate;

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;
use slayer_core::models::{MessageResponse, UserPreferences};
use slayer_core::DEFAULT_USER;

/// Get preferences, storing the defaults on first read
///
/// A database failure is logged and answered with the defaults.
#[utoipa::path(
    get,
    path = "/api/preferences",
    responses(
        (status = 200, description = "Current preferences", body = UserPreferences)
    ),
    tag = "preferences"
)]
#[tracing::instrument(skip(state))]
pub async fn get_preferences(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let repo = &state.db.preferences;

    let preferences = match repo.get(DEFAULT_USER).await {
        Ok(Some(preferences)) => preferences,
        Ok(None) => {
            let defaults = UserPreferences::default();
            if let Err(e) = repo.upsert(DEFAULT_USER, &defaults).await {
                tracing::warn!(error = %e, "Failed to store default preferences");
            }
            defaults
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load preferences, answering defaults");
            UserPreferences::default()
        }
    };

    Json(preferences)
}

/// Replace the preferences
#[utoipa::path(
    post,
    path = "/api/preferences",
    request_body = UserPreferences,
    responses(
        (status = 200, description = "Preferences stored", body = MessageResponse),
        (status = 400, description = "Invalid preferences", body = crate::error::ErrorResponse)
    ),
    tag = "preferences"
)]
#[tracing::instrument(skip(state, preferences))]
pub async fn update_preferences(
    State(state): State<Arc<AppState>>,
    ValidatedJson(preferences): ValidatedJson<UserPreferences>,
) -> Result<impl IntoResponse, HttpAppError> {
    preferences.validate()?;
    state
        .db
        .preferences
        .upsert(DEFAULT_USER, &preferences)
        .await?;

    Ok(Json(MessageResponse::new("Preferences updated successfully")))
}
