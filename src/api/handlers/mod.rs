use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use super::AppState;
use crate::models::*;
use crate::settings::CredentialStore;
use crate::vocabulary::{format_with_article, VOCABULARY};

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

fn session_not_found() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, "Session not found".to_string())
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Sessions
// ============================================================

pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionView>) {
    (StatusCode::CREATED, Json(state.sessions.create()))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, (StatusCode, String)> {
    state.sessions.get(id).map(Json).ok_or_else(session_not_found)
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    if state.sessions.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found())
    }
}

/// Apply a click. Reaching the threshold waits for the sentence request to
/// settle, so the response already shows the sentence or the error.
pub async fn click_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, (StatusCode, String)> {
    state
        .sessions
        .click(id)
        .await
        .map_err(internal_error)?
        .map(Json)
        .ok_or_else(session_not_found)
}

// ============================================================
// Settings
// ============================================================

pub async fn get_credential_status(
    State(state): State<AppState>,
) -> Result<Json<CredentialStatus>, (StatusCode, String)> {
    state.settings.status().map(Json).map_err(internal_error)
}

pub async fn set_credential(
    State(state): State<AppState>,
    Json(input): Json<SetCredentialInput>,
) -> Result<StatusCode, (StatusCode, String)> {
    if input.api_key.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "API key must not be empty".to_string()));
    }
    state
        .settings
        .set_credential(&input.api_key)
        .map_err(internal_error)?;
    tracing::info!("Stored a new API key");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn clear_credential(
    State(state): State<AppState>,
) -> Result<StatusCode, (StatusCode, String)> {
    if state.settings.clear_credential().map_err(internal_error)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "No API key stored".to_string()))
    }
}

// ============================================================
// Vocabulary and images
// ============================================================

pub async fn list_vocabulary(State(state): State<AppState>) -> Json<Vec<VocabularyItem>> {
    let items = VOCABULARY
        .iter()
        .map(|entry| VocabularyItem {
            text: entry.text.to_string(),
            display: format_with_article(entry),
            category: entry.category,
            gender: entry.gender,
            illustration_url: entry.illustration.map(|f| state.images.public_url(f)),
        })
        .collect();
    Json(items)
}

#[derive(Debug, Serialize)]
pub struct ImageUrlResponse {
    pub filename: String,
    pub url: String,
}

pub async fn get_image_url(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Json<ImageUrlResponse> {
    let url = state.images.public_url(&filename);
    Json(ImageUrlResponse { filename, url })
}
