//! Paste endpoints.
//!
//! GET /      — Redirect to a freshly generated identifier
//! GET /{id}  — Render the paste page (creates an empty paste on first access)
//! POST /{id} — Replace the paste with the raw request body

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;

use crate::error::{ApiError, StoreError};
use crate::paste::page;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WriteResponse {
    pub status: &'static str,
}

/// GET /
///
/// Always 302, not axum's 303 `Redirect::to`.
pub async fn new_paste(State(state): State<AppState>) -> impl IntoResponse {
    let id = state.ids.next();
    tracing::debug!("Redirecting to new paste {}", id);
    (StatusCode::FOUND, [(header::LOCATION, format!("/{}", id))])
}

/// Identifiers that fail to decode (e.g. `%FF`, not UTF-8) are rejected as
/// invalid paths.
fn paste_id(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| StoreError::InvalidPath(rejection.body_text()).into())
}

/// GET /{id}
pub async fn get_paste(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Html<String>, ApiError> {
    let id = paste_id(path)?;
    let store = state.store.clone();
    let lookup = id.clone();

    let content = tokio::task::spawn_blocking(move || store.read_paste(&lookup)).await??;

    Ok(Html(page::render(&id, &content)))
}

/// POST /{id}
///
/// The body is stored byte-for-byte; no content type is required.
pub async fn post_paste(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<WriteResponse>, ApiError> {
    let id = paste_id(path)?;
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::Body(rejection.body_text())
        }
    })?;

    let store = state.store.clone();
    let target = id.clone();
    let size = body.len();

    tokio::task::spawn_blocking(move || store.write_paste(&target, &body)).await??;

    tracing::info!("Stored paste {} ({} bytes)", id, size);

    Ok(Json(WriteResponse { status: "Success" }))
}
