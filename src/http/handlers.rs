//! Request handlers
//!
//! Translate HTTP requests into store calls and store outcomes into
//! responses. Mutating handlers re-read the note after writing so the
//! client receives the stored representation.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::request::{decode_json, parse_note_id, CreateNoteRequest, UpdateNoteRequest};
use super::response::{respond_with_json, ApiError, SuccessResponse};
use super::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Liveness check
pub(super) async fn health() -> Response {
    respond_with_json(
        StatusCode::OK,
        &HealthResponse {
            status: "ok",
            version: crate::VERSION,
        },
    )
}

/// `POST /notes`
#[instrument(skip_all)]
pub(super) async fn create_note(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: CreateNoteRequest = decode_json(&body)?;
    let new_note = request.into_new_note()?;

    let id = state
        .store
        .create(new_note)
        .map_err(|e| ApiError::from_store(e, "Failed to create note"))?;

    // NotFound here means the note vanished between create and re-read,
    // which is a server-side failure, not a 404.
    let created = state.store.get_by_id(id).map_err(|e| {
        warn!("Failed to retrieve created note {}: {}", id, e);
        ApiError::internal("Failed to retrieve created note")
    })?;

    debug!(%id, "Created note");
    Ok(respond_with_json(StatusCode::CREATED, &created))
}

/// `GET /notes/{id}`
#[instrument(skip(state))]
pub(super) async fn get_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_note_id(&raw_id)?;

    let note = state
        .store
        .get_by_id(id)
        .map_err(|e| ApiError::from_store(e, "Failed to get note"))?;

    Ok(respond_with_json(StatusCode::OK, &note))
}

/// `GET /notes`
#[instrument(skip(state))]
pub(super) async fn get_all_notes(State(state): State<AppState>) -> Response {
    let notes = state.store.get_all();
    debug!(count = notes.len(), "Listed notes");
    respond_with_json(StatusCode::OK, &notes)
}

/// `PATCH /notes/{id}`
#[instrument(skip(state, body))]
pub(super) async fn patch_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let id = parse_note_id(&raw_id)?;
    let request: UpdateNoteRequest = decode_json(&body)?;
    let patch = request.into_patch()?;

    state
        .store
        .update_partial(id, patch)
        .map_err(|e| ApiError::from_store(e, "Failed to update note"))?;

    let updated = state.store.get_by_id(id).map_err(|e| {
        warn!("Failed to retrieve updated note {}: {}", id, e);
        ApiError::internal("Failed to retrieve updated note")
    })?;

    debug!(%id, "Updated note");
    Ok(respond_with_json(StatusCode::OK, &updated))
}

/// `DELETE /notes/{id}`
#[instrument(skip(state))]
pub(super) async fn delete_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_note_id(&raw_id)?;

    state
        .store
        .delete(id)
        .map_err(|e| ApiError::from_store(e, "Failed to delete note"))?;

    debug!(%id, "Deleted note");
    Ok(respond_with_json(
        StatusCode::OK,
        &SuccessResponse {
            message: "Note deleted successfully".to_string(),
        },
    ))
}
