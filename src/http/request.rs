//! Request definitions
//!
//! Wire shapes accepted from clients and their validation.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::store::{NewNote, NoteId, NotePatch};

use super::ApiError;

/// Body of `POST /notes`
///
/// A field that is missing or `null` decodes as empty, so a missing title
/// is reported as a validation failure rather than malformed JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

impl CreateNoteRequest {
    /// Validate and convert into the store's create payload
    pub fn into_new_note(self) -> Result<NewNote, ApiError> {
        let title = self.title.unwrap_or_default();
        if title.trim().is_empty() {
            return Err(ApiError::bad_request("Title is required"));
        }

        Ok(NewNote::new(title, self.content.unwrap_or_default()))
    }
}

/// Body of `PATCH /notes/{id}`
///
/// A key that is omitted or set to `null` is absent; `""` is a present,
/// empty value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

impl UpdateNoteRequest {
    /// Validate and convert into the store's patch
    pub fn into_patch(self) -> Result<NotePatch, ApiError> {
        if self.title.is_none() && self.content.is_none() {
            return Err(ApiError::bad_request("No fields to update"));
        }

        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(ApiError::bad_request("Title cannot be empty"));
            }
        }

        Ok(NotePatch {
            title: self.title,
            content: self.content,
        })
    }
}

/// Parse a path segment into a note id
pub fn parse_note_id(raw: &str) -> Result<NoteId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid note ID"))
}

/// Decode the first JSON value of a request body
///
/// The declared content type and anything after the first value are
/// ignored. An empty body is rejected.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    match serde_json::Deserializer::from_slice(body).into_iter::<T>().next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => {
            tracing::debug!("Rejected request body: {}", e);
            Err(ApiError::bad_request("Invalid JSON"))
        }
        None => {
            tracing::debug!("Rejected empty request body");
            Err(ApiError::bad_request("Invalid JSON"))
        }
    }
}
