//! Response definitions
//!
//! Bodies sent to clients and the error type handlers return.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::NoteError;

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of an acknowledged operation without a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub message: String,
}

/// An error a handler turns into a JSON response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Create a 400 error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create a 404 error for a missing note
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Note not found")
    }

    /// Create a 500 error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Map a store error: `NotFound` becomes 404, anything else 500 with
    /// `failure` as the message.
    pub fn from_store(err: NoteError, failure: &str) -> Self {
        if err.is_not_found() {
            return Self::not_found();
        }

        tracing::warn!("{}: {}", failure, err);
        Self::internal(failure)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        respond_with_json(
            self.status,
            &ErrorResponse {
                error: self.message,
            },
        )
    }
}

/// Serialize `payload` as indented JSON with the given status
pub fn respond_with_json<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec_pretty(payload) {
        Ok(mut body) => {
            body.push(b'\n');
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to encode response body: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
