//! HTTP Module
//!
//! JSON-over-HTTP front end for the note store.
//!
//! ## Routes
//! ```text
//! GET     /health        liveness + version
//! POST    /notes         create, 201 + note
//! GET     /notes         list, 200 + [note]
//! GET     /notes/{id}    fetch, 200 + note
//! PATCH   /notes/{id}    partial update, 200 + note
//! DELETE  /notes/{id}    delete, 200 + message
//! ```
//!
//! ## Error Body
//! ```text
//! { "error": "<message>" }
//! ```
//! - 400: invalid JSON, invalid id, blank title, empty patch
//! - 404: unknown note id
//! - 500: any other store failure

mod handlers;
mod request;
mod response;
mod server;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::store::NoteStore;

pub use request::{parse_note_id, CreateNoteRequest, UpdateNoteRequest};
pub use response::{respond_with_json, ApiError, ErrorResponse, SuccessResponse};
pub use server::Server;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NoteStore>,
}

/// Build the application router over `store`
pub fn router(store: Arc<NoteStore>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/notes",
            get(handlers::get_all_notes).post(handlers::create_note),
        )
        .route(
            "/notes/{id}",
            get(handlers::get_note)
                .patch(handlers::patch_note)
                .delete(handlers::delete_note),
        )
        .with_state(AppState { store })
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
