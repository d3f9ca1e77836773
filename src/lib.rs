//! # NoteStore
//!
//! A minimal note-taking API with:
//! - An in-memory, thread-safe note store (the single source of truth)
//! - Strictly increasing ids that are never reused
//! - Partial updates through an explicit optional-field patch
//! - A JSON-over-HTTP front end
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │                  (Multiple Clients)                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Handlers                                 │
//! │    (decode, validate, map NotFound → 404, other → 500)       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!                ┌─────────────┐
//!                │  NoteStore  │
//!                │   (Mutex)   │
//!                └─────────────┘
//! ```
//!
//! The store is usable on its own:
//!
//! ```
//! use notestore::store::{NewNote, NotePatch, NoteStore};
//!
//! let store = NoteStore::new();
//! let id = store.create(NewNote::new("A", "x")).unwrap();
//! store.update_partial(id, NotePatch::new().content("z")).unwrap();
//!
//! let note = store.get_by_id(id).unwrap();
//! assert_eq!(note.title, "A");
//! assert_eq!(note.content, "z");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod http;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{NoteError, Result};
pub use config::Config;
pub use store::{NewNote, Note, NoteId, NotePatch, NoteStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of NoteStore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
