//! Store Module
//!
//! In-memory note storage, the single source of truth for all notes.
//!
//! ## Responsibilities
//! - Assign strictly increasing ids, never reused after deletion
//! - Point lookup, full listing, partial update and delete
//! - Serialize all access behind one exclusive lock
//! - Hand out copies so callers never observe later mutations
//!
//! ## Data Structure Choice
//! A BTreeMap keyed by id, wrapped together with the id counter in a single
//! Mutex:
//! - Ids are assigned in increasing order, so key order is insertion order
//! - One lock around map + counter makes every operation linearizable
//! - Lock hold time is O(log n) for point operations and O(n) for listing

mod note;
mod table;

pub use note::{NewNote, Note, NoteId, NotePatch};
pub use table::NoteStore;
