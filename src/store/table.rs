//! NoteStore implementation
//!
//! BTreeMap-based note table with a single Mutex for concurrency.

use std::collections::BTreeMap;

use chrono::Utc;
use parking_lot::Mutex;

use crate::error::{NoteError, Result};

use super::{NewNote, Note, NoteId, NotePatch};

/// In-memory, thread-safe collection of notes
///
/// ## Concurrency Model: single exclusive lock
///
/// The map and the id counter live behind one `Mutex`, held for the whole
/// body of every operation, reads included. A `create` that returns id `k`
/// therefore happens-before any later `get_by_id(k)` from any thread.
///
/// Share it between request handlers with `Arc<NoteStore>`.
pub struct NoteStore {
    inner: Mutex<Inner>,
}

struct Inner {
    /// Notes keyed by id; ascending id order is insertion order
    notes: BTreeMap<NoteId, Note>,

    /// Id handed to the next `create`; `None` once the id space is used up
    next_id: Option<i64>,
}

impl NoteStore {
    /// Create an empty store whose first note gets id 1
    pub fn new() -> Self {
        Self::with_first_id(1)
    }

    /// Create an empty store whose first note gets `first_id`
    pub fn with_first_id(first_id: i64) -> Self {
        Self {
            inner: Mutex::new(Inner {
                notes: BTreeMap::new(),
                next_id: Some(first_id),
            }),
        }
    }

    /// Insert a new note and return its id
    ///
    /// Fails only with `IdSpaceExhausted`, in which case nothing is inserted.
    pub fn create(&self, note: NewNote) -> Result<NoteId> {
        let mut inner = self.inner.lock();

        let raw = inner.next_id.ok_or(NoteError::IdSpaceExhausted)?;
        let id = NoteId::new(raw);
        inner.next_id = raw.checked_add(1);

        let now = Utc::now();
        inner.notes.insert(
            id,
            Note {
                id,
                title: note.title,
                content: note.content,
                created_at: now,
                updated_at: now,
            },
        );

        Ok(id)
    }

    /// Get a copy of the note with the given id
    pub fn get_by_id(&self, id: NoteId) -> Result<Note> {
        self.inner
            .lock()
            .notes
            .get(&id)
            .cloned()
            .ok_or(NoteError::NotFound(id))
    }

    /// Get copies of all notes in insertion order
    pub fn get_all(&self) -> Vec<Note> {
        self.inner.lock().notes.values().cloned().collect()
    }

    /// Apply the fields present in `patch` to the note with the given id
    ///
    /// Either every supplied field is applied or, if the id is absent,
    /// nothing changes. Re-read with `get_by_id` to observe the result.
    pub fn update_partial(&self, id: NoteId, patch: NotePatch) -> Result<()> {
        let mut inner = self.inner.lock();

        let note = inner.notes.get_mut(&id).ok_or(NoteError::NotFound(id))?;
        if patch.apply_to(note) {
            note.updated_at = Utc::now();
        }

        Ok(())
    }

    /// Remove the note with the given id. Its id is never handed out again.
    pub fn delete(&self, id: NoteId) -> Result<()> {
        self.inner
            .lock()
            .notes
            .remove(&id)
            .map(|_| ())
            .ok_or(NoteError::NotFound(id))
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of notes currently stored
    pub fn len(&self) -> usize {
        self.inner.lock().notes.len()
    }

    /// Check if the store holds no notes
    pub fn is_empty(&self) -> bool {
        self.inner.lock().notes.is_empty()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
