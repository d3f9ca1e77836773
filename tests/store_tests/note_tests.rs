//! Note Model Tests
//!
//! Tests verify:
//! - NoteId parsing and display
//! - NotePatch presence semantics
//! - Note JSON shape

use notestore::store::{NewNote, NoteId, NotePatch, NoteStore};

// =============================================================================
// NoteId Tests
// =============================================================================

#[test]
fn test_note_id_parse() {
    assert_eq!("1".parse::<NoteId>().unwrap(), NoteId::new(1));
    assert_eq!("-7".parse::<NoteId>().unwrap(), NoteId::new(-7));
    assert_eq!("9223372036854775807".parse::<NoteId>().unwrap(), NoteId::new(i64::MAX));
}

#[test]
fn test_note_id_parse_rejects_garbage() {
    for raw in ["", "abc", "1.5", "12abc", " 1", "9223372036854775808"] {
        assert!(raw.parse::<NoteId>().is_err(), "{:?} should not parse", raw);
    }
}

#[test]
fn test_note_id_display() {
    assert_eq!(NoteId::new(42).to_string(), "42");
    assert_eq!(NoteId::from(3).get(), 3);
}

// =============================================================================
// NotePatch Tests
// =============================================================================

#[test]
fn test_empty_patch() {
    let patch = NotePatch::new();

    assert!(patch.is_empty());
    assert_eq!(patch, NotePatch::default());
}

#[test]
fn test_patch_with_empty_content_is_not_empty() {
    let patch = NotePatch::new().content("");

    assert!(!patch.is_empty());
    assert_eq!(patch.content.as_deref(), Some(""));
    assert_eq!(patch.title, None);
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_note_json_shape() {
    let store = NoteStore::new();
    let id = store.create(NewNote::new("A", "x")).unwrap();
    let note = store.get_by_id(id).unwrap();

    let value = serde_json::to_value(&note).unwrap();

    assert_eq!(value["id"], 1);
    assert_eq!(value["title"], "A");
    assert_eq!(value["content"], "x");
    assert!(value["created_at"].is_string());
    assert!(value["updated_at"].is_string());
}

#[test]
fn test_note_json_decodes_back() {
    let store = NoteStore::new();
    let id = store.create(NewNote::new("A", "x")).unwrap();
    let note = store.get_by_id(id).unwrap();

    let json = serde_json::to_string(&note).unwrap();
    let decoded: notestore::Note = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, note);
}
