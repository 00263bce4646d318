//! To-do item model.
//!
//! # Responsibility
//! - Define the persisted record for a single task.
//! - Provide constructors that keep identity and defaults consistent.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `done` starts as `false` for newly created items.
//! - Serialized field names match the persisted JSON schema (`createdAt`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a to-do item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// Generates a fresh collision-resistant item identifier.
///
/// Callers may rely on uniqueness across a list lifetime, not on any
/// ordering between generated values.
pub fn generate_id() -> TodoId {
    Uuid::new_v4()
}

/// A single task record.
///
/// Serializes to the persisted JSON shape:
/// `{"id": "<uuid>", "text": "...", "done": false, "createdAt": <epoch ms>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Stable ID used for toggling, editing and removal.
    pub id: TodoId,
    /// Trimmed, non-empty task text.
    pub text: String,
    /// Completion flag.
    pub done: bool,
    /// Creation time in Unix epoch milliseconds. Persisted for potential
    /// future sorting; never read back today.
    pub created_at: i64,
}

impl TodoItem {
    /// Creates a new item with a generated stable ID and `done = false`.
    pub fn new(text: impl Into<String>, created_at: i64) -> Self {
        Self::with_id(generate_id(), text, created_at)
    }

    /// Creates an item with a caller-provided stable ID.
    ///
    /// Used by test fixtures and any path where identity already exists.
    pub fn with_id(id: TodoId, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_id, TodoItem};

    #[test]
    fn new_items_start_not_done() {
        let item = TodoItem::new("water the plants", 1_700_000_000_000);
        assert!(!item.done);
        assert_eq!(item.text, "water the plants");
        assert_eq!(item.created_at, 1_700_000_000_000);
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let item = TodoItem::new("buy milk", 1_700_000_000_000);
        let json = serde_json::to_string(&item).expect("item should serialize");
        assert!(json.contains("\"createdAt\":1700000000000"));
        assert!(json.contains("\"done\":false"));
        assert!(json.contains("\"text\":\"buy milk\""));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn deserializes_from_wire_shape() {
        let json = r#"{
            "id": "00000000-0000-4000-8000-000000000001",
            "text": "call mom",
            "done": true,
            "createdAt": 1700000000123
        }"#;
        let item: TodoItem = serde_json::from_str(json).expect("wire shape should parse");
        assert_eq!(item.text, "call mom");
        assert!(item.done);
        assert_eq!(item.created_at, 1_700_000_000_123);
    }
}
