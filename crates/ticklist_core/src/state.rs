//! UI-facing state and the pure reducer over it.
//!
//! # Responsibility
//! - Hold the current list plus transient draft and edit-mode state.
//! - Apply actions as total functions with explicit no-op guards.
//!
//! # Invariants
//! - At most one item is in edit mode at a time.
//! - Item text committed to the list is trimmed and non-empty.
//! - New items are prepended (newest first).

use crate::clock::Clock;
use crate::model::todo::{TodoId, TodoItem};

/// Transient edit-mode state for a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    /// Item currently being edited.
    pub id: TodoId,
    /// Unsaved replacement text.
    pub text: String,
}

/// Complete state owned by the UI controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    /// Current list, newest first.
    pub items: Vec<TodoItem>,
    /// Uncommitted add-input text.
    pub draft: String,
    /// Edit mode, when active.
    pub edit: Option<EditDraft>,
}

impl TodoState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds state around an already-loaded list.
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        Self {
            items,
            draft: String::new(),
            edit: None,
        }
    }

    /// Number of items not yet done.
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.done).count()
    }

    /// Returns whether the given item is the one in edit mode.
    pub fn is_editing(&self, id: TodoId) -> bool {
        self.edit.as_ref().is_some_and(|edit| edit.id == id)
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// One user-driven mutation or view-state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Replace the add-input draft.
    SetDraft(String),
    /// Commit `text` as a new item and clear the add-input draft.
    Add { text: String },
    /// Enter edit mode for an item, seeding the edit draft with its text.
    StartEdit { id: TodoId },
    /// Replace the edit draft while in edit mode.
    SetEditDraft(String),
    /// Commit the edit draft as the item's new text and leave edit mode.
    SaveEdit { id: TodoId },
    /// Leave edit mode, discarding the edit draft.
    CancelEdit,
    /// Flip an item's completion flag.
    Toggle { id: TodoId },
    /// Delete an item.
    Remove { id: TodoId },
}

/// What one reducer step changed, from the persistence layer's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOutcome {
    /// Nothing changed (guarded no-op).
    Noop,
    /// Draft or edit-mode state changed; the list itself did not.
    ViewChanged,
    /// The list changed and must be re-persisted.
    ListChanged,
}

impl ReduceOutcome {
    /// Returns whether the list was mutated by this step.
    pub fn list_changed(self) -> bool {
        matches!(self, Self::ListChanged)
    }
}

/// Applies one action to the state.
///
/// Total over well-formed input: unknown ids and blank text are no-ops,
/// not errors.
pub fn reduce(state: &mut TodoState, action: TodoAction, clock: &dyn Clock) -> ReduceOutcome {
    match action {
        TodoAction::SetDraft(text) => {
            state.draft = text;
            ReduceOutcome::ViewChanged
        }
        TodoAction::Add { text } => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return ReduceOutcome::Noop;
            }
            let item = TodoItem::new(trimmed, clock.now_epoch_ms());
            state.items.insert(0, item);
            state.draft.clear();
            ReduceOutcome::ListChanged
        }
        TodoAction::StartEdit { id } => {
            let Some(index) = state.position(id) else {
                return ReduceOutcome::Noop;
            };
            state.edit = Some(EditDraft {
                id,
                text: state.items[index].text.clone(),
            });
            ReduceOutcome::ViewChanged
        }
        TodoAction::SetEditDraft(text) => {
            let Some(edit) = state.edit.as_mut() else {
                return ReduceOutcome::Noop;
            };
            edit.text = text;
            ReduceOutcome::ViewChanged
        }
        TodoAction::SaveEdit { id } => {
            let Some(edit) = state.edit.as_ref() else {
                return ReduceOutcome::Noop;
            };
            if edit.id != id {
                return ReduceOutcome::Noop;
            }
            let trimmed = edit.text.trim().to_string();
            if trimmed.is_empty() {
                // Blank drafts never overwrite committed text; edit mode
                // stays active so the user can keep typing.
                return ReduceOutcome::Noop;
            }
            let Some(index) = state.position(id) else {
                // The item vanished while being edited; leave edit mode
                // without touching the list.
                state.edit = None;
                return ReduceOutcome::ViewChanged;
            };
            state.items[index].text = trimmed;
            state.edit = None;
            ReduceOutcome::ListChanged
        }
        TodoAction::CancelEdit => {
            if state.edit.take().is_none() {
                return ReduceOutcome::Noop;
            }
            ReduceOutcome::ViewChanged
        }
        TodoAction::Toggle { id } => {
            let Some(index) = state.position(id) else {
                return ReduceOutcome::Noop;
            };
            state.items[index].done = !state.items[index].done;
            ReduceOutcome::ListChanged
        }
        TodoAction::Remove { id } => {
            let Some(index) = state.position(id) else {
                return ReduceOutcome::Noop;
            };
            state.items.remove(index);
            if state.is_editing(id) {
                state.edit = None;
            }
            ReduceOutcome::ListChanged
        }
    }
}
