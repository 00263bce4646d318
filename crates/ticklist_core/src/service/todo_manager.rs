//! To-do list manager: state ownership plus persistence orchestration.
//!
//! # Responsibility
//! - Load the list once at startup, falling back to empty on bad data.
//! - Re-persist the full list after every successful list mutation.
//!
//! # Invariants
//! - In-memory state is authoritative for the session; store writes are
//!   best effort and never block a mutation.
//! - The persisted value is always the complete serialized list.

use crate::clock::{Clock, SystemClock};
use crate::model::todo::TodoItem;
use crate::state::{reduce, ReduceOutcome, TodoAction, TodoState};
use crate::store::KeyValueStore;
use log::{info, warn};
use std::sync::Arc;

/// Well-known key the serialized list is stored under.
pub const STORAGE_KEY: &str = "todos:v1";

/// Use-case wrapper owning the list state and its persistence.
pub struct TodoManager<S: KeyValueStore> {
    store: S,
    state: TodoState,
    clock: Arc<dyn Clock>,
}

impl<S: KeyValueStore> TodoManager<S> {
    /// Loads the manager from the store's well-known key.
    ///
    /// Absent, unreadable or malformed values produce an empty list; the
    /// failure is logged and the session continues.
    pub fn load(store: S) -> Self {
        Self::load_with_clock(store, Arc::new(SystemClock))
    }

    /// Loads the manager with a caller-provided clock.
    pub fn load_with_clock(store: S, clock: Arc<dyn Clock>) -> Self {
        let items = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => decode_items(&raw),
            Ok(None) => {
                info!("event=store_load module=service status=ok items=0 source=absent");
                Vec::new()
            }
            Err(err) => {
                warn!("event=store_load module=service status=error fallback=empty error={err}");
                Vec::new()
            }
        };

        Self {
            store,
            state: TodoState::with_items(items),
            clock,
        }
    }

    /// Current state, for rendering.
    pub fn state(&self) -> &TodoState {
        &self.state
    }

    /// Number of items not yet done.
    pub fn remaining(&self) -> usize {
        self.state.remaining()
    }

    /// Applies one action; list mutations are persisted before returning.
    ///
    /// Persistence failures are logged and swallowed; the in-memory list
    /// keeps the mutation either way.
    pub fn dispatch(&mut self, action: TodoAction) -> ReduceOutcome {
        let outcome = reduce(&mut self.state, action, self.clock.as_ref());
        if outcome.list_changed() {
            self.persist();
        }
        outcome
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(&self.state.items) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("event=store_save module=service status=error stage=encode error={err}");
                return;
            }
        };

        match self.store.set(STORAGE_KEY, &payload) {
            Ok(()) => info!(
                "event=store_save module=service status=ok items={}",
                self.state.items.len()
            ),
            Err(err) => {
                warn!("event=store_save module=service status=error stage=write error={err}");
            }
        }
    }
}

fn decode_items(raw: &str) -> Vec<TodoItem> {
    match serde_json::from_str::<Vec<TodoItem>>(raw) {
        Ok(items) => {
            info!(
                "event=store_load module=service status=ok items={}",
                items.len()
            );
            items
        }
        Err(err) => {
            warn!("event=store_load module=service status=error fallback=empty error={err}");
            Vec::new()
        }
    }
}
