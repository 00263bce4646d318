//! Core domain logic for Ticklist.
//! This crate is the single source of truth for business invariants.

pub mod clock;
pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use logging::{active_logging, default_log_level, init_logging};
pub use model::todo::{generate_id, TodoId, TodoItem};
pub use service::todo_manager::{TodoManager, STORAGE_KEY};
pub use state::{reduce, EditDraft, ReduceOutcome, TodoAction, TodoState};
pub use store::{
    open_store, open_store_in_memory, KeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
