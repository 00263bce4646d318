//! Key-value persistence contracts and SQLite implementation.
//!
//! # Responsibility
//! - Define the get/set string contract the manager persists through.
//! - Keep SQL and schema details inside this module boundary.
//!
//! # Invariants
//! - Connections are usable only after migrations have been applied.
//! - Implementations surface storage failures instead of masking them;
//!   swallowing a failure is the caller's decision.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod sqlite;

pub use migrations::latest_version;
pub use sqlite::{open_store, open_store_in_memory, SqliteKeyValueStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for key-value persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database is at schema version {db_version}, newer than this build supports ({latest_supported})"
            ),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through this module first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. }
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Key-value interface used for list persistence.
///
/// Values are opaque strings addressed by caller-chosen keys; the manager
/// uses a single well-known key holding a JSON payload.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
