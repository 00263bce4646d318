//! Schema version bookkeeping for the key-value database.
//!
//! Pending DDL steps run inside one transaction, and the resulting schema
//! version is recorded in `PRAGMA user_version` so later opens can tell
//! where a database stands without probing tables.

use super::{StoreError, StoreResult};
use rusqlite::Connection;

/// Ordered DDL steps, one per schema version.
const STEPS: &[(u32, &str)] = &[(1, include_str!("0001_init.sql"))];

/// Highest schema version this binary knows how to produce.
pub fn latest_version() -> u32 {
    STEPS.last().map_or(0, |(version, _)| *version)
}

/// Brings the connection's schema up to [`latest_version`].
///
/// Databases stamped with a higher version than this binary supports are
/// refused rather than guessed at.
pub fn apply_migrations(conn: &mut Connection) -> StoreResult<()> {
    let stamped: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let target = latest_version();

    if stamped > target {
        return Err(StoreError::UnsupportedSchemaVersion {
            db_version: stamped,
            latest_supported: target,
        });
    }
    if stamped == target {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (_, ddl) in STEPS.iter().filter(|(version, _)| *version > stamped) {
        tx.execute_batch(ddl)?;
    }
    tx.execute_batch(&format!("PRAGMA user_version = {target};"))?;
    tx.commit()?;

    Ok(())
}
