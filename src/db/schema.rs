//! Settings schema, versioned with SQLite's `user_version` pragma.

use anyhow::{bail, Context, Result};
use rusqlite::Connection;

/// Schema steps in order. Applying step `n` moves `user_version` from `n` to `n + 1`.
const STEPS: &[&str] = &[include_str!("migrations/001_initial.sql")];

/// The schema version this build writes.
pub const CURRENT_VERSION: i64 = STEPS.len() as i64;

pub fn schema_version(conn: &Connection) -> Result<i64> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(version)
}

/// Bring the schema up to [`CURRENT_VERSION`].
///
/// A database written by a newer build is refused rather than touched.
pub fn upgrade(conn: &Connection) -> Result<()> {
    let current = schema_version(conn)?;
    if current > CURRENT_VERSION {
        bail!(
            "Settings database has schema version {}, this build only knows up to {}",
            current,
            CURRENT_VERSION
        );
    }

    for (version, sql) in (1i64..).zip(STEPS).skip(current as usize) {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)
            .with_context(|| format!("Failed to apply settings schema version {}", version))?;
        tx.pragma_update(None, "user_version", version)?;
        tx.commit()?;
        tracing::info!("Settings schema upgraded to version {}", version);
    }

    Ok(())
}
