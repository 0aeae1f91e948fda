//! Schema migration registry for the planner database.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.
//!
//! Only the storage table is versioned here. The plan JSON stored inside it
//! carries no schema version.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_kv_entries.sql"),
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings the schema to [`latest_version`] and checks `kv_entries` exists.
///
/// Pending steps run in one transaction; a failing step reports its version.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current = conn
        .query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))
        .map_err(DbError::Connect)?;
    let latest = latest_version();

    if current > latest {
        return Err(DbError::SchemaTooNew {
            found: current,
            supported: latest,
        });
    }

    if current < latest {
        let tx = conn.transaction().map_err(DbError::Connect)?;
        for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
            let step = |source: rusqlite::Error| DbError::Migration {
                version: migration.version,
                source,
            };
            tx.execute_batch(migration.sql).map_err(step)?;
            tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))
                .map_err(step)?;
        }
        tx.commit().map_err(|source| DbError::Migration {
            version: latest,
            source,
        })?;
    }

    ensure_kv_table(conn, latest)
}

fn ensure_kv_table(conn: &Connection, version: u32) -> DbResult<()> {
    let present: bool = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries'
            );",
            [],
            |row| row.get(0),
        )
        .map_err(DbError::Connect)?;
    if present {
        Ok(())
    } else {
        Err(DbError::MissingKvTable { version })
    }
}
