//! SQLite file behind the planner's key-value store.
//!
//! The database holds a single `kv_entries` table. Plan data lives in it as
//! JSON strings; SQLite only provides durability and the schema version.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A connection handed out by [`open_db`] has `kv_entries` present.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// Opening the file or configuring the connection failed.
    Connect(rusqlite::Error),
    /// Migration `version` failed; nothing from the batch was committed.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// The file was written by a newer build.
    SchemaTooNew { found: u32, supported: u32 },
    /// `user_version` says the schema is current but `kv_entries` is gone.
    MissingKvTable { version: u32 },
    /// Reading or writing one key failed.
    Entry {
        key: String,
        source: rusqlite::Error,
    },
}

impl DbError {
    pub(crate) fn entry(key: &str) -> impl FnOnce(rusqlite::Error) -> Self + '_ {
        move |source| Self::Entry {
            key: key.to_string(),
            source,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect(err) => write!(f, "cannot open planner database: {err}"),
            Self::Migration { version, source } => {
                write!(f, "planner database migration {version} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "planner database version {found} is newer than supported {supported}"
            ),
            Self::MissingKvTable { version } => write!(
                f,
                "planner database reports version {version} but has no kv_entries table"
            ),
            Self::Entry { key, source } => write!(f, "storage key `{key}`: {source}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connect(err) => Some(err),
            Self::Migration { source, .. } | Self::Entry { source, .. } => Some(source),
            Self::SchemaTooNew { .. } | Self::MissingKvTable { .. } => None,
        }
    }
}
