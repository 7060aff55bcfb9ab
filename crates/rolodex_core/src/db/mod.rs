//! SQLite storage for the document store.
//!
//! # Responsibility
//! - Open and configure the SQLite file backing the `documents` table.
//! - Apply schema migrations in deterministic order.
//! - Classify SQLite write failures into the store's own failure modes.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Repositories must not touch `documents` before migrations succeed.

use rusqlite::ffi;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Storage-level failure of the document store.
#[derive(Debug)]
pub enum DbError {
    /// Write hit the `(collection, id)` primary key of an existing row.
    DuplicateKey,
    /// Write carried a body that failed the `json_valid(body)` check.
    BodyRejected,
    /// File was written by a newer binary.
    SchemaTooNew { db_version: u32, latest_supported: u32 },
    /// A migration step failed; nothing from the batch was committed.
    MigrationFailed {
        version: u32,
        name: &'static str,
        source: rusqlite::Error,
    },
    /// Any other SQLite error.
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey => write!(f, "document key already present in collection"),
            Self::BodyRejected => write!(f, "document body is not valid JSON"),
            Self::SchemaTooNew {
                db_version,
                latest_supported,
            } => write!(
                f,
                "document store schema {db_version} is newer than this build ({latest_supported})"
            ),
            Self::MigrationFailed {
                version,
                name,
                source,
            } => write!(f, "migration {version:04}_{name} failed: {source}"),
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MigrationFailed { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
            Self::DuplicateKey | Self::BodyRejected | Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        match &value {
            rusqlite::Error::SqliteFailure(err, _) => match err.extended_code {
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    Self::DuplicateKey
                }
                ffi::SQLITE_CONSTRAINT_CHECK => Self::BodyRejected,
                _ => Self::Sqlite(value),
            },
            _ => Self::Sqlite(value),
        }
    }
}
