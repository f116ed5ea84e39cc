//! SQLite connections for the key-value store.
//!
//! `open_db*` configure a connection and bring its schema up to date;
//! `ensure_current_schema` guards stores handed a connection opened elsewhere.
//! The schema version lives in `PRAGMA user_version`.

use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was written by a newer build with migrations this one lacks.
    SchemaTooNew { db_version: u32, latest_supported: u32 },
    /// The connection still needs migrations before entries can be used.
    SchemaNotMigrated { db_version: u32, expected: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaTooNew {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::SchemaNotMigrated {
                db_version,
                expected,
            } => write!(
                f,
                "store schema version {db_version} is not migrated; expected {expected} (open it with open_db)"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } | Self::SchemaNotMigrated { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Checks that `conn` is at exactly the latest known schema version.
///
/// # Errors
/// - `SchemaNotMigrated` when the version is behind.
/// - `SchemaTooNew` when the version is ahead of this build.
pub fn ensure_current_schema(conn: &Connection) -> DbResult<()> {
    let db_version = migrations::current_user_version(conn)?;
    let latest = migrations::latest_version();
    match db_version.cmp(&latest) {
        std::cmp::Ordering::Equal => Ok(()),
        std::cmp::Ordering::Less => Err(DbError::SchemaNotMigrated {
            db_version,
            expected: latest,
        }),
        std::cmp::Ordering::Greater => Err(DbError::SchemaTooNew {
            db_version,
            latest_supported: latest,
        }),
    }
}
