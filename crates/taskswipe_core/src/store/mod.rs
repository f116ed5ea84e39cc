//! Injected persistence for the task board.
//!
//! # Responsibility
//! - Define the `TaskStorage` contract the board loads from and saves to.
//! - Map board state onto a flat key-value layout, one serialized value per key.
//!
//! # Invariants
//! - Missing keys load as empty/zero defaults.
//! - Malformed persisted values are rejected, never silently replaced.
//! - Keys are independent; there is no schema version inside values.

use crate::db::DbError;
use crate::model::progress::Progress;
use crate::model::task::{Task, TaskList};
use chrono::NaiveDate;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

/// Key holding the JSON task array.
pub const TASKS_KEY: &str = "tasks";
/// Key holding the decimal streak counter.
pub const STREAK_KEY: &str = "streak";
/// Key holding the decimal XP counter.
pub const XP_KEY: &str = "xp";
/// Key holding the `YYYY-MM-DD` day the streak last advanced.
pub const LAST_ACTIVE_DAY_KEY: &str = "last_active_day";

const DAY_FORMAT: &str = "%Y-%m-%d";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage failure for load/save operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serde(serde_json::Error),
    InvalidData { key: &'static str, message: String },
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "task list serialization failed: {err}"),
            Self::InvalidData { key, message } => {
                write!(f, "invalid persisted value for `{key}`: {message}")
            }
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::InvalidData { .. } | Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Persistence contract injected into the board.
pub trait TaskStorage {
    fn load(&self) -> StoreResult<TaskList>;
    fn save(&self, tasks: &[Task]) -> StoreResult<()>;
    fn load_progress(&self) -> StoreResult<Progress>;
    fn save_progress(&self, progress: &Progress) -> StoreResult<()>;
}

/// Raw string key-value backend.
pub trait KeyValueBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Writes several entries; backends override this to make it atomic.
    fn put_many(&self, entries: &[(&str, String)]) -> StoreResult<()> {
        for (key, value) in entries {
            self.put(key, value)?;
        }
        Ok(())
    }
}

/// `TaskStorage` over any key-value backend.
#[derive(Debug, Default)]
pub struct KeyValueStorage<B> {
    backend: B,
}

/// Process-local storage, used for previews and tests.
pub type MemoryStorage = KeyValueStorage<MemoryBackend>;

/// SQLite-backed storage borrowing an open connection.
pub type SqliteStorage<'conn> = KeyValueStorage<SqliteBackend<'conn>>;

impl<B: KeyValueBackend> KeyValueStorage<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn load_counter(&self, key: &'static str) -> StoreResult<u32> {
        match self.backend.get(key)? {
            Some(raw) => raw.trim().parse::<u32>().map_err(|err| StoreError::InvalidData {
                key,
                message: format!("`{raw}` is not a counter: {err}"),
            }),
            None => Ok(0),
        }
    }
}

impl<B: KeyValueBackend> TaskStorage for KeyValueStorage<B> {
    fn load(&self) -> StoreResult<TaskList> {
        let Some(raw) = self.backend.get(TASKS_KEY)? else {
            return Ok(Vec::new());
        };
        let tasks: TaskList = serde_json::from_str(&raw).map_err(|err| StoreError::InvalidData {
            key: TASKS_KEY,
            message: err.to_string(),
        })?;
        debug!(
            "event=store_load module=store status=ok key={TASKS_KEY} count={}",
            tasks.len()
        );
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let encoded = serde_json::to_string(tasks)?;
        self.backend.put(TASKS_KEY, &encoded)?;
        debug!(
            "event=store_save module=store status=ok key={TASKS_KEY} count={}",
            tasks.len()
        );
        Ok(())
    }

    fn load_progress(&self) -> StoreResult<Progress> {
        let last_active_day = match self.backend.get(LAST_ACTIVE_DAY_KEY)? {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw.trim(), DAY_FORMAT).map_err(|err| {
                    StoreError::InvalidData {
                        key: LAST_ACTIVE_DAY_KEY,
                        message: format!("`{raw}` is not a date: {err}"),
                    }
                })?,
            ),
            None => None,
        };

        Ok(Progress {
            streak: self.load_counter(STREAK_KEY)?,
            xp: self.load_counter(XP_KEY)?,
            last_active_day,
        })
    }

    fn save_progress(&self, progress: &Progress) -> StoreResult<()> {
        let mut entries = vec![
            (STREAK_KEY, progress.streak.to_string()),
            (XP_KEY, progress.xp.to_string()),
        ];
        if let Some(day) = progress.last_active_day {
            entries.push((LAST_ACTIVE_DAY_KEY, day.format(DAY_FORMAT).to_string()));
        }
        self.backend.put_many(&entries)?;
        debug!(
            "event=store_save module=store status=ok key=progress streak={} xp={}",
            progress.streak, progress.xp
        );
        Ok(())
    }
}
