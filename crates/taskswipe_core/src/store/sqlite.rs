//! SQLite key-value backend over the `kv_entries` table.
//!
//! # Invariants
//! - Writes are upserts keyed by `key`.
//! - `put_many` commits all entries or none.

use super::{KeyValueBackend, StoreResult};
use crate::db::ensure_current_schema;
use rusqlite::{params, Connection, OptionalExtension};

const UPSERT_SQL: &str = "INSERT INTO kv_entries (key, value)
    VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = (strftime('%s', 'now') * 1000);";

/// Backend borrowing a migrated SQLite connection.
pub struct SqliteBackend<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBackend<'conn> {
    /// Wraps a connection opened through `db::open_db*`.
    ///
    /// # Errors
    /// - `SchemaNotMigrated` for a connection that skipped migrations.
    /// - `SchemaTooNew` for a file written by a newer build.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_current_schema(conn)?;
        Ok(Self { conn })
    }
}

impl KeyValueBackend for SqliteBackend<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(UPSERT_SQL, params![key, value])?;
        Ok(())
    }

    fn put_many(&self, entries: &[(&str, String)]) -> StoreResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        for (key, value) in entries {
            tx.execute(UPSERT_SQL, params![key, value])?;
        }
        tx.commit()?;
        Ok(())
    }
}
