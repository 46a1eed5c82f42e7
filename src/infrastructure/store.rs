//! Entry persistence

use crate::domain::Entry;
use crate::error::{ReplogError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Abstract store for work log entries.
///
/// `query` returns entries whose calendar date falls inside the inclusive
/// range, ordered by timestamp ascending.
pub trait EntryStore {
    fn insert(&self, text: &str, timestamp: NaiveDateTime) -> Result<Entry>;
    fn query(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Entry>>;
    fn list_all(&self) -> Result<Vec<Entry>>;
    fn delete(&self, id: i64) -> Result<bool>;
    fn clear(&self) -> Result<usize>;
}

/// SQLite implementation of EntryStore
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at the given path and ensure the schema.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(storage_err)?;
        Self::with_connection(conn)
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(storage_err)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT NOT NULL,
                text TEXT NOT NULL
            )",
            [],
        )
        .map_err(storage_err)?;
        Ok(SqliteStore { conn })
    }

    fn row_to_entry(id: i64, timestamp: String, text: String) -> Result<Entry> {
        let timestamp = NaiveDateTime::parse_from_str(&timestamp, TIMESTAMP_FORMAT)
            .map_err(|e| ReplogError::StorageUnavailable(format!("corrupt timestamp: {}", e)))?;
        Ok(Entry::new(id, timestamp, text))
    }
}

fn storage_err(e: rusqlite::Error) -> ReplogError {
    ReplogError::StorageUnavailable(e.to_string())
}

impl EntryStore for SqliteStore {
    fn insert(&self, text: &str, timestamp: NaiveDateTime) -> Result<Entry> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ReplogError::InvalidEntry("entry text is empty".to_string()));
        }

        self.conn
            .execute(
                "INSERT INTO entries (timestamp, text) VALUES (?1, ?2)",
                params![timestamp.format(TIMESTAMP_FORMAT).to_string(), text],
            )
            .map_err(storage_err)?;

        let id = self.conn.last_insert_rowid();
        Ok(Entry::new(id, timestamp, text.to_string()))
    }

    fn query(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Entry>> {
        let start_ts = start.and_hms_opt(0, 0, 0).expect("midnight is valid");
        let end_ts = end.and_hms_opt(23, 59, 59).expect("end of day is valid");

        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, timestamp, text FROM entries
                 WHERE timestamp >= ?1 AND timestamp <= ?2
                 ORDER BY timestamp ASC, id ASC",
            )
            .map_err(storage_err)?;

        let rows = stmt
            .query_map(
                params![
                    start_ts.format(TIMESTAMP_FORMAT).to_string(),
                    end_ts.format(TIMESTAMP_FORMAT).to_string()
                ],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .map_err(storage_err)?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, timestamp, text) = row.map_err(storage_err)?;
            entries.push(Self::row_to_entry(id, timestamp, text)?);
        }
        Ok(entries)
    }

    fn list_all(&self) -> Result<Vec<Entry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, timestamp, text FROM entries ORDER BY timestamp DESC, id DESC")
            .map_err(storage_err)?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(storage_err)?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, timestamp, text) = row.map_err(storage_err)?;
            entries.push(Self::row_to_entry(id, timestamp, text)?);
        }
        Ok(entries)
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?1", params![id])
            .map_err(storage_err)?;
        Ok(changed > 0)
    }

    fn clear(&self) -> Result<usize> {
        self.conn
            .execute("DELETE FROM entries", [])
            .map_err(storage_err)
    }
}
