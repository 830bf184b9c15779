//! `SQLite`-backed slot storage.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use super::migrations;
use super::SlotBackend;
use crate::error::{Error, Result};

/// Path reported for in-memory databases.
const MEMORY_PATH: &str = ":memory:";

/// Key-value slots persisted in a single `SQLite` file.
///
/// Each slot holds one opaque string value; writes replace the whole value.
#[derive(Debug)]
pub struct SqliteSlots {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl SqliteSlots {
    /// Open or create a slot database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist,
    /// then brings the schema up to date.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories or database cannot be created, or
    /// if schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening slot database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        info!("Slot database opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory slot database for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(MEMORY_PATH),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(MEMORY_PATH),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

}

impl SlotBackend for SqliteSlots {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r"
            INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            ",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        debug!("Wrote {} bytes to slot {}", value.len(), key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let slots = SqliteSlots::open_in_memory().unwrap();
        assert_eq!(slots.path().to_string_lossy(), ":memory:");
    }

    #[test]
    fn test_read_missing_slot() {
        let slots = SqliteSlots::open_in_memory().unwrap();
        assert!(slots.read("employeeData").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let mut slots = SqliteSlots::open_in_memory().unwrap();
        slots.write("employeeData", "[]").unwrap();
        assert_eq!(slots.read("employeeData").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_write_overwrites() {
        let mut slots = SqliteSlots::open_in_memory().unwrap();
        slots.write("k", "first").unwrap();
        slots.write("k", "second").unwrap();
        assert_eq!(slots.read("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut slots = SqliteSlots::open_in_memory().unwrap();
        slots.write("a", "1").unwrap();
        slots.write("b", "2").unwrap();
        assert_eq!(slots.read("a").unwrap().as_deref(), Some("1"));
        assert_eq!(slots.read("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_write_records_updated_at() {
        let mut slots = SqliteSlots::open_in_memory().unwrap();
        slots.write("k", "v").unwrap();
        let updated_at: Option<String> = slots
            .conn
            .query_row("SELECT updated_at FROM slots WHERE key = 'k'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert!(updated_at.is_some());
    }

    #[test]
    fn test_open_file_based_persists() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("records.db");

        {
            let mut slots = SqliteSlots::open(&db_path).unwrap();
            slots.write("employeeData", "[1]").unwrap();
            assert_eq!(slots.path(), db_path);
        }

        let reopened = SqliteSlots::open(&db_path).unwrap();
        assert_eq!(
            reopened.read("employeeData").unwrap().as_deref(),
            Some("[1]")
        );
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested/deeper/records.db");

        let _slots = SqliteSlots::open(&nested).unwrap();
        assert!(nested.exists());
    }
}
