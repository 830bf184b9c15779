//! Record persistence for hrnet.
//!
//! Employee records live as one JSON array in a single key-value slot. The
//! [`RecordStore`] adapter owns the read-modify-write cycle over that slot:
//!
//! - [`Store::load_all`] never fails. A missing slot, an unreadable backend,
//!   unparsable JSON, or a value that is not an array all read as an empty
//!   collection. Array entries that don't match the record schema are
//!   skipped one by one.
//! - [`Store::append_one`] rewrites the whole array with the new record at
//!   the end.
//!
//! Slot backends implement [`SlotBackend`]: [`SqliteSlots`] for on-disk
//! storage and [`MemorySlots`] for tests.

pub mod migrations;
pub mod schema;
mod sqlite;

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::employee::EmployeeRecord;
use crate::error::Result;

pub use sqlite::SqliteSlots;

/// Default slot key for the employee collection.
pub const DEFAULT_SLOT_KEY: &str = "employeeData";

/// A key-value store of opaque string slots.
pub trait SlotBackend {
    /// Read a slot's value, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace a slot's value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process slot backend.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    slots: HashMap<String, String>,
}

impl MemorySlots {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend with one slot pre-populated.
    #[must_use]
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self { slots }
    }
}

impl SlotBackend for MemorySlots {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Whole-collection access to persisted employee records.
pub trait Store {
    /// Load every stored record in insertion order.
    fn load_all(&self) -> Vec<EmployeeRecord>;

    /// Append one record to the end of the stored collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be serialized or written.
    fn append_one(&mut self, record: &EmployeeRecord) -> Result<()>;
}

/// Store adapter binding a [`SlotBackend`] to one slot key.
#[derive(Debug)]
pub struct RecordStore<B> {
    backend: B,
    key: String,
}

impl<B: SlotBackend> RecordStore<B> {
    /// Create an adapter over the default `employeeData` slot.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_SLOT_KEY)
    }

    /// Create an adapter over a custom slot key.
    #[must_use]
    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// The slot key this adapter reads and writes.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Number of valid records currently stored.
    #[must_use]
    pub fn count(&self) -> usize {
        self.load_all().len()
    }

    /// Read the slot as a raw JSON array, resetting anything else to empty.
    fn load_raw(&self) -> Vec<Value> {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Slot {} is empty", self.key);
                return Vec::new();
            }
            Err(e) => {
                warn!(slot = %self.key, error = %e, "Failed to read record slot, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                warn!(slot = %self.key, "Stored employee data is not an array, treating as empty");
                Vec::new()
            }
            Err(e) => {
                warn!(slot = %self.key, error = %e, "Stored employee data is not valid JSON, treating as empty");
                Vec::new()
            }
        }
    }
}

impl<B: SlotBackend> Store for RecordStore<B> {
    fn load_all(&self) -> Vec<EmployeeRecord> {
        let items = self.load_raw();
        let total = items.len();

        let records: Vec<EmployeeRecord> = items
            .into_iter()
            .enumerate()
            .filter_map(
                |(index, item)| match serde_json::from_value::<EmployeeRecord>(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!(slot = %self.key, index, error = %e, "Skipping malformed employee record");
                        None
                    }
                },
            )
            .collect();

        debug!("Loaded {} of {} stored records", records.len(), total);
        records
    }

    fn append_one(&mut self, record: &EmployeeRecord) -> Result<()> {
        let mut items = self.load_raw();
        items.push(serde_json::to_value(record)?);

        let serialized = serde_json::to_string(&items)?;
        self.backend.write(&self.key, &serialized)?;

        info!(
            "Saved employee {} ({} records stored)",
            record.full_name(),
            items.len()
        );
        Ok(())
    }
}
