//! Add entry use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::EntryStore;
use chrono::NaiveDateTime;

/// Record a new work log entry with the given timestamp.
pub fn log_entry(store: &dyn EntryStore, text: &str, timestamp: NaiveDateTime) -> Result<Entry> {
    store.insert(text, timestamp)
}
