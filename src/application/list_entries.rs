//! List entries use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::EntryStore;

/// List entries newest first, optionally limited.
pub fn list_entries(store: &dyn EntryStore, limit: Option<usize>) -> Result<Vec<Entry>> {
    let mut entries = store.list_all()?;
    if let Some(n) = limit {
        entries.truncate(n);
    }
    Ok(entries)
}
