//! Delete and clear use cases

use crate::error::Result;
use crate::infrastructure::EntryStore;

/// Delete one entry by id. Returns false if no such entry exists.
pub fn delete_entry(store: &dyn EntryStore, id: i64) -> Result<bool> {
    store.delete(id)
}

/// Remove all entries, returning how many were deleted.
pub fn clear_entries(store: &dyn EntryStore) -> Result<usize> {
    store.clear()
}
