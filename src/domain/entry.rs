//! Work log entry

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One logged unit of work text with a timestamp.
///
/// Entries are immutable once created; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub timestamp: NaiveDateTime,
    pub text: String,
}

impl Entry {
    pub fn new(id: i64, timestamp: NaiveDateTime, text: String) -> Self {
        Entry {
            id,
            timestamp,
            text,
        }
    }

    /// Calendar date of this entry, used for day grouping.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
