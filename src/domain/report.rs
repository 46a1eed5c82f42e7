//! Report assembly and grouping

use crate::domain::{DateWindow, Entry};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed overall summary used when the window contains no entries.
pub const NO_ACTIVITY_SUMMARY: &str = "No activity recorded for this period.";

/// Entries sharing a calendar date, with their condensed summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub entries: Vec<Entry>,
    pub summary: String,
}

impl DayGroup {
    /// Concatenated entry text for this day, one entry per line.
    pub fn joined_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Assembled report for one period. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub window: DateWindow,
    pub groups: Vec<DayGroup>,
    pub overall_summary: String,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Partition entries into sparse day groups, ordered by date ascending.
///
/// Entries are expected in timestamp order and keep that order within each
/// group. Group summaries are left empty for the generator to fill.
pub fn group_by_day(entries: Vec<Entry>) -> Vec<DayGroup> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Entry>> = BTreeMap::new();
    for entry in entries {
        by_date.entry(entry.date()).or_default().push(entry);
    }

    by_date
        .into_iter()
        .map(|(date, entries)| DayGroup {
            date,
            entries,
            summary: String::new(),
        })
        .collect()
}
