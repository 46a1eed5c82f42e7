//! Report generation use case - the core pipeline

use crate::domain::report::{group_by_day, NO_ACTIVITY_SUMMARY};
use crate::domain::{PeriodSpec, Report};
use crate::error::Result;
use crate::infrastructure::{EntryStore, Summarizer};
use chrono::Utc;
use tracing::{debug, info};

/// Generates reports from stored entries.
///
/// Read-only: the only side effects are the store query and the summarizer
/// calls. Storage errors are surfaced verbatim; summarizer degradation is
/// invisible here.
pub struct ReportService<'a> {
    store: &'a dyn EntryStore,
    summarizer: &'a dyn Summarizer,
}

impl<'a> ReportService<'a> {
    pub fn new(store: &'a dyn EntryStore, summarizer: &'a dyn Summarizer) -> Self {
        ReportService { store, summarizer }
    }

    /// Generate a report for the given period.
    ///
    /// The window, grouping and summaries are deterministic for identical
    /// stored entries; only `generated_at` reflects the wall clock.
    pub fn generate(&self, spec: PeriodSpec) -> Result<Report> {
        let window = spec.window();
        debug!(?spec.kind, start = %window.start, end = %window.end, "computed report window");

        let entries = self.store.query(window.start, window.end)?;
        info!(count = entries.len(), "fetched entries for report");

        if entries.is_empty() {
            // Empty windows never touch the summarizer
            return Ok(Report {
                window,
                groups: vec![],
                overall_summary: NO_ACTIVITY_SUMMARY.to_string(),
                generated_at: Utc::now(),
            });
        }

        let mut groups = group_by_day(entries);
        for group in &mut groups {
            group.summary = self.summarizer.summarize(&group.joined_text());
            debug!(date = %group.date, entries = group.entries.len(), "summarized day group");
        }

        let combined = groups
            .iter()
            .map(|g| g.summary.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let overall_summary = self.summarizer.summarize(&combined);

        Ok(Report {
            window,
            groups,
            overall_summary,
            generated_at: Utc::now(),
        })
    }
}
