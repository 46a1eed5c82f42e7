//! Application layer - Use cases and orchestration

pub mod delete_entry;
pub mod list_entries;
pub mod log_entry;
pub mod report;

pub use report::ReportService;
