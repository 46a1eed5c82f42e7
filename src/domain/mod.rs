//! Domain layer - Core types and business rules

pub mod entry;
pub mod period;
pub mod report;

pub use entry::Entry;
pub use period::{DateWindow, PeriodKind, PeriodSpec};
pub use report::{DayGroup, Report, NO_ACTIVITY_SUMMARY};
