//! Report periods and date window computation

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Report cadences determine how the date window is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Rolling 7 days ending on the anchor date
    #[default]
    Weekly,
    /// Rolling 14 days ending on the anchor date
    Biweekly,
    /// Calendar month containing the anchor date
    Monthly,
}

impl FromStr for PeriodKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(PeriodKind::Weekly),
            "biweekly" => Ok(PeriodKind::Biweekly),
            "monthly" => Ok(PeriodKind::Monthly),
            _ => Err(s.to_string()),
        }
    }
}

/// A period kind anchored to a concrete date. Derived value, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSpec {
    pub kind: PeriodKind,
    pub anchor_date: NaiveDate,
}

impl PeriodSpec {
    pub fn new(kind: PeriodKind, anchor_date: NaiveDate) -> Self {
        PeriodSpec { kind, anchor_date }
    }

    /// Compute the concrete inclusive date window for this period.
    ///
    /// Weekly and biweekly are rolling windows ending on the anchor date;
    /// monthly is the calendar month containing the anchor.
    pub fn window(&self) -> DateWindow {
        match self.kind {
            PeriodKind::Weekly => DateWindow {
                start: self.anchor_date - Duration::days(6),
                end: self.anchor_date,
            },
            PeriodKind::Biweekly => DateWindow {
                start: self.anchor_date - Duration::days(13),
                end: self.anchor_date,
            },
            PeriodKind::Monthly => {
                let start = self
                    .anchor_date
                    .with_day(1)
                    .expect("day 1 exists in every month");
                let end = last_day_of_month(start);
                DateWindow { start, end }
            }
        }
    }
}

/// Inclusive date range covered by a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next_month.expect("first of month is always valid") - Duration::days(1)
}
