//! Output formatting utilities

use crate::domain::{Entry, Report};

/// Format a report as plain text.
pub fn format_report_text(report: &Report) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Report Period: {} - {}\n",
        report.window.start.format("%Y-%m-%d"),
        report.window.end.format("%Y-%m-%d")
    ));
    output.push_str(&"=".repeat(60));
    output.push('\n');

    if report.is_empty() {
        output.push('\n');
        output.push_str(&report.overall_summary);
        output.push('\n');
        return output;
    }

    for group in &report.groups {
        output.push('\n');
        output.push_str(&format!("{}\n", group.date.format("%Y-%m-%d (%A)")));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for entry in &group.entries {
            output.push_str(&format!(
                "  * {} - {}\n",
                entry.timestamp.format("%H:%M"),
                entry.text
            ));
        }
        output.push_str(&format!("  Summary: {}\n", group.summary));
    }

    output.push('\n');
    output.push_str("Overall Summary\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&report.overall_summary);
    output.push('\n');

    output
}

/// Format a list of entries as a table, newest first.
pub fn format_entry_table(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<6} {:<17} {}\n",
        "ID", "Timestamp", "Text"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for entry in entries {
        output.push_str(&format!(
            "{:<6} {:<17} {}\n",
            entry.id,
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.text
        ));
    }

    output.push_str(&format!("\nTotal entries: {}\n", entries.len()));
    output
}
