//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "replog")]
#[command(about = "Work log and report generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new work log entry
    Log {
        /// Work description
        #[arg(short, long)]
        text: String,

        /// Date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Generate a report for a period
    Report {
        /// Report period (weekly, biweekly, monthly)
        #[arg(short, long, default_value = "weekly")]
        period: String,

        /// Anchor date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        anchor: Option<String>,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List logged entries, newest first
    List {
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete an entry by id
    Delete {
        /// Entry id to delete
        #[arg(short, long)]
        id: i64,
    },

    /// Remove all entries
    Clear {
        /// Confirm the deletion
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
