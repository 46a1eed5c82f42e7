use chrono::{Local, NaiveDate};
use clap::Parser;
use replog::application::{delete_entry, list_entries, log_entry, ReportService};
use replog::cli::{format_entry_table, format_report_text, Cli, Commands};
use replog::domain::{PeriodKind, PeriodSpec};
use replog::error::ReplogError;
use replog::infrastructure::{Config, ReplogHome, SqliteStore, SummarizerGateway};
use std::str::FromStr;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replog=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ReplogError> {
    match cli.command {
        Commands::Log { text, date } => {
            let timestamp = match date {
                Some(d) => parse_date(&d)?
                    .and_hms_opt(0, 0, 0)
                    .expect("midnight is valid"),
                None => Local::now().naive_local(),
            };

            let home = ReplogHome::discover()?;
            let store = SqliteStore::open(&home.database_path())?;
            let entry = log_entry::log_entry(&store, &text, timestamp)?;

            println!("Logged entry #{}", entry.id);
            println!("  Date: {}", entry.timestamp.format("%Y-%m-%d %H:%M"));
            println!("  Text: {}", entry.text);
            Ok(())
        }
        Commands::Report {
            period,
            anchor,
            json,
        } => {
            // Period and anchor validation happens before any storage I/O
            let kind = PeriodKind::from_str(&period).map_err(ReplogError::InvalidPeriod)?;
            let anchor_date = match anchor {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };
            let spec = PeriodSpec::new(kind, anchor_date);

            let home = ReplogHome::discover()?;
            let store = SqliteStore::open(&home.database_path())?;
            let config = Config::load(&home.config_path())?;
            let summarizer = SummarizerGateway::new(config.summarizer());

            let service = ReportService::new(&store, &summarizer);
            let report = service.generate(spec)?;

            if json {
                let rendered = serde_json::to_string_pretty(&report)
                    .map_err(|e| ReplogError::Config(format!("Failed to render JSON: {}", e)))?;
                println!("{}", rendered);
            } else {
                print!("{}", format_report_text(&report));
            }
            Ok(())
        }
        Commands::List { limit } => {
            let home = ReplogHome::discover()?;
            let store = SqliteStore::open(&home.database_path())?;
            let entries = list_entries::list_entries(&store, limit)?;

            println!("{}", format_entry_table(&entries).trim_end());
            Ok(())
        }
        Commands::Delete { id } => {
            let home = ReplogHome::discover()?;
            let store = SqliteStore::open(&home.database_path())?;

            if delete_entry::delete_entry(&store, id)? {
                println!("Deleted entry #{}", id);
                Ok(())
            } else {
                Err(ReplogError::InvalidEntry(format!(
                    "no entry with id {}",
                    id
                )))
            }
        }
        Commands::Clear { yes } => {
            if !yes {
                println!("This will delete ALL log entries. Re-run with --yes to confirm.");
                return Ok(());
            }

            let home = ReplogHome::discover()?;
            let store = SqliteStore::open(&home.database_path())?;
            let removed = delete_entry::clear_entries(&store)?;
            println!("Removed {} entries", removed);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let home = ReplogHome::discover()?;
            let mut config = Config::load(&home.config_path())?;

            if list {
                println!(
                    "api_key = {}",
                    if config.api_key.is_some() {
                        "<set>"
                    } else {
                        "<unset>"
                    }
                );
                println!("base_url = {}", config.base_url);
                println!("model = {}", config.model);
                println!("timeout_secs = {}", config.timeout_secs);
                println!("fallback_max_chars = {}", config.fallback_max_chars);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    config.set(&k, &v)?;
                    config.save(&home.config_path())?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = config.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: replog config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: api_key, base_url, model, timeout_secs, fallback_max_chars"
                );
                Ok(())
            }
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, ReplogError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ReplogError::Config(format!("Invalid date format: '{}'", s)))
}
