//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod home;
pub mod store;
pub mod summarizer;

pub use config::Config;
pub use home::ReplogHome;
pub use store::{EntryStore, SqliteStore};
pub use summarizer::{Summarizer, SummarizerConfig, SummarizerGateway};
