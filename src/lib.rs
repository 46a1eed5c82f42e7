//! replog - Work log and report generator
//!
//! A command-line tool for recording short free-text entries about daily work
//! and assembling them into weekly, biweekly or monthly reports, optionally
//! condensed through an AI summarization backend with a local fallback.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ReplogError;
