//! Error types for replog

use thiserror::Error;

/// Main error type for the replog application
#[derive(Debug, Error)]
pub enum ReplogError {
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ReplogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ReplogError::StorageUnavailable(_) => 2,
            ReplogError::InvalidPeriod(_) => 3,
            ReplogError::InvalidEntry(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ReplogError::InvalidPeriod(kind) => {
                format!(
                    "Invalid period: '{}'\n\n\
                    Valid periods:\n\
                    • weekly   (last 7 days)\n\
                    • biweekly (last 14 days)\n\
                    • monthly  (calendar month)\n\n\
                    Examples:\n\
                    replog report --period weekly\n\
                    replog report --period monthly --anchor 2024-01-15",
                    kind
                )
            }
            ReplogError::StorageUnavailable(msg) => {
                format!(
                    "Storage unavailable: {}\n\n\
                    Suggestions:\n\
                    • Check that the data directory is writable\n\
                    • Set REPLOG_HOME to a directory you own\n\
                    • If the database file is corrupt, move it aside and retry",
                    msg
                )
            }
            ReplogError::InvalidEntry(msg) => {
                format!(
                    "Invalid entry: {}\n\n\
                    Entry text must be non-empty.\n\
                    Example: replog log --text \"fixed bug in parser\"",
                    msg
                )
            }
            ReplogError::Config(msg) => {
                if msg.contains("date") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM-DD\n\
                        Example: replog log --text \"wrote docs\" --date 2024-01-15",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ReplogError
pub type Result<T> = std::result::Result<T, ReplogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_period_suggestions() {
        let err = ReplogError::InvalidPeriod("yearly".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("yearly"));
        assert!(msg.contains("weekly"));
        assert!(msg.contains("biweekly"));
        assert!(msg.contains("monthly"));
        assert!(msg.contains("Examples"));
    }

    #[test]
    fn test_storage_unavailable_suggestions() {
        let err = ReplogError::StorageUnavailable("unable to open database".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("unable to open database"));
        assert!(msg.contains("REPLOG_HOME"));
    }

    #[test]
    fn test_invalid_entry_suggestions() {
        let err = ReplogError::InvalidEntry("entry text is empty".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("non-empty"));
        assert!(msg.contains("replog log"));
    }

    #[test]
    fn test_config_date_format_suggestions() {
        let err = ReplogError::Config("Invalid date format: 15/01/2024".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            ReplogError::StorageUnavailable("x".to_string()).exit_code(),
            2
        );
        assert_eq!(ReplogError::InvalidPeriod("x".to_string()).exit_code(), 3);
        assert_eq!(ReplogError::InvalidEntry("x".to_string()).exit_code(), 4);
        assert_eq!(ReplogError::Config("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = ReplogError::Config("bad value".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "bad value");
    }
}
