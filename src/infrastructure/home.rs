//! Data directory resolution

use crate::error::{ReplogError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The replog data directory, holding the entry database and config file.
///
/// Resolved from the REPLOG_HOME environment variable when set, otherwise
/// `~/.replog`. Created on first use.
#[derive(Debug, Clone)]
pub struct ReplogHome {
    pub root: PathBuf,
}

impl ReplogHome {
    pub fn new(root: PathBuf) -> Self {
        ReplogHome { root }
    }

    /// Resolve the data directory, creating it if it does not exist.
    pub fn discover() -> Result<Self> {
        if let Ok(root) = std::env::var("REPLOG_HOME") {
            return Self::at(PathBuf::from(root));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            ReplogError::Config(
                "Could not determine home directory; set REPLOG_HOME".to_string(),
            )
        })?;
        Self::at(home.join(".replog"))
    }

    /// Use a specific directory, creating it if needed.
    pub fn at(root: PathBuf) -> Result<Self> {
        if !root.exists() {
            fs::create_dir_all(&root)?;
        }
        Ok(ReplogHome::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> PathBuf {
        self.root.join("replog.db")
    }

    /// Path of the TOML config file.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }
}
