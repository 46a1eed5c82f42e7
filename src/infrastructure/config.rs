//! Configuration management

use crate::error::{ReplogError, Result};
use crate::infrastructure::summarizer::SummarizerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_fallback_max_chars() -> usize {
    400
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// AI backend credential; absent means the heuristic fallback is always used
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_fallback_max_chars")]
    pub fallback_max_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            fallback_max_chars: default_fallback_max_chars(),
        }
    }
}

impl Config {
    /// Load config from the given file, falling back to defaults if absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save config to the given file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get a config value by key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api_key" => Ok(self.api_key.clone().unwrap_or_default()),
            "base_url" => Ok(self.base_url.clone()),
            "model" => Ok(self.model.clone()),
            "timeout_secs" => Ok(self.timeout_secs.to_string()),
            "fallback_max_chars" => Ok(self.fallback_max_chars.to_string()),
            _ => Err(ReplogError::Config(format!(
                "Unknown config key: '{}'. Valid keys: api_key, base_url, model, \
                timeout_secs, fallback_max_chars",
                key
            ))),
        }
    }

    /// Set a config value by key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_key" => {
                self.api_key = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "base_url" => self.base_url = value.to_string(),
            "model" => self.model = value.to_string(),
            "timeout_secs" => {
                self.timeout_secs = value.parse().map_err(|_| {
                    ReplogError::Config(format!("timeout_secs must be a number, got '{}'", value))
                })?;
            }
            "fallback_max_chars" => {
                self.fallback_max_chars = value.parse().map_err(|_| {
                    ReplogError::Config(format!(
                        "fallback_max_chars must be a number, got '{}'",
                        value
                    ))
                })?;
            }
            _ => {
                return Err(ReplogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys: api_key, base_url, model, \
                    timeout_secs, fallback_max_chars",
                    key
                )))
            }
        }
        Ok(())
    }

    /// Summarizer gateway settings derived from this config.
    pub fn summarizer(&self) -> SummarizerConfig {
        SummarizerConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            timeout_secs: self.timeout_secs,
            fallback_max_chars: self.fallback_max_chars,
        }
    }
}
