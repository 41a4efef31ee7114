use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::fcitx::{DEFAULT_CHOOSE_KEYS, DEFAULT_LANG_CODE};

/// Application configuration module
/// This module handles the optional JSON configuration that tunes the
/// constant parts of the generated fcitx files and where they are written.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory receiving `<name>.conf` and `<name>.txt`
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Value of the `LangCode` field
    #[serde(default = "default_lang_code")]
    pub lang_code: String,

    /// Value of the `Choose` field: candidate selection keys
    #[serde(default = "default_choose_keys")]
    pub choose_keys: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_lang_code() -> String {
    DEFAULT_LANG_CODE.to_string()
}

fn default_choose_keys() -> String {
    DEFAULT_CHOOSE_KEYS.to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load the config file when given and present, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                log::warn!("Config file not found at {:?}, using defaults.", path);
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        crate::language_utils::validate_locale(&self.lang_code)
            .context("Invalid lang_code")?;

        if self.choose_keys.is_empty() {
            return Err(anyhow!("choose_keys must not be empty"));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.choose_keys.chars().find(|c| !seen.insert(*c)) {
            return Err(anyhow!("choose_keys contains '{}' more than once", dup));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            lang_code: default_lang_code(),
            choose_keys: default_choose_keys(),
            log_level: LogLevel::default(),
        }
    }
}
