//! Configuration for ghostwrite
//!
//! Settings are read from `<config_dir>/ghostwrite/config.toml` when that file
//! exists. Every field has a default, so a partial file (or none at all) is fine.
//! Command line flags are applied on top by [`crate::cli::Cli::apply`].

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Keystroke timing and pauses
    pub timing: TimingConfig,
    /// What the fake editor shows
    pub display: DisplayConfig,
}

/// Keystroke timing, all values in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Upper bound (exclusive) of the random delay after a non-space character
    pub max_char_delay_ms: u64,
    /// Fixed delay after a space
    pub space_delay_ms: u64,
    /// Pause before the first character is typed
    pub start_pause_ms: u64,
    /// Pause between the last character and the save command
    pub end_pause_ms: u64,
    /// How long the finished screen stays up before the terminal is restored
    pub hold_ms: u64,
    /// Seed for the delay generator; random when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            max_char_delay_ms: 20,
            space_delay_ms: 10,
            start_pause_ms: 500,
            end_pause_ms: 500,
            hold_ms: 3000,
            seed: None,
        }
    }
}

impl TimingConfig {
    pub fn max_char_delay(&self) -> Duration {
        Duration::from_millis(self.max_char_delay_ms)
    }

    pub fn space_delay(&self) -> Duration {
        Duration::from_millis(self.space_delay_ms)
    }

    pub fn start_pause(&self) -> Duration {
        Duration::from_millis(self.start_pause_ms)
    }

    pub fn end_pause(&self) -> Duration {
        Duration::from_millis(self.end_pause_ms)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

/// Presentation of the simulated editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Window/tab title set on startup
    pub title: String,
    /// Command "typed" into the status line once the document is done
    pub save_command: String,
    /// Columns per tab stop when expanding tabs
    pub tab_width: usize,
    /// Narrowest gutter, in columns
    pub min_gutter_width: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "vim".to_string(),
            save_command: ":wq".to_string(),
            tab_width: 4,
            min_gutter_width: 4,
        }
    }
}

impl Config {
    /// Location of the user configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("ghostwrite").join("config.toml"))
    }

    /// Load the user configuration, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from an explicit file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
