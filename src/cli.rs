//! Command line interface definition.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Version string including git SHA and build date.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("GHOSTWRITE_BUILD_DATE"),
    ")"
);

/// Version string for release builds.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GHOSTWRITE_BUILD_DATE"),
    ")"
);

/// Replay a text file as if someone were typing it into vim.
#[derive(Debug, Parser)]
#[command(name = "ghostwrite", version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Text file to type out
    #[arg(value_name = "FILE", required_unless_present = "show_config")]
    pub file: Option<PathBuf>,

    /// Upper bound for the random delay after each character, in milliseconds
    #[arg(long, value_name = "MS")]
    pub max_delay: Option<u64>,

    /// Delay after each space, in milliseconds
    #[arg(long, value_name = "MS")]
    pub space_delay: Option<u64>,

    /// Seed for the delay generator, for reproducible runs
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Terminal title to set on startup
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Command typed into the status line at the end
    #[arg(long, value_name = "TEXT")]
    pub save_command: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Apply command line overrides on top of `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ms) = self.max_delay {
            config.timing.max_char_delay_ms = ms;
        }
        if let Some(ms) = self.space_delay {
            config.timing.space_delay_ms = ms;
        }
        if let Some(seed) = self.seed {
            config.timing.seed = Some(seed);
        }
        if let Some(title) = &self.title {
            config.display.title = title.clone();
        }
        if let Some(command) = &self.save_command {
            config.display.save_command = command.clone();
        }
    }
}
