use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Browse a restaurant menu in the terminal.
#[derive(Debug, Parser)]
#[command(name = "menucard", version, about)]
pub struct Cli {
    /// Path to config file (default: ~/.config/menucard/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the menu endpoint
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Write logs to this file instead of the cache directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Command-line flags win over file values.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.menu.url = url.clone();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
