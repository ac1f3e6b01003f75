pub mod commands;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::domain::Category;

#[derive(Parser)]
#[command(name = "rapidreport")]
#[command(about = "Top headlines and news search in the terminal", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/rapidreport/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// NewsAPI key, overrides `api.api_key` from the config file
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Defaults to `tui`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print top headlines
    Headlines {
        /// One of general, business, science, sports
        #[arg(short = 'C', long, default_value_t = Category::General)]
        category: Category,

        /// Fetch every category at once
        #[arg(long, conflicts_with = "category")]
        all: bool,
    },
    /// Print search results
    Search {
        /// Words to search for
        query: String,
    },
    /// Launch the TUI
    Tui,
}

impl Cli {
    /// Apply command-line settings on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(api_key) = self.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            config.api.api_key = Some(api_key.clone());
        }
    }
}

/// Open the `--log-file` target, creating missing parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}
