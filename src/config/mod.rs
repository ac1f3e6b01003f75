//! Configuration management for RapidReport.
//!
//! Configuration is read from `~/.config/rapidreport/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::date::{system_locale, DEFAULT_LOCALE, DEFAULT_PATTERN};
use crate::domain::{Category, DateFormatter};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub ui: UiConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

/// Remote news API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Country code for top headlines.
    pub country: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            country: "us".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a search is sent.
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 1000 }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub default_category: Category,
    pub locale: String,
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_category: Category::General,
            locale: system_locale().unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            date_format: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl UiConfig {
    pub fn date_formatter(&self) -> DateFormatter {
        DateFormatter::new(&self.locale, &self.date_format)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_create(&Self::default_config_path()?)
    }

    /// Load `path`, writing the commented default file there first if it is missing.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::create_default_config(path)?;
            tracing::info!("Created default config at {}", path.display());
            return Ok(Self::default());
        }

        Self::load_from(path)
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the default config file path: `~/.config/rapidreport/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("rapidreport").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# RapidReport Configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"
#
# Keybindings can be specified as:
# - Single characters: "a", "A", "1", "/"
# - Special keys: Enter, Tab, BackTab, Backspace, Delete, Home, End,
#   PageUp, PageDown, Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"

[api]
base_url = "https://newsapi.org/v2/"
# Get a key at https://newsapi.org; can also be passed with --api-key
# or the NEWS_API_KEY environment variable.
# api_key = "your-key"
country = "us"
timeout_secs = 10

[search]
# Wait this long after the last keystroke before searching
debounce_ms = 1000

[ui]
# One of General, Business, Science, Sports (any case)
default_category = "General"
# Locale for month names, e.g. "en_US", "de_DE", "fr_FR".
# Taken from LC_ALL, LC_TIME or LANG when unset, else "en_US".
# locale = "en_US"
# strftime pattern for article dates
date_format = "%B %-d, %Y"

[colors]
# Border colors
active_border = "Cyan"
inactive_border = "DarkGray"

# Selection highlight
selection_bg = "Cyan"
selection_fg = "Black"

# Category tabs
tab_active = "Cyan"
tab_inactive = "Gray"

# Article list
article_title = "White"
metadata_source = "Yellow"
metadata_date = "DarkGray"
metadata_link = "Blue"

# Loading and error messages
loading = "Cyan"
error = "LightRed"

# Status bar
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
# Navigation
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
next_page = ["n", "PageDown"]
prev_page = ["p", "PageUp"]
next_category = ["Tab", "l", "Right"]
prev_category = ["BackTab", "Shift+Tab", "h", "Left"]

# Actions
select = ["Enter"]
open_in_browser = ["o"]
search = ["/"]
retry = ["r"]
back = ["Esc"]
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
