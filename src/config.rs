//! Configuration file handling for ascii-stopwatch.
//!
//! Loads configuration from `<config dir>/ascii-stopwatch/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimerConfig {
    /// Start counting as soon as the clock appears.
    #[serde(default = "default_true")]
    pub autostart: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { autostart: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Show the key hint line under the digits.
    #[serde(default = "default_true")]
    pub hints: bool,
    /// Draw on the alternate screen so the shell is untouched on exit.
    #[serde(default = "default_true")]
    pub alternate_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hints: true,
            alternate_screen: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    /// off, error, warn, info, debug or trace
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "warn".to_string()
}

/// Commented template written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# ascii-stopwatch configuration

[timer]
# Start counting immediately (false = wait for 'p')
autostart = true

[display]
# Show the key hint line under the clock
hints = true
# Use the alternate screen (restores the previous terminal contents on exit)
alternate_screen = true

[log]
# off, error, warn, info, debug, trace
level = "warn"
# Write logs to a file instead of stderr
# file = "/tmp/ascii-stopwatch.log"
"#;

/// Errors that can occur when loading or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Config file already exists: {}", .0.display())]
    Exists(PathBuf),
    #[error("Failed to write config file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// path is used and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::load_from(path),
            None => {
                let path = default_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// Read and parse a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

/// Write the commented default config to `path`, creating parent
/// directories. Refuses to overwrite an existing file.
pub fn write_default(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::Exists(path.to_path_buf()));
    }

    let write_err = |e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG).map_err(write_err)
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-stopwatch").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-stopwatch/config.toml")
        })
}
