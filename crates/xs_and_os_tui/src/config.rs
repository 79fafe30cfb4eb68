//! Configuration for the terminal client.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::instrument;

/// Client configuration, read from an optional TOML file.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File that tracing output is written to.
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// Show the state panel on startup.
    show_debug: bool,

    /// Player colours.
    theme: ThemeConfig,

    /// Where these settings came from.
    #[serde(skip)]
    source: ConfigSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("xs_and_os.log"),
            log_filter: "info".to_string(),
            show_debug: false,
            theme: ThemeConfig::default(),
            source: ConfigSource::Defaults,
        }
    }
}

/// Origin of a loaded [`Config`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Display)]
pub enum ConfigSource {
    /// Read from this file.
    #[display("{}", _0.display())]
    File(PathBuf),
    /// No file; built-in defaults.
    #[default]
    #[display("defaults")]
    Defaults,
}

/// Colour names for each player, as written in the config file.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Colour for X.
    x: String,
    /// Colour for O.
    o: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            x: "lightblue".to_string(),
            o: "yellow".to_string(),
        }
    }
}

/// Resolved player colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Colour for X.
    pub x: Color,
    /// Colour for O.
    pub o: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::LightBlue,
            o: Color::Yellow,
        }
    }
}

impl ThemeConfig {
    /// Parses the colour names.
    #[instrument(skip(self), fields(x = %self.x, o = %self.o))]
    pub fn resolve(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            x: parse_color(&self.x)?,
            o: parse_color(&self.o)?,
        })
    }
}

#[track_caller]
fn parse_color(name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name)
        .map_err(|_| ConfigError::new(format!("Unknown colour '{}'", name)))
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Runs before logging is set up, so it reports through its result and
    /// [`Config::source`] rather than through tracing.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.theme.resolve()?;

        Ok(Self {
            source: ConfigSource::File(path.as_ref().to_path_buf()),
            ..config
        })
    }

    /// Loads configuration from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Overrides the log file.
    pub fn with_log_file(self, log_file: PathBuf) -> Self {
        Self { log_file, ..self }
    }

    /// Forces the state panel on.
    pub fn with_show_debug(self, show_debug: bool) -> Self {
        Self {
            show_debug: self.show_debug || show_debug,
            ..self
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
