//! Configuration for notifeed
//!
//! Where collections live and how items are labelled. Loaded from
//! `<config dir>/notifeed/config.toml` when present:
//!
//! ```toml
//! [data]
//! dir = "data"
//!
//! [display]
//! avatar_dir = "assets/images"
//! avatar_prefix = "avatar-"
//! avatar_extension = "webp"
//! time_suffix = "ago"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`DataConfig::dir`].
pub const DATA_DIR_ENV: &str = "NOTIFEED_DATA_DIR";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Location of the JSON collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding `users.json`, `posts.json`, ...
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
        }
    }
}

/// Labels and asset naming for rendered items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_avatar_dir")]
    pub avatar_dir: String,
    #[serde(default = "default_avatar_prefix")]
    pub avatar_prefix: String,
    #[serde(default = "default_avatar_extension")]
    pub avatar_extension: String,
    /// Appended to the elapsed time, e.g. "5m ago".
    #[serde(default = "default_time_suffix")]
    pub time_suffix: String,
}

fn default_avatar_dir() -> String {
    "assets/images".to_string()
}
fn default_avatar_prefix() -> String {
    "avatar-".to_string()
}
fn default_avatar_extension() -> String {
    "webp".to_string()
}
fn default_time_suffix() -> String {
    "ago".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            avatar_dir: default_avatar_dir(),
            avatar_prefix: default_avatar_prefix(),
            avatar_extension: default_avatar_extension(),
            time_suffix: default_time_suffix(),
        }
    }
}

impl DisplayConfig {
    /// Avatar image path for an avatar key.
    pub fn avatar_path(&self, key: &str) -> String {
        let file = format!("{}{}.{}", self.avatar_prefix, key, self.avatar_extension);
        if self.avatar_dir.is_empty() {
            file
        } else {
            format!("{}/{}", self.avatar_dir.trim_end_matches('/'), file)
        }
    }

    /// Elapsed-time label, e.g. "1 day ago".
    pub fn time_label(&self, time: &str) -> String {
        if self.time_suffix.is_empty() {
            time.to_string()
        } else {
            format!("{} {}", time, self.time_suffix)
        }
    }
}

impl FeedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("notifeed").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults, then apply
    /// the `NOTIFEED_DATA_DIR` override.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            config.data.dir = PathBuf::from(dir);
        }
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Loading config from {:?}", path);
        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("data.dir".to_string()));
        }
        if self.display.avatar_extension.is_empty() {
            return Err(ConfigError::MissingField(
                "display.avatar_extension".to_string(),
            ));
        }
        if self.display.avatar_extension.contains(&['/', '.'][..]) {
            return Err(ConfigError::Invalid(
                "display.avatar_extension must be a bare extension".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    Invalid(String),
}
