//! User settings loading and saving.

use crate::types::PackageManager;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PREFERRED_PM: &str = "auto";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// "auto" picks the first available manager in priority order;
    /// otherwise the named manager wins whenever it is installed.
    #[serde(default = "default_preferred_pm")]
    pub preferred_pm: String,
    /// Where transcripts are written when log saving is on.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_preferred_pm() -> String {
    DEFAULT_PREFERRED_PM.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            preferred_pm: default_preferred_pm(),
            log_dir: None,
        }
    }
}

impl Settings {
    /// The configured package manager, or None for "auto" and for values
    /// validation would reject.
    pub fn preferred_package_manager(&self) -> Option<PackageManager> {
        if self.preferred_pm == DEFAULT_PREFERRED_PM {
            return None;
        }
        self.preferred_pm.parse().ok()
    }
}

pub fn default_settings_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config/jera/settings.toml")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {source}")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },
    #[error("failed to create settings dir {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write settings at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn parse_settings(text: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(text)
}

pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    let text =
        toml::to_string_pretty(settings).map_err(|source| ConfigError::Serialize { source })?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
