//! Startup configuration, read once from the user's config directory.
//!
//! A missing file means defaults; a file that exists but cannot be read or
//! parsed is an error, surfaced before the terminal enters raw mode.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

/// Errors loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Screensaver settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many logos drift across the screen.
    pub logo_count: u16,
    /// Outward drift rate, in displacement growth per second.
    pub speed: f64,
    /// Optional path to a logo template file; the built-in window logo is
    /// used when unset.
    pub template: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logo_count: 20,
            speed: 1.2,
            template: None,
        }
    }
}

impl Config {
    /// Load the config from `<config_dir>/windrift/config.toml`, falling
    /// back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(dirs) = ProjectDirs::from("", "", "windrift") else {
            return Ok(Self::default());
        };
        Self::load_from(&dirs.config_dir().join("config.toml"))
    }

    /// Load the config from an explicit path; a missing file yields
    /// defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_startup_constants() {
        let config = Config::default();
        assert_eq!(config.logo_count, 20);
        assert_eq!(config.speed, 1.2);
        assert!(config.template.is_none());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/windrift.toml")).unwrap();
        assert_eq!(config.logo_count, 20);
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let config: Config = toml::from_str("speed = 2.5").unwrap();
        assert_eq!(config.speed, 2.5);
        assert_eq!(config.logo_count, 20);
    }
}
