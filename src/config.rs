//! Optional JSON configuration, read once at startup.
//!
//! A missing file means defaults. Command-line flags are layered on top by
//! the binary via [`Overrides`].

use crate::error::ConfigError;
use directories::ProjectDirs;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "flappy.log";
const DEFAULT_LOG_LEVEL: &str = "info";

fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("", "", "flappy").ok_or(ConfigError::NoConfigDir)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Directory holding PNG sprites; built-ins are used when unset.
    pub asset_dir: Option<PathBuf>,
    /// Seed for the pipe-gap RNG. Unset means a fresh seed every run.
    pub seed: Option<u64>,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            asset_dir: None,
            seed: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

/// Values given on the command line. `None` leaves the file's value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub asset_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub log_level: Option<String>,
}

impl GameConfig {
    /// `<config dir>/flappy/config.json` for the current platform.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        // Reject a bad level now rather than after the terminal is taken
        config.level_filter()?;
        Ok(config)
    }

    /// Write pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(dir) = overrides.asset_dir {
            self.asset_dir = Some(dir);
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Configured log file, or `<data dir>/flappy/flappy.log`.
    pub fn log_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_dir().join(LOG_FILE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "seed": 42 }"#).unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, "info");
        assert!(config.asset_dir.is_none());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ seed: ").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_invalid_level_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "log_level": "shouty" }"#).unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::InvalidLogLevel(level)) if level == "shouty"
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = GameConfig {
            asset_dir: Some(PathBuf::from("/tmp/sprites")),
            seed: Some(7),
            log_level: "debug".to_string(),
            log_file: None,
        };
        config.save(&path).unwrap();
        assert_eq!(GameConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_overrides_win() {
        let mut config = GameConfig {
            seed: Some(1),
            ..GameConfig::default()
        };
        config.apply(Overrides {
            seed: Some(99),
            log_level: Some("trace".to_string()),
            ..Overrides::default()
        });
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Trace);
        assert!(config.asset_dir.is_none());
    }

    #[test]
    fn test_explicit_log_file() {
        let config = GameConfig {
            log_file: Some(PathBuf::from("/tmp/flappy-test.log")),
            ..GameConfig::default()
        };
        assert_eq!(
            config.log_path().unwrap(),
            PathBuf::from("/tmp/flappy-test.log")
        );
    }
}
