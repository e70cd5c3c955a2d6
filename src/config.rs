//! Configuration for todofile.
//!
//! An optional `config.yaml` in the data directory can move the store file
//! and turn on change logging. A missing file is not an error; every field
//! has a default.

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name within the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// User configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the store file, overriding `~/.todofile`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_directory: Option<String>,

    /// Store file name, overriding `todos.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Whether to append successful mutations to the change log.
    #[serde(default)]
    pub log_changes: bool,
}

impl Config {
    /// Load config from the default data directory.
    ///
    /// Returns `Ok(None)` if the home directory is unknown or no config
    /// file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Option<Self>> {
        match paths::data_dir() {
            Some(dir) => Self::load_from(&dir),
            None => Ok(None),
        }
    }

    /// Load config from a specific directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(base_dir: &Path) -> Result<Option<Self>> {
        let config_path = Self::config_path(base_dir);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Save config to a specific directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to(&self, base_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(base_dir)?;
        let content = serde_yaml::to_string(self)?;
        std::fs::write(Self::config_path(base_dir), content)?;
        Ok(())
    }

    /// The config file path for a base directory.
    #[must_use]
    pub fn config_path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.data_directory.is_none());
        assert!(config.file_name.is_none());
        assert!(!config.log_changes);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::load_from(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            data_directory: Some("/tmp/todos".to_string()),
            file_name: Some("work.json".to_string()),
            log_changes: true,
        };
        config.save_to(dir.path()).unwrap();

        let loaded = Config::load_from(dir.path()).unwrap();
        assert_eq!(loaded, Some(config));
    }

    #[test]
    fn test_yaml_format() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            data_directory: Some("/tmp/todos".to_string()),
            file_name: None,
            log_changes: true,
        };
        config.save_to(dir.path()).unwrap();

        let content = std::fs::read_to_string(Config::config_path(dir.path())).unwrap();
        assert!(content.contains("data_directory: /tmp/todos"));
        assert!(content.contains("log_changes: true"));
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let dir = TempDir::new().unwrap();
        Config::default().save_to(dir.path()).unwrap();

        let content = std::fs::read_to_string(Config::config_path(dir.path())).unwrap();
        assert!(!content.contains("data_directory"));
        assert!(!content.contains("file_name"));
        assert!(content.contains("log_changes: false"));
    }

    #[test]
    fn test_load_partial_yaml() {
        let dir = TempDir::new().unwrap();
        std::fs::write(Config::config_path(dir.path()), "log_changes: true\n").unwrap();

        let loaded = Config::load_from(dir.path()).unwrap().unwrap();
        assert!(loaded.log_changes);
        assert!(loaded.data_directory.is_none());
        assert!(loaded.file_name.is_none());
    }

    #[test]
    fn test_load_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        std::fs::write(Config::config_path(dir.path()), "log_changes: [not a bool").unwrap();

        assert!(Config::load_from(dir.path()).is_err());
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("nested");

        Config::default().save_to(&nested).unwrap();
        assert!(Config::config_path(&nested).exists());
    }
}
