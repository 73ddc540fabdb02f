use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::validation::validate_api_base_url;

// Default configuration
pub const DEFAULT_API_BASE_URL: &str = "https://api.agritech.local/api/";
pub const DEFAULT_LOG_FILTER: &str = "agritech_client=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available on this platform")]
    NoConfigDir,
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persisted client preferences. Missing fields fall back to defaults so old
/// settings files keep loading.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub theme: String,
    /// Prefilled on the login screen
    pub last_email: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            theme: "dark".to_string(),
            last_email: String::new(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

pub fn settings_path() -> Result<PathBuf, ConfigError> {
    let proj = ProjectDirs::from("com", "agritech", "agritech-client")
        .ok_or(ConfigError::NoConfigDir)?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join("settings.json"))
}

pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut settings: Settings = serde_json::from_str(&content)?;
    if let Err(e) = validate_api_base_url(&settings.api_base_url) {
        warn!(url = %settings.api_base_url, "Ignoring configured API URL: {}", e);
        settings.api_base_url = DEFAULT_API_BASE_URL.to_string();
    }
    Ok(settings)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}

/// Load settings from the platform config dir, falling back to defaults.
pub fn load_settings() -> Settings {
    let path = match settings_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("Using default settings: {}", e);
            return Settings::default();
        }
    };
    if !path.exists() {
        return Settings::default();
    }
    load_settings_from(&path).unwrap_or_else(|e| {
        warn!(path = %path.display(), "Failed to load settings: {}", e);
        Settings::default()
    })
}

pub fn save_settings(settings: &Settings) -> Result<(), ConfigError> {
    let path = settings_path()?;
    save_settings_to(&path, settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings {
            theme: "light".into(),
            last_email: "grower@farm.io".into(),
            ..Settings::default()
        };
        save_settings_to(&path, &settings).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"theme":"light"}"#).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.theme, "light");
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_bad_api_url_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"api_base_url":"ftp://files.farm","theme":"light"}"#).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(loaded.theme, "light");

        fs::write(&path, r#"{"api_base_url":"http://localhost:8000/api/"}"#).unwrap();
        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.api_base_url, "http://localhost:8000/api/");
    }

    #[test]
    fn test_invalid_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(load_settings_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(load_settings_from(&path), Err(ConfigError::Io(_))));
    }
}
