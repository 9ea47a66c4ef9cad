use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fixture file replacing the built-in catalog.
    pub seed_file: Option<PathBuf>,
    pub log_level: String,
    pub activity_capacity: usize,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            log_level: "info".to_string(),
            activity_capacity: 20,
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    /// Read `settings.json` from the data directory; a missing file gives
    /// the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = data_dir().join(SETTINGS_FILE);
        Ok(Self::from_file(&path)?.unwrap_or_default())
    }

    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

/// Get the data directory.
/// Uses REELADMIN_DATA_DIR env var, then the platform data directory, then ./data/
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("REELADMIN_DATA_DIR") {
        PathBuf::from(dir)
    } else if let Some(dir) = dirs::data_dir() {
        dir.join("reeladmin")
    } else {
        PathBuf::from("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "log_level": "debug", "activity_capacity": 5 }"#).unwrap();
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
        assert_eq!(config.activity_capacity, 5);
        assert_eq!(config.window_width, 1280.0);
        assert_eq!(config.seed_file, None);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let result = AppConfig::from_file(Path::new("/definitely/not/settings.json"));
        assert!(matches!(result, Ok(None)));
    }
}
