//! Application configuration schema, defaults, and loading.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vitrans_i18n::Locale;

use crate::error::{AppError, AppResult};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "VITRANS_CONFIG";
/// Environment variable overriding the storage file path.
pub const STORAGE_PATH_VAR: &str = "VITRANS_STORAGE";
/// Environment variable overriding the startup language.
pub const LANGUAGE_VAR: &str = "VITRANS_LANGUAGE";

/// Main configuration structure for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Language and dictionary configuration.
    pub language: LanguageConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Notification timing configuration.
    pub notifications: NotificationConfig,
}

/// Language configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Language code dictionaries fall back to.
    pub default_code: String,
    /// Directory holding the `<code>.json` dictionary files.
    pub translations_dir: PathBuf,
    /// Base URL to fetch dictionaries from instead of the directory.
    pub translations_url: Option<String>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default_code: Locale::default().code().to_string(),
            translations_dir: PathBuf::from("translations"),
            translations_url: None,
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON file holding persisted state.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("vitrans-data.json"),
        }
    }
}

/// Notification timing configuration, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Fade-in duration before a notification is fully shown.
    pub fade_in_ms: u64,
    /// How long a notification stays fully visible.
    pub visible_ms: u64,
    /// Fade-out duration before removal.
    pub fade_out_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            fade_in_ms: 100,
            visible_ms: 3000,
            fade_out_ms: 300,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path`, layering environment overrides
    /// on top.
    ///
    /// # Errors
    /// Returns `AppError::Config` when the file exists but does not
    /// parse, or when the merged configuration fails validation.
    pub fn load(path: &Path) -> AppResult<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            info!("Loaded configuration from {:?}", path);
            serde_yaml::from_str(&raw)
                .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?
        } else {
            debug!("No configuration file at {:?}, using defaults", path);
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from the path named by `VITRANS_CONFIG`,
    /// falling back to `vitrans.yaml` in the working directory.
    pub fn load_from_env() -> AppResult<Self> {
        let path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "vitrans.yaml".to_string());
        Self::load(Path::new(&path))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var(STORAGE_PATH_VAR) {
            self.storage.path = PathBuf::from(path);
        }
        if let Ok(code) = env::var(LANGUAGE_VAR) {
            self.language.default_code = code;
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns `AppError::Config` naming the first invalid field.
    pub fn validate(&self) -> AppResult<()> {
        if Locale::from_code(&self.language.default_code).is_none() {
            return Err(AppError::Config(format!(
                "Unknown default language code '{}'",
                self.language.default_code
            )));
        }
        if self.storage.path.as_os_str().is_empty() {
            return Err(AppError::Config("Storage path is empty".to_string()));
        }
        if self.notifications.visible_ms == 0 {
            return Err(AppError::Config(
                "Notification visibility must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured default locale.
    ///
    /// Valid after `validate` has passed; an unparseable code falls
    /// back to the built-in default.
    pub fn default_locale(&self) -> Locale {
        Locale::from_code(&self.language.default_code).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrans_common::test_utils::create_temp_dir;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert_eq!(config.default_locale(), Locale::Vietnamese);
        assert_eq!(config.notifications.visible_ms, 3000);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = create_temp_dir();
        let config = AppConfig::load(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config.storage.path, PathBuf::from("vitrans-data.json"));
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_sections() {
        let dir = create_temp_dir();
        let path = dir.path().join("vitrans.yaml");
        std::fs::write(
            &path,
            "language:\n  default_code: en\nstorage:\n  path: /tmp/site.json\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.default_locale(), Locale::English);
        assert_eq!(config.storage.path, PathBuf::from("/tmp/site.json"));
        assert_eq!(config.notifications.fade_in_ms, 100);
    }

    #[test]
    fn test_unknown_language_code_is_rejected() {
        let mut config = AppConfig::default();
        config.language.default_code = "fr".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unparseable_file_is_an_error() {
        let dir = create_temp_dir();
        let path = dir.path().join("vitrans.yaml");
        std::fs::write(&path, "language: [unterminated").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }
}
