//! User settings for Mailroom
//!
//! Manages preferences for letter output and audit logging. Every field has a
//! default, so a missing or partial `config.json` is fine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::MailroomPaths;
use crate::error::MailroomError;

/// User settings for Mailroom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Directory letters are written to (system temp directory when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letters_dir: Option<PathBuf>,

    /// Currency symbol used in letters
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Closing signature of thank-you letters
    #[serde(default = "default_signature")]
    pub signature: String,

    /// Whether donor changes and saved letters are written to the audit log
    #[serde(default)]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_signature() -> String {
    "The Owners".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            letters_dir: None,
            currency_symbol: default_currency(),
            signature: default_signature(),
            audit_enabled: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &MailroomPaths) -> Result<Self, MailroomError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                MailroomError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MailroomError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MailroomPaths) -> Result<(), MailroomError> {
        std::fs::create_dir_all(paths.base_dir()).map_err(|e| {
            MailroomError::Io(format!("Failed to create config directory: {}", e))
        })?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            MailroomError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            MailroomError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve the letters directory
    ///
    /// An explicit override (command line or environment) wins over the
    /// settings file, which wins over the system temp directory.
    pub fn resolve_letters_dir(&self, override_dir: Option<PathBuf>) -> PathBuf {
        override_dir
            .or_else(|| self.letters_dir.clone())
            .unwrap_or_else(MailroomPaths::default_letters_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.signature, "The Owners");
        assert!(settings.letters_dir.is_none());
        assert!(!settings.audit_enabled);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MailroomPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MailroomPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            letters_dir: Some(temp_dir.path().join("letters")),
            signature: "The Board".to_string(),
            audit_enabled: true,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MailroomPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"audit_enabled": true}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.audit_enabled);
        assert_eq!(loaded.signature, "The Owners");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MailroomPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, MailroomError::Config(_)));
    }

    #[test]
    fn test_letters_dir_precedence() {
        let settings = Settings {
            letters_dir: Some(PathBuf::from("/srv/letters")),
            ..Settings::default()
        };

        assert_eq!(
            settings.resolve_letters_dir(Some(PathBuf::from("/override"))),
            PathBuf::from("/override")
        );
        assert_eq!(
            settings.resolve_letters_dir(None),
            PathBuf::from("/srv/letters")
        );
        assert_eq!(
            Settings::default().resolve_letters_dir(None),
            std::env::temp_dir()
        );
    }
}
