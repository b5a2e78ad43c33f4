//! User settings
//!
//! Tunables for the session countdown and loan processing delay, stored as
//! JSON in the config directory.

use serde::{Deserialize, Serialize};

use super::paths::BankistPaths;
use crate::error::BankError;

/// User settings for Bankist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Seconds of inactivity before forced logout
    #[serde(default = "default_session_timeout")]
    pub session_timeout_secs: u32,

    /// Artificial loan processing delay, in seconds
    #[serde(default = "default_loan_processing")]
    pub loan_processing_secs: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_session_timeout() -> u32 {
    120
}

fn default_loan_processing() -> u32 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            session_timeout_secs: default_session_timeout(),
            loan_processing_secs: default_loan_processing(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist
    pub fn load_or_create(paths: &BankistPaths) -> Result<Self, BankError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)?;
            let settings: Settings = serde_json::from_str(&contents)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BankistPaths) -> Result<(), BankError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.session_timeout_secs, 120);
        assert_eq!(settings.loan_processing_secs, 3);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankistPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.session_timeout_secs = 60;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.session_timeout_secs, 60);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankistPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.session_timeout_secs, 120);
    }

    #[test]
    fn test_malformed_file_is_a_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankistPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BankError::Json(_)));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankistPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"session_timeout_secs": 30}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.session_timeout_secs, 30);
        assert_eq!(settings.loan_processing_secs, 3);
    }
}
