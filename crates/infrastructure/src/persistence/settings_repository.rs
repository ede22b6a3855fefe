//! Transport settings persistence.
//!
//! Stores settings in the platform-specific config directory:
//! - Linux: ~/.config/courier/settings.json
//! - macOS: ~/Library/Application Support/courier/settings.json
//! - Windows: %APPDATA%/courier/settings.json

use std::path::{Path, PathBuf};

use courier_domain::TransportSettings;
use tokio::fs;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for transport settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository backed by the default settings file.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Creates a repository backed by an explicit file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the default settings file, if a config directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("courier").join("settings.json"))
    }

    /// Returns the file this repository reads and writes.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads settings.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<TransportSettings, SettingsError> {
        let Some(path) = &self.path else {
            return Ok(TransportSettings::default());
        };

        if !fs::try_exists(path).await? {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(TransportSettings::default());
        }

        let content = fs::read(path).await?;
        let settings = from_json_bytes(&content)?;
        Ok(settings)
    }

    /// Saves settings, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no config directory or the write fails.
    pub async fn save(&self, settings: &TransportSettings) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Err(SettingsError::NoConfigDir);
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = to_json_stable_bytes(settings)?;
        fs::write(path, content).await?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn default_path_is_under_courier() {
        if let Some(p) = SettingsRepository::default_path() {
            assert!(p.ends_with("courier/settings.json"));
        }
    }

    #[tokio::test]
    async fn load_returns_default_when_no_file() {
        let dir = tempdir().unwrap();
        let repo = SettingsRepository::at(dir.path().join("missing.json"));
        let settings = repo.load().await.unwrap();
        assert_eq!(settings, TransportSettings::default());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempdir().unwrap();
        let repo = SettingsRepository::at(dir.path().join("nested").join("settings.json"));
        let settings = TransportSettings {
            timeout_ms: 1234,
            user_agent: "test-agent".to_string(),
            ..TransportSettings::default()
        };

        repo.save(&settings).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), settings);
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let result = SettingsRepository::at(&path).load().await;
        assert!(matches!(result, Err(SettingsError::Serialization(_))));
    }
}
