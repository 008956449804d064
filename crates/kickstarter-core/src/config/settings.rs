//! Layered settings: defaults, `kickstarter.yaml`, environment

use crate::creator::CreatorOptions;
use crate::error::{KickstarterError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "kickstarter.yaml";

/// Environment variable overriding the extensions directory
pub const EXTENSIONS_DIR_ENV: &str = "KICKSTARTER_EXTENSIONS_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding one sub-directory per extension
    pub extensions_dir: PathBuf,

    /// Icon identifier written to `ctrl.typeicon_classes.default`
    pub type_icon: String,

    /// SQL definition for columns the framework does not create itself
    pub storage_column: String,
}

impl Default for Settings {
    fn default() -> Self {
        let creator = CreatorOptions::default();
        Self {
            extensions_dir: PathBuf::from("packages"),
            type_icon: creator.type_icon,
            storage_column: creator.storage_column,
        }
    }
}

impl Settings {
    /// Defaults, overlaid by `kickstarter.yaml` in `dir` if present, then by
    /// the environment
    pub fn load(dir: &Path) -> Result<Self> {
        let mut settings = Self::from_file(&dir.join(SETTINGS_FILE))?.unwrap_or_default();

        if let Ok(extensions_dir) = std::env::var(EXTENSIONS_DIR_ENV) {
            if !extensions_dir.is_empty() {
                settings.extensions_dir = PathBuf::from(extensions_dir);
            }
        }

        Ok(settings)
    }

    /// `None` when the file does not exist; a malformed file is an error
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(KickstarterError::io(path, e)),
        };
        debug!(path = %path.display(), "loading settings");

        if content.trim().is_empty() {
            return Ok(Some(Self::default()));
        }
        Ok(Some(serde_yaml::from_str(&content)?))
    }

    pub fn creator_options(&self) -> CreatorOptions {
        CreatorOptions {
            type_icon: self.type_icon.clone(),
            storage_column: self.storage_column.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Settings::from_file(&dir.path().join(SETTINGS_FILE)).unwrap(), None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "type_icon: content-news\n").unwrap();

        let settings = Settings::from_file(&path).unwrap().unwrap();
        assert_eq!(settings.type_icon, "content-news");
        assert_eq!(settings.extensions_dir, PathBuf::from("packages"));
        assert_eq!(
            settings.creator_options().storage_column,
            "varchar(255) DEFAULT '' NOT NULL"
        );
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "type_icon: [unclosed\n").unwrap();

        assert!(matches!(
            Settings::from_file(&path),
            Err(KickstarterError::Yaml(_))
        ));
    }
}
