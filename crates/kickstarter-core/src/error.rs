//! Error types for table scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Result type for kickstarter operations
pub type Result<T> = std::result::Result<T, KickstarterError>;

/// Errors that abort a scaffolding run.
///
/// Name validation problems are not errors; they are reported back to the
/// user and re-prompted.
#[derive(Debug, Error)]
pub enum KickstarterError {
    /// No extension with this key below the extensions directory
    #[error("extension '{key}' not found in {}", dir.display())]
    ExtensionNotFound { key: String, dir: PathBuf },

    /// Extension key that is a path rather than a directory name
    #[error("invalid extension key '{0}': must be a directory name without separators")]
    InvalidExtensionKey(String),

    /// The TCA file for the table is already there
    #[error("table configuration already exists: {}", path.display())]
    TableConfigurationExists { path: PathBuf },

    /// A definition file contains a value the validators reject
    #[error("invalid table definition: {0}")]
    InvalidDefinition(String),

    /// Field kind identifier not in the catalog
    #[error("unknown field kind: {0}")]
    UnknownFieldKind(String),

    /// Reading or writing a file failed
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The prompt collaborator failed (terminal closed, interrupted)
    #[error("prompt failed: {0}")]
    Prompt(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KickstarterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KickstarterError::ExtensionNotFound {
            key: "my_extension".into(),
            dir: PathBuf::from("packages"),
        };
        assert_eq!(
            err.to_string(),
            "extension 'my_extension' not found in packages"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let err = KickstarterError::io(
            "Configuration/TCA/tx_a_b.php",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("Configuration/TCA/tx_a_b.php"));
    }
}
