//! Extension lookup
//!
//! Resolves an extension key to the directory the generated files go into.
//! The table builder only needs the table name prefix; the creator needs
//! the path.

use crate::error::{KickstarterError, Result};
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Marker files identifying an extension directory
const EXTENSION_MARKERS: &[&str] = &["composer.json", "ext_emconf.php"];

/// A resolved extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionInformation {
    pub key: String,
    pub composer_package_name: Option<String>,
    pub path: PathBuf,
}

impl ExtensionInformation {
    pub fn new(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            key: key.into(),
            composer_package_name: None,
            path: path.into(),
        }
    }

    pub fn with_composer_package_name(mut self, name: impl Into<String>) -> Self {
        self.composer_package_name = Some(name.into());
        self
    }

    /// `tx_` + key without underscores + `_`, e.g. `tx_myextension_`
    pub fn table_name_prefix(&self) -> String {
        format!("tx_{}_", self.key.replace('_', ""))
    }
}

/// Finds extensions by key
pub trait ExtensionLocator {
    fn resolve(&self, key: &str) -> Result<ExtensionInformation>;

    /// Keys that can be resolved, sorted
    fn available(&self) -> Result<Vec<String>>;
}

#[derive(Debug, Deserialize)]
struct ComposerManifest {
    name: Option<String>,
}

/// Looks for extensions one level below a base directory
#[derive(Debug, Clone)]
pub struct DirectoryLocator {
    base: PathBuf,
}

impl DirectoryLocator {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn is_extension(path: &Path) -> bool {
        EXTENSION_MARKERS
            .iter()
            .any(|marker| path.join(marker).is_file())
    }

    fn composer_package_name(path: &Path) -> Result<Option<String>> {
        let manifest_path = path.join("composer.json");
        if !manifest_path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&manifest_path)
            .map_err(|e| KickstarterError::io(&manifest_path, e))?;
        let manifest: ComposerManifest = serde_json::from_str(&content)?;
        Ok(manifest.name)
    }
}

/// A key names a directory directly below the base, nothing else
fn is_plain_key(key: &str) -> bool {
    let mut components = Path::new(key).components();
    !key.contains(['/', '\\'])
        && matches!(components.next(), Some(Component::Normal(_)))
        && components.next().is_none()
}

impl ExtensionLocator for DirectoryLocator {
    fn resolve(&self, key: &str) -> Result<ExtensionInformation> {
        if !key.is_empty() && !is_plain_key(key) {
            return Err(KickstarterError::InvalidExtensionKey(key.to_string()));
        }
        let path = self.base.join(key);
        if key.is_empty() || !Self::is_extension(&path) {
            return Err(KickstarterError::ExtensionNotFound {
                key: key.to_string(),
                dir: self.base.clone(),
            });
        }

        let mut information = ExtensionInformation::new(key, path.clone());
        if let Some(name) = Self::composer_package_name(&path)? {
            information = information.with_composer_package_name(name);
        }
        debug!(key, path = %path.display(), "resolved extension");

        Ok(information)
    }

    fn available(&self) -> Result<Vec<String>> {
        if !self.base.is_dir() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in WalkDir::new(&self.base).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.base.as_path()).to_path_buf();
                KickstarterError::io(path, e.into())
            })?;
            if entry.file_type().is_dir() && Self::is_extension(entry.path()) {
                keys.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        keys.sort();

        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn extensions_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let blog = dir.path().join("my_extension");
        std::fs::create_dir_all(&blog).unwrap();
        std::fs::write(
            blog.join("composer.json"),
            r#"{"name": "my-vendor/my-extension", "type": "typo3-cms-extension"}"#,
        )
        .unwrap();

        let legacy = dir.path().join("legacy_ext");
        std::fs::create_dir_all(&legacy).unwrap();
        std::fs::write(legacy.join("ext_emconf.php"), "<?php\n").unwrap();

        std::fs::create_dir_all(dir.path().join("not_an_extension")).unwrap();
        dir
    }

    #[test]
    fn test_table_name_prefix() {
        let info = ExtensionInformation::new("my_extension", "/tmp/my_extension");
        assert_eq!(info.table_name_prefix(), "tx_myextension_");
        let info = ExtensionInformation::new("blog", "/tmp/blog");
        assert_eq!(info.table_name_prefix(), "tx_blog_");
    }

    #[test]
    fn test_available_lists_extensions_only() {
        let dir = extensions_dir();
        let locator = DirectoryLocator::new(dir.path());
        assert_eq!(
            locator.available().unwrap(),
            vec!["legacy_ext".to_string(), "my_extension".to_string()]
        );
    }

    #[test]
    fn test_available_missing_base_is_empty() {
        let dir = TempDir::new().unwrap();
        let locator = DirectoryLocator::new(dir.path().join("missing"));
        assert!(locator.available().unwrap().is_empty());
    }

    #[test]
    fn test_resolve_reads_composer_name() {
        let dir = extensions_dir();
        let locator = DirectoryLocator::new(dir.path());

        let info = locator.resolve("my_extension").unwrap();
        assert_eq!(
            info.composer_package_name.as_deref(),
            Some("my-vendor/my-extension")
        );
        assert_eq!(info.path, dir.path().join("my_extension"));

        let legacy = locator.resolve("legacy_ext").unwrap();
        assert!(legacy.composer_package_name.is_none());
    }

    #[test]
    fn test_resolve_unknown_extension() {
        let dir = extensions_dir();
        let locator = DirectoryLocator::new(dir.path());
        let err = locator.resolve("not_an_extension").unwrap_err();
        assert!(matches!(err, KickstarterError::ExtensionNotFound { .. }));
    }

    #[test]
    fn test_resolve_rejects_paths_as_keys() {
        let dir = extensions_dir();
        let nested = dir.path().join("my_extension/nested");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("ext_emconf.php"), "<?php\n").unwrap();
        let locator = DirectoryLocator::new(dir.path().join("my_extension"));

        for key in ["../legacy_ext", "nested/.", "./nested", "..", "/tmp", "a\\b"] {
            let err = locator.resolve(key).unwrap_err();
            assert!(
                matches!(err, KickstarterError::InvalidExtensionKey(_)),
                "{}: {:?}",
                key,
                err
            );
        }
        assert_eq!(locator.resolve("nested").unwrap().key, "nested");
    }
}
