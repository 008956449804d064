//! File access for the creator
//!
//! The creator decides what to write; a [`FileWriter`] does the writing and
//! reports it. Paths are relative to the extension root.

use super::report::{FileModification, ModificationKind};
use crate::error::{KickstarterError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait FileWriter {
    /// Current contents, `None` if the file does not exist
    fn read(&self, path: &Path) -> Result<Option<String>>;

    /// Replace the file with `contents` and report the change as `kind`
    fn write(
        &mut self,
        path: &Path,
        contents: &str,
        kind: ModificationKind,
    ) -> Result<FileModification>;
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(KickstarterError::io(path, e)),
    }
}

/// Writes into an extension directory on disk
#[derive(Debug, Clone)]
pub struct FsWriter {
    root: PathBuf,
}

impl FsWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileWriter for FsWriter {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        read_optional(&self.root.join(path))
    }

    fn write(
        &mut self,
        path: &Path,
        contents: &str,
        kind: ModificationKind,
    ) -> Result<FileModification> {
        let target = self.root.join(path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| KickstarterError::io(parent, e))?;
        }
        std::fs::write(&target, contents).map_err(|e| KickstarterError::io(&target, e))?;
        debug!(path = %target.display(), %kind, bytes = contents.len(), "wrote file");

        Ok(FileModification::new(path, kind))
    }
}

/// Keeps writes in memory, reading through to an optional directory for
/// files it has not written yet. Used for dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    base: Option<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay on top of an existing directory
    pub fn overlay(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
            files: BTreeMap::new(),
        }
    }

    /// Seed a file as if it already existed
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    pub fn file(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files
            .iter()
            .map(|(path, contents)| (path.as_path(), contents.as_str()))
    }
}

impl FileWriter for MemoryWriter {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        if let Some(contents) = self.files.get(path) {
            return Ok(Some(contents.clone()));
        }
        match &self.base {
            Some(base) => read_optional(&base.join(path)),
            None => Ok(None),
        }
    }

    fn write(
        &mut self,
        path: &Path,
        contents: &str,
        kind: ModificationKind,
    ) -> Result<FileModification> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(FileModification::new(path, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_writer_creates_parents() {
        let dir = TempDir::new().unwrap();
        let mut writer = FsWriter::new(dir.path());
        let path = Path::new("Configuration/TCA/tx_a_b.php");

        assert_eq!(writer.read(path).unwrap(), None);
        let modification = writer
            .write(path, "<?php\n", ModificationKind::Created)
            .unwrap();

        assert_eq!(modification.path, path);
        assert_eq!(
            std::fs::read_to_string(dir.path().join(path)).unwrap(),
            "<?php\n"
        );
        assert_eq!(writer.read(path).unwrap().as_deref(), Some("<?php\n"));
    }

    #[test]
    fn test_memory_overlay_reads_through() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("ext_tables.sql"), "-- existing\n").unwrap();

        let mut writer = MemoryWriter::overlay(dir.path());
        let path = Path::new("ext_tables.sql");
        assert_eq!(writer.read(path).unwrap().as_deref(), Some("-- existing\n"));

        writer
            .write(path, "-- changed\n", ModificationKind::Appended)
            .unwrap();
        assert_eq!(writer.read(path).unwrap().as_deref(), Some("-- changed\n"));
        assert_eq!(
            std::fs::read_to_string(dir.path().join(path)).unwrap(),
            "-- existing\n"
        );
    }
}
