//! Record of files touched during table creation

use std::fmt;
use std::path::{Path, PathBuf};

/// How a file was changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModificationKind {
    Created,
    Appended,
    Merged,
}

impl ModificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModificationKind::Created => "created",
            ModificationKind::Appended => "appended",
            ModificationKind::Merged => "merged",
        }
    }
}

impl fmt::Display for ModificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One file changed by the creator, path relative to the extension root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileModification {
    pub path: PathBuf,
    pub kind: ModificationKind,
}

impl FileModification {
    pub fn new(path: impl Into<PathBuf>, kind: ModificationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for FileModification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.path.display())
    }
}

/// Everything the creator touched, in write order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatorInformation {
    file_modifications: Vec<FileModification>,
}

impl CreatorInformation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, modification: FileModification) {
        self.file_modifications.push(modification);
    }

    pub fn file_modifications(&self) -> &[FileModification] {
        &self.file_modifications
    }

    pub fn len(&self) -> usize {
        self.file_modifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file_modifications.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.file_modifications.iter().any(|m| m.path == path)
    }
}
