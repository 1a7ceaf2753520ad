use std::fs;
use std::path::{Path, PathBuf};

/// A single file or directory captured in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Display name; invalid UTF-8 is replaced with U+FFFD.
    pub name: String,
    /// False when the on-disk name is not valid UTF-8. Such entries are
    /// shown but never renamed.
    pub utf8_name: bool,
    pub is_dir: bool,
    pub is_symlink: bool,
}

impl FileEntry {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let symlink_meta = fs::symlink_metadata(&path).ok()?;
        let is_symlink = symlink_meta.is_symlink();
        let file_name = path.file_name()?;
        let utf8_name = file_name.to_str().is_some();
        let name = file_name.to_string_lossy().to_string();

        // Follows links, so a link to a directory counts as a directory.
        let is_dir = fs::metadata(&path)
            .map(|m| m.is_dir())
            .unwrap_or(false);

        Some(Self {
            path,
            name,
            utf8_name,
            is_dir,
            is_symlink,
        })
    }

    /// Synthetic entry standing for the snapshot root itself.
    pub fn root(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            path: path.to_path_buf(),
            name,
            utf8_name: true,
            is_dir: true,
            is_symlink: false,
        }
    }
}
