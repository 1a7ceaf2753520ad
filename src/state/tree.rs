// Tree state - which directories are expanded in the dual-pane view
//
// Both panes read this one set, so expanding a folder on either side
// expands it on the other.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct TreeState {
    expanded: HashSet<PathBuf>,
}

impl TreeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &Path) -> bool {
        self.expanded.contains(path)
    }

    pub fn toggle_expanded(&mut self, path: &Path) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_path_buf());
        }
    }

    /// Forget everything and open only the root, as after a fresh snapshot.
    pub fn reset(&mut self, root: &Path) {
        self.expanded.clear();
        self.expanded.insert(root.to_path_buf());
    }

    /// Drop expansion entries that no longer exist after a rebuild.
    pub fn retain_existing(&mut self) {
        self.expanded.retain(|p| p.is_dir());
    }
}
