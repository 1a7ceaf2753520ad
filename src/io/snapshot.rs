use crate::entry::FileEntry;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct SnapshotNode {
    pub entry: FileEntry,
    pub children: Vec<SnapshotNode>,
}

/// Recursive listing of a root directory, directories first then files,
/// each group sorted by name.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub root: SnapshotNode,
}

impl Snapshot {
    pub fn build(root: &Path) -> Self {
        let entry = FileEntry::root(root);
        let children = read_children(root);
        Self {
            root: SnapshotNode { entry, children },
        }
    }

    /// Visit every node depth-first in display order with its depth
    /// (root is depth 0).
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&'a SnapshotNode, usize)) {
        fn go<'a>(node: &'a SnapshotNode, depth: usize, visit: &mut impl FnMut(&'a SnapshotNode, usize)) {
            visit(node, depth);
            for child in &node.children {
                go(child, depth + 1, visit);
            }
        }
        go(&self.root, 0, &mut visit);
    }

    #[cfg(test)]
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        self.walk(|node, _| paths.push(node.entry.path.clone()));
        paths
    }

    pub fn len(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _| count += 1);
        count
    }
}

/// Immediate children of `path`, recursing into real directories.
/// Unreadable directories yield no children.
fn read_children(path: &Path) -> Vec<SnapshotNode> {
    let read_dir = match fs::read_dir(path) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            tracing::debug!("Skipping unreadable directory {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut entries: Vec<FileEntry> = read_dir
        .flatten()
        .filter_map(|entry| FileEntry::from_path(entry.path()))
        .collect();

    entries.sort_by(|a, b| {
        if a.is_dir != b.is_dir {
            return b.is_dir.cmp(&a.is_dir);
        }
        a.name.cmp(&b.name)
    });

    entries
        .into_iter()
        .map(|entry| {
            let children = if entry.is_dir && !entry.is_symlink {
                read_children(&entry.path)
            } else {
                Vec::new()
            };
            SnapshotNode { entry, children }
        })
        .collect()
}
