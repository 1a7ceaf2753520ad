use super::error::RenameError;
use crate::rule::RenameRule;
use crate::state::ExclusionSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Strip `.` components and trailing separators so that paths built from the
/// root compare equal no matter how the root was typed.
pub fn normalize_root(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Rename every non-excluded entry below `root` whose name matches the rule.
///
/// Entries are processed deepest first, so renaming a directory never
/// invalidates the paths of its children. The first failure aborts the pass;
/// renames already applied stay in place. Returns the number of renamed
/// entries.
pub fn execute_rename(
    root: &Path,
    rule: &RenameRule,
    exclusions: &ExclusionSet,
) -> Result<usize, RenameError> {
    if !root.is_dir() {
        return Err(RenameError::RootMissing(root.to_path_buf()));
    }
    if !rule.is_complete() {
        return Err(RenameError::EmptyRule);
    }

    // Collect up front so renames cannot disturb the directory iterators.
    let entries: Vec<(PathBuf, bool)> = WalkDir::new(root)
        .follow_links(false)
        .min_depth(1)
        .contents_first(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry during rename walk: {}", e);
                None
            }
        })
        .map(|entry| {
            let path = entry.into_path();
            let is_dir = path.is_dir();
            (path, is_dir)
        })
        .collect();

    let mut count = 0;
    for (path, is_dir) in entries {
        if exclusions.contains(&path) {
            tracing::debug!("Excluded: {}", path.display());
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!("Skipping non UTF-8 name: {}", path.display());
            continue;
        };

        let new_name = rule.apply(name, is_dir);
        if new_name == name {
            continue;
        }

        let target = path.with_file_name(&new_name);
        if target_taken(&path, &target) {
            return Err(RenameError::Collision {
                from: path,
                to: target,
            });
        }

        fs::rename(&path, &target).map_err(|source| RenameError::Rename {
            from: path.clone(),
            to: target.clone(),
            source,
        })?;
        tracing::info!("Renamed {} -> {}", path.display(), new_name);
        count += 1;
    }

    Ok(count)
}

/// True when `target` exists and is a different entry than `source`.
///
/// On case-insensitive filesystems a case-only rename finds the source
/// itself at the target path, which is not a collision.
fn target_taken(source: &Path, target: &Path) -> bool {
    let Ok(target_meta) = fs::symlink_metadata(target) else {
        return false;
    };
    match fs::symlink_metadata(source) {
        Ok(source_meta) => !same_entry(&source_meta, &target_meta, source, target),
        Err(_) => true,
    }
}

#[cfg(unix)]
fn same_entry(a: &fs::Metadata, b: &fs::Metadata, _: &Path, _: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    a.dev() == b.dev() && a.ino() == b.ino()
}

#[cfg(not(unix))]
fn same_entry(_: &fs::Metadata, _: &fs::Metadata, a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Create `base` under `root`, or `"base (N)"` for the smallest free `N >= 2`.
pub fn create_unique_folder(root: &Path, base: &str) -> Result<PathBuf, RenameError> {
    if !root.is_dir() {
        return Err(RenameError::RootMissing(root.to_path_buf()));
    }

    let mut candidate = root.join(base);
    let mut counter = 2;
    while fs::symlink_metadata(&candidate).is_ok() {
        candidate = root.join(format!("{} ({})", base, counter));
        counter += 1;
    }

    fs::create_dir(&candidate).map_err(|source| RenameError::CreateFolder {
        path: candidate.clone(),
        source,
    })?;
    tracing::info!("Created folder {}", candidate.display());
    Ok(candidate)
}
