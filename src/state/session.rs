// Session - the working context shared by snapshot, preview and rename pass
use crate::io::{self, RenameError, Snapshot};
use crate::preview::Preview;
use crate::rule::RenameRule;
use crate::state::{ExclusionSet, TreeState};
use std::path::{Path, PathBuf};

pub struct Session {
    pub root: Option<PathBuf>,
    pub snapshot: Option<Snapshot>,
    pub exclusions: ExclusionSet,
    pub tree: TreeState,
    pub rule: RenameRule,
    pub preview: Preview,
    excluded_marker: String,
}

impl Session {
    pub fn new(excluded_marker: impl Into<String>) -> Self {
        Self {
            root: None,
            snapshot: None,
            exclusions: ExclusionSet::new(),
            tree: TreeState::new(),
            rule: RenameRule::default(),
            preview: Preview::default(),
            excluded_marker: excluded_marker.into(),
        }
    }

    /// Switch to a new root folder and list it from scratch.
    pub fn set_root(&mut self, path: &Path) -> Result<(), RenameError> {
        let root = io::normalize_root(path);
        if !root.is_dir() {
            return Err(RenameError::RootMissing(root));
        }
        tracing::info!("Root set to {}", root.display());
        self.tree.reset(&root);
        self.root = Some(root);
        self.rebuild();
        Ok(())
    }

    /// Re-list the root directory and recompute the preview.
    pub fn rebuild(&mut self) {
        let Some(root) = &self.root else {
            return;
        };
        let snapshot = Snapshot::build(root);
        tracing::debug!("Snapshot of {} has {} entries", root.display(), snapshot.len());
        self.tree.retain_existing();
        if !self.tree.is_expanded(root) {
            self.tree.toggle_expanded(root);
        }
        self.snapshot = Some(snapshot);
        self.refresh_preview();
    }

    pub fn set_rule(&mut self, search: &str, replace: &str) {
        self.rule = RenameRule::new(search, replace);
        self.refresh_preview();
    }

    pub fn toggle_exclusion(&mut self, path: &Path) -> bool {
        let excluded = self.exclusions.toggle(path);
        self.refresh_preview();
        excluded
    }

    pub fn refresh_preview(&mut self) {
        self.preview = match &self.snapshot {
            Some(snapshot) => {
                Preview::compute(snapshot, &self.rule, &self.exclusions, &self.excluded_marker)
            }
            None => Preview::default(),
        };
    }

    /// Check that `root_input` names the loaded root and that it still exists.
    ///
    /// A folder typed into the field but never loaded must not be mistaken
    /// for the folder the preview was built from.
    pub fn check_ready(&self, root_input: &str) -> Result<&Path, RenameError> {
        let input = root_input.trim();
        let Some(root) = self.root.as_deref() else {
            return Err(RenameError::NoRoot);
        };
        if input.is_empty() {
            return Err(RenameError::NoRoot);
        }
        let typed = io::normalize_root(Path::new(input));
        if typed != root {
            return Err(RenameError::RootNotLoaded(typed));
        }
        if !root.is_dir() {
            return Err(RenameError::RootMissing(root.to_path_buf()));
        }
        Ok(root)
    }

    /// Run a rename pass with `rule`.
    ///
    /// On success the exclusions are cleared. The snapshot is rebuilt either
    /// way since a failed pass may have renamed some entries already.
    pub fn execute(&mut self, rule: &RenameRule) -> Result<usize, RenameError> {
        let Some(root) = self.root.clone() else {
            return Err(RenameError::NoRoot);
        };
        let result = io::execute_rename(&root, rule, &self.exclusions);
        match &result {
            Ok(count) => {
                tracing::info!("Rename pass finished: {} item(s)", count);
                self.exclusions.clear();
            }
            Err(e) => tracing::error!("Rename pass aborted: {}", e),
        }
        self.rebuild();
        result
    }

    pub fn create_folder(&mut self, base_name: &str) -> Result<PathBuf, RenameError> {
        let Some(root) = self.root.clone() else {
            return Err(RenameError::NoRoot);
        };
        let created = io::create_unique_folder(&root, base_name)?;
        self.rebuild();
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::PreviewState;
    use std::fs;
    use tempfile::tempdir;

    fn session_with_reports() -> (tempfile::TempDir, Session) {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("report.txt"), b"").unwrap();
        fs::write(dir.path().join("report_old.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("report_assets")).unwrap();
        let mut session = Session::new("(除外)");
        session.set_root(dir.path()).unwrap();
        (dir, session)
    }

    #[test]
    fn test_set_root_missing() {
        let dir = tempdir().unwrap();
        let mut session = Session::new("(x)");
        let err = session.set_root(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, RenameError::RootMissing(_)));
        assert!(session.snapshot.is_none());
    }

    #[test]
    fn test_rule_change_recomputes_without_rebuild() {
        let (dir, mut session) = session_with_reports();
        assert_eq!(session.preview.matched, 0);

        // Created after the snapshot; must not show up until a rebuild
        fs::write(dir.path().join("report_late.txt"), b"").unwrap();

        session.set_rule("report", "summary");
        assert_eq!(session.preview.matched, 3);
        assert!(session.preview.row(&dir.path().join("report_late.txt")).is_none());

        session.rebuild();
        assert_eq!(session.preview.matched, 4);
    }

    #[test]
    fn test_toggle_updates_preview() {
        let (dir, mut session) = session_with_reports();
        session.set_rule("report", "summary");
        let old = dir.path().join("report_old.txt");

        assert!(session.toggle_exclusion(&old));
        assert_eq!(session.preview.row(&old).unwrap().state, PreviewState::Excluded);

        assert!(!session.toggle_exclusion(&old));
        assert_eq!(session.preview.row(&old).unwrap().state, PreviewState::Matched);
    }

    #[test]
    fn test_execute_clears_exclusions_and_rebuilds() {
        let (dir, mut session) = session_with_reports();
        session.set_rule("report", "summary");
        session.toggle_exclusion(&dir.path().join("report_old.txt"));

        let rule = session.rule.clone();
        assert_eq!(session.execute(&rule).unwrap(), 2);
        assert!(session.exclusions.is_empty());

        let paths = session.snapshot.as_ref().unwrap().paths();
        assert!(paths.contains(&dir.path().join("summary.txt")));
        assert!(paths.contains(&dir.path().join("summary_assets")));
        assert!(paths.contains(&dir.path().join("report_old.txt")));
        // Remaining match is the entry that was excluded
        assert_eq!(session.preview.matched, 1);
    }

    #[test]
    fn test_failed_execute_keeps_exclusions() {
        let (dir, mut session) = session_with_reports();
        session.toggle_exclusion(&dir.path().join("report.txt"));
        let err = session.execute(&RenameRule::new("report", "")).unwrap_err();
        assert!(matches!(err, RenameError::EmptyRule));
        assert_eq!(session.exclusions.len(), 1);
    }

    #[test]
    fn test_no_root_errors() {
        let mut session = Session::new("(x)");
        let err = session.execute(&RenameRule::new("a", "b")).unwrap_err();
        assert!(matches!(err, RenameError::NoRoot));
        assert_eq!(err.to_string(), "Choose a folder first");
        assert!(matches!(session.create_folder("new"), Err(RenameError::NoRoot)));
        assert!(matches!(session.check_ready(""), Err(RenameError::NoRoot)));
    }

    #[test]
    fn test_check_ready_rejects_unloaded_folder() {
        let (dir, session) = session_with_reports();
        let other = tempdir().unwrap();
        let typed = other.path().display().to_string();

        let err = session.check_ready(&typed).unwrap_err();
        assert!(matches!(err, RenameError::RootNotLoaded(ref p) if p == other.path()));
        assert!(err.to_string().contains(&typed));
        assert!(matches!(session.check_ready("  "), Err(RenameError::NoRoot)));

        // Same folder, typed with a trailing separator and padding
        let same = format!("  {}/ ", dir.path().display());
        assert_eq!(session.check_ready(&same).unwrap(), dir.path());
    }

    #[test]
    fn test_check_ready_root_removed() {
        let (dir, session) = session_with_reports();
        let typed = dir.path().display().to_string();
        let root = dir.path().to_path_buf();
        dir.close().unwrap();
        let err = session.check_ready(&typed).unwrap_err();
        assert!(matches!(err, RenameError::RootMissing(p) if p == root));
    }

    #[test]
    fn test_create_folder_rebuilds() {
        let (dir, mut session) = session_with_reports();
        let created = session.create_folder("新しいフォルダー").unwrap();
        assert_eq!(created, dir.path().join("新しいフォルダー"));
        let again = session.create_folder("新しいフォルダー").unwrap();
        assert_eq!(again, dir.path().join("新しいフォルダー (2)"));
        assert!(session.preview.row(&again).is_some());
    }
}
