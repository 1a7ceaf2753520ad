// Preview model for the before/after panes
//
// Computed from the snapshot, the current rule and the exclusion set. The
// view only paints what is in here.

use crate::entry::FileEntry;
use crate::io::Snapshot;
use crate::rule::{find_match, RenameRule};
use crate::state::{ExclusionSet, TreeState};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewState {
    Normal,
    Matched,
    Excluded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Before,
    After,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

/// A display name split into plain and highlighted runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Label {
    pub segments: Vec<Segment>,
}

impl Label {
    pub fn plain(text: impl Into<String>) -> Self {
        let mut label = Self::default();
        label.push(text, false);
        label
    }

    fn push(&mut self, text: impl Into<String>, highlighted: bool) {
        let text = text.into();
        if !text.is_empty() {
            self.segments.push(Segment { text, highlighted });
        }
    }

    /// Flatten to text, wrapping highlighted runs in the given markers.
    pub fn render(&self, open: &str, close: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if segment.highlighted {
                out.push_str(open);
                out.push_str(&segment.text);
                out.push_str(close);
            } else {
                out.push_str(&segment.text);
            }
        }
        out
    }
}

pub fn decide(entry: &FileEntry, rule: &RenameRule, exclusions: &ExclusionSet) -> PreviewState {
    if exclusions.contains(&entry.path) {
        PreviewState::Excluded
    } else if entry.utf8_name && rule.matches(&entry.name, entry.is_dir) {
        PreviewState::Matched
    } else {
        PreviewState::Normal
    }
}

pub fn label_for(
    entry: &FileEntry,
    state: PreviewState,
    pane: Pane,
    rule: &RenameRule,
    excluded_marker: &str,
) -> Label {
    let name = entry.name.as_str();
    match state {
        PreviewState::Normal => Label::plain(name),
        PreviewState::Excluded => Label::plain(format!("{} {}", excluded_marker, name)),
        PreviewState::Matched => {
            let Some(pos) = find_match(name, &rule.search, entry.is_dir) else {
                return Label::plain(name);
            };
            let end = pos + rule.search.len();
            let inserted = match pane {
                Pane::After if !rule.replace.is_empty() => rule.replace.as_str(),
                _ => rule.search.as_str(),
            };

            let mut label = Label::default();
            label.push(&name[..pos], false);
            label.push(inserted, true);
            label.push(&name[end..], false);
            label
        }
    }
}

#[derive(Clone, Debug)]
pub struct PreviewRow {
    pub path: PathBuf,
    pub depth: usize,
    pub is_dir: bool,
    pub has_children: bool,
    pub state: PreviewState,
    pub before: Label,
    pub after: Label,
}

impl PreviewRow {
    pub fn icon(&self) -> &'static str {
        if self.is_dir {
            "📁"
        } else {
            "📄"
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Preview {
    pub rows: Vec<PreviewRow>,
    pub matched: usize,
    pub excluded: usize,
}

impl Preview {
    /// Decide state and labels for every snapshot entry in display order.
    ///
    /// The root row stays `Normal`: a rename pass never renames the root.
    pub fn compute(
        snapshot: &Snapshot,
        rule: &RenameRule,
        exclusions: &ExclusionSet,
        excluded_marker: &str,
    ) -> Self {
        let mut preview = Preview::default();
        snapshot.walk(|node, depth| {
            let entry = &node.entry;
            let state = if depth == 0 {
                PreviewState::Normal
            } else {
                decide(entry, rule, exclusions)
            };
            match state {
                PreviewState::Matched => preview.matched += 1,
                PreviewState::Excluded => preview.excluded += 1,
                PreviewState::Normal => {}
            }

            preview.rows.push(PreviewRow {
                path: entry.path.clone(),
                depth,
                is_dir: entry.is_dir,
                has_children: !node.children.is_empty(),
                state,
                before: label_for(entry, state, Pane::Before, rule, excluded_marker),
                after: label_for(entry, state, Pane::After, rule, excluded_marker),
            });
        });
        preview
    }

    /// Indices of rows whose ancestors are all expanded.
    pub fn visible_rows(&self, tree: &TreeState) -> Vec<usize> {
        let mut visible = Vec::with_capacity(self.rows.len());
        let mut collapsed_at: Option<usize> = None;

        for (idx, row) in self.rows.iter().enumerate() {
            if let Some(depth) = collapsed_at {
                if row.depth > depth {
                    continue;
                }
                collapsed_at = None;
            }
            visible.push(idx);
            if row.is_dir && !tree.is_expanded(&row.path) {
                collapsed_at = Some(row.depth);
            }
        }
        visible
    }

    #[cfg(test)]
    pub fn row(&self, path: &std::path::Path) -> Option<&PreviewRow> {
        self.rows.iter().find(|row| row.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const MARKER: &str = "(除外)";

    fn render(label: &Label) -> String {
        label.render("【", "】")
    }

    fn report_snapshot() -> (tempfile::TempDir, Snapshot) {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("report.txt"), b"").unwrap();
        fs::write(dir.path().join("report_old.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("report_assets")).unwrap();
        fs::write(dir.path().join("notes.md"), b"").unwrap();
        let snapshot = Snapshot::build(dir.path());
        (dir, snapshot)
    }

    #[test]
    fn test_report_scenario_after_names() {
        let (dir, snapshot) = report_snapshot();
        let rule = RenameRule::new("report", "summary");
        let preview = Preview::compute(&snapshot, &rule, &ExclusionSet::new(), MARKER);

        let after = |name: &str| {
            let row = preview.row(&dir.path().join(name)).unwrap();
            assert_eq!(row.state, PreviewState::Matched);
            row.after.render("", "")
        };
        assert_eq!(after("report.txt"), "summary.txt");
        assert_eq!(after("report_old.txt"), "summary_old.txt");
        assert_eq!(after("report_assets"), "summary_assets");

        let notes = preview.row(&dir.path().join("notes.md")).unwrap();
        assert_eq!(notes.state, PreviewState::Normal);
        assert_eq!(preview.matched, 3);
    }

    #[test]
    fn test_before_and_after_brackets() {
        let (dir, snapshot) = report_snapshot();
        let rule = RenameRule::new("report", "summary");
        let preview = Preview::compute(&snapshot, &rule, &ExclusionSet::new(), MARKER);

        let row = preview.row(&dir.path().join("report_old.txt")).unwrap();
        assert_eq!(render(&row.before), "【report】_old.txt");
        assert_eq!(render(&row.after), "【summary】_old.txt");
    }

    #[test]
    fn test_empty_replace_falls_back_to_search_highlight() {
        let (dir, snapshot) = report_snapshot();
        let rule = RenameRule::new("report", "");
        let preview = Preview::compute(&snapshot, &rule, &ExclusionSet::new(), MARKER);

        let row = preview.row(&dir.path().join("report.txt")).unwrap();
        assert_eq!(row.state, PreviewState::Matched);
        assert_eq!(render(&row.after), "【report】.txt");
        assert_eq!(row.before, row.after);
    }

    #[test]
    fn test_exclusion_overrides_match() {
        let (dir, snapshot) = report_snapshot();
        let mut exclusions = ExclusionSet::new();
        exclusions.toggle(&dir.path().join("report_old.txt"));
        exclusions.toggle(&dir.path().join("notes.md"));

        let rule = RenameRule::new("report", "summary");
        let preview = Preview::compute(&snapshot, &rule, &exclusions, MARKER);

        let row = preview.row(&dir.path().join("report_old.txt")).unwrap();
        assert_eq!(row.state, PreviewState::Excluded);
        assert_eq!(render(&row.before), "(除外) report_old.txt");
        assert_eq!(render(&row.after), "(除外) report_old.txt");

        // Non-matching entries can be excluded too
        let notes = preview.row(&dir.path().join("notes.md")).unwrap();
        assert_eq!(notes.state, PreviewState::Excluded);
        assert_eq!(preview.excluded, 2);
        assert_eq!(preview.matched, 2);
    }

    #[test]
    fn test_empty_search_never_matches() {
        let (_dir, snapshot) = report_snapshot();
        for replace in ["", "summary", "report"] {
            let rule = RenameRule::new("   ", replace);
            let preview = Preview::compute(&snapshot, &rule, &ExclusionSet::new(), MARKER);
            assert!(preview.rows.iter().all(|r| r.state == PreviewState::Normal));
            assert_eq!(preview.matched, 0);
        }
    }

    #[test]
    fn test_root_row_is_never_matched() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("report_root");
        fs::create_dir(&root).unwrap();
        let snapshot = Snapshot::build(&root);
        let preview =
            Preview::compute(&snapshot, &RenameRule::new("report", "x"), &ExclusionSet::new(), MARKER);
        assert_eq!(preview.rows[0].state, PreviewState::Normal);
        assert_eq!(render(&preview.rows[0].after), "report_root");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_stays_normal() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"report_\xff.txt"));
        if fs::write(&path, b"").is_err() {
            return;
        }
        let snapshot = Snapshot::build(dir.path());
        let rule = RenameRule::new("report", "summary");

        let preview = Preview::compute(&snapshot, &rule, &ExclusionSet::new(), MARKER);
        let row = preview.row(&path).unwrap();
        assert_eq!(row.state, PreviewState::Normal);
        assert_eq!(preview.matched, 0);

        // Still excludable like any other row
        let mut exclusions = ExclusionSet::new();
        exclusions.toggle(&path);
        let preview = Preview::compute(&snapshot, &rule, &exclusions, MARKER);
        assert_eq!(preview.row(&path).unwrap().state, PreviewState::Excluded);
    }

    #[test]
    fn test_visible_rows_follow_expansion() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/inner")).unwrap();
        fs::write(dir.path().join("a/inner/deep.txt"), b"").unwrap();
        fs::write(dir.path().join("top.txt"), b"").unwrap();
        let snapshot = Snapshot::build(dir.path());
        let preview = Preview::compute(&snapshot, &RenameRule::default(), &ExclusionSet::new(), MARKER);

        let mut tree = TreeState::new();
        tree.reset(dir.path());
        // root, a, top.txt
        assert_eq!(preview.visible_rows(&tree), vec![0, 1, 4]);

        tree.toggle_expanded(&dir.path().join("a"));
        assert_eq!(preview.visible_rows(&tree), vec![0, 1, 2, 4]);

        tree.toggle_expanded(&dir.path().join("a").join("inner"));
        assert_eq!(preview.visible_rows(&tree), vec![0, 1, 2, 3, 4]);
    }
}
