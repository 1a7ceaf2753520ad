// Substring rename rule
//
// Only the first occurrence of the search text is replaced. For files the
// extension after the last dot is never touched.

/// Search/replace pair read from the two input fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenameRule {
    pub search: String,
    pub replace: String,
}

impl RenameRule {
    pub fn new(search: &str, replace: &str) -> Self {
        Self {
            search: search.trim().to_string(),
            replace: replace.trim().to_string(),
        }
    }

    /// Both sides filled in, which is what a rename pass requires.
    pub fn is_complete(&self) -> bool {
        !self.search.is_empty() && !self.replace.is_empty()
    }

    pub fn apply(&self, name: &str, is_dir: bool) -> String {
        rename(name, &self.search, &self.replace, is_dir)
    }

    pub fn matches(&self, name: &str, is_dir: bool) -> bool {
        find_match(name, &self.search, is_dir).is_some()
    }
}

/// Split a file name into stem and extension at the last dot.
///
/// The extension keeps its dot. A name whose only dot is the leading one
/// (`.bashrc`) has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 && !name[..idx].chars().all(|c| c == '.') => name.split_at(idx),
        _ => (name, ""),
    }
}

/// The part of the name the search applies to.
pub fn match_target(name: &str, is_dir: bool) -> &str {
    if is_dir {
        name
    } else {
        split_extension(name).0
    }
}

/// Byte offset of the first occurrence of `search` within the match target.
pub fn find_match(name: &str, search: &str, is_dir: bool) -> Option<usize> {
    if search.is_empty() {
        return None;
    }
    match_target(name, is_dir).find(search)
}

pub fn rename(original: &str, search: &str, replace: &str, is_dir: bool) -> String {
    let Some(pos) = find_match(original, search, is_dir) else {
        return original.to_string();
    };

    let mut renamed = String::with_capacity(original.len() + replace.len());
    renamed.push_str(&original[..pos]);
    renamed.push_str(replace);
    renamed.push_str(&original[pos + search.len()..]);
    renamed
}
