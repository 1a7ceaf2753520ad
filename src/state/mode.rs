use crate::rule::RenameRule;

#[derive(Debug, PartialEq, Clone)]
pub enum AppMode {
    Normal,
    Help,
    /// Waiting for yes/no before a rename pass with this rule.
    ConfirmRename(RenameRule),
}
