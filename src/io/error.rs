use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RenameError {
    #[error("Choose a folder first")]
    NoRoot,
    #[error("Folder not found: {}", .0.display())]
    RootMissing(PathBuf),
    #[error("Press Enter to load {} before renaming", .0.display())]
    RootNotLoaded(PathBuf),
    #[error("Enter both the text to find and its replacement")]
    EmptyRule,
    #[error("Cannot rename {} to {}: target already exists", .from.display(), .to.display())]
    Collision { from: PathBuf, to: PathBuf },
    #[error("Rename failed for {} -> {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Create folder failed for {}: {source}", .path.display())]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
