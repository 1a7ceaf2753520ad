mod error;
mod ops;
mod snapshot;

pub use error::RenameError;
pub use ops::{create_unique_folder, execute_rename, normalize_root};
pub use snapshot::Snapshot;
