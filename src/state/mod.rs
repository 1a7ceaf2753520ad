pub mod exclusion;
pub mod mode;
pub mod session;
pub mod tree;
pub mod ui;

pub use exclusion::ExclusionSet;
pub use mode::AppMode;
pub use session::Session;
pub use tree::TreeState;
pub use ui::UIState;
