pub mod bars;
pub mod modals;
pub mod panes;
