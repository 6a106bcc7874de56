//! Zustands-Typen der App-Schicht.

pub mod drag;
pub mod shell_state;
pub mod view;

pub use drag::{DragState, WindowDragKind};
pub use shell_state::ShellState;
pub use view::ViewState;
