//! App-Schicht: Intents, Commands, Zustand und Controller.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod intent_mapping;
pub mod render_scene;
pub mod state;

pub use command_log::CommandLog;
pub use controller::ShellController;
pub use events::{ShellCommand, ShellIntent};
pub use state::{DragState, ShellState, WindowDragKind};
