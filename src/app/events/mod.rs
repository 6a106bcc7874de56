//! Intent- und Command-Events der Shell.

pub mod command;
pub mod intent;

pub use command::ShellCommand;
pub use intent::ShellIntent;
