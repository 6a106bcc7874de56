//! Feature-Handler: führen Commands auf dem Shell-Zustand aus.

pub mod canvas;
pub mod links;
pub mod windows;
