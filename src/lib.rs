//! Canvas-Shell Library.
//! Fenster-, Canvas- und Verknüpfungs-Logik als Library exportiert
//! für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod persistence;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{DragState, ShellCommand, ShellController, ShellIntent, ShellState, WindowDragKind};
pub use core::{
    bezier_path, CanvasEntity, CanvasLayer, CatalogItem, EntityId, Link, LinkGraph, LinkStyle,
    PathSpec, ShellWindow, SpatialIndex, SpatialMatch, WindowId, WindowManager, WindowPhase,
    WindowRect, ZOrderStack,
};
pub use persistence::{FileStore, KeyValueStore, MemoryStore};
pub use shared::{RenderScene, ShellOptions};
