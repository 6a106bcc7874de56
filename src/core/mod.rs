//! Kern-Domänenmodell der Canvas-Shell.
//!
//! Enthält Fenster, Canvas-Objekte und Verknüpfungen samt der reinen
//! Geometrie. Kein UI-Code, keine Event-Verarbeitung.

pub mod canvas;
pub mod entity;
pub mod geometry;
pub mod link;
pub mod link_graph;
pub mod spatial;
pub mod window;
pub mod window_manager;
pub mod z_order;

pub use canvas::CanvasLayer;
pub use entity::{CanvasEntity, CatalogItem, EntityId};
pub use geometry::{bezier_path, clamp_to_viewport, PathSpec};
pub use link::{Link, LinkStyle};
pub use link_graph::{LinkGraph, LINKS_STORE_KEY};
pub use spatial::{SpatialIndex, SpatialMatch};
pub use window::{ShellWindow, WindowId, WindowPhase, WindowRect};
pub use window_manager::WindowManager;
pub use z_order::ZOrderStack;
