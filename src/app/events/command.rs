use glam::Vec2;

use crate::core::entity::CatalogItem;
use crate::core::window::{WindowId, WindowRect};

/// Mutierende Operationen auf dem Shell-Zustand.
///
/// Commands entstehen ausschließlich im Intent-Mapping und werden vom
/// Controller an die Feature-Handler verteilt.
#[derive(Debug, Clone)]
pub enum ShellCommand {
    // === Fenster ===
    CreateWindow {
        title: String,
        kind: String,
        geometry: Option<WindowRect>,
    },
    CloseWindow { id: WindowId },
    MinimizeWindow { id: WindowId },
    RestoreWindow { id: WindowId },
    MaximizeToggle { id: WindowId },
    FocusWindow { id: WindowId },
    BeginWindowMove { id: WindowId, pointer: Vec2 },
    BeginWindowResize { id: WindowId, pointer: Vec2 },
    MoveWindowBy { id: WindowId, delta: Vec2 },
    ResizeWindowBy { id: WindowId, delta: Vec2 },

    // === Canvas ===
    PlaceEntity { item: CatalogItem, position: Vec2 },
    RemoveEntity { entity_id: String },
    BeginEntityDrag { entity_id: String, pointer: Vec2 },
    MoveEntityBy { entity_id: String, delta: Vec2 },

    // === Verknüpfungen ===
    BeginLinkDrag { source_id: String, pointer: Vec2 },
    UpdateLinkDrag { pointer: Vec2 },
    FinishLinkDrag { pointer: Vec2 },
    RemoveLink { a: String, b: String },

    // === Drag-Lifecycle ===
    EndDrag,
    CancelDrag,

    // === System ===
    SetViewportSize { size: Vec2 },
    AdvanceTime { now_ms: f64 },
}
