//! Read-only Frame-Kontrakt zwischen Shell-Zustand und Renderer.
//!
//! Die Szene wird pro Frame neu aufgebaut und enthält alles, was der
//! Renderer zeichnen muss, ohne selbst in den Zustand zu greifen.

use crate::core::geometry::PathSpec;
use crate::core::window::WindowId;

/// Zeichenfertige Darstellung eines Fensters.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSprite {
    pub id: WindowId,
    pub title: String,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub z_index: u64,
    pub focused: bool,
    /// In Exit-Transition: wird ausgeblendet, ist nicht mehr interaktiv
    pub closing: bool,
}

/// Zeichenfertige Darstellung eines Canvas-Objekts.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySprite {
    pub entity_id: String,
    pub kind: String,
    pub title: String,
    pub x: f32,
    pub y: f32,
}

/// Komplette Szene eines Frames.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Fenster, aufsteigend nach Stacking-Index sortiert
    pub windows: Vec<WindowSprite>,
    /// Canvas-Objekte in Platzierungs-Reihenfolge
    pub entities: Vec<EntitySprite>,
    /// Eine Kurve pro bestehender Verknüpfung
    pub link_paths: Vec<PathSpec>,
    /// Transiente Kurve eines laufenden Verknüpfungs-Drags
    pub drag_path: Option<PathSpec>,
}
