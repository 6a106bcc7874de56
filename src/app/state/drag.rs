//! Drag-Zustandsmaschine des Zeiger-Dispatchers.

use glam::Vec2;

use crate::core::window::{WindowId, WindowRect};

/// Art eines Fenster-Drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowDragKind {
    /// Titelleiste: Fenster verschieben
    Move,
    /// Griff unten rechts: Größe ändern
    Resize,
}

/// Aktiver Drag, exklusiv: zu jedem Zeitpunkt läuft höchstens einer.
///
/// Jede Variante trägt ihre komplette Nutzlast; einen "kein Drag, aber
/// Restdaten"-Zustand gibt es nicht. Anker und Start-Geometrie werden
/// beim Drag-Beginn eingefroren, Bewegungen rechnen immer gegen diese
/// Basis statt inkrementell zu akkumulieren.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Fenster wird verschoben oder skaliert
    WindowDrag {
        window_id: WindowId,
        kind: WindowDragKind,
        /// Zeigerposition beim Drag-Beginn
        anchor: Vec2,
        /// Geometrie beim Drag-Beginn
        start_geometry: WindowRect,
    },
    /// Canvas-Objekt wird verschoben
    EntityDrag {
        entity_id: String,
        anchor: Vec2,
        start_position: Vec2,
    },
    /// Verknüpfung wird von einem Quell-Objekt aus gezogen
    LinkDrag {
        source_id: String,
        /// Aktuelles freies Kurvenende
        current: Vec2,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }
}
