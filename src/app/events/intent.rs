use glam::Vec2;

use crate::core::entity::CatalogItem;
use crate::core::window::{WindowId, WindowRect};

/// Eingaben aus UI und System, ohne direkte Mutationslogik.
///
/// Zeiger-Intents tragen nur die rohe Position; was daraus wird,
/// entscheidet das Intent-Mapping anhand des aktiven Drag-Zustands.
#[derive(Debug, Clone)]
pub enum ShellIntent {
    /// Neues Fenster öffnen; ohne `geometry` greift die Kaskade
    CreateWindowRequested {
        title: String,
        kind: String,
        geometry: Option<WindowRect>,
    },
    /// Fenster schließen (startet Exit-Transition)
    CloseWindowRequested { id: WindowId },
    /// Fenster minimieren
    MinimizeWindowRequested { id: WindowId },
    /// Minimiertes Fenster zurückholen
    RestoreWindowRequested { id: WindowId },
    /// Zwischen Maximiert und gespeicherter Geometrie umschalten
    MaximizeToggleRequested { id: WindowId },
    /// Fenster fokussieren und anheben
    FocusWindowRequested { id: WindowId },

    /// Titelleisten-Drag beginnt (Fenster verschieben)
    WindowMoveDragStarted { id: WindowId, pointer: Vec2 },
    /// Griff-Drag beginnt (Fenstergröße ändern)
    WindowResizeDragStarted { id: WindowId, pointer: Vec2 },
    /// Objekt-Drag auf dem Canvas beginnt
    EntityDragStarted { entity_id: String, pointer: Vec2 },
    /// Verknüpfungs-Drag ab einem Quell-Objekt beginnt
    LinkDragStarted { source_id: String, pointer: Vec2 },

    /// Zeiger hat sich bewegt
    PointerMoved { pointer: Vec2 },
    /// Primärtaste losgelassen
    PointerReleased { pointer: Vec2 },
    /// Laufenden Drag abbrechen (z. B. Escape)
    DragCancelled,

    /// Katalog-Objekt auf dem Canvas platzieren
    PlaceEntityRequested { item: CatalogItem, position: Vec2 },
    /// Objekt vom Canvas entfernen
    RemoveEntityRequested { entity_id: String },
    /// Verknüpfung zwischen zwei Objekten lösen
    RemoveLinkRequested { a: String, b: String },

    /// Viewport-Größe hat sich geändert
    ViewportResized { size: Vec2 },
    /// Monotone Zeit ist fortgeschritten
    TimeAdvanced { now_ms: f64 },
}
