//! Repräsentiert ein einzelnes Shell-Fenster.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Eindeutige Fenster-ID (monoton vergeben, nie wiederverwendet)
pub type WindowId = u64;

/// Numerische Fenstergeometrie.
///
/// Bewusst als getypte Zahlen statt Style-Strings gehalten, damit der
/// Maximize-Restore bitgenau ohne Parsing-Umweg funktioniert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl WindowRect {
    /// Baut eine Geometrie aus Position und Größe.
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            w: size.x,
            h: size.y,
        }
    }

    /// Position als Vektor.
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Größe als Vektor.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }
}

/// Lebensphase eines Fensters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowPhase {
    /// Normal offen und interaktiv
    Open,
    /// Exit-Transition läuft; nicht mehr fokussier- oder ziehbar,
    /// wird aber bis zum Ablauf weiter gerendert
    Closing {
        /// Zeitstempel des `close`-Aufrufs in Millisekunden
        since_ms: f64,
    },
}

/// Ein Fenster der Shell.
#[derive(Debug, Clone)]
pub struct ShellWindow {
    /// Eindeutige ID
    pub id: WindowId,
    /// Fenstertitel
    pub title: String,
    /// Typ-Tag des öffnenden Katalog-Objekts (opak für die Shell)
    pub kind: String,
    /// Linke obere Ecke in Viewport-Koordinaten
    pub position: Vec2,
    /// Breite und Höhe
    pub size: Vec2,
    /// Stacking-Index (höher = weiter oben)
    pub z_index: u64,
    /// Genau ein offenes Fenster trägt `true`
    pub focused: bool,
    /// Minimiert: Rendering versteckt, bleibt aber im aktiven Set
    pub minimized: bool,
    /// Geometrie-Snapshot vor dem Maximieren (None = nicht maximiert)
    pub saved_geometry: Option<WindowRect>,
    /// Lebensphase
    pub phase: WindowPhase,
}

impl ShellWindow {
    /// Erstellt ein neues, offenes Fenster.
    pub fn new(id: WindowId, title: String, kind: String, position: Vec2, size: Vec2) -> Self {
        Self {
            id,
            title,
            kind,
            position,
            size,
            z_index: 0,
            focused: false,
            minimized: false,
            saved_geometry: None,
            phase: WindowPhase::Open,
        }
    }

    /// Aktuelle Geometrie als Snapshot.
    pub fn geometry(&self) -> WindowRect {
        WindowRect::from_pos_size(self.position, self.size)
    }

    /// Setzt Position und Größe aus einem Snapshot.
    pub fn set_geometry(&mut self, rect: WindowRect) {
        self.position = rect.pos();
        self.size = rect.size();
    }

    /// True solange das Fenster offen (nicht in der Exit-Transition) ist.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, WindowPhase::Open)
    }

    /// True wenn das Fenster maximiert ist (Snapshot vorhanden).
    pub fn is_maximized(&self) -> bool {
        self.saved_geometry.is_some()
    }
}
