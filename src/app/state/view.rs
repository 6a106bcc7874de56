//! Viewport- und Zeit-Zustand.

use glam::Vec2;

/// Umgebungswerte, die der Host pro Frame einspeist.
///
/// Die Shell liest Zeit nie selbst von einer Uhr; sie kennt nur den
/// zuletzt gemeldeten monotonen Zeitstempel.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
    /// Zuletzt gemeldete monotone Zeit in Millisekunden
    pub now_ms: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            viewport_size: Vec2::new(1280.0, 720.0),
            now_ms: 0.0,
        }
    }
}
