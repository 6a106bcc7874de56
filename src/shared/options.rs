//! Zentrale Konfiguration für die Canvas-Shell.
//!
//! `ShellOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Harte Untergrenze der Fensterbreite beim Resize.
pub const WINDOW_MIN_WIDTH: f32 = 300.0;
/// Harte Untergrenze der Fensterhöhe beim Resize.
pub const WINDOW_MIN_HEIGHT: f32 = 200.0;
/// Standard-Fenstergröße bei `create` ohne Override.
pub const WINDOW_DEFAULT_SIZE: [f32; 2] = [400.0, 300.0];
/// Basis-Position der Kaskaden-Platzierung.
pub const WINDOW_CASCADE_BASE: [f32; 2] = [100.0, 50.0];
/// Versatz pro bereits offenem Fenster in der Kaskade.
pub const WINDOW_CASCADE_STEP: f32 = 30.0;
/// Dauer der Exit-Transition beim Schließen (Millisekunden).
pub const WINDOW_EXIT_ANIM_MS: f64 = 200.0;
/// Höhe der Titelleiste (für Hit-Tests des Hosts).
pub const WINDOW_TITLEBAR_HEIGHT: f32 = 32.0;
/// Kantenbreite des Resize-Griffs in Pixeln.
pub const WINDOW_RESIZE_GRIP: f32 = 16.0;

// ── Canvas ──────────────────────────────────────────────────────────

/// Kantenlänge eines Canvas-Entities in Pixeln (quadratische Kachel).
pub const ENTITY_SIZE: f32 = 64.0;
/// Hit-Radius für `resolve_at` in Pixeln (Entity-Mittelpunkt).
pub const ENTITY_HIT_RADIUS: f32 = 36.0;

// ── Link-Rendering ─────────────────────────────────────────────────

/// Horizontaler Steuerpunkt-Anteil der kubischen Link-Kurve.
/// 0.4 · dx erzeugt die charakteristische S-Kurve.
pub const LINK_TANGENT_FACTOR: f32 = 0.4;
/// Linienstärke permanenter Links in Pixeln.
pub const LINK_STROKE_WIDTH: f32 = 2.0;
/// Linienstärke der transienten Drag-Kurve.
pub const LINK_DRAG_STROKE_WIDTH: f32 = 1.5;
/// Farbe permanenter Links (RGBA).
pub const LINK_COLOR: [f32; 4] = [0.35, 0.55, 0.95, 1.0];
/// Farbe der transienten Drag-Kurve (RGBA, halbtransparent).
pub const LINK_DRAG_COLOR: [f32; 4] = [0.35, 0.55, 0.95, 0.5];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Shell-Optionen.
/// Wird als `canvas_shell.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellOptions {
    // ── Fenster ─────────────────────────────────────────────────
    /// Minimale Fensterbreite beim Resize
    pub window_min_width: f32,
    /// Minimale Fensterhöhe beim Resize
    pub window_min_height: f32,
    /// Standard-Fenstergröße [Breite, Höhe]
    pub window_default_size: [f32; 2],
    /// Kaskaden-Versatz pro offenem Fenster
    pub window_cascade_step: f32,
    /// Dauer der Exit-Transition in Millisekunden
    pub window_exit_anim_ms: f64,

    // ── Canvas ──────────────────────────────────────────────────
    /// Kantenlänge eines Canvas-Entities in Pixeln
    pub entity_size: f32,
    /// Hit-Radius für Drop-Ziele und Link-Enden in Pixeln
    pub entity_hit_radius: f32,

    // ── Links ───────────────────────────────────────────────────
    /// Linienstärke permanenter Links
    pub link_stroke_width: f32,
    /// Linienstärke der Drag-Vorschau
    pub link_drag_stroke_width: f32,
    /// Farbe permanenter Links (RGBA)
    pub link_color: [f32; 4],
    /// Farbe der Drag-Vorschau (RGBA)
    pub link_drag_color: [f32; 4],
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            window_min_width: WINDOW_MIN_WIDTH,
            window_min_height: WINDOW_MIN_HEIGHT,
            window_default_size: WINDOW_DEFAULT_SIZE,
            window_cascade_step: WINDOW_CASCADE_STEP,
            window_exit_anim_ms: WINDOW_EXIT_ANIM_MS,

            entity_size: ENTITY_SIZE,
            entity_hit_radius: ENTITY_HIT_RADIUS,

            link_stroke_width: LINK_STROKE_WIDTH,
            link_drag_stroke_width: LINK_DRAG_STROKE_WIDTH,
            link_color: LINK_COLOR,
            link_drag_color: LINK_DRAG_COLOR,
        }
    }
}

impl ShellOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Standard-Pfad der Konfigurationsdatei (neben der Binary).
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join("canvas_shell.toml")))
            .unwrap_or_else(|| std::path::PathBuf::from("canvas_shell.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_const_fallbacks() {
        let opts = ShellOptions::default();
        assert_eq!(opts.window_min_width, WINDOW_MIN_WIDTH);
        assert_eq!(opts.window_min_height, WINDOW_MIN_HEIGHT);
        assert_eq!(opts.window_cascade_step, WINDOW_CASCADE_STEP);
    }

    #[test]
    fn options_roundtrip_through_toml() {
        let mut opts = ShellOptions::default();
        opts.entity_hit_radius = 48.0;

        let toml_str = toml::to_string_pretty(&opts).expect("Serialisierung");
        let parsed: ShellOptions = toml::from_str(&toml_str).expect("Deserialisierung");
        assert_eq!(parsed, opts);
    }
}
