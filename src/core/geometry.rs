//! Geometrie-Kern: kubische Bézier-Pfade für Links und Viewport-Klemmung.
//!
//! Reine Funktionen ohne Zustand.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::shared::options::LINK_TANGENT_FACTOR;

/// Ein kubischer Bézier-Pfad zwischen zwei Ankerpunkten.
///
/// Das Format ist der Übergabevertrag an den Host: vier Punkte,
/// auf Wunsch als SVG-Pfadstring serialisiert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSpec {
    /// Startpunkt der Kurve
    pub start: Vec2,
    /// Erster Steuerpunkt
    pub control1: Vec2,
    /// Zweiter Steuerpunkt
    pub control2: Vec2,
    /// Endpunkt der Kurve
    pub end: Vec2,
}

impl PathSpec {
    /// Punkt auf der Kurve bei Parameter `t` in [0, 1] (de Casteljau ausmultipliziert).
    pub fn point_at(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.start * (u * u * u)
            + self.control1 * (3.0 * u * u * t)
            + self.control2 * (3.0 * u * t * t)
            + self.end * (t * t * t)
    }

    /// SVG-Pfadstring (`M … C …`) für Hosts, die selbst zeichnen.
    pub fn to_svg(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y
        )
    }
}

/// Baut den Link-Pfad zwischen zwei Ankerpunkten.
///
/// Steuerpunkt-Regel: `cp1 = (x1 + 0.4·dx, y1)`, `cp2 = (x2 − 0.4·dx, y2)`
/// mit `dx = x2 − x1`. Der rein horizontale Versatz erzeugt unabhängig
/// vom vertikalen Abstand dieselbe S-Kurve.
pub fn bezier_path(start: Vec2, end: Vec2) -> PathSpec {
    let dx = end.x - start.x;
    PathSpec {
        start,
        control1: Vec2::new(start.x + LINK_TANGENT_FACTOR * dx, start.y),
        control2: Vec2::new(end.x - LINK_TANGENT_FACTOR * dx, end.y),
        end,
    }
}

/// Klemmt ein Rechteck (`pos` + `size`) in den Viewport.
///
/// Ist das Rechteck größer als der Viewport, gewinnt die linke/obere Kante.
pub fn clamp_to_viewport(pos: Vec2, size: Vec2, viewport: Vec2) -> Vec2 {
    let max_x = (viewport.x - size.x).max(0.0);
    let max_y = (viewport.y - size.y).max(0.0);
    Vec2::new(pos.x.clamp(0.0, max_x), pos.y.clamp(0.0, max_y))
}
