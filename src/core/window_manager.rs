//! Verwaltung der schwebenden Shell-Fenster.
//!
//! Hält das aktive Fenster-Set, vergibt IDs und Stacking-Indizes und
//! setzt die Fokus-Invariante durch: höchstens ein offenes Fenster
//! trägt den Fokus, und das fokussierte Fenster liegt zuoberst.

use glam::Vec2;
use indexmap::IndexMap;

use crate::core::geometry::clamp_to_viewport;
use crate::core::window::{ShellWindow, WindowId, WindowPhase, WindowRect};
use crate::core::z_order::ZOrderStack;
use crate::shared::options::WINDOW_CASCADE_BASE;

/// Zentrale Fensterverwaltung.
#[derive(Debug, Default)]
pub struct WindowManager {
    windows: IndexMap<WindowId, ShellWindow>,
    z_order: ZOrderStack,
    next_id: WindowId,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Öffnet ein neues Fenster und fokussiert es sofort.
    ///
    /// Ohne `geometry`-Override landet es mit `default_size` an der
    /// Kaskaden-Position `Basis + n * cascade_step` mit `n` = Zahl der
    /// aktuell offenen Fenster, in den Viewport geklemmt.
    pub fn create(
        &mut self,
        title: &str,
        kind: &str,
        geometry: Option<WindowRect>,
        default_size: Vec2,
        cascade_step: f32,
        viewport: Vec2,
    ) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        let (position, size) = match geometry {
            Some(rect) => (rect.pos(), rect.size()),
            None => {
                let open_count = self.windows.values().filter(|w| w.is_open()).count();
                let step = cascade_step * open_count as f32;
                let raw = Vec2::from(WINDOW_CASCADE_BASE) + Vec2::splat(step);
                (clamp_to_viewport(raw, default_size, viewport), default_size)
            }
        };

        let mut window = ShellWindow::new(id, title.to_string(), kind.to_string(), position, size);
        window.z_index = self.z_order.next();
        self.windows.insert(id, window);
        self.focus(id);

        log::info!("Fenster {id} ('{title}') geöffnet bei {position:?}");
        id
    }

    /// Hebt ein Fenster an die Spitze und setzt den Fokus um.
    ///
    /// Der Stacking-Zähler rückt auch dann vor, wenn das Fenster den
    /// Fokus bereits hatte. Unbekannte IDs und schließende Fenster
    /// werden stillschweigend ignoriert.
    pub fn focus(&mut self, id: WindowId) {
        if !self.windows.get(&id).is_some_and(ShellWindow::is_open) {
            return;
        }
        let z = self.z_order.next();
        for window in self.windows.values_mut() {
            window.focused = window.id == id;
        }
        if let Some(window) = self.windows.get_mut(&id) {
            window.z_index = z;
        }
    }

    /// Verschiebt ein offenes Fenster um `delta`.
    pub fn move_by(&mut self, id: WindowId, delta: Vec2) {
        if let Some(window) = self.windows.get_mut(&id).filter(|w| w.is_open()) {
            window.position += delta;
        }
    }

    /// Ändert die Größe eines offenen Fensters um `delta`, begrenzt auf
    /// die Mindestmaße `min_size`.
    pub fn resize_by(&mut self, id: WindowId, delta: Vec2, min_size: Vec2) {
        if let Some(window) = self.windows.get_mut(&id).filter(|w| w.is_open()) {
            let target = window.size + delta;
            window.size = target.max(min_size);
        }
    }

    /// Minimiert ein Fenster: Rendering versteckt, bleibt aber im Set.
    /// Hatte es den Fokus, wandert der Fokus zum obersten Restfenster.
    pub fn minimize(&mut self, id: WindowId) {
        let had_focus = match self.windows.get_mut(&id).filter(|w| w.is_open()) {
            Some(window) => {
                window.minimized = true;
                std::mem::take(&mut window.focused)
            }
            None => return,
        };
        if had_focus {
            self.focus_topmost();
        }
    }

    /// Holt ein minimiertes Fenster zurück und fokussiert es.
    pub fn restore(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id).filter(|w| w.is_open()) {
            window.minimized = false;
            self.focus(id);
        }
    }

    /// Schaltet zwischen Maximiert und gespeicherter Geometrie um.
    ///
    /// Beim Maximieren wird die aktuelle Geometrie als Snapshot
    /// gesichert; der Rückweg stellt exakt diese Zahlen wieder her.
    pub fn maximize_toggle(&mut self, id: WindowId, viewport: Vec2) {
        let Some(window) = self.windows.get_mut(&id).filter(|w| w.is_open()) else {
            return;
        };
        match window.saved_geometry.take() {
            Some(saved) => window.set_geometry(saved),
            None => {
                window.saved_geometry = Some(window.geometry());
                window.set_geometry(WindowRect {
                    x: 0.0,
                    y: 0.0,
                    w: viewport.x,
                    h: viewport.y,
                });
            }
        }
        self.focus(id);
    }

    /// Startet die Exit-Transition. Das Fenster verlässt sofort das
    /// interaktive Set, bleibt aber bis [`tick`](Self::tick) sichtbar.
    pub fn close(&mut self, id: WindowId, now_ms: f64) {
        let had_focus = match self.windows.get_mut(&id).filter(|w| w.is_open()) {
            Some(window) => {
                window.phase = WindowPhase::Closing { since_ms: now_ms };
                std::mem::take(&mut window.focused)
            }
            None => return,
        };
        log::info!("Fenster {id} wird geschlossen");
        if had_focus {
            self.focus_topmost();
        }
    }

    /// Entfernt Fenster, deren Exit-Transition (`exit_anim_ms`) abgelaufen ist.
    pub fn tick(&mut self, now_ms: f64, exit_anim_ms: f64) {
        self.windows.retain(|_, window| match window.phase {
            WindowPhase::Open => true,
            WindowPhase::Closing { since_ms } => now_ms - since_ms < exit_anim_ms,
        });
    }

    /// Fokussiert das offene Fenster mit dem höchsten Stacking-Index.
    /// Sichtbare Fenster haben Vorrang vor minimierten, damit die
    /// Fokus-Invariante auch bei komplett minimierter Shell hält.
    fn focus_topmost(&mut self) {
        let top = self
            .windows
            .values()
            .filter(|w| w.is_open() && !w.minimized)
            .max_by_key(|w| w.z_index)
            .or_else(|| {
                self.windows
                    .values()
                    .filter(|w| w.is_open())
                    .max_by_key(|w| w.z_index)
            })
            .map(|w| w.id);
        if let Some(id) = top {
            self.focus(id);
        }
    }

    /// Oberstes offenes, sichtbares Fenster unter `pos`.
    pub fn window_at(&self, pos: Vec2) -> Option<WindowId> {
        self.windows
            .values()
            .filter(|w| w.is_open() && !w.minimized)
            .filter(|w| {
                pos.x >= w.position.x
                    && pos.x <= w.position.x + w.size.x
                    && pos.y >= w.position.y
                    && pos.y <= w.position.y + w.size.y
            })
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    /// Alle offenen Fenster eines Typ-Tags.
    pub fn windows_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a ShellWindow> {
        self.windows
            .values()
            .filter(move |w| w.is_open() && w.kind == kind)
    }

    pub fn get(&self, id: WindowId) -> Option<&ShellWindow> {
        self.windows.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut ShellWindow> {
        self.windows.get_mut(&id)
    }

    /// Alle Fenster in Einfüge-Reihenfolge (inklusive schließender).
    pub fn iter(&self) -> impl Iterator<Item = &ShellWindow> {
        self.windows.values()
    }

    /// ID des aktuell fokussierten Fensters.
    pub fn focused_id(&self) -> Option<WindowId> {
        self.windows.values().find(|w| w.focused).map(|w| w.id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
