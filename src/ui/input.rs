//! Übersetzt rohe egui-Zeigereingaben in Shell-Intents.

use eframe::egui;
use glam::Vec2;

use crate::app::{ShellIntent, ShellState};
use crate::core::window::ShellWindow;
use crate::shared::options::{WINDOW_RESIZE_GRIP, WINDOW_TITLEBAR_HEIGHT};

/// Breite der Titelleisten-Buttons (Schließen, Maximieren, Minimieren)
const TITLEBAR_BUTTON: f32 = 20.0;

fn to_vec2(pos: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x, pos.y)
}

/// Was unter dem Zeiger liegt, in Trefferpriorität.
enum HitRegion {
    CloseButton,
    MaximizeButton,
    MinimizeButton,
    Titlebar,
    ResizeGrip,
    WindowBody,
}

fn hit_region(window: &ShellWindow, pos: Vec2) -> HitRegion {
    let local = pos - window.position;
    if local.y <= WINDOW_TITLEBAR_HEIGHT {
        let from_right = window.size.x - local.x;
        if from_right <= TITLEBAR_BUTTON {
            return HitRegion::CloseButton;
        }
        if from_right <= 2.0 * TITLEBAR_BUTTON {
            return HitRegion::MaximizeButton;
        }
        if from_right <= 3.0 * TITLEBAR_BUTTON {
            return HitRegion::MinimizeButton;
        }
        return HitRegion::Titlebar;
    }
    if local.x >= window.size.x - WINDOW_RESIZE_GRIP && local.y >= window.size.y - WINDOW_RESIZE_GRIP
    {
        return HitRegion::ResizeGrip;
    }
    HitRegion::WindowBody
}

/// Sammelt pro Frame die Intents aus dem Viewport-Response.
#[derive(Default)]
pub struct InputState;

impl InputState {
    pub fn new() -> Self {
        Self
    }

    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        state: &ShellState,
    ) -> Vec<ShellIntent> {
        let mut events = Vec::new();

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.handle_click(state, to_vec2(pos), &mut events);
            }
        }

        if response.drag_started_by(egui::PointerButton::Primary) {
            let press = ui.input(|i| i.pointer.press_origin());
            if let Some(pos) = press {
                let ctrl = ui.input(|i| i.modifiers.command);
                self.handle_drag_start(state, to_vec2(pos), ctrl, &mut events);
            }
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(ShellIntent::PointerMoved {
                    pointer: to_vec2(pos),
                });
            }
        }

        if response.drag_stopped_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(ShellIntent::PointerReleased {
                    pointer: to_vec2(pos),
                });
            }
        }

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(ShellIntent::DragCancelled);
        }

        events
    }

    /// Klicks ohne Drag: Titelleisten-Buttons und Fokuswechsel.
    fn handle_click(&self, state: &ShellState, pos: Vec2, events: &mut Vec<ShellIntent>) {
        let Some(id) = state.windows.window_at(pos) else {
            return;
        };
        let Some(window) = state.windows.get(id) else {
            return;
        };
        match hit_region(window, pos) {
            HitRegion::CloseButton => events.push(ShellIntent::CloseWindowRequested { id }),
            HitRegion::MaximizeButton => events.push(ShellIntent::MaximizeToggleRequested { id }),
            HitRegion::MinimizeButton => events.push(ShellIntent::MinimizeWindowRequested { id }),
            _ => events.push(ShellIntent::FocusWindowRequested { id }),
        }
    }

    /// Drag-Beginn: Fenster haben Vorrang vor der Canvas-Ebene.
    fn handle_drag_start(
        &self,
        state: &ShellState,
        pos: Vec2,
        link_modifier: bool,
        events: &mut Vec<ShellIntent>,
    ) {
        if let Some(id) = state.windows.window_at(pos) {
            let Some(window) = state.windows.get(id) else {
                return;
            };
            match hit_region(window, pos) {
                HitRegion::Titlebar => {
                    events.push(ShellIntent::WindowMoveDragStarted { id, pointer: pos })
                }
                HitRegion::ResizeGrip => {
                    events.push(ShellIntent::WindowResizeDragStarted { id, pointer: pos })
                }
                // Buttons und Fensterfläche starten keinen Drag
                _ => events.push(ShellIntent::FocusWindowRequested { id }),
            }
            return;
        }

        if let Some(entity) = state.canvas.resolve_at(pos, state.options.entity_hit_radius) {
            let intent = if link_modifier {
                ShellIntent::LinkDragStarted {
                    source_id: entity.id.clone(),
                    pointer: pos,
                }
            } else {
                ShellIntent::EntityDragStarted {
                    entity_id: entity.id.clone(),
                    pointer: pos,
                }
            };
            events.push(intent);
        }
    }
}
