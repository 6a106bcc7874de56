//! Handler für Fenster-Commands.

use glam::Vec2;

use crate::app::state::{DragState, ShellState, WindowDragKind};
use crate::core::window::{WindowId, WindowRect};

pub fn create(
    state: &mut ShellState,
    title: &str,
    kind: &str,
    geometry: Option<WindowRect>,
) -> WindowId {
    let opts = &state.options;
    let default_size = Vec2::from(opts.window_default_size);
    let cascade_step = opts.window_cascade_step;
    state.windows.create(
        title,
        kind,
        geometry,
        default_size,
        cascade_step,
        state.view.viewport_size,
    )
}

pub fn close(state: &mut ShellState, id: WindowId) {
    // Läuft gerade ein Drag auf diesem Fenster, wird er mit beendet
    if let DragState::WindowDrag { window_id, .. } = &state.drag {
        if *window_id == id {
            state.drag = DragState::Idle;
        }
    }
    state.windows.close(id, state.view.now_ms);
}

pub fn minimize(state: &mut ShellState, id: WindowId) {
    state.windows.minimize(id);
}

pub fn restore(state: &mut ShellState, id: WindowId) {
    state.windows.restore(id);
}

pub fn maximize_toggle(state: &mut ShellState, id: WindowId) {
    state.windows.maximize_toggle(id, state.view.viewport_size);
}

pub fn focus(state: &mut ShellState, id: WindowId) {
    state.windows.focus(id);
}

pub fn begin_move(state: &mut ShellState, id: WindowId, pointer: Vec2) {
    begin_window_drag(state, id, pointer, WindowDragKind::Move);
}

pub fn begin_resize(state: &mut ShellState, id: WindowId, pointer: Vec2) {
    begin_window_drag(state, id, pointer, WindowDragKind::Resize);
}

fn begin_window_drag(state: &mut ShellState, id: WindowId, pointer: Vec2, kind: WindowDragKind) {
    let Some(window) = state.windows.get(id).filter(|w| w.is_open()) else {
        return;
    };
    state.drag = DragState::WindowDrag {
        window_id: id,
        kind,
        anchor: pointer,
        start_geometry: window.geometry(),
    };
}

pub fn move_by(state: &mut ShellState, id: WindowId, delta: Vec2) {
    state.windows.move_by(id, delta);
}

pub fn resize_by(state: &mut ShellState, id: WindowId, delta: Vec2) {
    let min_size = Vec2::new(state.options.window_min_width, state.options.window_min_height);
    state.windows.resize_by(id, delta, min_size);
}

pub fn set_viewport_size(state: &mut ShellState, size: Vec2) {
    state.view.viewport_size = size;
}

pub fn advance_time(state: &mut ShellState, now_ms: f64) {
    state.view.now_ms = now_ms;
    state.windows.tick(now_ms, state.options.window_exit_anim_ms);
}
