//! Handler für Verknüpfungs-Commands, inklusive Drag-Lebenszyklus.

use glam::Vec2;

use crate::app::state::{DragState, ShellState};

/// Startet einen Verknüpfungs-Drag ab `source_id`.
///
/// Unbekannte Quell-IDs lassen den Zustand unverändert.
pub fn begin_drag(state: &mut ShellState, source_id: &str, pointer: Vec2) {
    if state.canvas.contains(source_id) {
        state.drag = DragState::LinkDrag {
            source_id: source_id.to_string(),
            current: pointer,
        };
    }
}

/// Zieht das freie Kurvenende nach.
pub fn update_drag(state: &mut ShellState, pointer: Vec2) {
    if let DragState::LinkDrag { current, .. } = &mut state.drag {
        *current = pointer;
    }
}

/// Schließt den Drag ab: landet der Zeiger auf einem anderen Objekt,
/// wird eine Verknüpfung angelegt, sonst verfällt der Drag. Der
/// Zustand endet in jedem Fall in `Idle`.
pub fn finish_drag(state: &mut ShellState, pointer: Vec2) {
    let DragState::LinkDrag { source_id, .. } = std::mem::take(&mut state.drag) else {
        return;
    };

    let hit_radius = state.options.entity_hit_radius;
    let Some(target_id) = state
        .canvas
        .resolve_at(pointer, hit_radius)
        .map(|e| e.id.clone())
    else {
        log::info!("Verknüpfungs-Drag ohne Ziel verworfen");
        return;
    };

    let created = state
        .links
        .create(&source_id, &target_id, state.view.now_ms, state.store.as_mut())
        .is_some();
    if created {
        log::info!("Verknüpfung {source_id} -> {target_id} angelegt");
    }
}

/// Bricht einen laufenden Drag jeder Art ab.
pub fn cancel_drag(state: &mut ShellState) {
    state.drag = DragState::Idle;
}

/// Löst die Verknüpfung zwischen `a` und `b`, richtungsunabhängig.
pub fn remove(state: &mut ShellState, a: &str, b: &str) {
    if state.links.remove_between(a, b, state.store.as_mut()).is_some() {
        log::info!("Verknüpfung zwischen {a} und {b} gelöst");
    }
}
