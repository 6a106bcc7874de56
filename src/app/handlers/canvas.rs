//! Handler für Canvas-Commands.

use glam::Vec2;

use crate::app::state::{DragState, ShellState};
use crate::core::entity::CatalogItem;

pub fn place(state: &mut ShellState, item: &CatalogItem, position: Vec2) {
    state.canvas.place(item, position);
}

pub fn remove(state: &mut ShellState, entity_id: &str) {
    if state.canvas.remove(entity_id).is_some() {
        // Hängende Verknüpfungen verschwinden mit dem Objekt
        let pruned = state.links.remove_touching(entity_id, state.store.as_mut());
        if pruned > 0 {
            log::info!("Objekt '{entity_id}' entfernt, {pruned} Verknüpfungen gelöst");
        }
    }
    let drag_touches_removed = match &state.drag {
        DragState::EntityDrag { entity_id: id, .. }
        | DragState::LinkDrag { source_id: id, .. } => id == entity_id,
        _ => false,
    };
    if drag_touches_removed {
        state.drag = DragState::Idle;
    }
}

pub fn begin_drag(state: &mut ShellState, entity_id: &str, pointer: Vec2) {
    if let Some(entity) = state.canvas.get(entity_id) {
        state.drag = DragState::EntityDrag {
            entity_id: entity_id.to_string(),
            anchor: pointer,
            start_position: entity.position,
        };
    }
}

pub fn move_by(state: &mut ShellState, entity_id: &str, delta: Vec2) {
    state.canvas.move_by(entity_id, delta);
}

pub fn end_drag(state: &mut ShellState) {
    state.drag = DragState::Idle;
}
