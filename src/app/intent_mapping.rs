//! Mapping von UI-Intents auf mutierende Shell-Commands.
//!
//! Hier sitzt der Zeiger-Dispatcher: was aus `PointerMoved` und
//! `PointerReleased` wird, hängt allein vom aktiven Drag-Zustand ab.
//! Gesten starten nur aus `Idle`; einzige Ausnahme ist der
//! Verknüpfungs-Drag, der einen laufenden Drag implizit abbricht.

use super::{ShellCommand, ShellIntent, ShellState};
use crate::app::state::{DragState, WindowDragKind};

/// Übersetzt einen `ShellIntent` in eine Sequenz ausführbarer Commands.
pub fn map_intent_to_commands(state: &ShellState, intent: ShellIntent) -> Vec<ShellCommand> {
    match intent {
        ShellIntent::CreateWindowRequested {
            title,
            kind,
            geometry,
        } => {
            vec![ShellCommand::CreateWindow {
                title,
                kind,
                geometry,
            }]
        }
        ShellIntent::CloseWindowRequested { id } => vec![ShellCommand::CloseWindow { id }],
        ShellIntent::MinimizeWindowRequested { id } => vec![ShellCommand::MinimizeWindow { id }],
        ShellIntent::RestoreWindowRequested { id } => vec![ShellCommand::RestoreWindow { id }],
        ShellIntent::MaximizeToggleRequested { id } => vec![ShellCommand::MaximizeToggle { id }],
        ShellIntent::FocusWindowRequested { id } => vec![ShellCommand::FocusWindow { id }],

        ShellIntent::WindowMoveDragStarted { id, pointer } => {
            if state.drag.is_idle() {
                vec![
                    ShellCommand::FocusWindow { id },
                    ShellCommand::BeginWindowMove { id, pointer },
                ]
            } else {
                Vec::new()
            }
        }
        ShellIntent::WindowResizeDragStarted { id, pointer } => {
            if state.drag.is_idle() {
                vec![
                    ShellCommand::FocusWindow { id },
                    ShellCommand::BeginWindowResize { id, pointer },
                ]
            } else {
                Vec::new()
            }
        }
        ShellIntent::EntityDragStarted { entity_id, pointer } => {
            if state.drag.is_idle() {
                vec![ShellCommand::BeginEntityDrag { entity_id, pointer }]
            } else {
                Vec::new()
            }
        }
        ShellIntent::LinkDragStarted { source_id, pointer } => {
            // Verknüpfungs-Drag verdrängt einen laufenden Drag
            let mut commands = Vec::new();
            if !state.drag.is_idle() {
                commands.push(ShellCommand::CancelDrag);
            }
            commands.push(ShellCommand::BeginLinkDrag { source_id, pointer });
            commands
        }

        // Bewegung rechnet immer gegen Anker + Start-Basis, nie
        // inkrementell: verschluckte Events akkumulieren so keinen Drift
        ShellIntent::PointerMoved { pointer } => match &state.drag {
            DragState::Idle => Vec::new(),
            DragState::WindowDrag {
                window_id,
                kind,
                anchor,
                start_geometry,
            } => {
                let Some(window) = state.windows.get(*window_id) else {
                    return Vec::new();
                };
                let total = pointer - *anchor;
                let id = *window_id;
                let motion = match kind {
                    WindowDragKind::Move => ShellCommand::MoveWindowBy {
                        id,
                        delta: start_geometry.pos() + total - window.position,
                    },
                    WindowDragKind::Resize => ShellCommand::ResizeWindowBy {
                        id,
                        delta: start_geometry.size() + total - window.size,
                    },
                };
                vec![motion]
            }
            DragState::EntityDrag {
                entity_id,
                anchor,
                start_position,
            } => {
                let Some(entity) = state.canvas.get(entity_id) else {
                    return Vec::new();
                };
                vec![ShellCommand::MoveEntityBy {
                    entity_id: entity_id.clone(),
                    delta: *start_position + (pointer - *anchor) - entity.position,
                }]
            }
            DragState::LinkDrag { .. } => vec![ShellCommand::UpdateLinkDrag { pointer }],
        },

        ShellIntent::PointerReleased { pointer } => match &state.drag {
            DragState::Idle => Vec::new(),
            DragState::LinkDrag { .. } => vec![ShellCommand::FinishLinkDrag { pointer }],
            _ => vec![ShellCommand::EndDrag],
        },

        ShellIntent::DragCancelled => {
            if state.drag.is_idle() {
                Vec::new()
            } else {
                vec![ShellCommand::CancelDrag]
            }
        }

        ShellIntent::PlaceEntityRequested { item, position } => {
            vec![ShellCommand::PlaceEntity { item, position }]
        }
        ShellIntent::RemoveEntityRequested { entity_id } => {
            vec![ShellCommand::RemoveEntity { entity_id }]
        }
        ShellIntent::RemoveLinkRequested { a, b } => vec![ShellCommand::RemoveLink { a, b }],

        ShellIntent::ViewportResized { size } => vec![ShellCommand::SetViewportSize { size }],
        ShellIntent::TimeAdvanced { now_ms } => vec![ShellCommand::AdvanceTime { now_ms }],
    }
}
