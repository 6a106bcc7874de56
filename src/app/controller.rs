//! Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{ShellCommand, ShellIntent, ShellState};
use crate::shared::RenderScene;

/// Orchestriert Intents und Commands auf dem Shell-Zustand.
#[derive(Default)]
pub struct ShellController;

impl ShellController {
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über das Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut ShellState,
        intent: ShellIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem Zustand aus.
    /// Dispatcht an die Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut ShellState,
        command: ShellCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Fenster ===
            ShellCommand::CreateWindow {
                title,
                kind,
                geometry,
            } => {
                handlers::windows::create(state, &title, &kind, geometry);
            }
            ShellCommand::CloseWindow { id } => handlers::windows::close(state, id),
            ShellCommand::MinimizeWindow { id } => handlers::windows::minimize(state, id),
            ShellCommand::RestoreWindow { id } => handlers::windows::restore(state, id),
            ShellCommand::MaximizeToggle { id } => handlers::windows::maximize_toggle(state, id),
            ShellCommand::FocusWindow { id } => handlers::windows::focus(state, id),
            ShellCommand::BeginWindowMove { id, pointer } => {
                handlers::windows::begin_move(state, id, pointer)
            }
            ShellCommand::BeginWindowResize { id, pointer } => {
                handlers::windows::begin_resize(state, id, pointer)
            }
            ShellCommand::MoveWindowBy { id, delta } => {
                handlers::windows::move_by(state, id, delta)
            }
            ShellCommand::ResizeWindowBy { id, delta } => {
                handlers::windows::resize_by(state, id, delta)
            }

            // === Canvas ===
            ShellCommand::PlaceEntity { item, position } => {
                handlers::canvas::place(state, &item, position)
            }
            ShellCommand::RemoveEntity { entity_id } => {
                handlers::canvas::remove(state, &entity_id)
            }
            ShellCommand::BeginEntityDrag { entity_id, pointer } => {
                handlers::canvas::begin_drag(state, &entity_id, pointer)
            }
            ShellCommand::MoveEntityBy { entity_id, delta } => {
                handlers::canvas::move_by(state, &entity_id, delta)
            }

            // === Verknüpfungen ===
            ShellCommand::BeginLinkDrag { source_id, pointer } => {
                handlers::links::begin_drag(state, &source_id, pointer)
            }
            ShellCommand::UpdateLinkDrag { pointer } => {
                handlers::links::update_drag(state, pointer)
            }
            ShellCommand::FinishLinkDrag { pointer } => {
                handlers::links::finish_drag(state, pointer)
            }
            ShellCommand::RemoveLink { a, b } => handlers::links::remove(state, &a, &b),

            // === Drag-Lifecycle ===
            ShellCommand::EndDrag => handlers::canvas::end_drag(state),
            ShellCommand::CancelDrag => handlers::links::cancel_drag(state),

            // === System ===
            ShellCommand::SetViewportSize { size } => {
                handlers::windows::set_viewport_size(state, size)
            }
            ShellCommand::AdvanceTime { now_ms } => handlers::windows::advance_time(state, now_ms),
        }

        Ok(())
    }

    /// Baut die zeichenfertige Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &ShellState) -> RenderScene {
        render_scene::build(state)
    }
}
