//! Aggregierter Gesamtzustand der Shell.

use crate::app::command_log::CommandLog;
use crate::app::state::drag::DragState;
use crate::app::state::view::ViewState;
use crate::core::{CanvasLayer, LinkGraph, WindowManager};
use crate::persistence::{KeyValueStore, MemoryStore};
use crate::shared::ShellOptions;

/// Der komplette veränderliche Zustand, auf dem Handler arbeiten.
pub struct ShellState {
    pub windows: WindowManager,
    pub canvas: CanvasLayer,
    pub links: LinkGraph,
    pub store: Box<dyn KeyValueStore>,
    pub drag: DragState,
    pub view: ViewState,
    pub options: ShellOptions,
    pub command_log: CommandLog,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut den Zustand über einem konkreten Store auf und lädt die
    /// persistierten Verknüpfungen.
    pub fn with_store(store: Box<dyn KeyValueStore>) -> Self {
        let links = LinkGraph::load(store.as_ref());
        Self {
            windows: WindowManager::new(),
            canvas: CanvasLayer::new(),
            links,
            store,
            drag: DragState::Idle,
            view: ViewState::default(),
            options: ShellOptions::default(),
            command_log: CommandLog::new(),
        }
    }
}
