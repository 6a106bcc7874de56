//! Canvas-Shell.
//!
//! Schwebende Fenster über einem frei belegbaren Canvas, dessen
//! Objekte per Drag verknüpft werden können.

use canvas_shell::core::entity::CatalogItem;
use canvas_shell::persistence::FileStore;
use canvas_shell::{render, ui, ShellController, ShellIntent, ShellOptions, ShellState};
use eframe::egui;
use glam::Vec2;

fn main() -> Result<(), eframe::Error> {
    ShellRunner::run()
}

struct ShellRunner;

impl ShellRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Canvas-Shell v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Canvas-Shell"),
            ..Default::default()
        };

        eframe::run_native(
            "Canvas-Shell",
            options,
            Box::new(|_cc| Ok(Box::new(ShellApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ShellApp {
    state: ShellState,
    controller: ShellController,
    input: ui::InputState,
    catalog: Vec<CatalogItem>,
}

impl ShellApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ShellOptions::config_path();
        let shell_options = ShellOptions::load_from_file(&config_path);

        let store_path = config_path.with_file_name("canvas_shell_store.json");
        let store = FileStore::open(store_path);

        let mut state = ShellState::with_store(Box::new(store));
        state.options = shell_options;

        Self {
            state,
            controller: ShellController::new(),
            input: ui::InputState::new(),
            catalog: default_catalog(),
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<ShellIntent> {
        let mut events = Vec::new();

        events.push(ShellIntent::TimeAdvanced {
            now_ms: ctx.input(|i| i.time) * 1000.0,
        });

        events.extend(ui::render_catalog(ctx, &self.catalog, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.push(ShellIntent::ViewportResized {
                    size: Vec2::new(rect.width(), rect.height()),
                });

                events.extend(
                    self.input
                        .collect_viewport_events(ui, &response, &self.state),
                );

                let scene = self.controller.build_render_scene(&self.state);
                render::paint_scene(ui.painter(), &scene, &self.state.options);
            });

        events
    }

    fn process_events(&mut self, events: Vec<ShellIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        // Exit-Transitionen brauchen weitere Frames
        if !self.state.drag.is_idle()
            || self.state.windows.iter().any(|w| !w.is_open())
            || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let config_path = ShellOptions::config_path();
        if let Err(e) = self.state.options.save_to_file(&config_path) {
            log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
        }
    }
}

/// Fester Demo-Katalog des Hosts.
fn default_catalog() -> Vec<CatalogItem> {
    [
        ("notes", "Notizen"),
        ("files", "Dateien"),
        ("music", "Musik"),
        ("photos", "Fotos"),
        ("terminal", "Terminal"),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (kind, title))| CatalogItem {
        id: format!("{kind}-{index}"),
        kind: kind.to_string(),
        title: title.to_string(),
    })
    .collect()
}
