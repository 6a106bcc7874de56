//! UI-Schicht des Demo-Hosts: Katalog-Panel und Eingabe-Übersetzung.

pub mod input;

pub use input::InputState;

use eframe::egui;
use glam::Vec2;

use crate::app::{ShellIntent, ShellState};
use crate::core::entity::CatalogItem;

/// Seitenpanel mit Katalog, offenen Fenstern und minimierter Leiste.
pub fn render_catalog(
    ctx: &egui::Context,
    catalog: &[CatalogItem],
    state: &ShellState,
) -> Vec<ShellIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("catalog_panel")
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Katalog");
            ui.separator();

            for (index, item) in catalog.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(&item.title);
                    if ui.small_button("Platzieren").clicked() {
                        // Versetzte Standardposition, verschiebbar per Drag
                        let position = Vec2::new(320.0 + 90.0 * (index % 4) as f32,
                            160.0 + 90.0 * (index / 4) as f32);
                        events.push(ShellIntent::PlaceEntityRequested {
                            item: item.clone(),
                            position,
                        });
                    }
                    if ui.small_button("Fenster").clicked() {
                        events.push(ShellIntent::CreateWindowRequested {
                            title: item.title.clone(),
                            kind: item.kind.clone(),
                            geometry: None,
                        });
                    }
                });
            }

            let minimized: Vec<_> = state
                .windows
                .iter()
                .filter(|w| w.is_open() && w.minimized)
                .map(|w| (w.id, w.title.clone()))
                .collect();
            if !minimized.is_empty() {
                ui.separator();
                ui.heading("Minimiert");
                for (id, title) in minimized {
                    if ui.button(title).clicked() {
                        events.push(ShellIntent::RestoreWindowRequested { id });
                    }
                }
            }
        });

    events
}
