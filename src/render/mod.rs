//! CPU-Renderer: zeichnet die Render-Szene über den egui-Painter.

use eframe::egui;

use crate::core::geometry::PathSpec;
use crate::shared::options::{ShellOptions, WINDOW_TITLEBAR_HEIGHT};
use crate::shared::RenderScene;

fn color(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

fn bezier_shape(path: &PathSpec, stroke: egui::Stroke) -> egui::epaint::CubicBezierShape {
    egui::epaint::CubicBezierShape::from_points_stroke(
        [
            egui::pos2(path.start.x, path.start.y),
            egui::pos2(path.control1.x, path.control1.y),
            egui::pos2(path.control2.x, path.control2.y),
            egui::pos2(path.end.x, path.end.y),
        ],
        false,
        egui::Color32::TRANSPARENT,
        stroke,
    )
}

/// Zeichnet die komplette Szene: Canvas-Ebene zuunterst, dann die
/// Fenster in Stacking-Reihenfolge. Strichstärken und Farben kommen
/// aus den [`ShellOptions`].
pub fn paint_scene(painter: &egui::Painter, scene: &RenderScene, options: &ShellOptions) {
    for path in &scene.link_paths {
        painter.add(bezier_shape(
            path,
            egui::Stroke::new(options.link_stroke_width, color(options.link_color)),
        ));
    }
    if let Some(path) = &scene.drag_path {
        painter.add(bezier_shape(
            path,
            egui::Stroke::new(options.link_drag_stroke_width, color(options.link_drag_color)),
        ));
    }

    for entity in &scene.entities {
        let rect = egui::Rect::from_center_size(
            egui::pos2(entity.x, entity.y),
            egui::vec2(options.entity_size, options.entity_size),
        );
        painter.rect_filled(rect, 6.0, egui::Color32::from_gray(60));
        painter.rect_stroke(
            rect,
            6.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(120)),
            egui::StrokeKind::Inside,
        );
        painter.text(
            rect.center_bottom() + egui::vec2(0.0, 12.0),
            egui::Align2::CENTER_CENTER,
            &entity.title,
            egui::FontId::proportional(12.0),
            egui::Color32::LIGHT_GRAY,
        );
    }

    // Szene liefert die Fenster bereits aufsteigend nach z sortiert
    for window in &scene.windows {
        let rect = egui::Rect::from_min_size(
            egui::pos2(window.x, window.y),
            egui::vec2(window.w, window.h),
        );
        let fill = if window.closing {
            egui::Color32::from_gray(30)
        } else {
            egui::Color32::from_gray(40)
        };
        painter.rect_filled(rect, 4.0, fill);

        let titlebar = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(window.w, WINDOW_TITLEBAR_HEIGHT),
        );
        let titlebar_fill = if window.focused {
            egui::Color32::from_rgb(50, 80, 140)
        } else {
            egui::Color32::from_gray(55)
        };
        painter.rect_filled(titlebar, 4.0, titlebar_fill);
        painter.text(
            titlebar.left_center() + egui::vec2(8.0, 0.0),
            egui::Align2::LEFT_CENTER,
            &window.title,
            egui::FontId::proportional(14.0),
            egui::Color32::WHITE,
        );
        painter.rect_stroke(
            rect,
            4.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
            egui::StrokeKind::Inside,
        );
    }
}
