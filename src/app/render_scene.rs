//! Baut die read-only Render-Szene aus dem Shell-Zustand.

use crate::app::state::{DragState, ShellState};
use crate::core::geometry::bezier_path;
use crate::core::window::WindowPhase;
use crate::shared::{EntitySprite, RenderScene, WindowSprite};

/// Reiner Aufbau: liest den Zustand, mutiert nichts.
///
/// Die Kurven werden pro Frame komplett neu aus den aktuellen
/// Objektpositionen abgeleitet; es gibt keinen Kurven-Cache.
pub fn build(state: &ShellState) -> RenderScene {
    let mut scene = RenderScene::default();

    for window in state.windows.iter() {
        if window.minimized {
            continue;
        }
        scene.windows.push(WindowSprite {
            id: window.id,
            title: window.title.clone(),
            x: window.position.x,
            y: window.position.y,
            w: window.size.x,
            h: window.size.y,
            z_index: window.z_index,
            focused: window.focused,
            closing: matches!(window.phase, WindowPhase::Closing { .. }),
        });
    }
    scene.windows.sort_by_key(|w| w.z_index);

    for entity in state.canvas.iter() {
        scene.entities.push(EntitySprite {
            entity_id: entity.id.clone(),
            kind: entity.kind.clone(),
            title: entity.title.clone(),
            x: entity.position.x,
            y: entity.position.y,
        });
    }

    for link in state.links.all() {
        // Verknüpfungen mit fehlendem Endpunkt werden nicht gezeichnet
        let (Some(source), Some(target)) = (
            state.canvas.get(&link.source_id),
            state.canvas.get(&link.target_id),
        ) else {
            continue;
        };
        scene
            .link_paths
            .push(bezier_path(source.position, target.position));
    }

    if let DragState::LinkDrag { source_id, current } = &state.drag {
        if let Some(source) = state.canvas.get(source_id) {
            scene.drag_path = Some(bezier_path(source.position, *current));
        }
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers;
    use crate::core::entity::CatalogItem;
    use glam::Vec2;

    fn item(id: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            kind: "doc".into(),
            title: id.to_uppercase(),
        }
    }

    #[test]
    fn windows_are_sorted_by_z() {
        let mut state = ShellState::new();
        let a = handlers::windows::create(&mut state, "A", "a", None);
        let b = handlers::windows::create(&mut state, "B", "b", None);
        state.windows.focus(a);

        let scene = build(&state);
        assert_eq!(scene.windows.len(), 2);
        assert_eq!(scene.windows.last().unwrap().id, a);
        assert_eq!(scene.windows.first().unwrap().id, b);
    }

    #[test]
    fn minimized_windows_are_omitted() {
        let mut state = ShellState::new();
        let a = handlers::windows::create(&mut state, "A", "a", None);
        state.windows.minimize(a);

        assert!(build(&state).windows.is_empty());
    }

    #[test]
    fn link_with_missing_endpoint_is_skipped() {
        let mut state = ShellState::new();
        state.canvas.place(&item("e1"), Vec2::new(0.0, 0.0));
        state.canvas.place(&item("e2"), Vec2::new(100.0, 20.0));
        state
            .links
            .create("e1", "e2", 0.0, state.store.as_mut());
        state.canvas.remove("e2");

        let scene = build(&state);
        assert!(scene.link_paths.is_empty());
    }

    #[test]
    fn active_link_drag_adds_transient_path() {
        let mut state = ShellState::new();
        state.canvas.place(&item("e1"), Vec2::new(10.0, 10.0));
        state.drag = DragState::LinkDrag {
            source_id: "e1".to_string(),
            current: Vec2::new(200.0, 50.0),
        };

        let scene = build(&state);
        let path = scene.drag_path.expect("transiente Kurve erwartet");
        assert_eq!(path.start, Vec2::new(10.0, 10.0));
        assert_eq!(path.end, Vec2::new(200.0, 50.0));
    }
}
