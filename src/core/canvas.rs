//! Der frei belegbare Canvas: platzierte Objekte und ihre Auflösung.

use glam::Vec2;
use indexmap::IndexMap;

use crate::core::entity::{CanvasEntity, CatalogItem, EntityId};
use crate::core::spatial::SpatialIndex;

/// Hält die platzierten Objekte und einen Spatial-Index darüber.
///
/// Der Index wird nach jeder Mutation neu aufgebaut; bei den
/// Objektmengen einer Shell ist das billiger als inkrementelle Pflege.
#[derive(Debug)]
pub struct CanvasLayer {
    entities: IndexMap<EntityId, CanvasEntity>,
    spatial: SpatialIndex,
}

impl Default for CanvasLayer {
    fn default() -> Self {
        Self {
            entities: IndexMap::new(),
            spatial: SpatialIndex::empty(),
        }
    }
}

impl CanvasLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platziert ein Katalog-Objekt an `position`.
    ///
    /// Existiert die ID bereits, wird nur die Position aktualisiert;
    /// es entsteht nie ein Duplikat.
    pub fn place(&mut self, item: &CatalogItem, position: Vec2) -> &CanvasEntity {
        if let Some(existing) = self.entities.get_mut(&item.id) {
            existing.position = position;
        } else {
            self.entities
                .insert(item.id.clone(), CanvasEntity::from_catalog(item, position));
            log::info!("Objekt '{}' auf dem Canvas platziert", item.id);
        }
        self.rebuild_spatial();
        &self.entities[&item.id]
    }

    /// Verschiebt ein Objekt um `delta`. Unbekannte IDs sind ein No-op.
    pub fn move_by(&mut self, id: &str, delta: Vec2) {
        if let Some(entity) = self.entities.get_mut(id) {
            entity.position += delta;
            self.rebuild_spatial();
        }
    }

    /// Entfernt ein Objekt vom Canvas.
    pub fn remove(&mut self, id: &str) -> Option<CanvasEntity> {
        let removed = self.entities.shift_remove(id);
        if removed.is_some() {
            self.rebuild_spatial();
        }
        removed
    }

    /// Löst eine Canvas-Position auf das nächstliegende Objekt auf,
    /// sofern es innerhalb von `hit_radius` liegt.
    pub fn resolve_at(&self, pos: Vec2, hit_radius: f32) -> Option<&CanvasEntity> {
        let nearest = self.spatial.nearest(pos)?;
        if nearest.distance > hit_radius {
            return None;
        }
        self.entities.get(nearest.entity_id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&CanvasEntity> {
        self.entities.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    /// Alle Objekte in Platzierungs-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &CanvasEntity> {
        self.entities.values()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn rebuild_spatial(&mut self) {
        self.spatial = SpatialIndex::from_entities(&self.entities);
    }
}
