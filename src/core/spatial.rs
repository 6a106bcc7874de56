//! Spatial-Index (KD-Tree) für schnelle Objekt-Abfragen auf dem Canvas.

use glam::Vec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::entity::{CanvasEntity, EntityId};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Objekts
    pub entity_id: EntityId,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen platzierten Objekten.
///
/// Der KD-Tree kennt nur laufende Indizes; die Seitentabelle
/// `entity_ids` übersetzt Treffer zurück auf die stabilen IDs.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    entity_ids: Vec<EntityId>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            entity_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Objekten.
    pub fn from_entities(entities: &IndexMap<EntityId, CanvasEntity>) -> Self {
        let mut entity_ids: Vec<EntityId> = entities.keys().cloned().collect();
        entity_ids.sort_unstable();

        let entries: Vec<[f64; 2]> = entity_ids
            .iter()
            .filter_map(|id| {
                entities
                    .get(id)
                    .map(|e| [e.position.x as f64, e.position.y as f64])
            })
            .collect();

        let tree: KdTree<f64, 2> = (&entries).into();

        Self { tree, entity_ids }
    }

    pub fn len(&self) -> usize {
        self.entity_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_ids.is_empty()
    }

    /// Findet das nächste Objekt zur gegebenen Canvas-Position.
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let entity_id = self.entity_ids.get(result.item as usize)?.clone();

        Some(SpatialMatch {
            entity_id,
            distance: (result.distance as f32).sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entities() -> IndexMap<EntityId, CanvasEntity> {
        let mut entities = IndexMap::new();
        for (id, x, y) in [("a", 0.0, 0.0), ("b", 120.0, 0.0), ("c", 40.0, 30.0)] {
            entities.insert(
                id.to_string(),
                CanvasEntity {
                    id: id.to_string(),
                    kind: "doc".into(),
                    title: id.to_uppercase(),
                    position: Vec2::new(x, y),
                },
            );
        }
        entities
    }

    #[test]
    fn nearest_returns_expected_entity() {
        let index = SpatialIndex::from_entities(&sample_entities());
        let nearest = index
            .nearest(Vec2::new(39.0, 29.0))
            .expect("Treffer erwartet");

        assert_eq!(nearest.entity_id, "c");
        assert!(nearest.distance < 2.0);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert!(index.nearest(Vec2::ZERO).is_none());
    }
}
