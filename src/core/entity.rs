//! Frei platzierbare Canvas-Objekte.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Eindeutige, stabile Objekt-ID (vom Katalog vorgegeben)
pub type EntityId = String;

/// Ein Eintrag des Objekt-Katalogs, aus dem platziert wird.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: EntityId,
    /// Typ-Tag, opak für die Shell
    pub kind: String,
    pub title: String,
}

/// Ein auf dem Canvas platziertes Objekt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasEntity {
    pub id: EntityId,
    pub kind: String,
    pub title: String,
    /// Mittelpunkt in Canvas-Koordinaten
    pub position: Vec2,
}

impl CanvasEntity {
    pub fn from_catalog(item: &CatalogItem, position: Vec2) -> Self {
        Self {
            id: item.id.clone(),
            kind: item.kind.clone(),
            title: item.title.clone(),
            position,
        }
    }
}
