//! Gerichtete Verknüpfung zwischen zwei Canvas-Objekten.

use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;

/// Strichstil einer Verknüpfung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStyle {
    #[default]
    Solid,
}

/// Eine gerichtete Verknüpfung von Quelle zu Ziel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source_id: EntityId,
    pub target_id: EntityId,
    #[serde(default)]
    pub style: LinkStyle,
    /// Erstellungszeitpunkt in Millisekunden
    pub created_at_ms: f64,
}

impl Link {
    pub fn new(source_id: EntityId, target_id: EntityId, created_at_ms: f64) -> Self {
        Self {
            source_id,
            target_id,
            style: LinkStyle::default(),
            created_at_ms,
        }
    }

    /// True wenn die Verknüpfung das Paar `(a, b)` in irgendeiner
    /// Richtung verbindet.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source_id == a && self.target_id == b)
            || (self.source_id == b && self.target_id == a)
    }

    /// True wenn `id` an einem der beiden Enden hängt.
    pub fn touches(&self, id: &str) -> bool {
        self.source_id == id || self.target_id == id
    }
}
