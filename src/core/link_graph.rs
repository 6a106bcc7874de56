//! Der Verknüpfungs-Graph: Menge aller Links plus eifrige Persistenz.

use indexmap::IndexMap;

use crate::core::entity::EntityId;
use crate::core::link::Link;
use crate::persistence::KeyValueStore;

/// Store-Schlüssel, unter dem die Link-Menge als JSON-Array liegt
pub const LINKS_STORE_KEY: &str = "shell.links";

/// Hält alle Verknüpfungen, eindeutig pro ungeordnetem Objektpaar.
///
/// Jede Mutation wird sofort in den Store geschrieben, bevor der Aufruf
/// zurückkehrt. Schlägt das Schreiben fehl, bleibt der In-Memory-Stand
/// maßgeblich; der Fehler wird nur geloggt.
#[derive(Debug, Default)]
pub struct LinkGraph {
    links: IndexMap<(EntityId, EntityId), Link>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt die persistierte Link-Menge aus dem Store.
    ///
    /// Fehlende oder unlesbare Daten ergeben einen leeren Graphen.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let mut graph = Self::new();
        let Some(raw) = store.get(LINKS_STORE_KEY) else {
            return graph;
        };
        match serde_json::from_str::<Vec<Link>>(&raw) {
            Ok(links) => {
                for link in links {
                    let key = (link.source_id.clone(), link.target_id.clone());
                    graph.links.insert(key, link);
                }
                log::info!("{} Verknüpfungen aus dem Store geladen", graph.links.len());
            }
            Err(err) => log::warn!("Persistierte Verknüpfungen unlesbar ({err}), starte leer"),
        }
        graph
    }

    /// Legt eine Verknüpfung von `source` nach `target` an.
    ///
    /// Selbst-Verknüpfungen und Paare, die in irgendeiner Richtung
    /// schon verbunden sind, werden abgelehnt. Vor der Rückkehr wird
    /// die neue Menge persistiert.
    pub fn create(
        &mut self,
        source: &str,
        target: &str,
        now_ms: f64,
        store: &mut dyn KeyValueStore,
    ) -> Option<&Link> {
        if source == target {
            return None;
        }
        if self.links.values().any(|l| l.connects(source, target)) {
            return None;
        }

        let key = (source.to_string(), target.to_string());
        self.links
            .insert(key.clone(), Link::new(key.0.clone(), key.1.clone(), now_ms));
        self.persist(store);
        self.links.get(&key)
    }

    /// Entfernt die Verknüpfung zwischen `a` und `b`, egal in welcher
    /// Richtung sie angelegt wurde.
    pub fn remove_between(
        &mut self,
        a: &str,
        b: &str,
        store: &mut dyn KeyValueStore,
    ) -> Option<Link> {
        let key = self
            .links
            .iter()
            .find(|(_, link)| link.connects(a, b))
            .map(|(key, _)| key.clone())?;
        let removed = self.links.shift_remove(&key);
        self.persist(store);
        removed
    }

    /// Entfernt alle Verknüpfungen, die an `id` hängen. Liefert die
    /// Anzahl der entfernten Links.
    pub fn remove_touching(&mut self, id: &str, store: &mut dyn KeyValueStore) -> usize {
        let before = self.links.len();
        self.links.retain(|_, link| !link.touches(id));
        let removed = before - self.links.len();
        if removed > 0 {
            self.persist(store);
        }
        removed
    }

    /// Alle Verknüpfungen, die `id` berühren.
    pub fn links_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Link> {
        self.links.values().filter(move |link| link.touches(id))
    }

    /// True wenn `a` und `b` in irgendeiner Richtung verbunden sind.
    pub fn connected(&self, a: &str, b: &str) -> bool {
        self.links.values().any(|l| l.connects(a, b))
    }

    /// Alle Verknüpfungen in Anlage-Reihenfolge.
    pub fn all(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    fn persist(&self, store: &mut dyn KeyValueStore) {
        let links: Vec<&Link> = self.links.values().collect();
        match serde_json::to_string(&links) {
            Ok(raw) => {
                if let Err(err) = store.set(LINKS_STORE_KEY, &raw) {
                    log::warn!("Persistieren der Verknüpfungen fehlgeschlagen: {err}");
                }
            }
            Err(err) => log::warn!("Serialisieren der Verknüpfungen fehlgeschlagen: {err}"),
        }
    }
}
