//! Key-Value-Ablage für den persistenten Shell-Zustand.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Abstrakte String-zu-String-Ablage.
///
/// Die Shell schreibt eifrig bei jeder Mutation; Fehler beim Schreiben
/// dürfen den In-Memory-Zustand nie zurückrollen.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Flüchtige In-Memory-Ablage, primär für Tests und den Demo-Host.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Dateibasierte Ablage: ein JSON-Objekt pro Store-Datei.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Öffnet (oder initialisiert) eine Store-Datei.
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(err) => {
                    log::warn!("Store-Datei {path:?} unlesbar ({err}), starte leer");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, values }
    }

    /// Schreibt den kompletten Inhalt atomar (Temp-Datei + Rename).
    fn flush(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw).with_context(|| format!("Schreiben nach {tmp:?}"))?;
        fs::rename(&tmp, &self.path).with_context(|| format!("Rename nach {:?}", self.path))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
