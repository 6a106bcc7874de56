//! Persistenz-Schicht der Shell.

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};
