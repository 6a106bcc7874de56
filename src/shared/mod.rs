//! Geteilte Typen und Konfiguration.

pub mod options;
pub mod render_scene;

pub use options::ShellOptions;
pub use render_scene::{EntitySprite, RenderScene, WindowSprite};
