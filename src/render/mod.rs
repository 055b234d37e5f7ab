//! Render-Layer: zeichnet die Karten-Szene mit dem egui-Painter.

pub mod painter;

pub use painter::{draw_scene, RasterTextureCache};
