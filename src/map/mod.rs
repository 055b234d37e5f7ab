//! Karten-Schicht: Surface-Abstraktion, Szene, Layer-Registry, Overlay.

pub mod overlay;
pub mod registry;
pub mod scene;
pub mod surface;

pub use overlay::OverlayCoordinator;
pub use registry::{LayerHandle, LayerRegistry};
pub use scene::{SceneLayer, SceneLayerKind, SceneSource, SceneSurface};
pub use surface::{FillPaint, LinePaint, MapSurface};
