//! AgriField Mapper Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod import;
pub mod map;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DrawControlEvent, DrawingMode,
    DrawingModeKind, FieldStore, InMemoryFieldStore, LocalSnapshotProvider, SnapshotProvider,
    UiState, ViewState,
};
pub use core::{
    geometry_area_sq_m, geometry_centroid, ring_area_sq_m, ring_centroid, to_utm, Field,
    FieldAttributes, FieldGeometry, GeoBounds, GeoCamera, Hemisphere, LandArea, LngLat,
    NewFieldRequest, Ring, Snapshot, UtmCoordinate, VegetationIndex,
};
pub use import::{import_geometry, ImportError};
pub use map::{LayerRegistry, MapSurface, OverlayCoordinator, SceneSurface};
pub use shared::MapperOptions;
