//! Core-Domänentypen: Geometrie, Geodäsie, Feld, Snapshot, Kamera.

pub mod camera;
pub mod field;
pub mod geodesy;
/// Core-Datenmodelle des Mapping-Clients
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - LngLat / Ring / FieldGeometry: Polygon-Datenmodell
/// - Field: persistierte Feld-Entität mit abgeleiteten Messwerten
/// - Snapshot: extern gelieferte Vegetationsindex-Messung
pub mod geometry;
pub mod snapshot;

pub use camera::{GeoCamera, METERS_PER_DEGREE};
pub use field::{Field, FieldAttributes, NewFieldRequest};
pub use geodesy::{
    geometry_area_sq_m, geometry_centroid, ring_area_sq_m, ring_centroid, to_utm, Hemisphere,
    LandArea, UtmCoordinate, EARTH_RADIUS_M,
};
pub use geometry::{ring_contains, FieldGeometry, GeoBounds, LngLat, Ring};
pub use snapshot::{Snapshot, VegetationIndex};
