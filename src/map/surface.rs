//! Rendering-Surface-Abstraktion: die minimalen Karten-Primitive,
//! die Registry und Overlay-Koordinator benötigen.
//!
//! Die Karte ist eine injizierte Ressource — Registry und Koordinator
//! bekommen sie explizit übergeben, nie über globalen Zugriff. Dadurch
//! laufen alle Layer-Lifecycle-Tests gegen dieselbe Implementierung wie
//! das UI ([`super::scene::SceneSurface`]).

use crate::core::{FieldGeometry, GeoBounds, LngLat};
use image::RgbaImage;
use std::sync::Arc;

/// Füllung plus Umriss eines Polygon-Layers (RGBA, 0-255).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillPaint {
    pub fill_color: [u8; 4],
    pub outline_color: [u8; 4],
    pub outline_width_px: f32,
}

/// Linien-Layer-Stil (RGBA, 0-255).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePaint {
    pub color: [u8; 4],
    pub width_px: f32,
}

/// Minimale Primitive der Rendering-Surface.
///
/// Entfernen nicht vorhandener Layer/Sources ist ein No-op, kein Fehler:
/// Style-Reloads räumen Layer out-of-band ab, Aufrufer können das nicht
/// zuverlässig wissen.
pub trait MapSurface {
    /// Legt eine GeoJSON-Source an oder ersetzt sie.
    fn add_geojson_source(&mut self, id: &str, geometry: FieldGeometry);

    /// Legt eine Image-Source an, verankert an vier Eckpunkten
    /// (oben-links, oben-rechts, unten-rechts, unten-links).
    fn add_image_source(&mut self, id: &str, image: Arc<RgbaImage>, corners: [LngLat; 4]);

    /// Fügt einen Fill-Layer hinzu; `before` ordnet ihn unter den
    /// genannten Layer ein, sonst ans Ende (= oberste Ebene).
    fn add_fill_layer(&mut self, id: &str, source_id: &str, paint: FillPaint, before: Option<&str>);

    /// Fügt einen Linien-Layer hinzu.
    fn add_line_layer(&mut self, id: &str, source_id: &str, paint: LinePaint, before: Option<&str>);

    /// Fügt einen Raster-Layer für eine Image-Source hinzu.
    fn add_raster_layer(&mut self, id: &str, source_id: &str, opacity: f32, before: Option<&str>);

    fn remove_layer(&mut self, id: &str);
    fn remove_source(&mut self, id: &str);

    fn has_layer(&self, id: &str) -> bool;
    fn has_source(&self, id: &str) -> bool;

    fn set_layer_visibility(&mut self, id: &str, visible: bool);

    /// Bittet die Surface, den Ausschnitt auf `bounds` zu zoomen.
    fn fit_bounds(&mut self, bounds: GeoBounds, padding_px: f32);
}
