//! In-Memory-Szene: die referenz-Implementierung von [`MapSurface`].
//!
//! Hält Sources und Layer in Einfüge-Reihenfolge (`IndexMap`); der
//! egui-Renderer zeichnet die Layer genau in dieser Reihenfolge. Auch die
//! Integrationstests inspizieren diese Struktur.

use super::surface::{FillPaint, LinePaint, MapSurface};
use crate::core::{FieldGeometry, GeoBounds, LngLat};
use image::RgbaImage;
use indexmap::IndexMap;
use std::sync::Arc;

/// Eine benannte Datenquelle der Szene.
#[derive(Debug, Clone)]
pub enum SceneSource {
    GeoJson(FieldGeometry),
    Image {
        image: Arc<RgbaImage>,
        /// Eckpunkte oben-links, oben-rechts, unten-rechts, unten-links.
        corners: [LngLat; 4],
    },
}

/// Stil-Variante eines Szenen-Layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneLayerKind {
    Fill(FillPaint),
    Line(LinePaint),
    Raster { opacity: f32 },
}

/// Ein benannter Layer, der auf eine Source verweist.
#[derive(Debug, Clone)]
pub struct SceneLayer {
    pub source_id: String,
    pub kind: SceneLayerKind,
    pub visible: bool,
}

/// Geordnete Szene aus Sources und Layern.
#[derive(Debug, Default)]
pub struct SceneSurface {
    sources: IndexMap<String, SceneSource>,
    layers: IndexMap<String, SceneLayer>,
    pending_fit: Option<(GeoBounds, f32)>,
}

impl SceneSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer in Zeichenreihenfolge (unten → oben).
    pub fn layers(&self) -> impl Iterator<Item = (&str, &SceneLayer)> {
        self.layers.iter().map(|(id, layer)| (id.as_str(), layer))
    }

    pub fn layer(&self, id: &str) -> Option<&SceneLayer> {
        self.layers.get(id)
    }

    pub fn source(&self, id: &str) -> Option<&SceneSource> {
        self.sources.get(id)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Position eines Layers in der Zeichenreihenfolge.
    pub fn layer_index(&self, id: &str) -> Option<usize> {
        self.layers.get_index_of(id)
    }

    /// Holt einen ausstehenden fit_bounds-Request ab (einmalig).
    pub fn take_fit_request(&mut self) -> Option<(GeoBounds, f32)> {
        self.pending_fit.take()
    }

    /// Simuliert einen Basemap-Style-Wechsel: sämtliche Custom-Layer
    /// und -Sources sind danach weg, wie bei einer echten Karte.
    pub fn simulate_style_swap(&mut self) {
        self.sources.clear();
        self.layers.clear();
    }

    fn insert_layer(&mut self, id: &str, layer: SceneLayer, before: Option<&str>) {
        if self.layers.contains_key(id) {
            log::warn!("Layer '{}' existierte noch und wird ersetzt", id);
            self.layers.shift_remove(id);
        }
        match before.and_then(|b| self.layers.get_index_of(b)) {
            Some(index) => {
                self.layers.shift_insert(index, id.to_string(), layer);
            }
            None => {
                self.layers.insert(id.to_string(), layer);
            }
        }
    }
}

impl MapSurface for SceneSurface {
    fn add_geojson_source(&mut self, id: &str, geometry: FieldGeometry) {
        self.sources
            .insert(id.to_string(), SceneSource::GeoJson(geometry));
    }

    fn add_image_source(&mut self, id: &str, image: Arc<RgbaImage>, corners: [LngLat; 4]) {
        self.sources
            .insert(id.to_string(), SceneSource::Image { image, corners });
    }

    fn add_fill_layer(&mut self, id: &str, source_id: &str, paint: FillPaint, before: Option<&str>) {
        self.insert_layer(
            id,
            SceneLayer {
                source_id: source_id.to_string(),
                kind: SceneLayerKind::Fill(paint),
                visible: true,
            },
            before,
        );
    }

    fn add_line_layer(&mut self, id: &str, source_id: &str, paint: LinePaint, before: Option<&str>) {
        self.insert_layer(
            id,
            SceneLayer {
                source_id: source_id.to_string(),
                kind: SceneLayerKind::Line(paint),
                visible: true,
            },
            before,
        );
    }

    fn add_raster_layer(&mut self, id: &str, source_id: &str, opacity: f32, before: Option<&str>) {
        self.insert_layer(
            id,
            SceneLayer {
                source_id: source_id.to_string(),
                kind: SceneLayerKind::Raster { opacity },
                visible: true,
            },
            before,
        );
    }

    fn remove_layer(&mut self, id: &str) {
        // fehlender Layer: No-op
        self.layers.shift_remove(id);
    }

    fn remove_source(&mut self, id: &str) {
        self.sources.shift_remove(id);
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layers.contains_key(id)
    }

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn set_layer_visibility(&mut self, id: &str, visible: bool) {
        if let Some(layer) = self.layers.get_mut(id) {
            layer.visible = visible;
        }
    }

    fn fit_bounds(&mut self, bounds: GeoBounds, padding_px: f32) {
        self.pending_fit = Some((bounds, padding_px));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ring;

    fn dummy_geometry() -> FieldGeometry {
        FieldGeometry::Polygon(Ring::closed(vec![
            LngLat::new(0.0, 0.0),
            LngLat::new(1.0, 0.0),
            LngLat::new(1.0, 1.0),
        ]))
    }

    fn fill() -> FillPaint {
        FillPaint {
            fill_color: [0, 200, 80, 60],
            outline_color: [0, 200, 80, 255],
            outline_width_px: 2.0,
        }
    }

    #[test]
    fn before_anker_ordnet_layer_darunter_ein() {
        let mut scene = SceneSurface::new();
        scene.add_geojson_source("s", dummy_geometry());
        scene.add_fill_layer("unten", "s", fill(), None);
        scene.add_fill_layer("oben", "s", fill(), None);
        scene.add_raster_layer("raster", "s", 0.85, Some("oben"));

        assert_eq!(scene.layer_index("unten"), Some(0));
        assert_eq!(scene.layer_index("raster"), Some(1));
        assert_eq!(scene.layer_index("oben"), Some(2));
    }

    #[test]
    fn remove_ist_tolerant_gegen_fehlende_namen() {
        let mut scene = SceneSurface::new();
        scene.remove_layer("gibt-es-nicht");
        scene.remove_source("gibt-es-nicht");
        assert_eq!(scene.layer_count(), 0);
    }

    #[test]
    fn style_swap_leert_die_szene() {
        let mut scene = SceneSurface::new();
        scene.add_geojson_source("s", dummy_geometry());
        scene.add_fill_layer("l", "s", fill(), None);
        scene.simulate_style_swap();
        assert!(!scene.has_layer("l"));
        assert!(!scene.has_source("s"));
    }
}
