//! Map Layer Registry: alleiniger Eigentümer der reservierten
//! Source-/Layer-Namen (`field-*`, `drawing-*`, `vi-overlay-*`) auf der
//! Rendering-Surface.
//!
//! Upsert-Disziplin: "ensure" entfernt zuerst eventuell veraltete
//! Layer/Sources gleichen Namens (Layer vor Source) und legt sie danach
//! neu an. Entfernen fehlender Namen ist ein No-op — Style-Reloads
//! räumen Layer out-of-band ab.

use super::surface::{FillPaint, LinePaint, MapSurface};
use crate::core::{Field, FieldGeometry, LngLat, Ring};
use image::RgbaImage;
use indexmap::IndexMap;
use std::sync::Arc;

/// Source-/Layer-Paar, das die Registry auf der Surface verwaltet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerHandle {
    pub source_id: String,
    pub layer_id: String,
}

fn field_handle(field_id: u64) -> LayerHandle {
    LayerHandle {
        source_id: format!("field-source-{field_id}"),
        layer_id: format!("field-layer-{field_id}"),
    }
}

const DRAWING_SOURCE: &str = "drawing-source";
const DRAWING_LINE_LAYER: &str = "drawing-line-layer";
const DRAWING_FILL_LAYER: &str = "drawing-fill-layer";

const OVERLAY_SOURCE: &str = "vi-overlay-source";
const OVERLAY_LAYER: &str = "vi-overlay-layer";

/// Verwaltet alle reservierten Layer dieser Engine auf der Karte.
///
/// Invarianten:
/// - pro Feld höchstens ein Source-/Layer-Paar,
/// - höchstens ein aktives Raster-Overlay-Paar,
/// - Entfernen immer Layer vor Source (keine verwaisten Layer).
#[derive(Debug, Default)]
pub struct LayerRegistry {
    field_handles: IndexMap<u64, LayerHandle>,
    drawing_active: bool,
    overlay: Option<LayerHandle>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Feld-Layer ──────────────────────────────────────────────────

    /// Idempotentes Upsert des Boundary-Layers eines Felds.
    pub fn ensure_field_layers(
        &mut self,
        surface: &mut dyn MapSurface,
        field: &Field,
        paint: FillPaint,
    ) {
        let handle = field_handle(field.id);

        // Veraltete Layer/Source gleichen Namens zuerst entfernen
        surface.remove_layer(&handle.layer_id);
        surface.remove_source(&handle.source_id);

        surface.add_geojson_source(&handle.source_id, field.geometry.clone());
        surface.add_fill_layer(&handle.layer_id, &handle.source_id, paint, None);

        self.field_handles.insert(field.id, handle);
    }

    /// Entfernt Boundary-Layer und Source eines Felds (Layer vor Source).
    pub fn remove_field_layers(&mut self, surface: &mut dyn MapSurface, field_id: u64) {
        if let Some(handle) = self.field_handles.shift_remove(&field_id) {
            surface.remove_layer(&handle.layer_id);
            surface.remove_source(&handle.source_id);
        }
    }

    /// Layer-ID des Boundary-Layers, falls registriert.
    pub fn field_layer_id(&self, field_id: u64) -> Option<&str> {
        self.field_handles
            .get(&field_id)
            .map(|h| h.layer_id.as_str())
    }

    /// Alle registrierten Feld-IDs in Einfüge-Reihenfolge.
    pub fn field_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.field_handles.keys().copied()
    }

    /// Versteckt alle Feld-Layer außer dem genannten.
    pub fn hide_fields_except(&self, surface: &mut dyn MapSurface, keep_visible: u64) {
        for (id, handle) in &self.field_handles {
            surface.set_layer_visibility(&handle.layer_id, *id == keep_visible);
        }
    }

    /// Stellt die Sichtbarkeit aller Feld-Layer wieder her.
    pub fn show_all_fields(&self, surface: &mut dyn MapSurface) {
        for handle in self.field_handles.values() {
            surface.set_layer_visibility(&handle.layer_id, true);
        }
    }

    // ── Drawing-Layer (Live-Polygon der aktiven Session) ───────────

    /// Upsert der Live-Zeichnungs-Layer. Die Füllung wird erst ab
    /// 3 Vertices gezeichnet, die Linie immer.
    pub fn ensure_drawing_layers(
        &mut self,
        surface: &mut dyn MapSurface,
        ring: &Ring,
        line: LinePaint,
        fill: FillPaint,
    ) {
        self.clear_drawing_layers(surface);

        surface.add_geojson_source(DRAWING_SOURCE, FieldGeometry::Polygon(ring.clone()));
        if ring.distinct_vertices().len() >= 3 {
            surface.add_fill_layer(DRAWING_FILL_LAYER, DRAWING_SOURCE, fill, None);
        }
        surface.add_line_layer(DRAWING_LINE_LAYER, DRAWING_SOURCE, line, None);

        self.drawing_active = true;
    }

    /// Entfernt die Live-Zeichnungs-Layer (Layer vor Source).
    pub fn clear_drawing_layers(&mut self, surface: &mut dyn MapSurface) {
        surface.remove_layer(DRAWING_LINE_LAYER);
        surface.remove_layer(DRAWING_FILL_LAYER);
        surface.remove_source(DRAWING_SOURCE);
        self.drawing_active = false;
    }

    // ── Overlay-Slot ────────────────────────────────────────────────

    /// Installiert das einzige Raster-Overlay. Ein eventuell aktives
    /// Overlay wird vorher entfernt (höchstens-eins-Invariante).
    ///
    /// Der Raster-Layer wird unter den Boundary-Layer von
    /// `target_field_id` einsortiert, damit die Grenze sichtbar bleibt.
    pub fn install_overlay(
        &mut self,
        surface: &mut dyn MapSurface,
        target_field_id: u64,
        image: Arc<RgbaImage>,
        corners: [LngLat; 4],
        opacity: f32,
    ) {
        self.remove_overlay(surface);

        surface.add_image_source(OVERLAY_SOURCE, image, corners);
        let before = self.field_layer_id(target_field_id).map(str::to_string);
        surface.add_raster_layer(OVERLAY_LAYER, OVERLAY_SOURCE, opacity, before.as_deref());

        self.overlay = Some(LayerHandle {
            source_id: OVERLAY_SOURCE.to_string(),
            layer_id: OVERLAY_LAYER.to_string(),
        });
    }

    /// Entfernt das aktive Overlay, falls vorhanden.
    pub fn remove_overlay(&mut self, surface: &mut dyn MapSurface) {
        if self.overlay.take().is_some() || surface.has_layer(OVERLAY_LAYER) {
            surface.remove_layer(OVERLAY_LAYER);
            surface.remove_source(OVERLAY_SOURCE);
        }
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    // ── Style-Reload ────────────────────────────────────────────────

    /// Vergisst alle verwalteten Handles, ohne die Surface anzufassen.
    ///
    /// Nach einem Basemap-Style-Wechsel existieren die Layer auf der
    /// Karte nicht mehr; der Aufrufer baut sie danach per
    /// `ensure_field_layers`/`install_overlay` neu auf.
    pub fn forget_after_style_swap(&mut self) {
        self.field_handles.clear();
        self.drawing_active = false;
        self.overlay = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::scene::SceneSurface;
    use crate::core::{FieldAttributes, LngLat};

    fn paint() -> FillPaint {
        FillPaint {
            fill_color: [0, 200, 80, 60],
            outline_color: [0, 200, 80, 255],
            outline_width_px: 2.0,
        }
    }

    fn field(id: u64) -> Field {
        let ring = Ring::closed(vec![
            LngLat::new(0.0, 0.0),
            LngLat::new(0.001, 0.0),
            LngLat::new(0.001, 0.001),
            LngLat::new(0.0, 0.001),
        ]);
        Field {
            id,
            name: format!("Feld {id}"),
            geometry: FieldGeometry::Polygon(ring.clone()),
            area_sq_m: crate::core::ring_area_sq_m(&ring),
            centroid: crate::core::ring_centroid(&ring).unwrap(),
            attributes: FieldAttributes::default(),
        }
    }

    #[test]
    fn ensure_ist_idempotent() {
        let mut scene = SceneSurface::new();
        let mut registry = LayerRegistry::new();
        let f = field(7);

        registry.ensure_field_layers(&mut scene, &f, paint());
        registry.ensure_field_layers(&mut scene, &f, paint());

        assert_eq!(scene.layer_count(), 1);
        assert_eq!(scene.source_count(), 1);
        assert!(scene.has_layer("field-layer-7"));
        assert!(scene.has_source("field-source-7"));
    }

    #[test]
    fn remove_toleriert_fehlende_layer() {
        let mut scene = SceneSurface::new();
        let mut registry = LayerRegistry::new();
        registry.remove_field_layers(&mut scene, 99);
        registry.remove_overlay(&mut scene);
        registry.clear_drawing_layers(&mut scene);
    }

    #[test]
    fn drawing_fill_erst_ab_drei_vertices() {
        let mut scene = SceneSurface::new();
        let mut registry = LayerRegistry::new();

        let two = Ring::new(vec![LngLat::new(0.0, 0.0), LngLat::new(1.0, 0.0)]);
        registry.ensure_drawing_layers(
            &mut scene,
            &two,
            LinePaint {
                color: [255, 255, 255, 255],
                width_px: 2.0,
            },
            paint(),
        );
        assert!(scene.has_layer("drawing-line-layer"));
        assert!(!scene.has_layer("drawing-fill-layer"));

        let three = Ring::new(vec![
            LngLat::new(0.0, 0.0),
            LngLat::new(1.0, 0.0),
            LngLat::new(1.0, 1.0),
        ]);
        registry.ensure_drawing_layers(
            &mut scene,
            &three,
            LinePaint {
                color: [255, 255, 255, 255],
                width_px: 2.0,
            },
            paint(),
        );
        assert!(scene.has_layer("drawing-fill-layer"));
    }

    #[test]
    fn zweites_overlay_ersetzt_das_erste() {
        let mut scene = SceneSurface::new();
        let mut registry = LayerRegistry::new();
        let image = Arc::new(RgbaImage::new(2, 2));
        let corners = [
            LngLat::new(0.0, 1.0),
            LngLat::new(1.0, 1.0),
            LngLat::new(1.0, 0.0),
            LngLat::new(0.0, 0.0),
        ];

        registry.install_overlay(&mut scene, 1, image.clone(), corners, 0.85);
        registry.install_overlay(&mut scene, 2, image, corners, 0.85);

        assert_eq!(scene.layer_count(), 1);
        assert_eq!(scene.source_count(), 1);
        assert!(registry.has_overlay());
    }

    #[test]
    fn overlay_liegt_unter_dem_ziel_feld() {
        let mut scene = SceneSurface::new();
        let mut registry = LayerRegistry::new();
        registry.ensure_field_layers(&mut scene, &field(1), paint());
        registry.ensure_field_layers(&mut scene, &field(2), paint());

        let image = Arc::new(RgbaImage::new(2, 2));
        let corners = field(2).geometry.bounding_box().unwrap().corners();
        registry.install_overlay(&mut scene, 2, image, corners, 0.85);

        let overlay_idx = scene.layer_index("vi-overlay-layer").unwrap();
        let field_idx = scene.layer_index("field-layer-2").unwrap();
        assert!(overlay_idx < field_idx, "Overlay muss unter dem Feld-Layer liegen");
    }
}
