//! Overlay-Koordinator: blendet das Vegetationsindex-Raster eines Felds
//! ein und aus, inklusive Sichtbarkeits-Tausch der Geschwister-Felder.

use super::registry::LayerRegistry;
use super::surface::MapSurface;
use crate::core::Field;
use anyhow::{anyhow, Result};
use image::RgbaImage;
use std::sync::Arc;

/// Zustand des aktiven Overlays (für Re-Show nach Style-Reload).
#[derive(Debug, Clone)]
struct ActiveOverlay {
    field_id: u64,
    image: Arc<RgbaImage>,
}

/// Steuert den Lebenszyklus des einzigen Raster-Overlays.
///
/// `show` ohne vorheriges `hide` ist erlaubt und leckt nichts: die
/// Registry entfernt das alte Overlay-Paar, bevor das neue installiert
/// wird. Versteckte Geschwister-Felder bleiben versteckt, bis `hide`
/// die Sichtbarkeit universell wiederherstellt.
#[derive(Debug, Default)]
pub struct OverlayCoordinator {
    active: Option<ActiveOverlay>,
}

impl OverlayCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeigt das Snapshot-Raster über dem Feld an.
    ///
    /// Die Bildgeometrie wird an der Bounding-Box der Feld-Geometrie
    /// verankert; der Raster-Layer liegt unter dem Boundary-Layer des
    /// Felds, alle anderen Feld-Layer werden versteckt.
    pub fn show(
        &mut self,
        surface: &mut dyn MapSurface,
        registry: &mut LayerRegistry,
        field: &Field,
        image: Arc<RgbaImage>,
        opacity: f32,
        fit_padding_px: f32,
    ) -> Result<()> {
        let bounds = field
            .geometry
            .bounding_box()
            .ok_or_else(|| anyhow!("Feld '{}' hat keine Geometrie", field.name))?;

        registry.install_overlay(surface, field.id, image.clone(), bounds.corners(), opacity);
        registry.hide_fields_except(surface, field.id);
        surface.fit_bounds(bounds, fit_padding_px);

        self.active = Some(ActiveOverlay {
            field_id: field.id,
            image,
        });
        log::info!("Overlay aktiv für Feld {} ('{}')", field.id, field.name);
        Ok(())
    }

    /// Entfernt das Overlay und stellt alle Feld-Sichtbarkeiten wieder her.
    /// Ohne aktives Overlay ein No-op.
    pub fn hide(&mut self, surface: &mut dyn MapSurface, registry: &mut LayerRegistry) {
        registry.remove_overlay(surface);
        registry.show_all_fields(surface);
        if self.active.take().is_some() {
            log::info!("Overlay entfernt");
        }
    }

    /// ID des Felds mit aktivem Overlay.
    pub fn active_field_id(&self) -> Option<u64> {
        self.active.as_ref().map(|a| a.field_id)
    }

    /// Installiert das aktive Overlay nach einem Style-Reload erneut.
    /// `field` muss das Feld zu `active_field_id` sein.
    pub fn reapply_after_style_swap(
        &mut self,
        surface: &mut dyn MapSurface,
        registry: &mut LayerRegistry,
        field: &Field,
        opacity: f32,
    ) -> Result<()> {
        let Some(active) = self.active.clone() else {
            return Ok(());
        };
        let image = active.image;
        let bounds = field
            .geometry
            .bounding_box()
            .ok_or_else(|| anyhow!("Feld '{}' hat keine Geometrie", field.name))?;
        registry.install_overlay(surface, field.id, image, bounds.corners(), opacity);
        registry.hide_fields_except(surface, field.id);
        Ok(())
    }
}
