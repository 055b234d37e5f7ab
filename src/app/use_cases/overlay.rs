//! Use-Case-Funktionen für das Vegetationsindex-Overlay und den
//! Wiederaufbau nach einem Basemap-Style-Reload.

use crate::app::AppState;
use anyhow::{bail, Result};
use std::sync::Arc;

/// Zeigt das Overlay eines Snapshots über seinem Feld an und zoomt
/// die Kamera auf das Feld.
pub fn show(state: &mut AppState, field_id: u64, image_ref: &str) -> Result<()> {
    let Some(field) = state.field(field_id).cloned() else {
        bail!("Feld {} nicht gefunden", field_id);
    };
    let image = state.snapshots.load_overlay_image(image_ref)?;

    let opacity = state.options.overlay_opacity;
    let padding = state.options.overlay_fit_padding_px;
    state.overlay.show(
        &mut state.scene,
        &mut state.registry,
        &field,
        Arc::new(image),
        opacity,
        padding,
    )?;
    super::viewport::apply_pending_fit(state);
    Ok(())
}

/// Blendet das aktive Overlay aus und stellt alle Felder wieder her.
pub fn hide(state: &mut AppState) {
    state.overlay.hide(&mut state.scene, &mut state.registry);
}

/// Baut alle verwalteten Layer nach einem Basemap-Style-Reload neu auf:
/// Felder, Live-Zeichnung und das aktive Overlay. Die Kamera bleibt
/// unverändert.
pub fn rebuild_after_style_reload(state: &mut AppState) -> Result<()> {
    state.registry.forget_after_style_swap();

    super::fields::sync_field_layers(state);
    super::drawing::refresh_live_layers(state);

    if let Some(active_id) = state.overlay.active_field_id() {
        if let Some(field) = state.field(active_id).cloned() {
            let opacity = state.options.overlay_opacity;
            state.overlay.reapply_after_style_swap(
                &mut state.scene,
                &mut state.registry,
                &field,
                opacity,
            )?;
        }
    }
    log::info!("Layer nach Style-Reload neu aufgebaut");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::DrawingModeKind;
    use crate::app::use_cases::{drawing, fields};
    use crate::core::{FieldAttributes, LngLat};
    use crate::map::MapSurface;

    fn saved_field(state: &mut AppState, offset: f64) -> u64 {
        drawing::start(state, DrawingModeKind::PointPlacement);
        drawing::add_point(state, LngLat::new(offset, 0.0));
        drawing::add_point(state, LngLat::new(offset + 0.001, 0.0));
        drawing::add_point(state, LngLat::new(offset + 0.001, 0.001));
        drawing::add_point(state, LngLat::new(offset, 0.001));
        drawing::confirm(state);
        fields::save_pending(state, format!("Feld {offset}"), FieldAttributes::default()).unwrap();
        state.fields.last().unwrap().id
    }

    #[test]
    fn style_reload_baut_feld_layer_neu_auf() {
        let mut state = AppState::new();
        let a = saved_field(&mut state, 0.0);
        let b = saved_field(&mut state, 0.01);

        state.scene.simulate_style_swap();
        assert!(!state.scene.has_layer(&format!("field-layer-{a}")));

        rebuild_after_style_reload(&mut state).unwrap();
        assert!(state.scene.has_layer(&format!("field-layer-{a}")));
        assert!(state.scene.has_layer(&format!("field-layer-{b}")));
    }

    #[test]
    fn style_reload_stellt_live_zeichnung_wieder_her() {
        let mut state = AppState::new();
        drawing::start(&mut state, DrawingModeKind::PointPlacement);
        drawing::add_point(&mut state, LngLat::new(0.0, 0.0));
        drawing::add_point(&mut state, LngLat::new(0.001, 0.0));

        state.scene.simulate_style_swap();
        rebuild_after_style_reload(&mut state).unwrap();
        assert!(state.scene.has_layer("drawing-line-layer"));
    }
}
