//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;

/// Setzt die Kamera auf Default zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Default::default();
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    zoom_by_clamped(state, state.options.camera_zoom_step);
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    zoom_by_clamped(state, 1.0 / state.options.camera_zoom_step);
}

/// Verschiebt die Kamera um ein Screen-Pixel-Delta.
pub fn pan(state: &mut AppState, delta: [f32; 2]) {
    state.view.camera.pan_pixels(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_screen` angegeben ist, bleibt der geografische Punkt
/// unter der Maus nach dem Zoom an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_screen: Option<[f32; 2]>) {
    let viewport = state.view.viewport_size;
    state.view.camera.zoom_towards(factor, focus_screen, viewport);
    clamp_zoom(state);
}

/// Zoomt die Kamera auf die Bounding Box eines gespeicherten Felds.
/// Keine Operation wenn das Feld unbekannt ist oder keine Geometrie hat.
pub fn focus_field(state: &mut AppState, field_id: u64) {
    let Some(bounds) = state.field(field_id).and_then(|f| f.geometry.bounding_box()) else {
        log::warn!("FocusField: Feld {} unbekannt oder ohne Geometrie", field_id);
        return;
    };
    let viewport = state.view.viewport_size;
    let padding = state.options.overlay_fit_padding_px;
    state.view.camera.fit_bounds(bounds, viewport, padding);
    clamp_zoom(state);
}

fn zoom_by_clamped(state: &mut AppState, factor: f64) {
    state.view.camera.zoom *= factor;
    clamp_zoom(state);
}

fn clamp_zoom(state: &mut AppState) {
    state.view.camera.zoom = state
        .view
        .camera
        .zoom
        .clamp(state.options.camera_zoom_min, state.options.camera_zoom_max);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LngLat;

    #[test]
    fn zoom_in_erhoeht_den_zoom() {
        let mut state = AppState::new();
        let before = state.view.camera.zoom;
        zoom_in(&mut state);
        assert!(state.view.camera.zoom > before);
    }

    #[test]
    fn zoom_rein_und_raus_kehrt_zurueck() {
        let mut state = AppState::new();
        let original = state.view.camera.zoom;
        zoom_in(&mut state);
        zoom_out(&mut state);
        assert!((state.view.camera.zoom - original).abs() < 1e-9);
    }

    #[test]
    fn zoom_respektiert_optionen_grenzen() {
        let mut state = AppState::new();
        for _ in 0..200 {
            zoom_in(&mut state);
        }
        assert!(state.view.camera.zoom <= state.options.camera_zoom_max);
        for _ in 0..400 {
            zoom_out(&mut state);
        }
        assert!(state.view.camera.zoom >= state.options.camera_zoom_min);
    }

    #[test]
    fn reset_stellt_default_wieder_her() {
        let mut state = AppState::new();
        state.view.camera.look_at(LngLat::new(151.2, -33.8));
        state.view.camera.zoom = 8.0;
        reset_camera(&mut state);
        assert!((state.view.camera.zoom - 1.0).abs() < 1e-9);
    }
}
