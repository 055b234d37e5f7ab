//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Kamera um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: [f32; 2]) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt in Bildschirmkoordinaten.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_screen: Option<[f32; 2]>) {
    use_cases::camera::zoom_towards(state, factor, focus_screen);
}

/// Zoomt die Kamera auf ein gespeichertes Feld.
pub fn focus_field(state: &mut AppState, field_id: u64) {
    use_cases::camera::focus_field(state, field_id);
}
