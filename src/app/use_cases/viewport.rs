//! Use-Case-Funktionen für Viewport-Verwaltung.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Wendet einen von der Surface gemeldeten fit_bounds-Request auf die
/// Kamera an (z.B. nach dem Einblenden eines Overlays).
pub fn apply_pending_fit(state: &mut AppState) {
    if let Some((bounds, padding_px)) = state.scene.take_fit_request() {
        let viewport = state.view.viewport_size;
        state.view.camera.fit_bounds(bounds, viewport, padding_px);
    }
}
