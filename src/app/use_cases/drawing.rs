//! Use-Case-Funktionen für die Drawing-Erfassung.

use crate::app::session::{
    DrawControlEvent, DrawingMode, LiveFeedback, PointPlacementSession, VertexEditSession,
};
use crate::app::state::{DrawingModeKind, SaveFieldDialogState};
use crate::app::AppState;
use crate::core::{FieldGeometry, LandArea, LngLat, Ring};

/// Startet eine neue Drawing-Session. Eine laufende Session wird
/// verworfen, ebenso eine noch nicht gespeicherte Geometrie.
pub fn start(state: &mut AppState, mode: DrawingModeKind) {
    if let Some(session) = state.drawing.session.as_mut() {
        session.cancel();
    }
    state.drawing.pending_geometry = None;
    state.ui.save_field_dialog = SaveFieldDialogState::default();

    let mut session: Box<dyn DrawingMode> = match mode {
        DrawingModeKind::PointPlacement => Box::new(PointPlacementSession::new()),
        DrawingModeKind::VertexEdit => Box::new(VertexEditSession::new()),
    };
    session.start();
    log::info!("Drawing-Session gestartet: {}", session.name());
    state.drawing.session = Some(session);
    state.drawing.mode = Some(mode);
    refresh_live_layers(state);
}

/// Setzt einen Vertex an der geklickten Position.
pub fn add_point(state: &mut AppState, pos: LngLat) {
    if let Some(session) = state.drawing.session.as_mut() {
        session.on_map_click(pos);
    }
    refresh_live_layers(state);
}

/// Entfernt den zuletzt gesetzten Vertex.
pub fn undo_point(state: &mut AppState) {
    if let Some(session) = state.drawing.session.as_mut() {
        session.undo_point();
    }
    refresh_live_layers(state);
}

/// Verwirft alle Vertices, die Session bleibt aktiv.
pub fn clear_points(state: &mut AppState) {
    if let Some(session) = state.drawing.session.as_mut() {
        session.clear_points();
    }
    refresh_live_layers(state);
}

/// Reicht ein Control-Ereignis an die aktive Session weiter.
pub fn apply_control_event(state: &mut AppState, event: DrawControlEvent) {
    if let Some(session) = state.drawing.session.as_mut() {
        session.on_control_event(event);
    }
    refresh_live_layers(state);
}

/// Bestätigt die Zeichnung. Unter 3 Vertices ein stiller No-op;
/// sonst wird der Ring geschlossen und der Save-Dialog geöffnet.
pub fn confirm(state: &mut AppState) {
    let Some(ring) = state.drawing.session.as_mut().and_then(|s| s.confirm()) else {
        return;
    };
    open_save_dialog(state, FieldGeometry::Polygon(ring));
}

/// Bricht die Session ab und räumt Zeichnung und Dialog ab.
pub fn cancel(state: &mut AppState) {
    if let Some(session) = state.drawing.session.as_mut() {
        session.cancel();
    }
    state.drawing.session = None;
    state.drawing.mode = None;
    state.drawing.pending_geometry = None;
    state.ui.save_field_dialog = SaveFieldDialogState::default();
    state.registry.clear_drawing_layers(&mut state.scene);
}

/// Schließt den Save-Dialog ohne zu speichern und verwirft die
/// wartende Geometrie.
pub fn dismiss_save_dialog(state: &mut AppState) {
    state.drawing.session = None;
    state.drawing.mode = None;
    state.drawing.pending_geometry = None;
    state.ui.save_field_dialog = SaveFieldDialogState::default();
    state.registry.clear_drawing_layers(&mut state.scene);
}

/// Öffnet den Save-Dialog für eine fertige Geometrie (bestätigte
/// Zeichnung oder Import) und zeigt sie als Vorschau auf der Karte.
pub fn open_save_dialog(state: &mut AppState, geometry: FieldGeometry) {
    let area_sq_m = crate::core::geometry_area_sq_m(&geometry);
    state.ui.save_field_dialog = SaveFieldDialogState {
        visible: true,
        name: String::new(),
        attributes: Default::default(),
        area_text: LandArea::from_square_meters(area_sq_m).to_string(),
    };

    if let Some(ring) = geometry.exterior_rings().first() {
        let ring = ring.clone();
        let line = state.options.drawing_line_paint();
        let fill = state.options.drawing_fill_paint();
        state
            .registry
            .ensure_drawing_layers(&mut state.scene, &ring, line, fill);
    }
    if let Some(bounds) = geometry.bounding_box() {
        let viewport = state.view.viewport_size;
        let padding = state.options.overlay_fit_padding_px;
        state.view.camera.fit_bounds(bounds, viewport, padding);
    }
    state.drawing.pending_geometry = Some(geometry);
}

/// Synchronisiert die Live-Zeichnungs-Layer mit der aktiven Session.
/// Ohne aktive Session (oder ohne Vertices) werden die Layer entfernt.
pub fn refresh_live_layers(state: &mut AppState) {
    let vertices = state.drawing.vertices().to_vec();
    if state.drawing.is_active() && !vertices.is_empty() {
        let ring = Ring::new(vertices);
        let line = state.options.drawing_line_paint();
        let fill = state.options.drawing_fill_paint();
        state
            .registry
            .ensure_drawing_layers(&mut state.scene, &ring, line, fill);
    } else {
        state.registry.clear_drawing_layers(&mut state.scene);
    }
}

/// Live-Feedback (Flächentext + Label-Position) der aktiven Session.
pub fn live_feedback(state: &AppState) -> Option<LiveFeedback> {
    if !state.drawing.is_active() {
        return None;
    }
    crate::app::session::live_feedback(
        state.drawing.vertices(),
        &state.view.camera,
        state.view.viewport_size,
    )
}
