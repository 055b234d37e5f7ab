//! Handler für die Drawing-Erfassung.

use crate::app::session::DrawControlEvent;
use crate::app::state::DrawingModeKind;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::LngLat;

/// Startet eine neue Drawing-Session.
pub fn start(state: &mut AppState, mode: DrawingModeKind) {
    use_cases::drawing::start(state, mode);
}

/// Setzt einen Vertex an der Klick-Position.
pub fn add_point(state: &mut AppState, pos: LngLat) {
    use_cases::drawing::add_point(state, pos);
}

/// Entfernt den zuletzt gesetzten Vertex.
pub fn undo_point(state: &mut AppState) {
    use_cases::drawing::undo_point(state);
}

/// Verwirft alle Vertices der laufenden Session.
pub fn clear_points(state: &mut AppState) {
    use_cases::drawing::clear_points(state);
}

/// Bestätigt die Zeichnung.
pub fn confirm(state: &mut AppState) {
    use_cases::drawing::confirm(state);
}

/// Bricht die Zeichnung ab.
pub fn cancel(state: &mut AppState) {
    use_cases::drawing::cancel(state);
}

/// Reicht ein Control-Ereignis an die Session weiter.
pub fn apply_control_event(state: &mut AppState, event: DrawControlEvent) {
    use_cases::drawing::apply_control_event(state, event);
}
