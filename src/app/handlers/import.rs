//! Handler für den Datei-Import.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::FieldGeometry;
use crate::import::ImportError;

/// Fordert den Import-Dateidialog an.
pub fn request_dialog(state: &mut AppState) {
    use_cases::import::request_dialog(state);
}

/// Startet den Hintergrund-Import einer Datei.
pub fn start(state: &mut AppState, path: String) {
    use_cases::import::start(state, path);
}

/// Bricht den laufenden Import ab.
pub fn cancel(state: &mut AppState) {
    use_cases::import::cancel(state);
}

/// Übernimmt ein fertiges Import-Ergebnis.
pub fn finish(
    state: &mut AppState,
    generation: u64,
    result: Result<FieldGeometry, ImportError>,
) -> anyhow::Result<()> {
    use_cases::import::finish(state, generation, result)
}
