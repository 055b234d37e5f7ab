//! Handler für gespeicherte Felder.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::FieldAttributes;

/// Speichert die wartende Geometrie als neues Feld.
pub fn save(state: &mut AppState, name: String, attributes: FieldAttributes) -> anyhow::Result<()> {
    use_cases::fields::save_pending(state, name, attributes)
}

/// Schließt den Save-Dialog ohne zu speichern.
pub fn dismiss_save_dialog(state: &mut AppState) {
    use_cases::drawing::dismiss_save_dialog(state);
}

/// Löscht ein Feld.
pub fn delete(state: &mut AppState, field_id: u64) -> anyhow::Result<()> {
    use_cases::fields::delete(state, field_id)
}

/// Selektiert ein Feld in der Liste.
pub fn select(state: &mut AppState, field_id: Option<u64>) {
    use_cases::fields::select(state, field_id);
}
