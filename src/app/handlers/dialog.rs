//! Handler für Dialoge und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::MapperOptions;

/// Fordert das kontrollierte Beenden der Anwendung an.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Options-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Options-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Wendet geänderte Optionen an, speichert sie und zeichnet alle
/// verwalteten Layer mit den neuen Farben neu.
pub fn apply_options(state: &mut AppState, options: MapperOptions) -> anyhow::Result<()> {
    state.options = options;
    state.options.save_to_file(&MapperOptions::config_path())?;
    crate::app::use_cases::fields::sync_field_layers(state);
    crate::app::use_cases::drawing::refresh_live_layers(state);
    Ok(())
}

/// Setzt die Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, MapperOptions::default())
}
