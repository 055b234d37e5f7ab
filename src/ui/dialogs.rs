//! Datei-Dialoge und der Feld-Speichern-Dialog.

use crate::app::{AppIntent, AppState};
use crate::app::state::UiState;

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Import-Datei-Dialog
    if ui_state.show_import_dialog {
        ui_state.show_import_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Feld-Geometrie", &["geojson", "json", "kml", "zip", "shp"])
            .pick_file()
        {
            events.push(AppIntent::ImportFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}

/// Zeigt den Speichern-Dialog nach bestätigter Zeichnung oder Import.
pub fn show_save_field_dialog(
    ctx: &eframe::egui::Context,
    ui_state: &mut UiState,
) -> Vec<AppIntent> {
    use eframe::egui;
    let mut events = Vec::new();

    if !ui_state.save_field_dialog.visible {
        return events;
    }
    let dialog = &mut ui_state.save_field_dialog;

    egui::Window::new("Feld speichern")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Fläche: {}", dialog.area_text));
            ui.separator();

            egui::Grid::new("save_field_grid")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut dialog.name);
                    ui.end_row();

                    ui.label("Kultur:");
                    ui.text_edit_singleline(&mut dialog.attributes.crop_type);
                    ui.end_row();

                    ui.label("Sorte:");
                    ui.text_edit_singleline(&mut dialog.attributes.variety);
                    ui.end_row();

                    ui.label("Saison:");
                    ui.text_edit_singleline(&mut dialog.attributes.planting_season);
                    ui.end_row();

                    ui.label("Adresse:");
                    ui.text_edit_singleline(&mut dialog.attributes.address);
                    ui.end_row();
                });

            ui.separator();
            ui.horizontal(|ui| {
                let can_save = !dialog.name.trim().is_empty();
                if ui
                    .add_enabled(can_save, egui::Button::new("Speichern"))
                    .clicked()
                {
                    events.push(AppIntent::SaveFieldConfirmed {
                        name: dialog.name.trim().to_string(),
                        attributes: dialog.attributes.clone(),
                    });
                }
                if ui.button("Verwerfen").clicked() {
                    events.push(AppIntent::SaveFieldCancelled);
                }
            });
        });

    events
}

/// Kleines Fenster mit Fortschritt und Abbrechen-Knopf während eines
/// laufenden Imports.
pub fn show_import_progress(ctx: &eframe::egui::Context, state: &AppState) -> Vec<AppIntent> {
    use eframe::egui;
    let mut events = Vec::new();

    if !state.import.is_running() {
        return events;
    }

    egui::Window::new("Import")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Datei wird gelesen …");
            });
            if ui.button("Abbrechen").clicked() {
                events.push(AppIntent::ImportCancelled);
            }
        });

    events
}
