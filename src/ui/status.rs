//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::to_utm;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &eframe::egui::Context, state: &AppState) {
    use eframe::egui;

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Felder: {}", state.field_count()));

            ui.separator();

            ui.label(format!("Zoom: {:.2} px/m", state.view.camera.zoom));

            ui.separator();

            if let Some(pos) = state.ui.cursor_pos {
                ui.label(format!("Lat/Lng: {:.6}, {:.6}", pos.lat, pos.lng));
                ui.separator();
                ui.label(format!("UTM: {}", to_utm(pos)));
            } else {
                ui.label("Lat/Lng: –");
            }

            if state.import.is_running() {
                ui.separator();
                ui.spinner();
                ui.label("Import läuft …");
            }

            // Statusnachricht (Importfehler, Speicher-Bestätigung)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }
        });
    });
}
