//! Options-Dialog: Farben, Overlay-Deckung, Zoom-Verhalten.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt Änderungen als Intents zurück.
pub fn show_options_dialog(ctx: &eframe::egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    use eframe::egui;
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    let mut options = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(false)
        .show(ctx, |ui| {
            ui.heading("Felder");
            ui.horizontal(|ui| {
                ui.label("Füllfarbe:");
                changed |= ui
                    .color_edit_button_srgba_unmultiplied(&mut options.field_fill_color)
                    .changed();
                ui.label("Randfarbe:");
                changed |= ui
                    .color_edit_button_srgba_unmultiplied(&mut options.field_outline_color)
                    .changed();
            });
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.field_outline_width_px, 0.5..=8.0)
                        .text("Randbreite (px)"),
                )
                .changed();

            ui.separator();
            ui.heading("Zeichnung");
            ui.horizontal(|ui| {
                ui.label("Füllfarbe:");
                changed |= ui
                    .color_edit_button_srgba_unmultiplied(&mut options.drawing_fill_color)
                    .changed();
                ui.label("Linienfarbe:");
                changed |= ui
                    .color_edit_button_srgba_unmultiplied(&mut options.drawing_line_color)
                    .changed();
            });
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.drawing_vertex_radius_px, 1.0..=12.0)
                        .text("Vertex-Radius (px)"),
                )
                .changed();

            ui.separator();
            ui.heading("Overlay");
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.overlay_opacity, 0.1..=1.0)
                        .text("Deckungsgrad"),
                )
                .changed();

            ui.separator();
            ui.heading("Kamera");
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.camera_zoom_step, 1.05..=2.0)
                        .text("Zoom-Schritt"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.camera_scroll_zoom_step, 1.01..=1.5)
                        .text("Scroll-Zoom-Schritt"),
                )
                .changed();

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    if changed {
        events.push(AppIntent::OptionsChanged { options });
    }

    events
}
