//! Eigenschaften-Panel: Feldliste, Messwerte und Snapshots.

use crate::app::{AppIntent, AppState};
use crate::core::{to_utm, LandArea};

/// Rendert das Eigenschaften-Panel am rechten Rand.
pub fn render_properties_panel(ctx: &eframe::egui::Context, state: &AppState) -> Vec<AppIntent> {
    use eframe::egui;
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading("Felder");
            ui.separator();

            if state.fields.is_empty() {
                ui.label("Keine Felder gespeichert.");
            }

            for field in &state.fields {
                let selected = state.ui.selected_field_id == Some(field.id);
                ui.horizontal(|ui| {
                    if ui.selectable_label(selected, &field.name).clicked() {
                        let next = if selected { None } else { Some(field.id) };
                        events.push(AppIntent::FieldSelected { field_id: next });
                    }
                    if ui.small_button("Zoom").clicked() {
                        events.push(AppIntent::FocusFieldRequested { field_id: field.id });
                    }
                    if ui.small_button("Löschen").clicked() {
                        events.push(AppIntent::DeleteFieldRequested { field_id: field.id });
                    }
                });
            }

            let Some(field) = state
                .ui
                .selected_field_id
                .and_then(|id| state.field(id))
            else {
                return;
            };

            ui.separator();
            ui.heading(&field.name);
            ui.label(format!(
                "Fläche: {} ({:.0} m²)",
                LandArea::from_square_meters(field.area_sq_m),
                field.area_sq_m
            ));
            ui.label(format!("Zentroid: {}", to_utm(field.centroid)));
            if !field.attributes.crop_type.is_empty() {
                ui.label(format!("Kultur: {}", field.attributes.crop_type));
            }
            if !field.attributes.variety.is_empty() {
                ui.label(format!("Sorte: {}", field.attributes.variety));
            }
            if !field.attributes.planting_season.is_empty() {
                ui.label(format!("Saison: {}", field.attributes.planting_season));
            }
            if let Some(date) = &field.attributes.planting_date {
                ui.label(format!("Pflanzdatum: {}", date));
            }
            if !field.attributes.address.is_empty() {
                ui.label(format!("Adresse: {}", field.attributes.address));
            }

            ui.separator();
            ui.heading("Snapshots");

            if state.overlay.active_field_id().is_some() && ui.button("Overlay ausblenden").clicked()
            {
                events.push(AppIntent::HideOverlayRequested);
            }

            match state.snapshots.snapshots_for(field.id) {
                Ok(snapshots) if snapshots.is_empty() => {
                    ui.label("Keine Snapshots vorhanden.");
                }
                Ok(snapshots) => {
                    for snapshot in snapshots {
                        ui.horizontal(|ui| {
                            ui.label(format!(
                                "{} {} ({:.2})",
                                snapshot.date,
                                snapshot.vi_type.label(),
                                snapshot.mean_value
                            ));
                            match &snapshot.image_ref {
                                Some(image_ref) => {
                                    if ui.small_button("Overlay").clicked() {
                                        events.push(AppIntent::ShowOverlayRequested {
                                            field_id: field.id,
                                            image_ref: image_ref.clone(),
                                        });
                                    }
                                }
                                // Snapshot ohne Raster: kein Fehler, nur kein Button
                                None => {
                                    ui.weak("kein Bild");
                                }
                            }
                        });
                    }
                }
                Err(e) => {
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        format!("Snapshots nicht ladbar: {e}"),
                    );
                }
            }
        });

    events
}
