//! Toolbar mit den Drawing-Session-Aktionen.

use crate::app::{AppIntent, AppState, DrawingModeKind};

/// Rendert die Toolbar unterhalb des Menüs.
pub fn render_toolbar(ctx: &eframe::egui::Context, state: &AppState) -> Vec<AppIntent> {
    use eframe::egui;
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let drawing = state.drawing.is_active();

            if ui
                .add_enabled(!drawing, egui::Button::new("Polygon zeichnen"))
                .clicked()
            {
                events.push(AppIntent::StartDrawingRequested {
                    mode: DrawingModeKind::PointPlacement,
                });
            }
            if ui
                .add_enabled(!drawing, egui::Button::new("Polygon editieren"))
                .clicked()
            {
                events.push(AppIntent::StartDrawingRequested {
                    mode: DrawingModeKind::VertexEdit,
                });
            }

            ui.separator();

            let has_points = !state.drawing.vertices().is_empty();
            let is_ready = state
                .drawing
                .session
                .as_ref()
                .is_some_and(|s| s.is_ready());

            if ui
                .add_enabled(drawing && has_points, egui::Button::new("Punkt zurück"))
                .clicked()
            {
                events.push(AppIntent::UndoPointRequested);
            }
            if ui
                .add_enabled(drawing && has_points, egui::Button::new("Alle löschen"))
                .clicked()
            {
                events.push(AppIntent::ClearPointsRequested);
            }
            if ui
                .add_enabled(is_ready, egui::Button::new("Bestätigen (Enter)"))
                .clicked()
            {
                events.push(AppIntent::ConfirmDrawingRequested);
            }
            if ui
                .add_enabled(drawing, egui::Button::new("Abbrechen (Esc)"))
                .clicked()
            {
                events.push(AppIntent::CancelDrawingRequested);
            }

            if let Some(session) = state.drawing.session.as_ref() {
                ui.separator();
                ui.label(format!("{}: {}", session.name(), session.status_text()));
            }
        });
    });

    events
}
