//! Viewport-Input-Handling: Maus-Events, Tastatur, Scroll → AppIntent.

use crate::app::{AppIntent, AppState};
use eframe::egui;

/// Verwaltet den Input-Zustand für den Karten-Viewport.
#[derive(Default)]
pub struct InputState {
    /// Ob der laufende Primary-Drag ein Kamera-Pan ist
    panning: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus-, Scroll- und
    /// Tastatur-Interaktionen auf der Karte. Aktualisiert zusätzlich die
    /// Cursor-Position im UI-State (Statusleiste mit UTM-Anzeige).
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
        state: &mut AppState,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let viewport = [rect.width(), rect.height()];

        events.push(AppIntent::ViewportResized { size: viewport });

        // Cursor-Position für die Statusleiste
        state.ui.cursor_pos = response.hover_pos().map(|pos| {
            state
                .view
                .camera
                .unproject([pos.x - rect.min.x, pos.y - rect.min.y], viewport)
        });

        self.collect_keyboard(ui, state, &mut events);
        self.collect_pointer(response, rect, state, viewport, &mut events);
        self.collect_scroll(ui, response, rect, state, &mut events);

        events
    }

    fn collect_keyboard(
        &self,
        ui: &egui::Ui,
        state: &AppState,
        events: &mut Vec<AppIntent>,
    ) {
        // Shortcuts nur während einer Session, sonst stören sie Dialoge
        if !state.drawing.is_active() || ui.ctx().wants_keyboard_input() {
            return;
        }
        ui.input(|i| {
            if i.key_pressed(egui::Key::Enter) {
                events.push(AppIntent::ConfirmDrawingRequested);
            }
            if i.key_pressed(egui::Key::Escape) {
                events.push(AppIntent::CancelDrawingRequested);
            }
            if i.key_pressed(egui::Key::Backspace) {
                events.push(AppIntent::UndoPointRequested);
            }
        });
    }

    fn collect_pointer(
        &mut self,
        response: &egui::Response,
        rect: egui::Rect,
        state: &AppState,
        viewport: [f32; 2],
        events: &mut Vec<AppIntent>,
    ) {
        if response.drag_started_by(egui::PointerButton::Primary) {
            self.panning = true;
        }
        if self.panning && response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::CameraPan {
                    delta: [delta.x, delta.y],
                });
            }
        }
        if response.drag_stopped() {
            self.panning = false;
        }

        // Klick (ohne Drag): Vertex setzen
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let geo = state
                    .view
                    .camera
                    .unproject([pos.x - rect.min.x, pos.y - rect.min.y], viewport);
                events.push(AppIntent::MapClicked { pos: geo });
            }
        }
    }

    fn collect_scroll(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
        state: &AppState,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.hovered() {
            return;
        }
        let scroll_y = ui.input(|i| i.raw_scroll_delta.y);
        if scroll_y == 0.0 {
            return;
        }
        let step = state.options.camera_scroll_zoom_step;
        let factor = if scroll_y > 0.0 { step } else { 1.0 / step };
        let focus_screen = response
            .hover_pos()
            .map(|pos| [pos.x - rect.min.x, pos.y - rect.min.y]);
        events.push(AppIntent::CameraZoom {
            factor,
            focus_screen,
        });
    }
}
