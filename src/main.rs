//! AgriField Mapper.
//!
//! Desktop-Client für landwirtschaftliche Feldkartierung: Polygone
//! zeichnen oder importieren, Flächen geodätisch vermessen und
//! Vegetationsindex-Overlays betrachten.

use agri_field_mapper::{render, ui, AppController, AppIntent, AppState, MapperOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("AgriField Mapper v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("AgriField Mapper"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "AgriField Mapper",
            options,
            Box::new(|_cc| Ok(Box::new(MapperApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MapperApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    textures: render::RasterTextureCache,
}

impl MapperApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = MapperOptions::config_path();
        let mapper_options = MapperOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = mapper_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            textures: render::RasterTextureCache::new(),
        }
    }
}

impl eframe::App for MapperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.poll_import();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl MapperApp {
    /// Holt ein fertiges Import-Ergebnis vom Worker-Thread ab.
    fn poll_import(&mut self) -> Vec<AppIntent> {
        match self.state.import.poll() {
            Some((generation, result)) => vec![AppIntent::ImportCompleted { generation, result }],
            None => Vec::new(),
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_save_field_dialog(ctx, &mut self.state.ui));
        events.extend(ui::show_import_progress(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    rect,
                    &mut self.state,
                ));

                render::draw_scene(ui, rect, &self.state, &mut self.textures);

                if self.state.fields.is_empty() && !self.state.drawing.is_active() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Kein Feld vorhanden. Zeichnen oder File → Import...",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{e:#}"));
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if self.state.import.is_running() {
            // Worker-Ergebnis zeitnah abholen
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
            return;
        }
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.save_field_dialog.visible
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
