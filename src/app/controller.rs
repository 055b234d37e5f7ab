//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Import ===
            AppCommand::RequestImportDialog => handlers::import::request_dialog(state),
            AppCommand::StartImport { path } => handlers::import::start(state, path),
            AppCommand::CancelImport => handlers::import::cancel(state),
            AppCommand::FinishImport { generation, result } => {
                handlers::import::finish(state, generation, result)?
            }

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_screen,
            } => handlers::view::zoom_towards(state, factor, focus_screen),
            AppCommand::FocusField { field_id } => handlers::view::focus_field(state, field_id),

            // === Drawing ===
            AppCommand::StartDrawing { mode } => handlers::drawing::start(state, mode),
            AppCommand::AddDrawingPoint { pos } => handlers::drawing::add_point(state, pos),
            AppCommand::UndoDrawingPoint => handlers::drawing::undo_point(state),
            AppCommand::ClearDrawingPoints => handlers::drawing::clear_points(state),
            AppCommand::ConfirmDrawing => handlers::drawing::confirm(state),
            AppCommand::CancelDrawing => handlers::drawing::cancel(state),
            AppCommand::ApplyDrawControlEvent { event } => {
                handlers::drawing::apply_control_event(state, event)
            }

            // === Felder ===
            AppCommand::SaveField { name, attributes } => {
                handlers::fields::save(state, name, attributes)?
            }
            AppCommand::DismissSaveFieldDialog => handlers::fields::dismiss_save_dialog(state),
            AppCommand::DeleteField { field_id } => handlers::fields::delete(state, field_id)?,
            AppCommand::SelectField { field_id } => handlers::fields::select(state, field_id),

            // === Overlay ===
            AppCommand::ShowOverlay {
                field_id,
                image_ref,
            } => handlers::overlay::show(state, field_id, &image_ref)?,
            AppCommand::HideOverlay => handlers::overlay::hide(state),

            // === Style-Reload ===
            AppCommand::RebuildAfterStyleReload => {
                handlers::overlay::rebuild_after_style_reload(state)?
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }
}
