//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::DrawingModeKind;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ImportFileRequested => vec![AppCommand::RequestImportDialog],
        AppIntent::ImportFileSelected { path } => vec![AppCommand::StartImport { path }],
        AppIntent::ImportCancelled => vec![AppCommand::CancelImport],
        AppIntent::ImportCompleted { generation, result } => {
            vec![AppCommand::FinishImport { generation, result }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_screen,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_screen,
        }],
        AppIntent::FocusFieldRequested { field_id } => vec![AppCommand::FocusField { field_id }],

        AppIntent::StartDrawingRequested { mode } => {
            // Ein aktives Overlay würde die Erfassung verdecken
            let mut commands = Vec::new();
            if state.registry.has_overlay() {
                commands.push(AppCommand::HideOverlay);
            }
            commands.push(AppCommand::StartDrawing { mode });
            commands
        }
        AppIntent::MapClicked { pos } => {
            // Karten-Klicks setzen nur in der Punkt-Platzierung Vertices;
            // beim Vertex-Editing gehört der Klick dem Control.
            if state.drawing.is_active() && state.drawing.mode == Some(DrawingModeKind::PointPlacement)
            {
                vec![AppCommand::AddDrawingPoint { pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::UndoPointRequested => vec![AppCommand::UndoDrawingPoint],
        AppIntent::ClearPointsRequested => vec![AppCommand::ClearDrawingPoints],
        AppIntent::ConfirmDrawingRequested => vec![AppCommand::ConfirmDrawing],
        AppIntent::CancelDrawingRequested => vec![AppCommand::CancelDrawing],
        AppIntent::DrawControlEventReceived { event } => {
            vec![AppCommand::ApplyDrawControlEvent { event }]
        }

        AppIntent::SaveFieldConfirmed { name, attributes } => {
            vec![AppCommand::SaveField { name, attributes }]
        }
        AppIntent::SaveFieldCancelled => vec![AppCommand::DismissSaveFieldDialog],
        AppIntent::DeleteFieldRequested { field_id } => vec![AppCommand::DeleteField { field_id }],
        AppIntent::FieldSelected { field_id } => vec![AppCommand::SelectField { field_id }],

        AppIntent::ShowOverlayRequested {
            field_id,
            image_ref,
        } => vec![AppCommand::ShowOverlay {
            field_id,
            image_ref,
        }],
        AppIntent::HideOverlayRequested => vec![AppCommand::HideOverlay],

        AppIntent::StyleReloaded => vec![AppCommand::RebuildAfterStyleReload],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
