//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::session::DrawControlEvent;
use super::state::DrawingModeKind;
use crate::core::{FieldAttributes, FieldGeometry, LngLat};
use crate::import::ImportError;
use crate::shared::MapperOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Import-Dateidialog öffnen
    ImportFileRequested,
    /// Datei wurde im Import-Dialog ausgewählt
    ImportFileSelected { path: String },
    /// Laufenden Import abbrechen
    ImportCancelled,
    /// Hintergrund-Import ist fertig (Erfolg oder Fehler)
    ImportCompleted {
        generation: u64,
        result: Result<FieldGeometry, ImportError>,
    },
    /// Anwendung beenden
    ExitRequested,

    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Pixel-Delta verschieben
    CameraPan { delta: [f32; 2] },
    /// Kamera zoomen (optional auf einen Bildschirm-Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus_screen: Option<[f32; 2]>,
    },
    /// Auf ein gespeichertes Feld heranzoomen
    FocusFieldRequested { field_id: u64 },

    /// Drawing-Session starten (Punkt-Platzierung oder Vertex-Editing)
    StartDrawingRequested { mode: DrawingModeKind },
    /// Karten-Klick an geografischer Position
    MapClicked { pos: LngLat },
    /// Letzten gesetzten Punkt entfernen
    UndoPointRequested,
    /// Alle gesetzten Punkte verwerfen
    ClearPointsRequested,
    /// Zeichnung bestätigen (Ring schließen, Save-Dialog öffnen)
    ConfirmDrawingRequested,
    /// Zeichnung abbrechen
    CancelDrawingRequested,
    /// Ereignis des externen Vector-Editing-Controls
    DrawControlEventReceived { event: DrawControlEvent },

    /// Save-Dialog bestätigt: Feld speichern
    SaveFieldConfirmed {
        name: String,
        attributes: FieldAttributes,
    },
    /// Save-Dialog abgebrochen (Zeichnung verwerfen)
    SaveFieldCancelled,
    /// Feld löschen
    DeleteFieldRequested { field_id: u64 },
    /// Feld in der Liste selektieren (None = Selektion aufheben)
    FieldSelected { field_id: Option<u64> },

    /// Vegetationsindex-Overlay für einen Snapshot anzeigen
    ShowOverlayRequested { field_id: u64, image_ref: String },
    /// Aktives Overlay ausblenden
    HideOverlayRequested,

    /// Basemap-Style wurde neu geladen: alle Custom-Layer neu aufbauen
    StyleReloaded,

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: MapperOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Import-Dateidialog anfordern
    RequestImportDialog,
    /// Import im Hintergrund starten
    StartImport { path: String },
    /// Laufenden Import verwerfen (Generation invalidieren)
    CancelImport,
    /// Import-Ergebnis übernehmen (nur aktuelle Generation)
    FinishImport {
        generation: u64,
        result: Result<FieldGeometry, ImportError>,
    },
    /// Anwendung beenden
    RequestExit,

    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Pixel-Delta verschieben
    PanCamera { delta: [f32; 2] },
    /// Kamera zoomen (optional auf Bildschirm-Fokuspunkt)
    ZoomCamera {
        factor: f64,
        focus_screen: Option<[f32; 2]>,
    },
    /// Auf ein gespeichertes Feld heranzoomen
    FocusField { field_id: u64 },

    /// Drawing-Session starten
    StartDrawing { mode: DrawingModeKind },
    /// Punkt an geografischer Position setzen
    AddDrawingPoint { pos: LngLat },
    /// Letzten Punkt entfernen
    UndoDrawingPoint,
    /// Alle Punkte verwerfen, Session bleibt aktiv
    ClearDrawingPoints,
    /// Zeichnung bestätigen
    ConfirmDrawing,
    /// Zeichnung abbrechen
    CancelDrawing,
    /// Control-Ereignis an die aktive Session weiterreichen
    ApplyDrawControlEvent { event: DrawControlEvent },

    /// Feld aus der bestätigten Zeichnung speichern
    SaveField {
        name: String,
        attributes: FieldAttributes,
    },
    /// Save-Dialog schließen und Zeichnung verwerfen
    DismissSaveFieldDialog,
    /// Feld löschen
    DeleteField { field_id: u64 },
    /// Feld selektieren (None = Selektion aufheben)
    SelectField { field_id: Option<u64> },

    /// Vegetationsindex-Overlay anzeigen
    ShowOverlay { field_id: u64, image_ref: String },
    /// Aktives Overlay ausblenden
    HideOverlay,

    /// Alle Custom-Layer nach Style-Reload neu aufbauen
    RebuildAfterStyleReload,

    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: MapperOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
