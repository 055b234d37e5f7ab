//! Application State — zentrale Datenhaltung.

use super::collaborators::{FieldStore, InMemoryFieldStore, LocalSnapshotProvider, SnapshotProvider};
use super::session::DrawingMode;
use super::CommandLog;
use crate::core::{Field, FieldAttributes, FieldGeometry, GeoCamera, LngLat};
use crate::import::ImportError;
use crate::map::{LayerRegistry, OverlayCoordinator, SceneSurface};
use crate::shared::MapperOptions;
use std::sync::mpsc::Receiver;

/// Verfügbare Drawing-Varianten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingModeKind {
    /// Klick-für-Klick-Punktsetzung
    PointPlacement,
    /// Externes Vector-Editing-Control
    VertexEdit,
}

/// Zustand der Drawing-Erfassung.
#[derive(Default)]
pub struct DrawingState {
    /// Aktive Session (None = keine Erfassung)
    pub session: Option<Box<dyn DrawingMode>>,
    /// Variante der aktiven Session
    pub mode: Option<DrawingModeKind>,
    /// Bestätigte oder importierte Geometrie, die auf den Save-Dialog wartet
    pub pending_geometry: Option<FieldGeometry>,
}

impl DrawingState {
    /// Läuft gerade eine Erfassung?
    pub fn is_active(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_active())
    }

    /// Vertices der aktiven Session (leer ohne Session).
    pub fn vertices(&self) -> &[LngLat] {
        self.session.as_ref().map_or(&[], |s| s.vertices())
    }
}

/// Zustand des Speichern-Dialogs nach bestätigter Zeichnung.
#[derive(Debug, Clone, Default)]
pub struct SaveFieldDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Feldname im Dialog
    pub name: String,
    /// Attribute-Arbeitskopie für den Dialog
    pub attributes: FieldAttributes,
    /// Vorberechneter Flächentext (Rai/Ngan/Wah) zur Anzeige
    pub area_text: String,
}

/// UI-bezogener Anwendungszustand.
#[derive(Default)]
pub struct UiState {
    /// Ob der Import-Dateidialog geöffnet werden soll
    pub show_import_dialog: bool,
    /// Speichern-Dialog nach bestätigter Zeichnung
    pub save_field_dialog: SaveFieldDialogState,
    /// Temporäre Statusnachricht (Importfehler, Speicher-Bestätigung)
    pub status_message: Option<String>,
    /// Cursor-Position auf der Karte (für Statusleiste mit UTM-Anzeige)
    pub cursor_pos: Option<LngLat>,
    /// In der Feldliste selektiertes Feld
    pub selected_field_id: Option<u64>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}

/// View-bezogener Anwendungszustand.
pub struct ViewState {
    /// Geografische Kamera der Kartenansicht
    pub camera: GeoCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: GeoCamera::new(),
            viewport_size: [0.0, 0.0],
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Nachricht des Import-Workers an den UI-Thread.
pub type ImportMessage = (u64, Result<FieldGeometry, ImportError>);

/// Zustand des asynchronen Datei-Imports.
///
/// Die Generation zählt monoton; ein Ergebnis wird nur übernommen,
/// wenn seine Generation noch die aktuelle ist. Abbrechen oder ein
/// neuer Import invalidieren damit alle älteren Worker, ohne deren
/// Threads anfassen zu müssen.
#[derive(Default)]
pub struct ImportState {
    /// Aktuelle Import-Generation
    pub generation: u64,
    /// Kanal des laufenden Imports (None = kein Import aktiv)
    pub receiver: Option<Receiver<ImportMessage>>,
}

impl ImportState {
    /// Läuft gerade ein Import?
    pub fn is_running(&self) -> bool {
        self.receiver.is_some()
    }

    /// Holt ein fertiges Import-Ergebnis ab, ohne zu blockieren.
    pub fn poll(&mut self) -> Option<ImportMessage> {
        let message = self.receiver.as_ref()?.try_recv().ok()?;
        self.receiver = None;
        Some(message)
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Gespeicherte Felder (Cache der Store-Liste)
    pub fields: Vec<Field>,
    /// Persistenz-Kollaborateur
    pub store: Box<dyn FieldStore>,
    /// Snapshot-Kollaborateur
    pub snapshots: Box<dyn SnapshotProvider>,
    /// Karten-Szene (Sources und Layer in Zeichenreihenfolge)
    pub scene: SceneSurface,
    /// Registry der reservierten Layer-Namen
    pub registry: LayerRegistry,
    /// Lebenszyklus des Vegetationsindex-Overlays
    pub overlay: OverlayCoordinator,
    /// Drawing-Erfassung
    pub drawing: DrawingState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Asynchroner Datei-Import
    pub import: ImportState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Opacity, Zoom-Stufen)
    pub options: MapperOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit In-Memory-Store und lokalem
    /// Snapshot-Verzeichnis.
    pub fn new() -> Self {
        Self::with_collaborators(
            Box::new(InMemoryFieldStore::new()),
            Box::new(LocalSnapshotProvider::new("snapshots")),
        )
    }

    /// Erstellt einen App-State mit injizierten Kollaborateuren.
    pub fn with_collaborators(
        store: Box<dyn FieldStore>,
        snapshots: Box<dyn SnapshotProvider>,
    ) -> Self {
        Self {
            fields: Vec::new(),
            store,
            snapshots,
            scene: SceneSurface::new(),
            registry: LayerRegistry::new(),
            overlay: OverlayCoordinator::new(),
            drawing: DrawingState::default(),
            view: ViewState::new(),
            ui: UiState::new(),
            import: ImportState::default(),
            command_log: CommandLog::new(),
            options: MapperOptions::default(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt das Feld zu einer ID zurück (aus dem Cache).
    pub fn field(&self, field_id: u64) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// Gibt die Anzahl gespeicherter Felder zurück (für UI-Anzeige).
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
