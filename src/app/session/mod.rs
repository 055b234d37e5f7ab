//! Drawing-Sessions: Polygon-Erfassung in zwei Eingabe-Varianten.
//!
//! Beide Varianten implementieren dieselbe Capability-Schnittstelle
//! [`DrawingMode`], damit Controller und UI nicht wissen müssen, ob
//! gerade Punkt-Platzierung oder Vertex-Editing aktiv ist.

mod point_placement;
mod vertex_edit;

pub use point_placement::{PointPlacementSession, SessionPhase};
pub use vertex_edit::VertexEditSession;

use crate::core::{GeoCamera, LandArea, LngLat, Ring};

/// Ereignis eines externen Vector-Editing-Controls.
///
/// Die Engine konsumiert diese Ereignisse nur; das Control selbst
/// (Vertex-Drag, Handles, Snapping) ist ein externer Kollaborateur.
#[derive(Debug, Clone)]
pub enum DrawControlEvent {
    /// Feature fertiggestellt (Doppelklick/Enter im Control).
    FeatureCreated { vertices: Vec<LngLat> },
    /// Feature während des Editierens verändert.
    FeatureChanged { vertices: Vec<LngLat> },
    /// Feature im Control gelöscht.
    FeatureDeleted,
}

/// Capability-Schnittstelle einer Drawing-Session.
///
/// Sessions sind zustandsbehaftet (Klick-Phasen) und liefern beim
/// Bestätigen einen geschlossenen Ring. Ungültige Aufrufe (z.B.
/// `confirm` mit zu wenigen Punkten) sind stille No-ops — Konvention
/// interaktiver Zeichenwerkzeuge, kein Fehlerfall.
pub trait DrawingMode {
    /// Anzeigename für Toolbar/Statusleiste.
    fn name(&self) -> &str;

    /// Statustext für die aktuelle Phase (z.B. "Punkte setzen …").
    fn status_text(&self) -> &str;

    /// Beginnt eine neue Session und verwirft alte Vertices.
    fn start(&mut self);

    /// Läuft gerade eine Session?
    fn is_active(&self) -> bool;

    /// Genügend Vertices für ein Polygon (≥ 3)?
    fn is_ready(&self) -> bool;

    /// Aktuelle Vertices in Klick-Reihenfolge (offener Ring).
    fn vertices(&self) -> &[LngLat];

    /// Karten-Klick an geografischer Position.
    fn on_map_click(&mut self, _pos: LngLat) {}

    /// Letzten Punkt entfernen.
    fn undo_point(&mut self) {}

    /// Alle Punkte verwerfen, Session bleibt aktiv.
    fn clear_points(&mut self) {}

    /// Ereignis des externen Vector-Editing-Controls.
    fn on_control_event(&mut self, _event: DrawControlEvent) {}

    /// Schließt den Ring und beendet die Session.
    /// `None` wenn noch keine 3 Vertices gesetzt sind (No-op).
    fn confirm(&mut self) -> Option<Ring>;

    /// Bricht die Session ab und verwirft alle Vertices.
    fn cancel(&mut self);
}

/// Live-Feedback einer aktiven Session: Flächentext plus
/// Bildschirmposition des schwebenden Labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveFeedback {
    pub area_sq_m: f64,
    pub area_text: String,
    pub label_screen_pos: [f32; 2],
}

/// Berechnet das Live-Feedback aus den aktuellen Vertices.
///
/// Die Label-Position ist viewport-relativ und muss deshalb auch bei
/// reinen Pan-/Zoom-Änderungen neu abgeleitet werden, nicht nur nach
/// Vertex-Mutationen.
pub fn live_feedback(
    vertices: &[LngLat],
    camera: &GeoCamera,
    viewport: [f32; 2],
) -> Option<LiveFeedback> {
    if vertices.len() < 3 {
        return None;
    }
    let ring = Ring::new(vertices.to_vec());
    let area_sq_m = crate::core::ring_area_sq_m(&ring);
    let centroid = crate::core::ring_centroid(&ring)?;
    Some(LiveFeedback {
        area_sq_m,
        area_text: LandArea::from_square_meters(area_sq_m).to_string(),
        label_screen_pos: camera.project(centroid, viewport),
    })
}
