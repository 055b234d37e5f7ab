//! Punkt-Platzierung: Klick-für-Klick-Erfassung eines Polygons.

use super::{DrawingMode, LiveFeedback};
use crate::core::{GeoCamera, LngLat, Ring};

/// Phasen der Punkt-Platzierungs-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Active,
    Confirmed,
    Cancelled,
}

/// Erfasst ein Polygon durch einzelne Karten-Klicks.
///
/// Mutationen (Punkt setzen, Undo, Alles-Löschen) sind nur in der
/// Phase `Active` wirksam; danach schließt `confirm` den Ring oder
/// `cancel` verwirft ihn. Ein erneutes `start` setzt die Session
/// vollständig zurück.
#[derive(Debug)]
pub struct PointPlacementSession {
    phase: SessionPhase,
    vertices: Vec<LngLat>,
}

impl Default for PointPlacementSession {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Idle,
            vertices: Vec::new(),
        }
    }
}

impl PointPlacementSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Live-Feedback für die aktuelle Punktmenge.
    pub fn live_feedback(&self, camera: &GeoCamera, viewport: [f32; 2]) -> Option<LiveFeedback> {
        if self.phase != SessionPhase::Active {
            return None;
        }
        super::live_feedback(&self.vertices, camera, viewport)
    }
}

impl DrawingMode for PointPlacementSession {
    fn name(&self) -> &str {
        "Punkt-Platzierung"
    }

    fn status_text(&self) -> &str {
        match self.phase {
            SessionPhase::Idle => "Bereit",
            SessionPhase::Active if self.vertices.len() < 3 => {
                "Punkte setzen (mind. 3 für ein Polygon)"
            }
            SessionPhase::Active => "Punkte setzen oder bestätigen",
            SessionPhase::Confirmed => "Polygon bestätigt",
            SessionPhase::Cancelled => "Session abgebrochen",
        }
    }

    fn start(&mut self) {
        self.vertices.clear();
        self.phase = SessionPhase::Active;
    }

    fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    fn is_ready(&self) -> bool {
        self.phase == SessionPhase::Active && self.vertices.len() >= 3
    }

    fn vertices(&self) -> &[LngLat] {
        &self.vertices
    }

    fn on_map_click(&mut self, pos: LngLat) {
        if self.phase == SessionPhase::Active {
            self.vertices.push(pos);
        }
    }

    fn undo_point(&mut self) {
        if self.phase == SessionPhase::Active {
            self.vertices.pop();
        }
    }

    fn clear_points(&mut self) {
        if self.phase == SessionPhase::Active {
            // Session bleibt aktiv, nur die Punkte sind weg
            self.vertices.clear();
        }
    }

    fn confirm(&mut self) -> Option<Ring> {
        if !self.is_ready() {
            return None;
        }
        let ring = Ring::closed(std::mem::take(&mut self.vertices));
        self.phase = SessionPhase::Confirmed;
        Some(ring)
    }

    fn cancel(&mut self) {
        if self.phase == SessionPhase::Active {
            self.vertices.clear();
            self.phase = SessionPhase::Cancelled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(session: &mut PointPlacementSession, lng: f64, lat: f64) {
        session.on_map_click(LngLat::new(lng, lat));
    }

    #[test]
    fn klicks_vor_start_werden_ignoriert() {
        let mut session = PointPlacementSession::new();
        click(&mut session, 100.5, 13.7);
        assert!(session.vertices().is_empty());
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn start_verwirft_alte_punkte() {
        let mut session = PointPlacementSession::new();
        session.start();
        click(&mut session, 0.0, 0.0);
        click(&mut session, 1.0, 0.0);
        session.start();
        assert!(session.vertices().is_empty());
        assert!(session.is_active());
    }

    #[test]
    fn confirm_unter_drei_punkten_ist_noop() {
        let mut session = PointPlacementSession::new();
        session.start();
        click(&mut session, 0.0, 0.0);
        click(&mut session, 1.0, 0.0);
        assert!(session.confirm().is_none());
        // Session läuft weiter, Punkte bleiben erhalten
        assert!(session.is_active());
        assert_eq!(session.vertices().len(), 2);
    }

    #[test]
    fn confirm_schliesst_den_ring() {
        let mut session = PointPlacementSession::new();
        session.start();
        click(&mut session, 0.0, 0.0);
        click(&mut session, 0.001, 0.0);
        click(&mut session, 0.001, 0.001);
        let ring = session.confirm().expect("Ring erwartet");
        assert!(ring.is_closed());
        assert_eq!(ring.distinct_vertices().len(), 3);
        assert_eq!(session.phase(), SessionPhase::Confirmed);
        assert!(!session.is_active());
    }

    #[test]
    fn undo_entfernt_nur_den_letzten_punkt() {
        let mut session = PointPlacementSession::new();
        session.start();
        click(&mut session, 0.0, 0.0);
        click(&mut session, 1.0, 0.0);
        session.undo_point();
        assert_eq!(session.vertices(), &[LngLat::new(0.0, 0.0)]);
        // Undo auf leerer Liste ist ein No-op
        session.undo_point();
        session.undo_point();
        assert!(session.vertices().is_empty());
        assert!(session.is_active());
    }

    #[test]
    fn clear_behaelt_die_session_aktiv() {
        let mut session = PointPlacementSession::new();
        session.start();
        click(&mut session, 0.0, 0.0);
        click(&mut session, 1.0, 0.0);
        session.clear_points();
        assert!(session.vertices().is_empty());
        assert!(session.is_active());
        // weiter klicken ist erlaubt
        click(&mut session, 2.0, 2.0);
        assert_eq!(session.vertices().len(), 1);
    }

    #[test]
    fn cancel_verwirft_alles() {
        let mut session = PointPlacementSession::new();
        session.start();
        click(&mut session, 0.0, 0.0);
        click(&mut session, 1.0, 0.0);
        click(&mut session, 1.0, 1.0);
        session.cancel();
        assert_eq!(session.phase(), SessionPhase::Cancelled);
        assert!(session.vertices().is_empty());
        assert!(session.confirm().is_none());
    }
}
