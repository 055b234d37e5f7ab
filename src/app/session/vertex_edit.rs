//! Vertex-Editing: Adapter für ein externes Vector-Editing-Control.
//!
//! Das Control besitzt die Interaktion (Vertices ziehen, einfügen,
//! löschen); diese Session spiegelt nur dessen Ereignisse in den
//! gemeinsamen [`DrawingMode`]-Vertrag.

use super::{DrawControlEvent, DrawingMode, LiveFeedback};
use crate::core::{GeoCamera, LngLat, Ring};

#[derive(Debug, Default)]
pub struct VertexEditSession {
    active: bool,
    vertices: Vec<LngLat>,
    /// Vom Control bereits fertiggestellter Ring, wartet auf `confirm`.
    finished: Option<Ring>,
}

impl VertexEditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hat das Control die Zeichnung bereits fertiggestellt?
    pub fn has_finished_feature(&self) -> bool {
        self.finished.is_some()
    }

    pub fn live_feedback(&self, camera: &GeoCamera, viewport: [f32; 2]) -> Option<LiveFeedback> {
        if !self.active {
            return None;
        }
        super::live_feedback(&self.vertices, camera, viewport)
    }
}

impl DrawingMode for VertexEditSession {
    fn name(&self) -> &str {
        "Vertex-Editing"
    }

    fn status_text(&self) -> &str {
        if !self.active {
            "Bereit"
        } else if self.finished.is_some() {
            "Zeichnung fertig, bestätigen oder weiter bearbeiten"
        } else {
            "Polygon im Editor zeichnen"
        }
    }

    fn start(&mut self) {
        self.vertices.clear();
        self.finished = None;
        self.active = true;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn is_ready(&self) -> bool {
        self.active && (self.finished.is_some() || self.vertices.len() >= 3)
    }

    fn vertices(&self) -> &[LngLat] {
        &self.vertices
    }

    fn on_control_event(&mut self, event: DrawControlEvent) {
        if !self.active {
            return;
        }
        match event {
            DrawControlEvent::FeatureCreated { vertices } => {
                if vertices.len() >= 3 {
                    self.finished = Some(Ring::closed(vertices.clone()));
                }
                self.vertices = vertices;
            }
            DrawControlEvent::FeatureChanged { vertices } => {
                // Weiterbearbeiten macht eine frühere Fertigstellung ungültig
                self.finished = None;
                self.vertices = vertices;
            }
            DrawControlEvent::FeatureDeleted => {
                self.finished = None;
                self.vertices.clear();
            }
        }
    }

    fn clear_points(&mut self) {
        if self.active {
            self.finished = None;
            self.vertices.clear();
        }
    }

    fn confirm(&mut self) -> Option<Ring> {
        if !self.active {
            return None;
        }
        let ring = match self.finished.take() {
            Some(ring) => ring,
            None if self.vertices.len() >= 3 => Ring::closed(std::mem::take(&mut self.vertices)),
            None => return None,
        };
        self.active = false;
        self.vertices.clear();
        Some(ring)
    }

    fn cancel(&mut self) {
        self.active = false;
        self.vertices.clear();
        self.finished = None;
    }
}
