//! Polygon-Datenmodell: LngLat, Ring, FieldGeometry, GeoBounds.

use serde::{Deserialize, Serialize};

/// Geografische Koordinate in WGS-84 (Grad).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// Geschlossener Polygon-Ring: geordnete Vertex-Folge, erster Punkt
/// wird beim Schließen als letzter wiederholt.
///
/// Invariante nach `close()`: `vertices.first() == vertices.last()`.
/// Einfachheit (keine Selbstschnitte) wird angenommen, nicht erzwungen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    vertices: Vec<LngLat>,
}

impl Ring {
    /// Erstellt einen Ring aus einer offenen oder geschlossenen Vertex-Liste.
    pub fn new(vertices: Vec<LngLat>) -> Self {
        Self { vertices }
    }

    /// Erstellt einen Ring und schließt ihn sofort.
    pub fn closed(vertices: Vec<LngLat>) -> Self {
        let mut ring = Self::new(vertices);
        ring.close();
        ring
    }

    /// Schließt den Ring: hängt den ersten Punkt als letzten an,
    /// falls Anfang und Ende noch nicht identisch sind.
    pub fn close(&mut self) {
        if self.vertices.len() >= 2 {
            let first = self.vertices[0];
            if self.vertices.last() != Some(&first) {
                self.vertices.push(first);
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 2 && self.vertices.first() == self.vertices.last()
    }

    /// Alle Vertices inklusive des schließenden Duplikats.
    pub fn vertices(&self) -> &[LngLat] {
        &self.vertices
    }

    /// Vertices ohne das schließende Duplikat.
    pub fn distinct_vertices(&self) -> &[LngLat] {
        if self.is_closed() {
            &self.vertices[..self.vertices.len() - 1]
        } else {
            &self.vertices
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Polygon- oder Multipolygon-Geometrie eines Felds.
///
/// Multipolygon: mehrere Ringe mit denselben Eigenschaften.
/// Löcher (Interior-Rings) kommen in den Quelldaten des Produkts
/// nicht vor und werden nicht modelliert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldGeometry {
    Polygon(Ring),
    MultiPolygon(Vec<Ring>),
}

impl FieldGeometry {
    /// Alle Außenringe in Zeichenreihenfolge.
    pub fn exterior_rings(&self) -> &[Ring] {
        match self {
            FieldGeometry::Polygon(ring) => std::slice::from_ref(ring),
            FieldGeometry::MultiPolygon(rings) => rings,
        }
    }

    /// Achsenparallele Bounding-Box über alle Ring-Vertices.
    /// `None` bei leerer Geometrie.
    pub fn bounding_box(&self) -> Option<GeoBounds> {
        let mut bounds: Option<GeoBounds> = None;
        for ring in self.exterior_rings() {
            for v in ring.vertices() {
                match &mut bounds {
                    Some(b) => b.extend(*v),
                    None => bounds = Some(GeoBounds::point(*v)),
                }
            }
        }
        bounds
    }

    /// Konvertiert in ein GeoJSON-Geometry-Objekt.
    pub fn to_geojson(&self) -> serde_json::Value {
        fn ring_coords(ring: &Ring) -> serde_json::Value {
            serde_json::Value::Array(
                ring.vertices()
                    .iter()
                    .map(|v| serde_json::json!([v.lng, v.lat]))
                    .collect(),
            )
        }

        match self {
            FieldGeometry::Polygon(ring) => serde_json::json!({
                "type": "Polygon",
                "coordinates": [ring_coords(ring)],
            }),
            FieldGeometry::MultiPolygon(rings) => serde_json::json!({
                "type": "MultiPolygon",
                "coordinates": rings
                    .iter()
                    .map(|r| serde_json::Value::Array(vec![ring_coords(r)]))
                    .collect::<Vec<_>>(),
            }),
        }
    }
}

/// Achsenparallele geografische Bounding-Box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl GeoBounds {
    /// Degenerierte Box aus einem einzelnen Punkt.
    pub fn point(p: LngLat) -> Self {
        Self {
            min_lng: p.lng,
            min_lat: p.lat,
            max_lng: p.lng,
            max_lat: p.lat,
        }
    }

    /// Erweitert die Box, sodass `p` enthalten ist.
    pub fn extend(&mut self, p: LngLat) {
        self.min_lng = self.min_lng.min(p.lng);
        self.min_lat = self.min_lat.min(p.lat);
        self.max_lng = self.max_lng.max(p.lng);
        self.max_lat = self.max_lat.max(p.lat);
    }

    pub fn center(&self) -> LngLat {
        LngLat::new(
            (self.min_lng + self.max_lng) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Eckpunkte in Image-Anchor-Reihenfolge:
    /// oben-links, oben-rechts, unten-rechts, unten-links.
    pub fn corners(&self) -> [LngLat; 4] {
        [
            LngLat::new(self.min_lng, self.max_lat),
            LngLat::new(self.max_lng, self.max_lat),
            LngLat::new(self.max_lng, self.min_lat),
            LngLat::new(self.min_lng, self.min_lat),
        ]
    }
}

/// Punkt-in-Polygon-Test (Ray-Casting) für Feld-Hit-Tests im Viewport.
pub fn ring_contains(ring: &Ring, p: LngLat) -> bool {
    let pts = ring.distinct_vertices();
    if pts.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = pts.len() - 1;
    for i in 0..pts.len() {
        let (a, b) = (pts[i], pts[j]);
        if (a.lat > p.lat) != (b.lat > p.lat) {
            let x = (b.lng - a.lng) * (p.lat - a.lat) / (b.lat - a.lat) + a.lng;
            if p.lng < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Ring {
        Ring::closed(vec![
            LngLat::new(0.0, 0.0),
            LngLat::new(1.0, 0.0),
            LngLat::new(1.0, 1.0),
            LngLat::new(0.0, 1.0),
        ])
    }

    #[test]
    fn close_haengt_ersten_punkt_an() {
        let ring = square();
        assert_eq!(ring.len(), 5);
        assert!(ring.is_closed());
        assert_eq!(ring.distinct_vertices().len(), 4);
    }

    #[test]
    fn close_ist_idempotent() {
        let mut ring = square();
        ring.close();
        assert_eq!(ring.len(), 5);
    }

    #[test]
    fn bounding_box_ueber_alle_ringe() {
        let geom = FieldGeometry::MultiPolygon(vec![
            square(),
            Ring::closed(vec![
                LngLat::new(5.0, 5.0),
                LngLat::new(6.0, 5.0),
                LngLat::new(6.0, 7.0),
            ]),
        ]);
        let bounds = geom.bounding_box().unwrap();
        assert_eq!(bounds.min_lng, 0.0);
        assert_eq!(bounds.max_lng, 6.0);
        assert_eq!(bounds.max_lat, 7.0);
    }

    #[test]
    fn geojson_polygon_hat_geschlossenen_ring() {
        let geom = FieldGeometry::Polygon(square());
        let value = geom.to_geojson();
        assert_eq!(value["type"], "Polygon");
        let coords = value["coordinates"][0].as_array().unwrap();
        assert_eq!(coords.len(), 5);
        assert_eq!(coords.first(), coords.last());
    }

    #[test]
    fn ring_contains_innen_und_aussen() {
        let ring = square();
        assert!(ring_contains(&ring, LngLat::new(0.5, 0.5)));
        assert!(!ring_contains(&ring, LngLat::new(1.5, 0.5)));
    }
}
