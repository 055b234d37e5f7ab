//! Feld-Entität und Erstellungs-Request für den Persistenz-Kollaborateur.

use super::geometry::{FieldGeometry, LngLat};
use serde::{Deserialize, Serialize};

/// Freie Attribute eines Felds (Sorte, Pflanzsaison, Adresse, …).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldAttributes {
    pub crop_type: String,
    pub variety: String,
    pub planting_season: String,
    /// Pflanzdatum als ISO-8601-String (`YYYY-MM-DD`), falls bekannt.
    pub planting_date: Option<String>,
    pub address: String,
}

/// Persistiertes Feld. Wird vom Persistenz-Kollaborateur erzeugt,
/// sobald eine Drawing-Session finalisiert; die Engine liefert nur
/// Geometrie und abgeleitete Messwerte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: u64,
    pub name: String,
    pub geometry: FieldGeometry,
    /// Abgeleitete Fläche in m² (Spherical-Excess-Näherung).
    pub area_sq_m: f64,
    /// Abgeleiteter Zentroid (Vertex-Mittel, nur für Label/Zoom).
    pub centroid: LngLat,
    pub attributes: FieldAttributes,
}

/// Erstellungs-Request an den Persistenz-Kollaborateur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFieldRequest {
    pub name: String,
    pub attributes: FieldAttributes,
    pub geometry: FieldGeometry,
    pub area_sq_m: f64,
    pub centroid: LngLat,
}

impl NewFieldRequest {
    /// Baut den Request aus Name, Attributen und fertiger Geometrie.
    /// Fläche und Zentroid werden hier abgeleitet, damit jeder
    /// Aufrufer dieselben Messwerte in den Request schreibt.
    pub fn from_geometry(
        name: String,
        attributes: FieldAttributes,
        geometry: FieldGeometry,
    ) -> Self {
        let area_sq_m = super::geodesy::geometry_area_sq_m(&geometry);
        let centroid =
            super::geodesy::geometry_centroid(&geometry).unwrap_or(LngLat::new(0.0, 0.0));
        Self {
            name,
            attributes,
            geometry,
            area_sq_m,
            centroid,
        }
    }
}
