//! Geometry Importer: GeoJSON-, KML- und Shapefile-ZIP-Dateien werden in
//! das normalisierte Polygon-/Multipolygon-Modell überführt.
//!
//! Einstiegspunkt ist [`import_geometry`]; das Format wird über die
//! Dateiendung bestimmt. Alle Fehler sind lokal behebbar — der User kann
//! nach jeder Fehlermeldung eine andere Datei wählen.

mod geojson;
mod kml;
mod shapefile;

pub use geojson::geometry_from_geojson_value;

use crate::core::FieldGeometry;
use std::path::Path;
use thiserror::Error;

/// Fehler-Taxonomie des Importers.
#[derive(Debug, Clone, Error)]
pub enum ImportError {
    /// Dateiendung passt zu keinem unterstützten Format.
    #[error("Nicht unterstütztes Dateiformat: .{extension} (unterstützt: .geojson, .json, .kml, .zip)")]
    UnsupportedFormat { extension: String },

    /// Eine nackte `.shp`-Datei ohne ihre Begleitdateien.
    #[error("Eine .shp-Datei allein genügt nicht — bitte das vollständige Shapefile-Set (.shp, .shx, .dbf) als ZIP-Archiv importieren")]
    BareShapefile,

    /// Datei wurde geparst, enthält aber keine Geometrie.
    #[error("Keine Geometrie in der Datei gefunden")]
    NoGeometry,

    /// Geometrie gefunden, aber kein Polygon/MultiPolygon.
    #[error("Geometrie-Typ '{kind}' wird nicht unterstützt, nur Polygon und MultiPolygon")]
    InvalidGeometryKind { kind: String },

    /// Parse- oder Dekomprimierungsfehler.
    #[error("Datei konnte nicht gelesen werden: {0}")]
    UnreadableFile(String),
}

/// Parst `bytes` anhand der Endung von `file_name` und liefert die
/// normalisierte Feld-Geometrie.
pub fn import_geometry(bytes: &[u8], file_name: &str) -> Result<FieldGeometry, ImportError> {
    let extension = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    log::info!("Importiere Geometrie aus '{}' (.{})", file_name, extension);

    match extension.as_str() {
        "geojson" | "json" => geojson::parse_geojson(bytes),
        "kml" => kml::parse_kml(bytes),
        "zip" => shapefile::parse_zipped_shapefile(bytes),
        "shp" => Err(ImportError::BareShapefile),
        _ => Err(ImportError::UnsupportedFormat { extension }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbekannte_endung_wird_abgelehnt() {
        let err = import_geometry(b"x", "grenzen.gpx").unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat { ref extension } if extension == "gpx"));
    }

    #[test]
    fn nackte_shp_datei_bekommt_hinweistext() {
        let err = import_geometry(&[0u8; 128], "feld.shp").unwrap_err();
        assert!(matches!(err, ImportError::BareShapefile));
        assert!(err.to_string().contains("ZIP"));
    }

    #[test]
    fn endungsvergleich_ignoriert_gross_schreibung() {
        let geojson = br#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}"#;
        assert!(import_geometry(geojson, "Feld.GEOJSON").is_ok());
    }
}
