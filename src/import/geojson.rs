//! GeoJSON-Import: bare Geometry, Feature oder FeatureCollection.

use super::ImportError;
use crate::core::{FieldGeometry, LngLat, Ring};
use serde_json::Value;

/// Parst GeoJSON-Bytes in eine Feld-Geometrie.
pub fn parse_geojson(bytes: &[u8]) -> Result<FieldGeometry, ImportError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| ImportError::UnreadableFile(format!("ungültiges JSON: {e}")))?;
    geometry_from_geojson_value(&value)
}

/// Extrahiert die Geometrie aus einem GeoJSON-Objekt.
///
/// Akzeptiert ein bare Geometry-Objekt, ein Feature oder eine
/// FeatureCollection. Bei einer FeatureCollection zählt nur das erste
/// Feature — weitere Features werden stillschweigend verworfen
/// (dokumentierte Limitierung, kein Multi-Feld-Import).
pub fn geometry_from_geojson_value(value: &Value) -> Result<FieldGeometry, ImportError> {
    match value.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => {
            let features = value
                .get("features")
                .and_then(Value::as_array)
                .filter(|f| !f.is_empty())
                .ok_or(ImportError::NoGeometry)?;
            if features.len() > 1 {
                log::warn!(
                    "FeatureCollection enthält {} Features — nur das erste wird importiert",
                    features.len()
                );
            }
            geometry_from_geojson_value(&features[0])
        }
        Some("Feature") => {
            let geometry = value
                .get("geometry")
                .filter(|g| !g.is_null())
                .ok_or(ImportError::NoGeometry)?;
            geometry_from_geojson_value(geometry)
        }
        Some("Polygon") => {
            let ring = exterior_ring(value.get("coordinates"))?;
            Ok(FieldGeometry::Polygon(ring))
        }
        Some("MultiPolygon") => {
            let polygons = value
                .get("coordinates")
                .and_then(Value::as_array)
                .ok_or(ImportError::NoGeometry)?;
            let mut rings = Vec::with_capacity(polygons.len());
            for polygon in polygons {
                rings.push(exterior_ring(Some(polygon))?);
            }
            if rings.is_empty() {
                return Err(ImportError::NoGeometry);
            }
            Ok(FieldGeometry::MultiPolygon(rings))
        }
        Some(other) => Err(ImportError::InvalidGeometryKind {
            kind: other.to_string(),
        }),
        None => Err(ImportError::NoGeometry),
    }
}

/// Liest den Außenring (erstes Ring-Array) eines Polygon-Koordinatenblocks.
/// Interior-Ringe (Löcher) werden ignoriert.
fn exterior_ring(coordinates: Option<&Value>) -> Result<Ring, ImportError> {
    let rings = coordinates
        .and_then(Value::as_array)
        .filter(|r| !r.is_empty())
        .ok_or(ImportError::NoGeometry)?;

    let positions = rings[0].as_array().ok_or_else(|| {
        ImportError::UnreadableFile("Polygon-Koordinaten sind kein Array".to_string())
    })?;

    let mut vertices = Vec::with_capacity(positions.len());
    for pos in positions {
        let pair = pos.as_array().filter(|p| p.len() >= 2).ok_or_else(|| {
            ImportError::UnreadableFile("Koordinate ist kein [lng, lat]-Paar".to_string())
        })?;
        let lng = pair[0].as_f64().ok_or_else(|| {
            ImportError::UnreadableFile("Längengrad ist keine Zahl".to_string())
        })?;
        let lat = pair[1].as_f64().ok_or_else(|| {
            ImportError::UnreadableFile("Breitengrad ist keine Zahl".to_string())
        })?;
        vertices.push(LngLat::new(lng, lat));
    }

    if vertices.len() < 3 {
        return Err(ImportError::NoGeometry);
    }
    Ok(Ring::closed(vertices))
}
