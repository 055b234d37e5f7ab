//! Shapefile-Import aus ZIP-Archiven.
//!
//! Das Archiv wird nach dem `.shp`-Eintrag durchsucht, dessen Polygon-
//! Records nach GeoJSON konvertiert werden; danach greift dieselbe
//! FeatureCollection-Extraktion wie beim direkten GeoJSON-Import
//! (erstes Feature zählt).

use super::{geojson, ImportError};
use crate::core::FieldGeometry;
use serde_json::{json, Value};
use std::io::Read;

/// Parst ein ZIP-Archiv mit einem Shapefile-Komponentensatz.
pub fn parse_zipped_shapefile(bytes: &[u8]) -> Result<FieldGeometry, ImportError> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)
        .map_err(|e| ImportError::UnreadableFile(format!("ZIP-Archiv: {e}")))?;

    let shp_name = archive
        .file_names()
        .find(|name| name.to_lowercase().ends_with(".shp"))
        .map(str::to_string)
        .ok_or(ImportError::NoGeometry)?;

    log::info!("Shapefile-Eintrag im Archiv: {}", shp_name);

    let mut shp_bytes = Vec::new();
    archive
        .by_name(&shp_name)
        .map_err(|e| ImportError::UnreadableFile(format!("ZIP-Eintrag '{shp_name}': {e}")))?
        .read_to_end(&mut shp_bytes)
        .map_err(|e| ImportError::UnreadableFile(format!("Dekomprimierung: {e}")))?;

    let feature_collection = shp_to_geojson(&shp_bytes)?;
    geojson::geometry_from_geojson_value(&feature_collection)
}

// Shape-Typ-Codes laut ESRI-Spezifikation
const SHAPE_NULL: i32 = 0;
const SHAPE_POLYGON: i32 = 5;
const SHAPE_POLYGON_Z: i32 = 15;
const SHAPE_POLYGON_M: i32 = 25;

fn shape_type_name(code: i32) -> String {
    match code {
        1 => "Point".to_string(),
        3 => "PolyLine".to_string(),
        8 => "MultiPoint".to_string(),
        11 => "PointZ".to_string(),
        13 => "PolyLineZ".to_string(),
        18 => "MultiPointZ".to_string(),
        21 => "PointM".to_string(),
        23 => "PolyLineM".to_string(),
        28 => "MultiPointM".to_string(),
        31 => "MultiPatch".to_string(),
        other => format!("ShapeType {other}"),
    }
}

/// Konvertiert `.shp`-Bytes in eine GeoJSON-FeatureCollection.
/// Ein Record wird zu einem Feature; Ring-Orientierung (Löcher) wird
/// nicht ausgewertet, jeder Part gilt als Außenring.
fn shp_to_geojson(bytes: &[u8]) -> Result<Value, ImportError> {
    // Datei-Header: 100 Bytes, File-Code 9994 big-endian am Anfang
    if read_i32_be(bytes, 0)? != 9994 {
        return Err(ImportError::UnreadableFile(
            "kein Shapefile (File-Code != 9994)".to_string(),
        ));
    }

    let mut features: Vec<Value> = Vec::new();
    let mut offset = 100usize;

    while offset + 8 <= bytes.len() {
        // Record-Header: Nummer + Content-Länge in 16-Bit-Wörtern
        let content_words = read_i32_be(bytes, offset + 4)?;
        let content_len = content_words as usize * 2;
        let content_start = offset + 8;
        let content_end = content_start + content_len;
        if content_words < 2 || content_end > bytes.len() {
            return Err(ImportError::UnreadableFile(
                "Shapefile-Record unvollständig".to_string(),
            ));
        }

        let shape_type = read_i32_le(bytes, content_start)?;
        match shape_type {
            SHAPE_NULL => {}
            SHAPE_POLYGON | SHAPE_POLYGON_Z | SHAPE_POLYGON_M => {
                features.push(json!({
                    "type": "Feature",
                    "properties": {},
                    "geometry": polygon_record_to_geojson(&bytes[content_start..content_end])?,
                }));
            }
            other => {
                return Err(ImportError::InvalidGeometryKind {
                    kind: shape_type_name(other),
                });
            }
        }

        offset = content_end;
    }

    if features.is_empty() {
        return Err(ImportError::NoGeometry);
    }

    Ok(json!({ "type": "FeatureCollection", "features": features }))
}

/// Liest einen Polygon-Record (ab Shape-Typ-Feld) als GeoJSON-Geometrie.
///
/// Layout: ShapeType(4) Box(32) NumParts(4) NumPoints(4)
/// Parts(4·NumParts) Points(16·NumPoints); Z/M-Blöcke dahinter
/// werden ignoriert.
fn polygon_record_to_geojson(content: &[u8]) -> Result<Value, ImportError> {
    let num_parts = read_i32_le(content, 36)?;
    let num_points = read_i32_le(content, 40)?;
    if num_parts <= 0 || num_points <= 0 {
        return Err(ImportError::NoGeometry);
    }
    let num_parts = num_parts as usize;
    let num_points = num_points as usize;

    let parts_start = 44;
    let points_start = parts_start + 4 * num_parts;

    let mut part_offsets = Vec::with_capacity(num_parts + 1);
    for i in 0..num_parts {
        let part = read_i32_le(content, parts_start + 4 * i)?;
        if part < 0 || part as usize > num_points {
            return Err(ImportError::UnreadableFile(
                "Shapefile-Part-Index außerhalb des Punktbereichs".to_string(),
            ));
        }
        part_offsets.push(part as usize);
    }
    part_offsets.push(num_points);

    let mut rings: Vec<Value> = Vec::with_capacity(num_parts);
    for pair in part_offsets.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let mut coords: Vec<Value> = Vec::with_capacity(end - start);
        for i in start..end {
            let x = read_f64_le(content, points_start + 16 * i)?;
            let y = read_f64_le(content, points_start + 16 * i + 8)?;
            coords.push(json!([x, y]));
        }
        rings.push(Value::Array(coords));
    }

    if rings.len() == 1 {
        Ok(json!({ "type": "Polygon", "coordinates": rings }))
    } else {
        Ok(json!({
            "type": "MultiPolygon",
            "coordinates": rings.into_iter().map(|r| Value::Array(vec![r])).collect::<Vec<_>>(),
        }))
    }
}

fn read_i32_be(bytes: &[u8], offset: usize) -> Result<i32, ImportError> {
    bytes
        .get(offset..offset + 4)
        .map(|b| i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| ImportError::UnreadableFile("Shapefile unerwartet zu Ende".to_string()))
}

fn read_i32_le(bytes: &[u8], offset: usize) -> Result<i32, ImportError> {
    bytes
        .get(offset..offset + 4)
        .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| ImportError::UnreadableFile("Shapefile unerwartet zu Ende".to_string()))
}

fn read_f64_le(bytes: &[u8], offset: usize) -> Result<f64, ImportError> {
    bytes
        .get(offset..offset + 8)
        .map(|b| f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
        .ok_or_else(|| ImportError::UnreadableFile("Shapefile unerwartet zu Ende".to_string()))
}
