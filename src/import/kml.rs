//! KML-Import: erstes `<coordinates>`-Element des ersten Placemarks.

use super::ImportError;
use crate::core::{FieldGeometry, LngLat, Ring};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Parst KML-Bytes in eine Polygon-Geometrie.
///
/// Es zählt das erste `<coordinates>`-Element im Dokument; Multi-Placemark-
/// KML wird nicht unterstützt (dokumentierte Limitierung). Der Ring wird
/// automatisch geschlossen, falls erster und letzter Punkt differieren.
pub fn parse_kml(bytes: &[u8]) -> Result<FieldGeometry, ImportError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ImportError::UnreadableFile(format!("KML ist kein UTF-8: {e}")))?;

    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();
    let mut in_coordinates = false;
    let mut coordinate_text = String::new();
    let mut found = false;

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let tag = reader
                    .decoder()
                    .decode(name.as_ref())
                    .map_err(|e| ImportError::UnreadableFile(e.to_string()))?;
                // Namespace-Präfixe tolerieren (z.B. <kml:coordinates>)
                if !found && tag.rsplit(':').next() == Some("coordinates") {
                    in_coordinates = true;
                }
            }
            Ok(Event::Text(e)) => {
                if in_coordinates {
                    let text = e
                        .xml_content()
                        .map_err(|e| ImportError::UnreadableFile(e.to_string()))?;
                    coordinate_text.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let tag = reader
                    .decoder()
                    .decode(name.as_ref())
                    .map_err(|e| ImportError::UnreadableFile(e.to_string()))?;
                if in_coordinates && tag.rsplit(':').next() == Some("coordinates") {
                    in_coordinates = false;
                    found = true;
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(ImportError::UnreadableFile(format!(
                    "KML-Parse-Fehler: {err}"
                )))
            }
            _ => {}
        }
        buffer.clear();
    }

    if !found || coordinate_text.trim().is_empty() {
        return Err(ImportError::NoGeometry);
    }

    let vertices = parse_coordinate_tuples(&coordinate_text)?;
    if vertices.len() < 3 {
        return Err(ImportError::NoGeometry);
    }
    Ok(FieldGeometry::Polygon(Ring::closed(vertices)))
}

/// Zerlegt den Koordinatentext in `lng,lat[,alt]`-Tupel.
/// Tupel sind durch Whitespace getrennt, Höhenangaben werden verworfen.
fn parse_coordinate_tuples(text: &str) -> Result<Vec<LngLat>, ImportError> {
    let mut vertices = Vec::new();
    for tuple in text.split_whitespace() {
        let mut parts = tuple.split(',');
        let lng = parts
            .next()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .ok_or_else(|| {
                ImportError::UnreadableFile(format!("ungültiges Koordinaten-Tupel: '{tuple}'"))
            })?;
        let lat = parts
            .next()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .ok_or_else(|| {
                ImportError::UnreadableFile(format!("ungültiges Koordinaten-Tupel: '{tuple}'"))
            })?;
        vertices.push(LngLat::new(lng, lat));
    }
    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KML_OFFENER_RING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <name>Feld A</name>
    <Polygon><outerBoundaryIs><LinearRing>
      <coordinates>
        100.50,13.75,0 100.51,13.75,0 100.51,13.76,0 100.50,13.76,0
      </coordinates>
    </LinearRing></outerBoundaryIs></Polygon>
  </Placemark>
</kml>"#;

    #[test]
    fn offener_ring_wird_geschlossen() {
        let geom = parse_kml(KML_OFFENER_RING.as_bytes()).unwrap();
        let FieldGeometry::Polygon(ring) = geom else {
            panic!("erwartet Polygon");
        };
        assert!(ring.is_closed());
        assert_eq!(ring.distinct_vertices().len(), 4);
        assert_eq!(ring.len(), 5);
    }

    #[test]
    fn hoehenangaben_werden_verworfen() {
        let geom = parse_kml(KML_OFFENER_RING.as_bytes()).unwrap();
        let FieldGeometry::Polygon(ring) = geom else {
            panic!("erwartet Polygon");
        };
        let first = ring.vertices()[0];
        assert_eq!(first.lng, 100.50);
        assert_eq!(first.lat, 13.75);
    }

    #[test]
    fn nur_erstes_coordinates_element_zaehlt() {
        let kml = r#"<kml><Placemark><Polygon><outerBoundaryIs><LinearRing>
            <coordinates>0,0 1,0 1,1</coordinates>
        </LinearRing></outerBoundaryIs></Polygon></Placemark>
        <Placemark><Polygon><outerBoundaryIs><LinearRing>
            <coordinates>5,5 6,5 6,6</coordinates>
        </LinearRing></outerBoundaryIs></Polygon></Placemark></kml>"#;
        let geom = parse_kml(kml.as_bytes()).unwrap();
        let FieldGeometry::Polygon(ring) = geom else {
            panic!("erwartet Polygon");
        };
        assert_eq!(ring.vertices()[0].lng, 0.0);
    }

    #[test]
    fn kml_ohne_coordinates_ist_no_geometry() {
        let kml = "<kml><Placemark><name>leer</name></Placemark></kml>";
        assert!(matches!(
            parse_kml(kml.as_bytes()).unwrap_err(),
            ImportError::NoGeometry
        ));
    }

    #[test]
    fn kaputtes_tupel_ist_unreadable() {
        let kml = "<kml><coordinates>abc,def 1,2 3,4</coordinates></kml>";
        assert!(matches!(
            parse_kml(kml.as_bytes()).unwrap_err(),
            ImportError::UnreadableFile(_)
        ));
    }

    #[test]
    fn weniger_als_drei_punkte_ist_no_geometry() {
        let kml = "<kml><coordinates>0,0 1,1</coordinates></kml>";
        assert!(matches!(
            parse_kml(kml.as_bytes()).unwrap_err(),
            ImportError::NoGeometry
        ));
    }
}
