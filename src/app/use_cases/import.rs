//! Use-Case-Funktionen für den asynchronen Datei-Import.
//!
//! Der Import liest und parst die Datei auf einem Worker-Thread; das
//! Ergebnis kommt über einen mpsc-Kanal zurück auf den UI-Thread.
//! Die Generation im State entscheidet, ob das Ergebnis noch gilt.

use crate::app::AppState;
use crate::core::FieldGeometry;
use crate::import::ImportError;
use anyhow::Result;
use std::path::Path;

/// Öffnet den Import-Dateidialog.
pub fn request_dialog(state: &mut AppState) {
    state.ui.show_import_dialog = true;
}

/// Startet den Import einer Datei im Hintergrund. Ein bereits laufender
/// Import wird dadurch invalidiert.
pub fn start(state: &mut AppState, path: String) {
    state.import.generation += 1;
    let generation = state.import.generation;

    let file_name = Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(&path)
        .to_string();
    state.ui.status_message = Some(format!("Importiere {} …", file_name));
    log::info!("Import gestartet (Generation {}): {}", generation, path);

    let (tx, rx) = std::sync::mpsc::channel();
    state.import.receiver = Some(rx);

    std::thread::spawn(move || {
        let result = std::fs::read(&path)
            .map_err(|e| ImportError::UnreadableFile(e.to_string()))
            .and_then(|bytes| crate::import::import_geometry(&bytes, &file_name));
        // Empfänger kann nach einem Abbruch schon weg sein
        let _ = tx.send((generation, result));
    });
}

/// Bricht den laufenden Import ab. Der Worker läuft zu Ende, sein
/// Ergebnis fällt aber durch den Generationsvergleich.
pub fn cancel(state: &mut AppState) {
    if state.import.receiver.take().is_some() {
        state.import.generation += 1;
        state.ui.status_message = Some("Import abgebrochen".to_string());
        log::info!("Import abgebrochen");
    }
}

/// Übernimmt ein Import-Ergebnis. Ergebnisse veralteter Generationen
/// werden kommentarlos verworfen.
pub fn finish(
    state: &mut AppState,
    generation: u64,
    result: Result<FieldGeometry, ImportError>,
) -> Result<()> {
    if generation != state.import.generation {
        log::debug!("Import-Ergebnis der Generation {} verworfen", generation);
        return Ok(());
    }
    state.import.receiver = None;

    match result {
        Ok(geometry) => {
            log::info!("Import erfolgreich");
            state.ui.status_message = None;
            super::drawing::open_save_dialog(state, geometry);
        }
        Err(error) => {
            log::warn!("Import fehlgeschlagen: {}", error);
            state.ui.status_message = Some(error.to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LngLat, Ring};

    fn square_geometry() -> FieldGeometry {
        FieldGeometry::Polygon(Ring::closed(vec![
            LngLat::new(0.0, 0.0),
            LngLat::new(0.001, 0.0),
            LngLat::new(0.001, 0.001),
            LngLat::new(0.0, 0.001),
        ]))
    }

    #[test]
    fn erfolgreicher_import_oeffnet_den_save_dialog() {
        let mut state = AppState::new();
        state.import.generation = 3;
        finish(&mut state, 3, Ok(square_geometry())).unwrap();
        assert!(state.ui.save_field_dialog.visible);
        assert!(state.drawing.pending_geometry.is_some());
    }

    #[test]
    fn veraltete_generation_wird_verworfen() {
        let mut state = AppState::new();
        state.import.generation = 5;
        finish(&mut state, 4, Ok(square_geometry())).unwrap();
        assert!(!state.ui.save_field_dialog.visible);
        assert!(state.drawing.pending_geometry.is_none());
    }

    #[test]
    fn fehler_landet_als_statusmeldung() {
        let mut state = AppState::new();
        state.import.generation = 1;
        finish(
            &mut state,
            1,
            Err(ImportError::UnsupportedFormat {
                extension: "gpx".into(),
            }),
        )
        .unwrap();
        assert!(!state.ui.save_field_dialog.visible);
        let message = state.ui.status_message.expect("Statusmeldung erwartet");
        assert!(message.contains("gpx"));
    }

    #[test]
    fn cancel_invalidiert_die_generation() {
        let mut state = AppState::new();
        start(&mut state, "/nicht/vorhanden.geojson".to_string());
        let old_generation = state.import.generation;
        cancel(&mut state);
        assert!(state.import.generation > old_generation);
        assert!(!state.import.is_running());
    }
}
