//! Integrationstests für den asynchronen Datei-Import inklusive
//! Generations-Schutz gegen veraltete Worker-Ergebnisse.

use agri_field_mapper::{
    AppController, AppIntent, AppState, FieldAttributes, FieldGeometry, ImportError, LngLat,
    MapSurface, Ring,
};
use std::time::{Duration, Instant};

fn setup() -> (AppController, AppState) {
    let mut state = AppState::new();
    state.view.viewport_size = [1280.0, 720.0];
    (AppController::new(), state)
}

fn square_geometry() -> FieldGeometry {
    FieldGeometry::Polygon(Ring::closed(vec![
        LngLat::new(100.0, 0.0),
        LngLat::new(100.001, 0.0),
        LngLat::new(100.001, 0.001),
        LngLat::new(100.0, 0.001),
    ]))
}

/// Wartet auf das Ergebnis des Import-Workers (max. 5 Sekunden).
fn wait_for_import(state: &mut AppState) -> (u64, Result<FieldGeometry, ImportError>) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(message) = state.import.poll() {
            return message;
        }
        assert!(Instant::now() < deadline, "Import-Worker antwortet nicht");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn test_geojson_datei_import_bis_zum_gespeicherten_feld() {
    let (mut controller, mut state) = setup();

    let path = std::env::temp_dir().join("agri_field_mapper_import_test.geojson");
    std::fs::write(
        &path,
        r#"{"type":"Feature","properties":{},"geometry":{"type":"Polygon",
            "coordinates":[[[100.0,0.0],[100.001,0.0],[100.001,0.001],[100.0,0.001],[100.0,0.0]]]}}"#,
    )
    .unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportFileSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .unwrap();
    assert!(state.import.is_running());

    let (generation, result) = wait_for_import(&mut state);
    controller
        .handle_intent(&mut state, AppIntent::ImportCompleted { generation, result })
        .unwrap();

    assert!(state.ui.save_field_dialog.visible);
    assert!(state.drawing.pending_geometry.is_some());
    // Import-Vorschau liegt als Zeichnungs-Layer auf der Karte
    assert!(state.scene.has_layer("drawing-line-layer"));

    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFieldConfirmed {
                name: "Importiertes Feld".to_string(),
                attributes: FieldAttributes::default(),
            },
        )
        .unwrap();
    assert_eq!(state.field_count(), 1);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_import_unbekannter_endung_landet_als_statusmeldung() {
    let (mut controller, mut state) = setup();

    let path = std::env::temp_dir().join("agri_field_mapper_import_test.gpx");
    std::fs::write(&path, "<gpx></gpx>").unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportFileSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .unwrap();

    let (generation, result) = wait_for_import(&mut state);
    assert!(result.is_err());
    controller
        .handle_intent(&mut state, AppIntent::ImportCompleted { generation, result })
        .unwrap();

    assert!(!state.ui.save_field_dialog.visible);
    let message = state.ui.status_message.expect("Statusmeldung erwartet");
    assert!(message.contains("gpx"), "Meldung: {message}");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_abgebrochener_import_verwirft_das_ergebnis() {
    let (mut controller, mut state) = setup();
    state.import.generation = 7;
    let (_tx, rx) = std::sync::mpsc::channel();
    state.import.receiver = Some(rx);

    controller
        .handle_intent(&mut state, AppIntent::ImportCancelled)
        .unwrap();
    assert!(!state.import.is_running());

    // Das Worker-Ergebnis der alten Generation kommt zu spät
    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportCompleted {
                generation: 7,
                result: Ok(square_geometry()),
            },
        )
        .unwrap();

    assert!(!state.ui.save_field_dialog.visible);
    assert!(state.drawing.pending_geometry.is_none());
}

#[test]
fn test_neuer_import_invalidiert_den_alten() {
    let (mut controller, mut state) = setup();

    let path = std::env::temp_dir().join("agri_field_mapper_import_race.geojson");
    std::fs::write(
        &path,
        r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}"#,
    )
    .unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportFileSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .unwrap();
    let first_generation = state.import.generation;

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportFileSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .unwrap();
    assert!(state.import.generation > first_generation);

    // Ergebnis des ersten Workers fällt durch den Generationsvergleich
    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportCompleted {
                generation: first_generation,
                result: Ok(square_geometry()),
            },
        )
        .unwrap();
    assert!(!state.ui.save_field_dialog.visible);

    let _ = std::fs::remove_file(&path);
}
