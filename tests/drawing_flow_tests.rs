//! Integrationstests für den kompletten Erfassungs-Workflow:
//! Session starten, Vertices setzen, bestätigen, speichern.

use agri_field_mapper::{
    AppController, AppIntent, AppState, DrawControlEvent, DrawingModeKind, FieldAttributes, LngLat,
    MapSurface,
};

const VIEWPORT: [f32; 2] = [1280.0, 720.0];

/// Rechteck von ca. 40 m x 25 m nahe des Äquators (~1000 m²).
fn rectangle_1000_sq_m() -> Vec<LngLat> {
    let d_lng = 40.0 / 111_320.0;
    let d_lat = 25.0 / 111_320.0;
    vec![
        LngLat::new(100.0, 0.0),
        LngLat::new(100.0 + d_lng, 0.0),
        LngLat::new(100.0 + d_lng, d_lat),
        LngLat::new(100.0, d_lat),
    ]
}

fn setup() -> (AppController, AppState) {
    let mut state = AppState::new();
    state.view.viewport_size = VIEWPORT;
    (AppController::new(), state)
}

fn draw_rectangle(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(
            state,
            AppIntent::StartDrawingRequested {
                mode: DrawingModeKind::PointPlacement,
            },
        )
        .unwrap();
    for pos in rectangle_1000_sq_m() {
        controller
            .handle_intent(state, AppIntent::MapClicked { pos })
            .unwrap();
    }
}

#[test]
fn test_zeichnen_bestaetigen_speichern_legt_feld_an() {
    let (mut controller, mut state) = setup();
    draw_rectangle(&mut controller, &mut state);

    assert_eq!(state.drawing.vertices().len(), 4);
    assert!(state.scene.has_layer("drawing-fill-layer"));

    controller
        .handle_intent(&mut state, AppIntent::ConfirmDrawingRequested)
        .unwrap();
    assert!(state.ui.save_field_dialog.visible);
    assert!(!state.ui.save_field_dialog.area_text.is_empty());

    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFieldConfirmed {
                name: "Reisfeld Nord".to_string(),
                attributes: FieldAttributes::default(),
            },
        )
        .unwrap();

    assert_eq!(state.field_count(), 1);
    let field = &state.fields[0];
    assert_eq!(field.name, "Reisfeld Nord");
    assert!(state.scene.has_layer(&format!("field-layer-{}", field.id)));
    assert!(!state.scene.has_layer("drawing-line-layer"));
    assert!(!state.ui.save_field_dialog.visible);
    assert_eq!(state.ui.selected_field_id, Some(field.id));
}

#[test]
fn test_vermessung_des_1000_qm_rechtecks() {
    let (mut controller, mut state) = setup();
    draw_rectangle(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::ConfirmDrawingRequested)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFieldConfirmed {
                name: "Testfeld".to_string(),
                attributes: FieldAttributes::default(),
            },
        )
        .unwrap();

    let field = &state.fields[0];
    let error = (field.area_sq_m - 1000.0).abs() / 1000.0;
    assert!(
        error < 0.01,
        "Fläche {} m² weicht mehr als 1% von 1000 m² ab",
        field.area_sq_m
    );
}

#[test]
fn test_bestaetigen_unter_drei_punkten_behaelt_die_session() {
    let (mut controller, mut state) = setup();
    controller
        .handle_intent(
            &mut state,
            AppIntent::StartDrawingRequested {
                mode: DrawingModeKind::PointPlacement,
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                pos: LngLat::new(100.0, 0.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ConfirmDrawingRequested)
        .unwrap();

    assert!(!state.ui.save_field_dialog.visible);
    assert!(state.drawing.is_active());
    assert_eq!(state.drawing.vertices().len(), 1);
}

#[test]
fn test_undo_entfernt_den_letzten_punkt() {
    let (mut controller, mut state) = setup();
    draw_rectangle(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::UndoPointRequested)
        .unwrap();
    assert_eq!(state.drawing.vertices().len(), 3);

    controller
        .handle_intent(&mut state, AppIntent::ClearPointsRequested)
        .unwrap();
    assert!(state.drawing.vertices().is_empty());
    assert!(state.drawing.is_active(), "Clear beendet die Session nicht");
    assert!(!state.scene.has_layer("drawing-line-layer"));
}

#[test]
fn test_abbrechen_verwirft_zeichnung_und_dialog() {
    let (mut controller, mut state) = setup();
    draw_rectangle(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::ConfirmDrawingRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::SaveFieldCancelled)
        .unwrap();

    assert_eq!(state.field_count(), 0);
    assert!(!state.ui.save_field_dialog.visible);
    assert!(state.drawing.pending_geometry.is_none());
    assert!(!state.scene.has_layer("drawing-line-layer"));
}

#[test]
fn test_vertex_editing_uebernimmt_control_ereignisse() {
    let (mut controller, mut state) = setup();
    controller
        .handle_intent(
            &mut state,
            AppIntent::StartDrawingRequested {
                mode: DrawingModeKind::VertexEdit,
            },
        )
        .unwrap();

    // Karten-Klicks gehören beim Vertex-Editing dem Control
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                pos: LngLat::new(100.0, 0.0),
            },
        )
        .unwrap();
    assert!(state.drawing.vertices().is_empty());

    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawControlEventReceived {
                event: DrawControlEvent::FeatureCreated {
                    vertices: rectangle_1000_sq_m(),
                },
            },
        )
        .unwrap();
    assert_eq!(state.drawing.vertices().len(), 4);

    controller
        .handle_intent(&mut state, AppIntent::ConfirmDrawingRequested)
        .unwrap();
    assert!(state.ui.save_field_dialog.visible);
}

#[test]
fn test_feld_loeschen_entfernt_layer_und_selektion() {
    let (mut controller, mut state) = setup();
    draw_rectangle(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::ConfirmDrawingRequested)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFieldConfirmed {
                name: "Kurzlebig".to_string(),
                attributes: FieldAttributes::default(),
            },
        )
        .unwrap();
    let field_id = state.fields[0].id;

    controller
        .handle_intent(&mut state, AppIntent::DeleteFieldRequested { field_id })
        .unwrap();

    assert_eq!(state.field_count(), 0);
    assert!(!state.scene.has_layer(&format!("field-layer-{field_id}")));
    assert_eq!(state.ui.selected_field_id, None);
}
