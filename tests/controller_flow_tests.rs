use agri_field_mapper::{AppCommand, AppController, AppIntent, AppState, LngLat};

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_map_click_ohne_session_ist_robust_und_loggt_nichts() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                pos: LngLat::new(100.5018, 13.7563),
            },
        )
        .expect("MapClicked ohne Session darf nicht fehlschlagen");

    assert!(state.command_log.is_empty());
    assert!(state.drawing.vertices().is_empty());
}

#[test]
fn test_camera_zoom_bleibt_innerhalb_der_grenzen() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [1280.0, 720.0];

    for _ in 0..200 {
        controller
            .handle_intent(&mut state, AppIntent::ZoomInRequested)
            .unwrap();
    }
    assert!(state.view.camera.zoom <= state.options.camera_zoom_max);

    for _ in 0..400 {
        controller
            .handle_intent(&mut state, AppIntent::ZoomOutRequested)
            .unwrap();
    }
    assert!(state.view.camera.zoom >= state.options.camera_zoom_min);
}

#[test]
fn test_camera_pan_verschiebt_das_zentrum() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [1280.0, 720.0];
    let before = state.view.camera.center;

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta: [120.0, -80.0],
            },
        )
        .unwrap();

    let after = state.view.camera.center;
    assert!(
        before.lng != after.lng || before.lat != after.lat,
        "Pan muss das Kamera-Zentrum verändern"
    );
}

#[test]
fn test_reset_camera_stellt_den_ausgangszustand_wieder_her() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [1280.0, 720.0];
    let initial_zoom = state.view.camera.zoom;

    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta: [300.0, 300.0],
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ResetCameraRequested)
        .unwrap();

    assert_eq!(state.view.camera.zoom, initial_zoom);
}

#[test]
fn test_options_dialog_oeffnen_und_schliessen() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenOptionsDialogRequested)
        .unwrap();
    assert!(state.show_options_dialog);

    controller
        .handle_intent(&mut state, AppIntent::CloseOptionsDialogRequested)
        .unwrap();
    assert!(!state.show_options_dialog);
}
