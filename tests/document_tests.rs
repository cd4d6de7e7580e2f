use walkmap::{parse_map_document, AppController, AppIntent, AppState, LatLng};

const SAMPLE_MAP: &str = include_str!("fixtures/sample_map.json");

fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("walkmap_it_{}_{}.json", name, std::process::id()))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_sample_map_is_sorted_by_order_parameter_and_deduplicated() {
    let loaded = parse_map_document(SAMPLE_MAP).expect("Beispielkarte sollte parsebar sein");

    assert_eq!(loaded.map_id.as_ref().map(|id| id.as_str()), Some("QWERT"));
    assert_eq!(loaded.skipped_duplicates, 1);

    let texts: Vec<Option<&str>> = loaded
        .store
        .iter()
        .map(|m| m.text_annotation.as_deref())
        .collect();
    assert_eq!(texts, vec![Some("Brandenburger Tor"), Some("Fernsehturm"), None]);
    assert_eq!(loaded.store.selected_id(), None);
}

#[test]
fn test_file_selected_loads_map_into_state() {
    let path = temp_path("load");
    std::fs::write(&path, SAMPLE_MAP).expect("Fixture sollte schreibbar sein");

    let mut controller = AppController::new();
    let mut state = AppState::new();
    let result = controller.handle_intent(&mut state, AppIntent::FileSelected { path: path.clone() });
    let _ = std::fs::remove_file(&path);
    result.expect("FileSelected sollte ohne Fehler durchlaufen");

    assert_eq!(state.store.len(), 3);
    assert_eq!(state.session.route().as_deref(), Some("/map/QWERT"));
    assert!(!state.ui.has_unsaved_changes);
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|m| m.contains('1')));
}

#[test]
fn test_save_as_then_save_writes_current_markers() {
    let path = temp_path("save");
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.store.add(LatLng::new(10.0, 10.0).unwrap());

    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFilePathSelected { path: path.clone() },
        )
        .expect("Speichern unter sollte funktionieren");

    state.store.add(LatLng::new(11.0, 11.0).unwrap());
    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("Speichern sollte funktionieren");
    assert!(!state.ui.show_save_file_dialog);

    let content = std::fs::read_to_string(&path).expect("Datei sollte existieren");
    let _ = std::fs::remove_file(&path);
    let loaded = parse_map_document(&content).unwrap();
    assert_eq!(loaded.store.len(), 2);
    assert_eq!(loaded.map_id, None);
}

#[test]
fn test_load_invalid_file_reports_error_and_keeps_state() {
    let path = temp_path("invalid");
    std::fs::write(&path, "{ kein json").unwrap();

    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.store.add(LatLng::new(1.0, 1.0).unwrap());

    let result = controller.handle_intent(&mut state, AppIntent::FileSelected { path: path.clone() });
    let _ = std::fs::remove_file(&path);

    assert!(result.is_err());
    assert_eq!(state.store.len(), 1);
}
