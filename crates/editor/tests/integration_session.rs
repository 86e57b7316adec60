//! Integration tests for EditorSession: pointer gestures, keyboard, designs.

use aquascape_editor_lib::fixtures::{design_with, element_at, named_element, rock_asset};
use aquascape_editor_lib::geometry::TransformEnd;
use aquascape_editor_lib::keyboard::{Key, KeyAction, KeyPress};
use aquascape_editor_lib::session::EditorSession;
use aquascape_editor_lib::state::scene::{load_design_file, save_design_file};
use aquascape_editor_lib::state::EditorSettings;
use glam::DVec2;

#[test]
fn test_drop_move_transform_then_undo_chain() {
    let mut s = EditorSession::new();
    s.set_canvas_origin(DVec2::new(20.0, 40.0));

    let id = s.drop_asset(DVec2::new(120.0, 140.0), &rock_asset());
    s.move_element(&id, 200.0, 150.0);
    s.transform_element(
        &id,
        TransformEnd {
            x: 200.0,
            y: 150.0,
            width: 0.5,
            height: 2.0,
            rotation: 370.0,
        },
    );

    let e = s.scene.get_element(&id).unwrap();
    assert_eq!((e.width, e.height), (5.0, 5.0));
    assert_eq!(e.normalized_rotation(), 10.0);

    assert!(s.undo());
    assert_eq!(s.scene.get_element(&id).unwrap().width, 180.0);
    assert!(s.undo());
    let e = s.scene.get_element(&id).unwrap();
    assert_eq!((e.x, e.y), (100.0, 100.0));
    assert!(s.undo());
    assert_eq!(s.element_count(), 0);
    assert!(!s.undo());
}

#[test]
fn test_keyboard_session_flow() {
    let mut s = EditorSession::new();
    s.scene.add_element(named_element("a", "Moss"));
    s.scene.add_element(named_element("b", "Moss"));
    s.scene.select_element(Some("a"));

    assert_eq!(
        s.handle_key("ctrl+d".parse().unwrap()),
        Some(KeyAction::DuplicateSelected)
    );
    assert_eq!(s.element_count(), 3);

    s.handle_key(KeyPress::plain(Key::Delete));
    assert_eq!(s.element_count(), 2);
    assert!(s.scene.selection().is_empty());

    s.handle_key("ctrl+shift+z".parse().unwrap());
    assert_eq!(s.element_count(), 2);
    s.handle_key(KeyPress::command(Key::Z));
    assert_eq!(s.element_count(), 3);

    s.handle_key(KeyPress::plain(Key::Escape));
    assert!(s.scene.selection().is_empty());
    assert_eq!(s.handle_key(KeyPress::plain(Key::Y)), None);
}

#[test]
fn test_design_file_round_trip() {
    let mut s = EditorSession::new();
    s.set_design_name("Riverbank");
    s.apply_preset("40 Gallon Breeder");
    s.scene.add_element(element_at("a", 3.0, 4.0));
    s.scene.add_element(named_element("b", "Seiryu"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("riverbank.json");
    save_design_file(&s.to_design(), &path).unwrap();

    let mut other = EditorSession::new();
    other.load_design(load_design_file(&path).unwrap()).unwrap();
    assert_eq!(other.design_name(), "Riverbank");
    assert_eq!(other.scene.tank_dimensions(), s.scene.tank_dimensions());
    assert_eq!(other.scene.elements(), s.scene.elements());
}

#[test]
fn test_load_design_keeps_substrate_and_skips_duplicates() {
    let mut s = EditorSession::new();
    s.scene.set_substrate_type("aquasoil");

    let design = design_with(
        "dupes",
        vec![element_at("x", 0.0, 0.0), element_at("x", 5.0, 5.0)],
    );
    s.load_design(design).unwrap();
    assert_eq!(s.element_count(), 1);
    assert_eq!(s.scene.substrate().type_id, "aquasoil");
}

#[test]
fn test_settings_drive_history_capacity() {
    let settings = EditorSettings {
        history_capacity: 2,
        ..EditorSettings::default()
    };
    let mut s = EditorSession::from_settings(settings);
    for i in 0..5 {
        s.scene.add_element(element_at(&format!("e{i}"), 0.0, 0.0));
    }
    assert!(s.undo());
    assert!(s.undo());
    assert!(!s.undo());
    assert_eq!(s.element_count(), 3);
}

#[test]
fn test_autosave_to_path_round_trip() {
    let mut s = EditorSession::new();
    s.scene.add_element(element_at("a", 1.0, 1.0));
    s.scene.select_element(Some("a"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("autosave.json");
    assert!(s.scene.autosave_to(&path));

    let doc = aquascape_editor_lib::state::scene::load_document(&path).unwrap();
    assert_eq!(&doc, s.scene.document());
}

#[test]
fn test_autosave_failure_does_not_disturb_document() {
    let mut s = EditorSession::new();
    for i in 0..6 {
        s.scene.add_element(element_at(&format!("e{i}"), 0.0, 0.0));
    }

    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "x").unwrap();
    // parent is a regular file, so both attempts fail
    assert!(!s.scene.autosave_to(&blocker.join("autosave.json")));

    assert_eq!(s.element_count(), 6);
    assert!(s.undo());
}
