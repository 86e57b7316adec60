//! Integration tests for the AgentCommand JSON protocol.
//!
//! Tests the full command pipeline: JSON string -> parse -> execute -> response.

use aquascape_editor_lib::command::{execute_json, execute_json_batch};
use aquascape_editor_lib::session::EditorSession;

const HAIRGRASS: &str = r#"{"id": "6", "category": "plants", "type": "foreground", "name": "Dwarf Hairgrass", "src": "/assets/plants/eleocharis_mini.png", "defaultWidth": 150, "defaultHeight": 50, "isCarpeting": true}"#;

fn add(id: &str, name: &str) -> String {
    format!(
        r#"{{"command": "add_element", "element": {{"id": "{id}", "type": "hardscape", "name": "{name}", "src": "/assets/hardscape/rock.png", "x": 0, "y": 0, "width": 100, "height": 100, "rotation": 0, "depth": "middle"}}}}"#
    )
}

#[test]
fn test_command_rotation_scenario() {
    let mut s = EditorSession::new();

    let json = format!(
        r#"[{}, {{"command": "update_element", "id": "a", "patch": {{"rotation": 45}}}}]"#,
        add("a", "Seiryu")
    );
    let responses = execute_json_batch(&mut s, &json).unwrap();
    assert!(responses.iter().all(|r| r.success));

    execute_json(&mut s, r#"{"command": "undo"}"#).unwrap();
    let data = execute_json(&mut s, r#"{"command": "inspect"}"#)
        .unwrap()
        .data
        .unwrap();
    assert_eq!(data["elements"][0]["rotation"], 0.0);

    execute_json(&mut s, r#"{"command": "undo"}"#).unwrap();
    let data = execute_json(&mut s, r#"{"command": "inspect"}"#)
        .unwrap()
        .data
        .unwrap();
    assert_eq!(data["element_count"], 0);
    assert_eq!(data["can_undo"], false);

    execute_json(&mut s, r#"{"command": "redo"}"#).unwrap();
    execute_json(&mut s, r#"{"command": "redo"}"#).unwrap();
    let data = execute_json(&mut s, r#"{"command": "inspect"}"#)
        .unwrap()
        .data
        .unwrap();
    assert_eq!(data["elements"][0]["rotation"], 45.0);
    assert_eq!(data["can_redo"], false);
}

#[test]
fn test_command_selection_workflow() {
    let mut s = EditorSession::new();
    let json = format!(
        "[{}, {}, {}]",
        add("r1", "Seiryu"),
        add("p1", "Moss"),
        add("r2", "Seiryu")
    );
    execute_json_batch(&mut s, &json).unwrap();

    let resp = execute_json(
        &mut s,
        r#"{"command": "select_all_of_type", "name": "Seiryu"}"#,
    )
    .unwrap();
    assert_eq!(resp.data.unwrap()["selected"], "r1");

    let resp = execute_json(
        &mut s,
        r#"{"command": "select_all_of_type", "name": "Driftwood"}"#,
    )
    .unwrap();
    assert_eq!(resp.data.unwrap()["selected"], "r1");

    execute_json(&mut s, r#"{"command": "remove_element", "id": "r1"}"#).unwrap();
    let data = execute_json(&mut s, r#"{"command": "inspect"}"#)
        .unwrap()
        .data
        .unwrap();
    assert_eq!(data["selection"], serde_json::Value::Null);

    let resp = execute_json(&mut s, r#"{"command": "select", "id": "r1"}"#).unwrap();
    assert!(!resp.success);
}

#[test]
fn test_command_duplicate_offset() {
    let mut s = EditorSession::new();
    execute_json(&mut s, &add("a", "Seiryu")).unwrap();
    execute_json(
        &mut s,
        r#"{"command": "update_element", "id": "a", "patch": {"x": 10, "y": 10}}"#,
    )
    .unwrap();

    let resp =
        execute_json(&mut s, r#"{"command": "duplicate_element", "id": "a"}"#).unwrap();
    let new_id = resp.data.unwrap()["id"].as_str().unwrap().to_string();
    assert_ne!(new_id, "a");

    let copy = s.scene.get_element(&new_id).unwrap();
    assert_eq!((copy.x, copy.y), (30.0, 30.0));
    assert!(s.scene.selection().is_selected(&new_id));
}

#[test]
fn test_command_carpet_is_one_undo_step() {
    let mut s = EditorSession::new();
    execute_json(&mut s, &add("rock", "Seiryu")).unwrap();

    let resp = execute_json(
        &mut s,
        &format!(r#"{{"command": "generate_carpet", "seed": 11, "asset": {HAIRGRASS}}}"#),
    )
    .unwrap();
    assert!(resp.success, "Failed: {:?}", resp.error);
    assert!(s.element_count() > 1);

    let resp = execute_json(&mut s, r#"{"command": "undo"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["undone"], true);
    assert_eq!(s.element_count(), 1);
}

#[test]
fn test_command_elevation_points() {
    let mut s = EditorSession::new();

    let resp = execute_json(
        &mut s,
        r#"{"command": "add_elevation_point", "x": 150, "y": -3}"#,
    )
    .unwrap();
    let id = resp.data.unwrap()["id"].as_str().unwrap().to_string();
    let point = s
        .scene
        .substrate()
        .elevation_points
        .iter()
        .find(|p| p.id == id)
        .unwrap();
    assert_eq!((point.x, point.y), (100.0, 0.0));

    let resp = execute_json(
        &mut s,
        &format!(r#"{{"command": "update_elevation_point", "id": "{id}", "y": 55}}"#),
    )
    .unwrap();
    assert!(resp.success);

    for id in ["point-1", "point-2", "point-3", "point-4", "point-5"] {
        execute_json(
            &mut s,
            &format!(r#"{{"command": "remove_elevation_point", "id": "{id}"}}"#),
        )
        .unwrap();
    }
    assert_eq!(s.scene.substrate().elevation_points.len(), 2);

    let resp = execute_json(
        &mut s,
        r#"{"command": "remove_elevation_point", "id": "point-5"}"#,
    )
    .unwrap();
    assert_eq!(resp.data.unwrap()["removed"], false);
}

#[test]
fn test_command_tank_and_preset() {
    let mut s = EditorSession::new();
    execute_json(&mut s, &add("a", "Seiryu")).unwrap();

    let resp = execute_json(
        &mut s,
        r#"{"command": "set_tank_dimensions", "width": 90, "height": 45, "depth": 45}"#,
    )
    .unwrap();
    assert!(resp.success);
    assert_eq!(s.canvas_size().x, 900.0);
    // elements keep their pixel positions
    assert_eq!(s.scene.get_element("a").unwrap().x, 0.0);

    let resp = execute_json(&mut s, r#"{"command": "apply_preset", "name": "10 gallon"}"#).unwrap();
    assert!(resp.success);
    assert_eq!(s.scene.tank_dimensions().width, 50.8);

    let resp = execute_json(&mut s, r#"{"command": "apply_preset", "name": "pond"}"#).unwrap();
    assert!(!resp.success);
}

#[test]
fn test_command_clear_history_and_export() {
    let mut s = EditorSession::new();
    execute_json(&mut s, &add("a", "Seiryu")).unwrap();
    execute_json(&mut s, r#"{"command": "clear_history"}"#).unwrap();

    let resp = execute_json(&mut s, r#"{"command": "undo"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["undone"], false);

    let resp = execute_json(&mut s, r#"{"command": "export_design"}"#).unwrap();
    let data = resp.data.unwrap();
    let design: shared::Design =
        serde_json::from_str(data["design_json"].as_str().unwrap()).unwrap();
    assert_eq!(design.elements.len(), 1);
    assert_eq!(design.width, 60.0);
}

#[test]
fn test_command_batch_invalid_json() {
    let mut s = EditorSession::new();
    assert!(execute_json_batch(&mut s, r#"[{"command": "undo"}, {"cmd": 1}]"#).is_err());
    assert_eq!(s.element_count(), 0);
}
