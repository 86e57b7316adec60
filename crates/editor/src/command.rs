//! JSON command protocol for scripted and agent-driven editing.

use serde::{Deserialize, Serialize};
use shared::{Asset, CanvasElement, ElementPatch, TankDimensions};

use crate::session::EditorSession;

/// A command a script or agent can execute against the open session.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Append an element as given
    AddElement { element: CanvasElement },
    /// Merge properties into an element
    UpdateElement { id: String, patch: ElementPatch },
    RemoveElement { id: String },
    /// Copy an element with a +20px offset and select the copy
    DuplicateElement { id: String },
    /// Remove every element.
    ClearAll,
    /// Select an element, or clear the selection with `null`
    Select {
        #[serde(default)]
        id: Option<String>,
    },
    /// Select the first element with this name (and group)
    SelectAllOfType {
        name: String,
        #[serde(default)]
        group_id: Option<String>,
    },
    SetTankDimensions { width: f64, height: f64, depth: f64 },
    /// Resize the tank to a named preset
    ApplyPreset { name: String },
    SetSubstrateType { type_id: String },
    SetSubstrateVariant { variant_id: String },
    SetBaseHeight { percent: f64 },
    AddElevationPoint { x: f64, y: f64 },
    UpdateElevationPoint {
        id: String,
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    RemoveElevationPoint { id: String },
    /// Lay a carpet of `asset` over the substrate
    GenerateCarpet {
        asset: Asset,
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Remove every element of a generated group
    RemoveGroup { group_id: String },
    /// Undo the last operation.
    Undo,
    /// Redo the last undone operation.
    Redo,
    /// Drop all undo information.
    ClearHistory,
    /// Inspect the scene: tank, substrate, elements, history state.
    Inspect,
    /// Export the document as a design JSON string.
    ExportDesign,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn element_not_found(id: &str) -> CommandResponse {
    CommandResponse::err(format!("element '{id}' not found"))
}

/// Execute a single command on the session.
pub fn execute_command(session: &mut EditorSession, cmd: AgentCommand) -> CommandResponse {
    let scene = &mut session.scene;
    match cmd {
        AgentCommand::AddElement { element } => {
            if scene.get_element(&element.id).is_some() {
                return CommandResponse::err(format!(
                    "element id '{}' already in use",
                    element.id
                ));
            }
            let id = element.id.clone();
            scene.add_element(element);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        AgentCommand::UpdateElement { id, patch } => {
            if scene.get_element(&id).is_none() {
                return element_not_found(&id);
            }
            if patch.is_empty() {
                return CommandResponse::err("empty patch");
            }
            scene.update_element(&id, &patch);
            CommandResponse::ok()
        }

        AgentCommand::RemoveElement { id } => {
            if scene.get_element(&id).is_none() {
                return element_not_found(&id);
            }
            scene.remove_element(&id);
            CommandResponse::ok()
        }

        AgentCommand::DuplicateElement { id } => {
            if scene.get_element(&id).is_none() {
                return element_not_found(&id);
            }
            scene.duplicate_element(&id);
            let new_id = scene.selection().primary().cloned();
            CommandResponse::ok_with_data(serde_json::json!({ "id": new_id }))
        }

        AgentCommand::ClearAll => {
            scene.clear_all_elements();
            CommandResponse::ok()
        }

        AgentCommand::Select { id } => {
            if let Some(id) = &id {
                if scene.get_element(id).is_none() {
                    return element_not_found(id);
                }
            }
            scene.select_element(id.as_deref());
            CommandResponse::ok_with_data(serde_json::json!({ "selected": id }))
        }

        AgentCommand::SelectAllOfType { name, group_id } => {
            scene.select_all_of_type(&name, group_id.as_deref());
            let selected = scene.selection().primary().cloned();
            CommandResponse::ok_with_data(serde_json::json!({ "selected": selected }))
        }

        AgentCommand::SetTankDimensions {
            width,
            height,
            depth,
        } => match TankDimensions::new(width, height, depth) {
            Ok(dims) => {
                scene.set_tank_dimensions(dims);
                CommandResponse::ok()
            }
            Err(e) => CommandResponse::err(e.to_string()),
        },

        AgentCommand::ApplyPreset { name } => {
            if session.apply_preset(&name) {
                CommandResponse::ok()
            } else {
                CommandResponse::err(format!("unknown tank preset '{name}'"))
            }
        }

        AgentCommand::SetSubstrateType { type_id } => {
            if shared::substrate_type(&type_id).is_none() {
                return CommandResponse::err(format!("unknown substrate type '{type_id}'"));
            }
            scene.set_substrate_type(&type_id);
            CommandResponse::ok_with_data(serde_json::json!({
                "variant_id": scene.substrate().variant_id,
            }))
        }

        AgentCommand::SetSubstrateVariant { variant_id } => {
            let type_id = scene.substrate().type_id.clone();
            if shared::substrate_variant(&type_id, &variant_id).is_none() {
                return CommandResponse::err(format!(
                    "variant '{variant_id}' does not belong to '{type_id}'"
                ));
            }
            scene.set_substrate_variant(&variant_id);
            CommandResponse::ok()
        }

        AgentCommand::SetBaseHeight { percent } => {
            scene.set_substrate_base_height(percent);
            CommandResponse::ok_with_data(serde_json::json!({
                "base_height": scene.substrate().base_height,
            }))
        }

        AgentCommand::AddElevationPoint { x, y } => {
            let id = scene.add_elevation_point(x, y);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        AgentCommand::UpdateElevationPoint { id, x, y } => {
            if !scene.substrate().elevation_points.iter().any(|p| p.id == id) {
                return CommandResponse::err(format!("elevation point '{id}' not found"));
            }
            scene.update_elevation_point(&id, x, y);
            CommandResponse::ok()
        }

        AgentCommand::RemoveElevationPoint { id } => {
            let before = scene.substrate().elevation_points.len();
            scene.remove_elevation_point(&id);
            let removed = scene.substrate().elevation_points.len() < before;
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        AgentCommand::GenerateCarpet { asset, seed } => {
            let mut config = session.settings.carpet.clone();
            if seed.is_some() {
                config.seed = seed;
            }
            let group_id =
                session
                    .scene
                    .generate_carpet(&asset, &config, session.settings.scale_factor);
            let count = session.scene.elements_in_group(&group_id).len();
            CommandResponse::ok_with_data(serde_json::json!({
                "group_id": group_id,
                "count": count,
            }))
        }

        AgentCommand::RemoveGroup { group_id } => {
            let count = scene.elements_in_group(&group_id).len();
            scene.remove_group(&group_id);
            CommandResponse::ok_with_data(serde_json::json!({ "removed": count }))
        }

        AgentCommand::Undo => {
            let success = session.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        AgentCommand::Redo => {
            let success = session.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        AgentCommand::ClearHistory => {
            scene.clear_history();
            CommandResponse::ok()
        }

        AgentCommand::Inspect => {
            let elements: Vec<serde_json::Value> = scene
                .elements()
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "id": e.id,
                        "name": e.name,
                        "type": e.kind,
                        "x": e.x,
                        "y": e.y,
                        "width": e.width,
                        "height": e.height,
                        "rotation": e.rotation,
                        "depth": e.depth,
                        "group_id": e.group_id,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "tank": scene.tank_dimensions(),
                "volume_liters": scene.tank_dimensions().volume_liters(),
                "substrate": scene.substrate(),
                "selection": scene.selection().primary(),
                "element_count": elements.len(),
                "elements": elements,
                "can_undo": scene.can_undo(),
                "can_redo": scene.can_redo(),
                "version": scene.version(),
            }))
        }

        AgentCommand::ExportDesign => {
            match session.export_design_json() {
                Ok(json) => {
                    CommandResponse::ok_with_data(serde_json::json!({ "design_json": json }))
                }
                Err(e) => CommandResponse::err(format!("failed to encode design: {e}")),
            }
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(session: &mut EditorSession, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(session, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    session: &mut EditorSession,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(session, cmd))
        .collect())
}
