//! Reversible edits and the JSON command entry point.
//!
//! Every undoable change to the scene goes through a [`Command`]. Commands
//! are looked up by name in a [`CommandRegistry`], so the browser side can
//! drive them with plain JSON:
//!
//! ```text
//! {"action": "changeShape", "params": {"id": 1, "options": {"fill": "#000"}}}
//! ```

use serde::Deserialize;
use serde_json::json;
use wasm_bindgen::prelude::*;

use crate::engine::VectorEngine;
use crate::error::CommandError;
use crate::graphics::NewShape;
use crate::types::ObjectId;

mod change_shape;
mod command;
mod registry;

pub use change_shape::{make_undo_data, ChangeShapeCommand, ChangeShapeParams, UndoData, CHANGE_SHAPE};
pub use command::{Command, CommandResult, CommandState};
pub use registry::{CommandFactory, CommandRegistry};

#[wasm_bindgen]
impl VectorEngine {
    pub fn execute_command(&mut self, cmd_json: &str) -> String {
        #[derive(Deserialize)]
        struct Request {
            action: String,
            #[serde(default)]
            params: serde_json::Value,
        }

        let req: Request = match serde_json::from_str(cmd_json) {
            Ok(r) => r,
            Err(e) => return error_reply(format!("Invalid JSON: {}", e)),
        };

        match self.dispatch(&req.action, req.params) {
            Ok(reply) => reply.to_string(),
            Err(e) => error_reply(e.to_string()),
        }
    }
}

impl VectorEngine {
    fn dispatch(&mut self, action: &str, params: serde_json::Value) -> Result<serde_json::Value, CommandError> {
        match action {
            "add" => {
                let shape: NewShape = serde_json::from_value(params)?;
                let id = self.add_shape(shape)?;
                Ok(json!({ "success": true, "id": id }))
            }
            "remove" => {
                let id = object_id(&params)?;
                self.graphics.remove_object(id).ok_or(CommandError::ObjectNotFound(id))?;
                Ok(json!({ "success": true }))
            }
            "undo" => Ok(json!({ "success": self.try_undo()? })),
            "redo" => Ok(json!({ "success": self.try_redo()? })),
            "get_history" => Ok(json!(self.history.descriptions())),
            "clear_history" => {
                self.history.clear();
                Ok(json!({ "success": true }))
            }
            "get_object" => {
                let id = object_id(&params)?;
                let obj = self.graphics.get_object(id).ok_or(CommandError::ObjectNotFound(id))?;
                Ok(serde_json::to_value(obj)?)
            }
            "get_bounds" => {
                let id = object_id(&params)?;
                let obj = self.graphics.get_object(id).ok_or(CommandError::ObjectNotFound(id))?;
                let b = obj.bounds();
                Ok(json!({ "x": b.x0, "y": b.y0, "width": b.width(), "height": b.height() }))
            }
            name => {
                let cmd = self.registry.create(name, params).map_err(|e| {
                    if let CommandError::UnknownCommand(_) = e {
                        log::warn!("unknown action `{}`", name);
                    }
                    e
                })?;
                if cmd.is_silent() {
                    self.execute_silent(cmd)?;
                } else {
                    self.execute(cmd)?;
                }
                Ok(json!({ "success": true }))
            }
        }
    }
}

fn object_id(params: &serde_json::Value) -> Result<ObjectId, CommandError> {
    #[derive(Deserialize)]
    struct Target {
        id: ObjectId,
    }
    let target = Target::deserialize(params)?;
    Ok(target.id)
}

fn error_reply(message: String) -> String {
    json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(engine: &mut VectorEngine, cmd: serde_json::Value) -> serde_json::Value {
        serde_json::from_str(&engine.execute_command(&cmd.to_string())).unwrap()
    }

    #[test]
    fn json_round_trip_through_registry() {
        let mut engine = VectorEngine::new();
        let added = reply(&mut engine, json!({"action": "add", "params": {"type": "rect", "fill": "#fff", "width": 100}}));
        let id = added["id"].as_u64().unwrap();

        let changed = reply(
            &mut engine,
            json!({"action": "changeShape", "params": {"id": id, "options": {"fill": "#000"}}}),
        );
        assert_eq!(changed["success"], true);
        assert_eq!(reply(&mut engine, json!({"action": "get_object", "params": {"id": id}}))["fill"], "#000");

        assert_eq!(reply(&mut engine, json!({"action": "undo"}))["success"], true);
        assert_eq!(reply(&mut engine, json!({"action": "get_object", "params": {"id": id}}))["fill"], "#fff");
        assert_eq!(reply(&mut engine, json!({"action": "get_history"})), json!([]));
    }

    #[test]
    fn silent_change_skips_history() {
        let mut engine = VectorEngine::new();
        let id = reply(&mut engine, json!({"action": "add", "params": {"type": "circle", "rx": 4}}))["id"].clone();

        reply(
            &mut engine,
            json!({"action": "changeShape", "params": {"id": id, "options": {"rx": 9}, "silent": true}}),
        );
        assert!(!engine.can_undo());
        let bounds = reply(&mut engine, json!({"action": "get_bounds", "params": {"id": id}}));
        assert_eq!(bounds["width"], 18.0);
    }

    #[test]
    fn missing_object_is_an_error_reply() {
        let mut engine = VectorEngine::new();
        let out = reply(
            &mut engine,
            json!({"action": "changeShape", "params": {"id": 42, "options": {"fill": "#000"}}}),
        );
        assert_eq!(out["error"], "The executing object doesn't exist: 42");
    }

    #[test]
    fn invalid_new_shape_is_an_error_reply() {
        let mut engine = VectorEngine::new();
        let out = reply(&mut engine, json!({"action": "add", "params": {"type": "rect", "width": -5}}));

        assert_eq!(out["error"], "invalid value for `width`: -5 is negative");
        assert!(engine.graphics().is_empty());
        assert!(!engine.can_undo());
    }

    #[test]
    fn unknown_action_and_bad_json_are_error_replies() {
        let mut engine = VectorEngine::new();
        assert_eq!(reply(&mut engine, json!({"action": "spin"}))["error"], "unknown command: spin");
        assert!(engine.execute_command("{not json").contains("Invalid JSON"));
    }
}
