use wasm_bindgen::prelude::*;

use crate::commands::{ChangeShapeCommand, Command, CommandRegistry, CommandResult};
use crate::config::EngineConfig;
use crate::error::{CommandError, ShapeError};
use crate::graphics::{Graphics, NewShape};
use crate::history::UndoHistory;
use crate::logging;
use crate::types::{ObjectId, ShapeOptions};

#[wasm_bindgen]
pub struct VectorEngine {
    pub(crate) graphics: Graphics,
    pub(crate) history: UndoHistory,
    pub(crate) registry: CommandRegistry,
    pub(crate) config: EngineConfig,
}

impl Default for VectorEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl VectorEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> VectorEngine {
        Self::with_config(EngineConfig::default())
    }

    /// Engine configured from a JSON document; malformed input falls back to defaults.
    pub fn from_config_json(json: &str) -> VectorEngine {
        let config = EngineConfig::from_json(json).unwrap_or_else(|e| {
            log::warn!("invalid engine config, using defaults: {}", e);
            EngineConfig::default()
        });
        Self::with_config(config)
    }

    pub fn undo(&mut self) -> bool {
        self.try_undo().unwrap_or_else(|e| {
            log::warn!("undo failed: {}", e);
            false
        })
    }

    pub fn redo(&mut self) -> bool {
        self.try_redo().unwrap_or_else(|e| {
            log::warn!("redo failed: {}", e);
            false
        })
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn get_history(&self) -> String {
        serde_json::to_string(&self.history.descriptions()).unwrap_or("[]".to_string())
    }

    pub fn get_objects_json(&self) -> String {
        serde_json::to_string(self.graphics.objects()).unwrap_or_else(|_| "[]".to_string())
    }
}

impl VectorEngine {
    pub fn with_config(config: EngineConfig) -> Self {
        logging::init(&config);

        Self {
            graphics: Graphics::new(config.clone()),
            history: UndoHistory::with_capacity(config.max_history),
            registry: CommandRegistry::with_builtin(),
            config,
        }
    }

    pub fn graphics(&self) -> &Graphics {
        &self.graphics
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    pub fn add_shape(&mut self, shape: NewShape) -> Result<ObjectId, ShapeError> {
        self.graphics.add_object(shape)
    }

    /// Runs `cmd` and records it for undo. Failed commands are not recorded.
    pub fn execute(&mut self, mut cmd: Box<dyn Command>) -> CommandResult {
        cmd.execute(&mut self.graphics)?;
        self.history.push(cmd);
        Ok(())
    }

    /// Runs `cmd` without recording it.
    pub fn execute_silent(&mut self, mut cmd: Box<dyn Command>) -> CommandResult {
        cmd.execute(&mut self.graphics)
    }

    pub fn change_shape(&mut self, id: ObjectId, options: ShapeOptions) -> CommandResult {
        self.execute(Box::new(ChangeShapeCommand::new(id, options)))
    }

    /// Silent change: reversible on its own, invisible to the undo chain.
    pub fn change_shape_silent(&mut self, id: ObjectId, options: ShapeOptions) -> CommandResult {
        self.execute_silent(Box::new(ChangeShapeCommand::new(id, options).silent(true)))
    }

    /// Undoes the latest command. `Ok(false)` when there is nothing to undo.
    /// A command that fails to undo is dropped from the history.
    pub fn try_undo(&mut self) -> Result<bool, CommandError> {
        let Some(mut cmd) = self.history.pop_undo() else {
            return Ok(false);
        };
        cmd.undo(&mut self.graphics)?;
        log::info!("undo `{}`", cmd.description());
        self.history.push_to_redo(cmd);
        Ok(true)
    }

    /// Redoes the latest undone command. `Ok(false)` when there is nothing to redo.
    /// A command that fails to redo is dropped from the history.
    pub fn try_redo(&mut self) -> Result<bool, CommandError> {
        let Some(mut cmd) = self.history.pop_redo() else {
            return Ok(false);
        };
        cmd.execute(&mut self.graphics)?;
        log::info!("redo `{}`", cmd.description());
        self.history.push_to_undo(cmd);
        Ok(true)
    }
}
