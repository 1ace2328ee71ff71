use std::collections::HashMap;

use super::{ChangeShapeCommand, Command, CHANGE_SHAPE};
use crate::error::CommandError;

/// Builds a command from its JSON parameters.
pub type CommandFactory = fn(serde_json::Value) -> Result<Box<dyn Command>, CommandError>;

/// Commands reachable by name.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    factories: HashMap<&'static str, CommandFactory>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every command this crate ships.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(CHANGE_SHAPE, |params| {
            Ok(Box::new(ChangeShapeCommand::from_params(params)?))
        });
        registry
    }

    /// Returns the factory previously registered under `name`, if any.
    pub fn register(&mut self, name: &'static str, factory: CommandFactory) -> Option<CommandFactory> {
        let previous = self.factories.insert(name, factory);
        if previous.is_some() {
            log::warn!("command `{}` registered twice, keeping the latest", name);
        }
        previous
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn create(&self, name: &str, params: serde_json::Value) -> Result<Box<dyn Command>, CommandError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        factory(params)
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
