//! Command trait and result types.

use crate::error::CommandError;
use crate::graphics::Graphics;

pub type CommandResult = Result<(), CommandError>;

/// Where a command sits in its execute/undo cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandState {
    /// Never executed successfully.
    Fresh,
    Executed,
    Undone,
}

/// A reversible edit on the scene.
///
/// The first successful `execute` captures whatever the command needs to
/// reverse itself. Calling `execute` again after `undo` is a redo and
/// re-applies the original edit without capturing anything new.
pub trait Command {
    /// Registry key, e.g. `"changeShape"`.
    fn name(&self) -> &'static str;

    /// Label for history listings.
    fn description(&self) -> String {
        self.name().to_string()
    }

    /// Silent commands stay out of the user-visible undo chain.
    fn is_silent(&self) -> bool {
        false
    }

    fn state(&self) -> CommandState;

    fn execute(&mut self, graphics: &mut Graphics) -> CommandResult;

    fn undo(&mut self, graphics: &mut Graphics) -> CommandResult;
}
