//! Undo/redo stacks of executed commands.

use crate::commands::Command;

pub struct UndoHistory {
    undo_stack: Vec<Box<dyn Command>>,
    redo_stack: Vec<Box<dyn Command>>,
    max_size: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoHistory {
    pub const DEFAULT_MAX_SIZE: usize = 100;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_SIZE)
    }

    pub fn with_capacity(max_size: usize) -> Self {
        Self { undo_stack: Vec::new(), redo_stack: Vec::new(), max_size }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(|c| c.description())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|c| c.description())
    }

    /// Records a command that has already been executed.
    /// A new edit starts a new branch, so pending redos are dropped.
    pub fn push(&mut self, cmd: Box<dyn Command>) {
        self.undo_stack.push(cmd);
        self.redo_stack.clear();

        while self.undo_stack.len() > self.max_size {
            let evicted = self.undo_stack.remove(0);
            log::debug!("history full, dropped `{}`", evicted.description());
        }
    }

    pub fn pop_undo(&mut self) -> Option<Box<dyn Command>> {
        self.undo_stack.pop()
    }

    pub fn pop_redo(&mut self) -> Option<Box<dyn Command>> {
        self.redo_stack.pop()
    }

    /// Puts a redone command back without touching the redo stack.
    pub fn push_to_undo(&mut self, cmd: Box<dyn Command>) {
        self.undo_stack.push(cmd);
    }

    pub fn push_to_redo(&mut self, cmd: Box<dyn Command>) {
        self.redo_stack.push(cmd);
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Descriptions of undoable commands, oldest first.
    pub fn descriptions(&self) -> Vec<String> {
        self.undo_stack.iter().map(|c| c.description()).collect()
    }
}
