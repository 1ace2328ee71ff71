//! Undoable shape editing for a vector graphics editor.
//!
//! Edits run as [`Command`]s against the [`Graphics`] object store. Each
//! command remembers exactly what it overwrote the first time it runs, so it
//! can be undone and redone any number of times. Each shape keeps a small
//! last-undo stack so consecutive edits to the same field step back one
//! version per undo, while silent edits stay out of that chain.

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod last_undo;
pub mod objects;
pub mod graphics;
pub mod commands;
pub mod history;
pub mod engine;

pub use commands::{ChangeShapeCommand, Command, CommandRegistry, CommandResult, CommandState, UndoData};
pub use config::EngineConfig;
pub use engine::VectorEngine;
pub use error::{CommandError, ShapeError};
pub use graphics::{Graphics, NewShape};
pub use history::UndoHistory;
pub use last_undo::LastUndoStack;
pub use objects::VectorObject;
pub use types::*;
