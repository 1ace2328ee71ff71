use thiserror::Error;

use crate::types::{ObjectId, ShapeField, ShapeType, ValueKind};

/// Failures reported by the shape mutation itself.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    #[error("{shape_type} shapes have no editable `{field}` attribute")]
    UnsupportedField { shape_type: ShapeType, field: ShapeField },

    #[error("`{field}` expects a {expected}")]
    TypeMismatch { field: ShapeField, expected: ValueKind },

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: ShapeField, reason: String },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("The executing object doesn't exist: {0}")]
    ObjectNotFound(ObjectId),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("command `{0}` has nothing to undo")]
    NotExecuted(&'static str),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid command parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),
}

impl CommandError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CommandError::ObjectNotFound(_))
    }
}
