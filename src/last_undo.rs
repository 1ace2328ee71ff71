//! Per-object side table backing the user-visible undo chain.
//!
//! For every field that has seen a non-silent edit, the table holds the value
//! the next non-silent edit must restore when it is undone. Entries are
//! created lazily and live as long as the owning object.

use std::collections::BTreeMap;

use crate::types::{FieldValue, ShapeField, ShapeOptions};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LastUndoStack {
    entries: BTreeMap<ShapeField, FieldValue>,
}

impl LastUndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ShapeField) -> Option<&FieldValue> {
        self.entries.get(&field)
    }

    /// Pending value for `field`, or `current` if the field was never edited non-silently.
    pub fn pending_or(&self, field: ShapeField, current: FieldValue) -> FieldValue {
        self.entries.get(&field).cloned().unwrap_or(current)
    }

    /// Overwrites the pending value of every field named in `options`.
    pub fn commit(&mut self, options: &ShapeOptions) {
        for (field, value) in options {
            self.entries.insert(*field, value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
