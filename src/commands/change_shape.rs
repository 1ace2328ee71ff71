//! Changes the style or geometry of one shape.

use serde::Deserialize;

use super::{Command, CommandResult, CommandState};
use crate::error::{CommandError, ShapeError};
use crate::graphics::Graphics;
use crate::objects::VectorObject;
use crate::types::{ObjectId, ShapeOptions};

pub const CHANGE_SHAPE: &str = "changeShape";

/// What `undo` writes back, and to which object.
#[derive(Clone, Debug, PartialEq)]
pub struct UndoData {
    pub object: ObjectId,
    pub options: ShapeOptions,
}

/// Computes the value each field in `options` must be restored to.
///
/// Silent edits remember the field's current value. Non-silent edits
/// remember the value pending in the object's last-undo stack, or the
/// current value when the field has never been edited non-silently. Nothing
/// is written here; the stack advances only once the change has landed.
pub fn make_undo_data(
    options: &ShapeOptions,
    target: &VectorObject,
    silent: bool,
) -> Result<UndoData, ShapeError> {
    let mut undo_options = ShapeOptions::new();
    for &field in options.keys() {
        let current = target.field(field)?;
        let undo_value = if silent {
            current
        } else {
            target.last_undo_stack.pending_or(field, current)
        };
        undo_options.insert(field, undo_value);
    }
    Ok(UndoData { object: target.id, options: undo_options })
}

#[derive(Deserialize, Debug)]
pub struct ChangeShapeParams {
    pub id: ObjectId,
    pub options: ShapeOptions,
    #[serde(default)]
    pub silent: bool,
}

#[derive(Debug)]
pub struct ChangeShapeCommand {
    pub id: ObjectId,
    pub options: ShapeOptions,
    silent: bool,
    undo_data: Option<UndoData>,
    state: CommandState,
}

impl ChangeShapeCommand {
    pub fn new(id: ObjectId, options: ShapeOptions) -> Self {
        Self { id, options, silent: false, undo_data: None, state: CommandState::Fresh }
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn from_params(params: serde_json::Value) -> Result<Self, CommandError> {
        let params: ChangeShapeParams = serde_json::from_value(params)?;
        Ok(Self::new(params.id, params.options).silent(params.silent))
    }

    pub fn undo_data(&self) -> Option<&UndoData> {
        self.undo_data.as_ref()
    }

    /// True once undo data has been captured; a further `execute` is a redo.
    pub fn is_redo(&self) -> bool {
        self.undo_data.is_some()
    }
}

impl Command for ChangeShapeCommand {
    fn name(&self) -> &'static str {
        CHANGE_SHAPE
    }

    fn description(&self) -> String {
        "Change Shape".to_string()
    }

    fn is_silent(&self) -> bool {
        self.silent
    }

    fn state(&self) -> CommandState {
        self.state
    }

    fn execute(&mut self, graphics: &mut Graphics) -> CommandResult {
        let target = graphics.get_object_mut(self.id).ok_or_else(|| {
            log::warn!("{}: object {} not found", CHANGE_SHAPE, self.id);
            CommandError::ObjectNotFound(self.id)
        })?;

        let captured = if self.is_redo() {
            None
        } else {
            Some(make_undo_data(&self.options, target, self.silent)?)
        };

        target.change(&self.options)?;
        if !self.silent {
            target.last_undo_stack.commit(&self.options);
        }

        if let Some(data) = captured {
            log::debug!("{}: captured {} field(s) of object {}", CHANGE_SHAPE, data.options.len(), data.object);
            self.undo_data = Some(data);
        }
        self.state = CommandState::Executed;
        Ok(())
    }

    fn undo(&mut self, graphics: &mut Graphics) -> CommandResult {
        let data = self.undo_data.as_ref().ok_or(CommandError::NotExecuted(CHANGE_SHAPE))?;
        // The object must outlive every command that captured it.
        let target = graphics.get_object_mut(data.object).ok_or_else(|| {
            log::error!("{}: object {} was destroyed before undo", CHANGE_SHAPE, data.object);
            CommandError::ObjectNotFound(data.object)
        })?;

        target.change(&data.options)?;
        if !self.silent {
            target.last_undo_stack.commit(&data.options);
        }
        self.state = CommandState::Undone;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::NewShape;
    use crate::types::{shape_options, FieldValue, ShapeField, ShapeType};

    fn scene() -> (Graphics, ObjectId) {
        let mut graphics = Graphics::default();
        let mut shape = NewShape::new(ShapeType::Rect);
        shape.fill = Some("#fff".to_string());
        shape.width = 100.0;
        let id = graphics.add_object(shape).unwrap();
        (graphics, id)
    }

    fn fill(graphics: &Graphics, id: ObjectId) -> String {
        graphics.get_object(id).unwrap().fill.clone()
    }

    fn set_fill(id: ObjectId, color: &str) -> ChangeShapeCommand {
        ChangeShapeCommand::new(id, shape_options([(ShapeField::Fill, color)]))
    }

    #[test]
    fn undo_restores_value_before_edit() {
        let (mut graphics, id) = scene();
        let mut cmd = set_fill(id, "#000");

        cmd.execute(&mut graphics).unwrap();
        assert_eq!(fill(&graphics, id), "#000");
        assert_eq!(cmd.state(), CommandState::Executed);

        cmd.undo(&mut graphics).unwrap();
        assert_eq!(fill(&graphics, id), "#fff");
        assert_eq!(cmd.state(), CommandState::Undone);
    }

    #[test]
    fn chained_edits_step_back_one_version_each() {
        let (mut graphics, id) = scene();
        let mut first = ChangeShapeCommand::new(id, shape_options([(ShapeField::Width, 200.0)]));
        let mut second = ChangeShapeCommand::new(id, shape_options([(ShapeField::Width, 300.0)]));

        first.execute(&mut graphics).unwrap();
        second.execute(&mut graphics).unwrap();

        second.undo(&mut graphics).unwrap();
        assert_eq!(graphics.get_object(id).unwrap().width, 200.0);
        first.undo(&mut graphics).unwrap();
        assert_eq!(graphics.get_object(id).unwrap().width, 100.0);
    }

    #[test]
    fn silent_edit_leaves_last_undo_stack_alone() {
        let (mut graphics, id) = scene();
        set_fill(id, "#111").execute(&mut graphics).unwrap();

        let mut silent = set_fill(id, "#1a1").silent(true);
        silent.execute(&mut graphics).unwrap();
        let obj = graphics.get_object(id).unwrap();
        assert_eq!(obj.last_undo_stack.get(ShapeField::Fill), Some(&FieldValue::Color("#111".into())));

        ChangeShapeCommand::new(id, shape_options([(ShapeField::Width, 150.0)]))
            .execute(&mut graphics)
            .unwrap();
        silent.undo(&mut graphics).unwrap();
        assert_eq!(fill(&graphics, id), "#111");

        let mut later = set_fill(id, "#333");
        later.execute(&mut graphics).unwrap();
        later.undo(&mut graphics).unwrap();
        assert_eq!(fill(&graphics, id), "#111");
    }

    #[test]
    fn silent_round_trip_never_touches_last_undo_stack() {
        let (mut graphics, id) = scene();
        let mut silent = ChangeShapeCommand::new(id, shape_options([(ShapeField::Stroke, "#f00")])).silent(true);

        silent.execute(&mut graphics).unwrap();
        assert!(graphics.get_object(id).unwrap().last_undo_stack.is_empty());

        silent.undo(&mut graphics).unwrap();
        let obj = graphics.get_object(id).unwrap();
        assert_eq!(obj.stroke, "#000000");
        assert!(obj.last_undo_stack.is_empty());
    }

    #[test]
    fn redo_does_not_recapture() {
        let (mut graphics, id) = scene();
        let mut cmd = set_fill(id, "#000");

        cmd.execute(&mut graphics).unwrap();
        let captured = cmd.undo_data().cloned();
        cmd.undo(&mut graphics).unwrap();

        cmd.execute(&mut graphics).unwrap();
        assert!(cmd.is_redo());
        assert_eq!(fill(&graphics, id), "#000");
        assert_eq!(cmd.undo_data().cloned(), captured);

        cmd.undo(&mut graphics).unwrap();
        assert_eq!(fill(&graphics, id), "#fff");
    }

    #[test]
    fn missing_target_fails_before_any_capture() {
        let (mut graphics, id) = scene();
        let mut cmd = set_fill(id + 1, "#000");

        let err = cmd.execute(&mut graphics).unwrap_err();
        assert!(matches!(err, CommandError::ObjectNotFound(missing) if missing == id + 1));
        assert_eq!(cmd.state(), CommandState::Fresh);
        assert!(cmd.undo_data().is_none());

        let obj = graphics.get_object(id).unwrap();
        assert_eq!(obj.fill, "#fff");
        assert!(obj.last_undo_stack.is_empty());
    }

    #[test]
    fn failed_change_keeps_side_table_in_step() {
        let (mut graphics, id) = scene();
        let mut options = shape_options([(ShapeField::Fill, "#000")]);
        options.insert(ShapeField::Width, FieldValue::Number(-5.0));
        let mut cmd = ChangeShapeCommand::new(id, options);

        let err = cmd.execute(&mut graphics).unwrap_err();
        assert!(matches!(err, CommandError::Shape(ShapeError::InvalidValue { .. })));
        assert_eq!(cmd.state(), CommandState::Fresh);
        assert!(!cmd.is_redo());

        let obj = graphics.get_object(id).unwrap();
        assert_eq!(obj.fill, "#fff");
        assert!(obj.last_undo_stack.is_empty());
    }

    #[test]
    fn undeclared_field_surfaces_shape_error() {
        let (mut graphics, id) = scene();
        let mut cmd = ChangeShapeCommand::new(id, shape_options([(ShapeField::Rx, 3.0)]));

        let err = cmd.execute(&mut graphics).unwrap_err();
        assert_eq!(err.to_string(), "rect shapes have no editable `rx` attribute");
    }

    #[test]
    fn undo_before_execute_is_rejected() {
        let (mut graphics, id) = scene();
        let mut cmd = set_fill(id, "#000");
        assert!(matches!(cmd.undo(&mut graphics), Err(CommandError::NotExecuted(CHANGE_SHAPE))));
    }

    #[test]
    fn undo_after_object_removed_reports_not_found() {
        let (mut graphics, id) = scene();
        let mut cmd = set_fill(id, "#000");
        cmd.execute(&mut graphics).unwrap();
        graphics.remove_object(id);

        assert!(cmd.undo(&mut graphics).unwrap_err().is_not_found());
    }

    #[test]
    fn params_build_a_silent_command() {
        let cmd = ChangeShapeCommand::from_params(serde_json::json!({
            "id": 4,
            "options": {"strokeWidth": 3},
            "silent": true
        }))
        .unwrap();

        assert!(cmd.is_silent());
        assert_eq!(cmd.options[&ShapeField::StrokeWidth], FieldValue::Number(3.0));
    }
}
