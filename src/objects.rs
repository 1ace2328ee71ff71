use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::last_undo::LastUndoStack;
use crate::types::{FieldValue, ObjectId, ShapeField, ShapeOptions, ShapeType};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VectorObject {
    pub id: ObjectId,
    pub shape_type: ShapeType,
    pub name: String,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub width: f64,
    pub height: f64,
    pub rx: f64,
    pub ry: f64,
    pub left: f64,
    pub top: f64,
    pub is_regular: bool,
    #[serde(skip)]
    pub last_undo_stack: LastUndoStack,
}

impl VectorObject {
    /// Current value of `field`, if this shape declares it.
    pub fn field(&self, field: ShapeField) -> Result<FieldValue, ShapeError> {
        if !self.shape_type.supports(field) {
            return Err(ShapeError::UnsupportedField { shape_type: self.shape_type, field });
        }
        let value = match field {
            ShapeField::Fill => FieldValue::Color(self.fill.clone()),
            ShapeField::Stroke => FieldValue::Color(self.stroke.clone()),
            ShapeField::StrokeWidth => FieldValue::Number(self.stroke_width),
            ShapeField::Width => FieldValue::Number(self.width),
            ShapeField::Height => FieldValue::Number(self.height),
            ShapeField::Rx => FieldValue::Number(self.rx),
            ShapeField::Ry => FieldValue::Number(self.ry),
            ShapeField::Left => FieldValue::Number(self.left),
            ShapeField::Top => FieldValue::Number(self.top),
            ShapeField::IsRegular => FieldValue::Flag(self.is_regular),
        };
        Ok(value)
    }

    /// Applies every option or none of them.
    pub fn change(&mut self, options: &ShapeOptions) -> Result<(), ShapeError> {
        for (field, value) in options {
            self.validate(*field, value)?;
        }
        for (field, value) in options {
            self.set(*field, value);
        }
        log::debug!("shape {} changed {} field(s)", self.id, options.len());
        Ok(())
    }

    /// Checks every field this shape declares against the same rules `change` enforces.
    pub fn validate_all(&self) -> Result<(), ShapeError> {
        for field in self.shape_type.editable_fields() {
            self.validate(field, &self.field(field)?)?;
        }
        Ok(())
    }

    fn validate(&self, field: ShapeField, value: &FieldValue) -> Result<(), ShapeError> {
        if !self.shape_type.supports(field) {
            return Err(ShapeError::UnsupportedField { shape_type: self.shape_type, field });
        }
        if value.kind() != field.kind() {
            return Err(ShapeError::TypeMismatch { field, expected: field.kind() });
        }
        match value {
            FieldValue::Number(v) if !v.is_finite() => Err(ShapeError::InvalidValue {
                field,
                reason: format!("{v} is not finite"),
            }),
            FieldValue::Number(v) if *v < 0.0 && is_extent(field) => Err(ShapeError::InvalidValue {
                field,
                reason: format!("{v} is negative"),
            }),
            FieldValue::Color(c) if c.trim().is_empty() => Err(ShapeError::InvalidValue {
                field,
                reason: "empty color".to_string(),
            }),
            _ => Ok(()),
        }
    }

    // Only called after `validate`, so the kind always matches.
    fn set(&mut self, field: ShapeField, value: &FieldValue) {
        match (field, value) {
            (ShapeField::Fill, FieldValue::Color(v)) => self.fill = v.clone(),
            (ShapeField::Stroke, FieldValue::Color(v)) => self.stroke = v.clone(),
            (ShapeField::StrokeWidth, FieldValue::Number(v)) => self.stroke_width = *v,
            (ShapeField::Width, FieldValue::Number(v)) => self.width = *v,
            (ShapeField::Height, FieldValue::Number(v)) => self.height = *v,
            (ShapeField::Rx, FieldValue::Number(v)) => self.rx = *v,
            (ShapeField::Ry, FieldValue::Number(v)) => self.ry = *v,
            (ShapeField::Left, FieldValue::Number(v)) => self.left = *v,
            (ShapeField::Top, FieldValue::Number(v)) => self.top = *v,
            (ShapeField::IsRegular, FieldValue::Flag(v)) => self.is_regular = *v,
            _ => {}
        }
    }

    /// Axis-aligned bounds in canvas coordinates, stroke excluded.
    pub fn bounds(&self) -> Rect {
        let (w, h) = match self.shape_type {
            ShapeType::Circle => (self.rx * 2.0, self.ry * 2.0),
            ShapeType::Rect | ShapeType::Triangle => (self.width, self.height),
        };
        Rect::new(self.left, self.top, self.left + w, self.top + h)
    }
}

fn is_extent(field: ShapeField) -> bool {
    matches!(
        field,
        ShapeField::StrokeWidth | ShapeField::Width | ShapeField::Height | ShapeField::Rx | ShapeField::Ry
    )
}
