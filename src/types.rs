use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Identifier handed out by `Graphics`. Never reused once an object is removed.
pub type ObjectId = u32;

#[wasm_bindgen]
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rect,
    Circle,
    Triangle,
}

impl ShapeType {
    const COMMON_FIELDS: [ShapeField; 6] = [
        ShapeField::Fill,
        ShapeField::Stroke,
        ShapeField::StrokeWidth,
        ShapeField::Left,
        ShapeField::Top,
        ShapeField::IsRegular,
    ];

    /// Fields this kind of shape may be edited through.
    pub fn editable_fields(self) -> Vec<ShapeField> {
        let extra: &[ShapeField] = match self {
            ShapeType::Rect | ShapeType::Triangle => &[ShapeField::Width, ShapeField::Height],
            ShapeType::Circle => &[ShapeField::Rx, ShapeField::Ry],
        };
        Self::COMMON_FIELDS.iter().chain(extra).copied().collect()
    }

    pub fn supports(self, field: ShapeField) -> bool {
        match field {
            ShapeField::Width | ShapeField::Height => matches!(self, ShapeType::Rect | ShapeType::Triangle),
            ShapeField::Rx | ShapeField::Ry => matches!(self, ShapeType::Circle),
            _ => true,
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeType::Rect => "rect",
            ShapeType::Circle => "circle",
            ShapeType::Triangle => "triangle",
        };
        f.write_str(name)
    }
}

/// Editable attribute of a shape, keyed the way option bags name them.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[serde(rename_all = "camelCase")]
pub enum ShapeField {
    Fill,
    Stroke,
    StrokeWidth,
    Width,
    Height,
    Rx,
    Ry,
    Left,
    Top,
    IsRegular,
}

impl ShapeField {
    pub fn kind(self) -> ValueKind {
        match self {
            ShapeField::Fill | ShapeField::Stroke => ValueKind::Color,
            ShapeField::IsRegular => ValueKind::Flag,
            _ => ValueKind::Number,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeField::Fill => "fill",
            ShapeField::Stroke => "stroke",
            ShapeField::StrokeWidth => "strokeWidth",
            ShapeField::Width => "width",
            ShapeField::Height => "height",
            ShapeField::Rx => "rx",
            ShapeField::Ry => "ry",
            ShapeField::Left => "left",
            ShapeField::Top => "top",
            ShapeField::IsRegular => "isRegular",
        }
    }
}

impl fmt::Display for ShapeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValueKind {
    Color,
    Number,
    Flag,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Color => "color string",
            ValueKind::Number => "number",
            ValueKind::Flag => "boolean",
        };
        f.write_str(name)
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(f64),
    Color(String),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Color(_) => ValueKind::Color,
            FieldValue::Number(_) => ValueKind::Number,
            FieldValue::Flag(_) => ValueKind::Flag,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Color(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Color(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Flag(v)
    }
}

/// Ordered bag of field edits, e.g. `{"fill": "#000", "strokeWidth": 2}`.
pub type ShapeOptions = BTreeMap<ShapeField, FieldValue>;

/// Builds a `ShapeOptions` from `(field, value)` pairs.
pub fn shape_options<I, V>(pairs: I) -> ShapeOptions
where
    I: IntoIterator<Item = (ShapeField, V)>,
    V: Into<FieldValue>,
{
    pairs.into_iter().map(|(k, v)| (k, v.into())).collect()
}
