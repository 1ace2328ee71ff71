use serde::Deserialize;

use crate::config::EngineConfig;
use crate::error::ShapeError;
use crate::last_undo::LastUndoStack;
use crate::objects::VectorObject;
use crate::types::{ObjectId, ShapeType};

/// Geometry and style for a new shape; unset style falls back to the engine defaults.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewShape {
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default = "one")]
    pub width: f64,
    #[serde(default = "one")]
    pub height: f64,
    #[serde(default)]
    pub rx: f64,
    #[serde(default)]
    pub ry: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    #[serde(default)]
    pub is_regular: bool,
}

fn one() -> f64 {
    1.0
}

impl NewShape {
    pub fn new(shape_type: ShapeType) -> Self {
        Self {
            shape_type,
            left: 0.0,
            top: 0.0,
            width: one(),
            height: one(),
            rx: 0.0,
            ry: 0.0,
            fill: None,
            stroke: None,
            stroke_width: None,
            is_regular: false,
        }
    }
}

/// The scene's object store. Resolves ids to live shapes.
#[derive(Clone, Debug)]
pub struct Graphics {
    objects: Vec<VectorObject>,
    next_id: ObjectId,
    defaults: EngineConfig,
}

impl Default for Graphics {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Graphics {
    pub fn new(defaults: EngineConfig) -> Self {
        Self { objects: Vec::new(), next_id: 1, defaults }
    }

    /// Creates a shape from `shape`. Rejected shapes consume no id.
    pub fn add_object(&mut self, shape: NewShape) -> Result<ObjectId, ShapeError> {
        let id = self.next_id;
        let obj = VectorObject {
            id,
            shape_type: shape.shape_type,
            name: format!("{} {}", shape.shape_type, id),
            fill: shape.fill.unwrap_or_else(|| self.defaults.default_fill.clone()),
            stroke: shape.stroke.unwrap_or_else(|| self.defaults.default_stroke.clone()),
            stroke_width: shape.stroke_width.unwrap_or(self.defaults.default_stroke_width),
            width: shape.width,
            height: shape.height,
            rx: shape.rx,
            ry: shape.ry,
            left: shape.left,
            top: shape.top,
            is_regular: shape.is_regular,
            last_undo_stack: LastUndoStack::new(),
        };
        obj.validate_all().map_err(|e| {
            log::warn!("rejected new {}: {}", shape.shape_type, e);
            e
        })?;

        self.next_id += 1;
        self.objects.push(obj);
        log::debug!("added {} {}", shape.shape_type, id);
        Ok(id)
    }

    /// Drops the object; its id is not handed out again.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<VectorObject> {
        let pos = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(pos))
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&VectorObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut VectorObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn objects(&self) -> &[VectorObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
