//! In-memory host scene.
//!
//! Loads a JSON scene description and serves it through the host traits.
//!
//! ```json
//! {
//!   "objects": [
//!     { "name": "cloud", "primitive": { "type": "pointcloud", "point_count": 2,
//!       "attributes": [
//!         { "name": "PointPosition", "kind": "vector3", "values": [[0,0,0],[1,0,0]] },
//!         { "name": "Size", "kind": "float", "values": [0.1, 0.2] }
//!       ] } }
//!   ],
//!   "models": [ { "name": "Model", "children": ["cloud"] } ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::{
    Attribute, AttributeContext, AttributeData, PointCloud, Primitive, SceneObject, Shape, Target,
    POINT_CLOUD_TYPE,
};
use crate::util::{Color4, Error, Mat3, Mat4, Quat, Result, Rotation, Vec2, Vec3, Vec4};

/// Owned per-point values of one attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeArray {
    Bool(Vec<bool>),
    Int(Vec<i32>),
    Float(Vec<f32>),
    Vector2(Vec<Vec2>),
    Vector3(Vec<Vec3>),
    Vector4(Vec<Vec4>),
    Quaternion(Vec<Quat>),
    Color4(Vec<Color4>),
    Shape(Vec<Shape>),
    Rotation(Vec<Rotation>),
    Matrix3(Vec<Mat3>),
    Matrix4(Vec<Mat4>),
    String(Vec<String>),
}

impl AttributeArray {
    /// Borrow as [`AttributeData`].
    pub fn as_data(&self) -> AttributeData<'_> {
        match self {
            Self::Bool(v) => AttributeData::Bool(v),
            Self::Int(v) => AttributeData::Int(v),
            Self::Float(v) => AttributeData::Float(v),
            Self::Vector2(v) => AttributeData::Vector2(v),
            Self::Vector3(v) => AttributeData::Vector3(v),
            Self::Vector4(v) => AttributeData::Vector4(v),
            Self::Quaternion(v) => AttributeData::Quaternion(v),
            Self::Color4(v) => AttributeData::Color4(v),
            Self::Shape(v) => AttributeData::Shape(v),
            Self::Rotation(v) => AttributeData::Rotation(v),
            Self::Matrix3(v) => AttributeData::Matrix3(v),
            Self::Matrix4(v) => AttributeData::Matrix4(v),
            Self::String(v) => AttributeData::String(v),
        }
    }

    fn from_json(kind: &str, values: serde_json::Value) -> Result<Self> {
        use serde_json::from_value;
        Ok(match kind {
            "bool" => Self::Bool(from_value(values)?),
            "int" => Self::Int(from_value(values)?),
            "float" => Self::Float(from_value(values)?),
            "vector2" => Self::Vector2(from_value(values)?),
            "vector3" => Self::Vector3(from_value(values)?),
            "vector4" => Self::Vector4(from_value(values)?),
            "quaternion" => Self::Quaternion(from_value(values)?),
            "color4" => Self::Color4(from_value(values)?),
            "shape" => Self::Shape(from_value(values)?),
            "rotation" => Self::Rotation(from_value(values)?),
            "matrix3" => Self::Matrix3(from_value(values)?),
            "matrix4" => Self::Matrix4(from_value(values)?),
            "string" => Self::String(from_value(values)?),
            other => return Err(Error::other(format!("unknown attribute kind {other:?}"))),
        })
    }
}

#[derive(Deserialize)]
struct RawAttribute {
    name: String,
    #[serde(default)]
    context: AttributeContext,
    #[serde(default = "default_true")]
    defined: bool,
    kind: String,
    #[serde(default)]
    values: serde_json::Value,
}

fn default_true() -> bool {
    true
}

impl TryFrom<RawAttribute> for MemoryAttribute {
    type Error = Error;

    fn try_from(raw: RawAttribute) -> Result<Self> {
        let values = if raw.values.is_null() {
            serde_json::Value::Array(Vec::new())
        } else {
            raw.values
        };
        let values = AttributeArray::from_json(&raw.kind, values)
            .map_err(|e| Error::other(format!("attribute {:?}: {e}", raw.name)))?;
        Ok(Self {
            name: raw.name,
            context: raw.context,
            defined: raw.defined,
            values,
        })
    }
}

/// Attribute stored in memory.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "RawAttribute")]
pub struct MemoryAttribute {
    pub name: String,
    pub context: AttributeContext,
    pub defined: bool,
    pub values: AttributeArray,
}

impl MemoryAttribute {
    /// Create a defined per-point attribute.
    pub fn new(name: impl Into<String>, values: AttributeArray) -> Self {
        Self {
            name: name.into(),
            context: AttributeContext::Point,
            defined: true,
            values,
        }
    }

    /// Set the context.
    pub fn with_context(mut self, context: AttributeContext) -> Self {
        self.context = context;
        self
    }

    /// Mark as undefined.
    pub fn undefined(mut self) -> Self {
        self.defined = false;
        self
    }
}

impl Attribute for MemoryAttribute {
    fn name(&self) -> &str {
        &self.name
    }

    fn context(&self) -> AttributeContext {
        self.context
    }

    fn is_defined(&self) -> bool {
        self.defined
    }

    fn data(&self) -> AttributeData<'_> {
        self.values.as_data()
    }
}

/// Primitive stored in memory.
///
/// Geometry is static: every frame sees the same points.
#[derive(Clone, Debug, Deserialize)]
pub struct MemoryPrimitive {
    #[serde(rename = "type", default = "default_primitive_type")]
    pub type_name: String,
    #[serde(default)]
    pub point_count: Option<usize>,
    #[serde(default)]
    pub attributes: Vec<MemoryAttribute>,
}

fn default_primitive_type() -> String {
    POINT_CLOUD_TYPE.to_string()
}

impl MemoryPrimitive {
    /// Create an empty point cloud with `point_count` points.
    pub fn point_cloud(point_count: usize) -> Self {
        Self {
            type_name: POINT_CLOUD_TYPE.to_string(),
            point_count: Some(point_count),
            attributes: Vec::new(),
        }
    }

    /// Create a primitive of another host type.
    pub fn of_type(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            point_count: Some(0),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, attribute: MemoryAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

impl Primitive for MemoryPrimitive {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn point_cloud(&self, _frame: i32) -> Option<&dyn PointCloud> {
        if self.type_name == POINT_CLOUD_TYPE {
            Some(self)
        } else {
            None
        }
    }
}

impl PointCloud for MemoryPrimitive {
    /// Explicit count, else the length of the first per-point attribute.
    fn point_count(&self) -> usize {
        self.point_count.unwrap_or_else(|| {
            self.attributes
                .iter()
                .find(|a| a.context.is_per_point() && a.defined)
                .map(|a| a.values.as_data().len())
                .unwrap_or(0)
        })
    }

    fn attributes(&self) -> Vec<&dyn Attribute> {
        self.attributes.iter().map(|a| a as &dyn Attribute).collect()
    }
}

/// Scene object stored in memory.
#[derive(Clone, Debug, Deserialize)]
pub struct MemoryObject {
    pub name: String,
    pub primitive: MemoryPrimitive,
}

impl MemoryObject {
    pub fn new(name: impl Into<String>, primitive: MemoryPrimitive) -> Self {
        Self { name: name.into(), primitive }
    }
}

impl SceneObject for MemoryObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn active_primitive(&self) -> &dyn Primitive {
        &self.primitive
    }
}

/// Model grouping objects by name.
#[derive(Clone, Debug, Deserialize)]
pub struct MemoryModel {
    pub name: String,
    #[serde(default)]
    pub children: Vec<String>,
}

/// Scene made of objects and models.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MemoryScene {
    #[serde(default)]
    pub objects: Vec<MemoryObject>,
    #[serde(default)]
    pub models: Vec<MemoryModel>,
}

impl MemoryScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON scene description from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a JSON scene description.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Add an object.
    pub fn add_object(&mut self, object: MemoryObject) -> &mut Self {
        self.objects.push(object);
        self
    }

    /// Add a model over already added objects.
    pub fn add_model<I, S>(&mut self, name: impl Into<String>, children: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models.push(MemoryModel {
            name: name.into(),
            children: children.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Find an object by name.
    pub fn object(&self, name: &str) -> Option<&MemoryObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Resolve a reference: model names give containers, object names give
    /// their primitive.
    pub fn resolve(&self, reference: &str) -> Result<Target<'_>> {
        if let Some(model) = self.models.iter().find(|m| m.name == reference) {
            return self.model_target(model);
        }
        if let Some(object) = self.object(reference) {
            return Ok(Target::Primitive(&object.primitive));
        }
        Err(Error::ObjectNotFound(reference.to_string()))
    }

    /// The first model, else the first object.
    pub fn default_target(&self) -> Result<Target<'_>> {
        if let Some(model) = self.models.first() {
            return self.model_target(model);
        }
        self.objects
            .first()
            .map(|o| Target::Primitive(&o.primitive as &dyn Primitive))
            .ok_or_else(|| Error::ObjectNotFound("<empty scene>".to_string()))
    }

    fn model_target(&self, model: &MemoryModel) -> Result<Target<'_>> {
        let children = model
            .children
            .iter()
            .map(|name| {
                self.object(name)
                    .map(|o| o as &dyn SceneObject)
                    .ok_or_else(|| Error::ObjectNotFound(format!("{}/{}", model.name, name)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Target::Container { name: model.name.clone(), children })
    }
}
