//! Host attribute value model.
//!
//! Every host attribute carries one [`DataKind`] and exposes its per-point
//! values as a borrowed [`AttributeData`] slice of the matching variant.

use crate::util::{Color4, Mat3, Mat4, Quat, Rotation, Vec2, Vec3, Vec4};
use serde::Deserialize;
use std::fmt;

/// Abstract data type of an attribute's values.
///
/// The first ten kinds can be exported; the rest exist on the host but
/// have no particle representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataKind {
    Bool,
    Int,
    Float,
    Vector2,
    Vector3,
    Vector4,
    Quaternion,
    Color4,
    Shape,
    Rotation,
    Matrix3,
    Matrix4,
    String,
}

impl DataKind {
    /// All kinds, in declaration order.
    pub const ALL: [DataKind; 13] = [
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::Vector2,
        Self::Vector3,
        Self::Vector4,
        Self::Quaternion,
        Self::Color4,
        Self::Shape,
        Self::Rotation,
        Self::Matrix3,
        Self::Matrix4,
        Self::String,
    ];

    /// Returns the name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Vector2 => "vector2",
            Self::Vector3 => "vector3",
            Self::Vector4 => "vector4",
            Self::Quaternion => "quaternion",
            Self::Color4 => "color4",
            Self::Shape => "shape",
            Self::Rotation => "rotation",
            Self::Matrix3 => "matrix3",
            Self::Matrix4 => "matrix4",
            Self::String => "string",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural context an attribute is defined over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeContext {
    /// One value per point (0-dimensional component).
    #[default]
    Point,
    /// One value for the whole object.
    Object,
    /// One value per edge (1-dimensional component).
    Edge,
    /// One value per polygon (2-dimensional component).
    Polygon,
    /// One value per polygon-node sample.
    Sample,
}

impl AttributeContext {
    /// Returns true for the per-point context.
    #[inline]
    pub const fn is_per_point(self) -> bool {
        matches!(self, Self::Point)
    }
}

/// Shape type tag. Discriminants match the host's shape enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum ShapeKind {
    #[default]
    Unknown = 0,
    Point = 1,
    Segment = 2,
    Disc = 3,
    Rectangle = 4,
    Sphere = 5,
    Box = 6,
    Cylinder = 7,
    Capsule = 8,
    Cone = 9,
    Blob = 10,
    Instance = 128,
    Reference = 129,
}

/// Per-point particle shape.
///
/// Instance and reference shapes also name the object they point at;
/// only the kind is ever exported.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    #[serde(default)]
    pub object: Option<String>,
}

impl Shape {
    /// Create a shape without an object reference.
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind, object: None }
    }

    /// Type tag as stored in an integer channel.
    #[inline]
    pub fn type_tag(&self) -> i32 {
        self.kind as i32
    }
}

/// Borrowed per-point values of one attribute.
#[derive(Clone, Copy, Debug)]
pub enum AttributeData<'a> {
    Bool(&'a [bool]),
    Int(&'a [i32]),
    Float(&'a [f32]),
    Vector2(&'a [Vec2]),
    Vector3(&'a [Vec3]),
    Vector4(&'a [Vec4]),
    Quaternion(&'a [Quat]),
    Color4(&'a [Color4]),
    Shape(&'a [Shape]),
    Rotation(&'a [Rotation]),
    Matrix3(&'a [Mat3]),
    Matrix4(&'a [Mat4]),
    String(&'a [String]),
}

impl AttributeData<'_> {
    /// Kind of the values.
    pub fn kind(&self) -> DataKind {
        match self {
            Self::Bool(_) => DataKind::Bool,
            Self::Int(_) => DataKind::Int,
            Self::Float(_) => DataKind::Float,
            Self::Vector2(_) => DataKind::Vector2,
            Self::Vector3(_) => DataKind::Vector3,
            Self::Vector4(_) => DataKind::Vector4,
            Self::Quaternion(_) => DataKind::Quaternion,
            Self::Color4(_) => DataKind::Color4,
            Self::Shape(_) => DataKind::Shape,
            Self::Rotation(_) => DataKind::Rotation,
            Self::Matrix3(_) => DataKind::Matrix3,
            Self::Matrix4(_) => DataKind::Matrix4,
            Self::String(_) => DataKind::String,
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Bool(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::Vector2(v) => v.len(),
            Self::Vector3(v) => v.len(),
            Self::Vector4(v) => v.len(),
            Self::Quaternion(v) => v.len(),
            Self::Color4(v) => v.len(),
            Self::Shape(v) => v.len(),
            Self::Rotation(v) => v.len(),
            Self::Matrix3(v) => v.len(),
            Self::Matrix4(v) => v.len(),
            Self::String(v) => v.len(),
        }
    }

    /// Check if there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
