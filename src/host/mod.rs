//! Host scene boundary.
//!
//! The exporter reads from a host application through these traits:
//! - [`Attribute`] - a named, typed, per-point value sequence
//! - [`PointCloud`] - point count + attribute set
//! - [`Primitive`] / [`SceneObject`] - what an export target resolves to
//! - [`Target`] - resolved export target
//!
//! [`MemoryScene`] implements them over a JSON scene description.

mod value;
mod memory;

pub use value::*;
pub use memory::*;

/// Type name of primitives that carry point-cloud geometry.
pub const POINT_CLOUD_TYPE: &str = "pointcloud";

/// A named per-point attribute owned by the host.
pub trait Attribute {
    /// Attribute name, unique within its point cloud.
    fn name(&self) -> &str;

    /// Context the attribute is defined over.
    fn context(&self) -> AttributeContext;

    /// False when the attribute exists but has never been evaluated.
    fn is_defined(&self) -> bool;

    /// All per-point values, index-aligned with the point ordering.
    fn data(&self) -> AttributeData<'_>;

    /// Kind of the values.
    fn data_kind(&self) -> DataKind {
        self.data().kind()
    }
}

/// Point-cloud geometry at one frame.
pub trait PointCloud {
    fn point_count(&self) -> usize;

    /// Attributes in host enumeration order.
    fn attributes(&self) -> Vec<&dyn Attribute>;
}

/// A primitive of a scene object.
pub trait Primitive {
    /// Host type name (`pointcloud`, `polymsh`, ...).
    fn type_name(&self) -> &str;

    /// Geometry evaluated at `frame`, or None when this primitive is not a point cloud.
    fn point_cloud(&self, frame: i32) -> Option<&dyn PointCloud>;
}

/// A child of a container target.
pub trait SceneObject {
    fn name(&self) -> &str;

    /// The primitive the object currently exposes.
    fn active_primitive(&self) -> &dyn Primitive;
}

/// What an opaque host reference resolves to.
pub enum Target<'a> {
    /// A single primitive, exported to the requested path unchanged.
    Primitive(&'a dyn Primitive),
    /// A model; each child is exported to its own frame-suffixed file.
    Container {
        name: String,
        children: Vec<&'a dyn SceneObject>,
    },
    /// Anything else the host can reference (cameras, passes, ...).
    Other { class: String },
}

impl Target<'_> {
    /// Host class name of the target.
    pub fn class_name(&self) -> &str {
        match self {
            Self::Primitive(_) => "Primitive",
            Self::Container { .. } => "Model",
            Self::Other { class } => class,
        }
    }
}
