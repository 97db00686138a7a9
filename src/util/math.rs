//! Math type re-exports and host-specific value types.
//!
//! This module re-exports types from `glam` and provides the value types
//! that have no direct glam counterpart (RGBA colors and rotations that
//! remember how they were authored).

pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

use serde::Deserialize;
use std::fmt;

/// RGBA color with single precision components.
#[derive(Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "[f32; 4]")]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color4 {
    /// Create a new color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Components in (r, g, b, a) order.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Color4 {
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl fmt::Debug for Color4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color4({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A rotation that keeps its authored representation.
///
/// The host stores rotations per point, and each point may use a
/// different representation. Nothing is converted on read.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// Unit quaternion.
    Quaternion(Quat),
    /// Rotation of `angle` radians around `axis`.
    AxisAngle { axis: Vec3, angle: f32 },
    /// XYZ Euler angles in radians.
    Euler(Vec3),
}

impl Default for Rotation {
    fn default() -> Self {
        Self::Quaternion(Quat::IDENTITY)
    }
}
