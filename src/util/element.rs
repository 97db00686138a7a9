//! Primitive element types - the storage types of particle channels.

use std::fmt;

/// Primitive element type of a particle channel.
///
/// Every channel stores its rows as a flat run of one of these types.
/// Vectors, colors and quaternions are floats with an element count > 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ElementType {
    /// Signed 32-bit integer
    Int = 0,
    /// 32-bit floating point (IEEE 754 single precision)
    Float = 1,
}

impl ElementType {
    /// Returns the size in bytes of a single element of this type.
    #[inline]
    pub const fn num_bytes(self) -> usize {
        match self {
            Self::Int => 4,
            Self::Float => 4,
        }
    }

    /// Returns the name of this type as a string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
