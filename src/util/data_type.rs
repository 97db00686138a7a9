//! DataType - combines an element type with an element count.

use super::ElementType;
use std::fmt;

/// DataType describes how one row of a particle channel is stored.
///
/// It combines an [`ElementType`] with an element count.
/// For example, a position would be Float with count 3.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataType {
    /// The primitive element type
    pub element: ElementType,
    /// Number of elements per row (1 to 4)
    pub count: u8,
}

impl DataType {
    /// Create a new DataType with given element type and count.
    #[inline]
    pub const fn new(element: ElementType, count: u8) -> Self {
        Self { element, count }
    }

    /// Create a scalar DataType (count = 1).
    #[inline]
    pub const fn scalar(element: ElementType) -> Self {
        Self { element, count: 1 }
    }

    /// Returns the total size in bytes for one row.
    #[inline]
    pub const fn num_bytes(&self) -> usize {
        self.element.num_bytes() * self.count as usize
    }

    /// Number of elements per row as usize.
    #[inline]
    pub const fn len(&self) -> usize {
        self.count as usize
    }

    /// Returns true if this is a 3-float row (positions, velocities, normals).
    #[inline]
    pub const fn is_vector3(&self) -> bool {
        matches!(self.element, ElementType::Float) && self.count == 3
    }

    pub const INT1: Self = Self::scalar(ElementType::Int);
    pub const FLOAT1: Self = Self::scalar(ElementType::Float);
    pub const FLOAT2: Self = Self::new(ElementType::Float, 2);
    pub const FLOAT3: Self = Self::new(ElementType::Float, 3);
    pub const FLOAT4: Self = Self::new(ElementType::Float, 4);
}

impl fmt::Debug for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "{}", self.element.name())
        } else {
            write!(f, "{}[{}]", self.element.name(), self.count)
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_sizes() {
        assert_eq!(DataType::INT1.num_bytes(), 4);
        assert_eq!(DataType::FLOAT3.num_bytes(), 12);
        assert_eq!(DataType::FLOAT4.num_bytes(), 16);
    }

    #[test]
    fn test_data_type_display() {
        assert_eq!(format!("{}", DataType::FLOAT1), "float");
        assert_eq!(format!("{}", DataType::FLOAT3), "float[3]");
        assert_eq!(format!("{}", DataType::INT1), "int");
    }

    #[test]
    fn test_vector3() {
        assert!(DataType::FLOAT3.is_vector3());
        assert!(!DataType::FLOAT4.is_vector3());
        assert!(!DataType::new(ElementType::Int, 3).is_vector3());
    }
}
