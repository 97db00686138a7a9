//! Attribute kind to channel type mapping.

use std::collections::HashMap;

use crate::host::DataKind;
use crate::util::DataType;

/// Default channel type for each exportable kind.
pub const fn default_mapping(kind: DataKind) -> Option<DataType> {
    match kind {
        DataKind::Bool | DataKind::Int | DataKind::Shape => Some(DataType::INT1),
        DataKind::Float => Some(DataType::FLOAT1),
        DataKind::Vector2 => Some(DataType::FLOAT2),
        DataKind::Vector3 => Some(DataType::FLOAT3),
        DataKind::Vector4 | DataKind::Quaternion | DataKind::Color4 | DataKind::Rotation => {
            Some(DataType::FLOAT4)
        }
        DataKind::Matrix3 | DataKind::Matrix4 | DataKind::String => None,
    }
}

/// Default table plus per-format overrides.
///
/// Overrides are consulted before the default table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeMap {
    overrides: HashMap<DataKind, DataType>,
}

impl TypeMap {
    /// The default table without overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the mapping of one kind.
    pub fn with_override(mut self, kind: DataKind, data_type: DataType) -> Self {
        self.overrides.insert(kind, data_type);
        self
    }

    /// Channel type for `kind`, None when the kind cannot be exported.
    pub fn resolve(&self, kind: DataKind) -> Option<DataType> {
        self.overrides
            .get(&kind)
            .copied()
            .or_else(|| default_mapping(kind))
    }

    /// Overridden kinds, sorted.
    pub fn overrides(&self) -> Vec<(DataKind, DataType)> {
        let mut v: Vec<_> = self.overrides.iter().map(|(k, t)| (*k, *t)).collect();
        v.sort_by_key(|(k, _)| *k);
        v
    }
}
