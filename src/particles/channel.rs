//! A single named channel of a particle record set.

use crate::util::{DataType, ElementType};

/// Flat row-major channel storage.
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelData {
    Int(Vec<i32>),
    Float(Vec<f32>),
}

impl ChannelData {
    fn zeroed(element: ElementType, len: usize) -> Self {
        match element {
            ElementType::Int => Self::Int(vec![0; len]),
            ElementType::Float => Self::Float(vec![0.0; len]),
        }
    }

    /// Total number of stored elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Int(v) => v.len(),
            Self::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Named channel with `num_particles` rows of `data_type.count` elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    name: String,
    data_type: DataType,
    values: ChannelData,
}

impl Channel {
    /// Create a zero-filled channel.
    pub(crate) fn new(name: impl Into<String>, data_type: DataType, num_particles: usize) -> Self {
        Self {
            name: name.into(),
            data_type,
            values: ChannelData::zeroed(data_type.element, num_particles * data_type.len()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn element_type(&self) -> ElementType {
        self.data_type.element
    }

    /// Elements per row.
    pub fn count(&self) -> usize {
        self.data_type.len()
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.values.len() / self.count().max(1)
    }

    pub fn values(&self) -> &ChannelData {
        &self.values
    }

    /// Integer row `index`, None for float channels or out-of-range rows.
    pub fn int_row(&self, index: usize) -> Option<&[i32]> {
        let n = self.count();
        match &self.values {
            ChannelData::Int(v) => v.get(index * n..(index + 1) * n),
            ChannelData::Float(_) => None,
        }
    }

    /// Float row `index`, None for int channels or out-of-range rows.
    pub fn float_row(&self, index: usize) -> Option<&[f32]> {
        let n = self.count();
        match &self.values {
            ChannelData::Float(v) => v.get(index * n..(index + 1) * n),
            ChannelData::Int(_) => None,
        }
    }

    /// Row `index` widened to f32 regardless of storage type.
    pub fn row_as_f32(&self, index: usize) -> Option<Vec<f32>> {
        match &self.values {
            ChannelData::Float(_) => self.float_row(index).map(|r| r.to_vec()),
            ChannelData::Int(_) => self.int_row(index).map(|r| r.iter().map(|&v| v as f32).collect()),
        }
    }

    /// Mutable integer rows, None for float channels.
    pub fn int_rows_mut(&mut self) -> Option<std::slice::ChunksExactMut<'_, i32>> {
        let n = self.count();
        match &mut self.values {
            ChannelData::Int(v) => Some(v.chunks_exact_mut(n)),
            ChannelData::Float(_) => None,
        }
    }

    /// Mutable float rows, None for int channels.
    pub fn float_rows_mut(&mut self) -> Option<std::slice::ChunksExactMut<'_, f32>> {
        let n = self.count();
        match &mut self.values {
            ChannelData::Float(v) => Some(v.chunks_exact_mut(n)),
            ChannelData::Int(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_channel_is_zeroed() {
        let ch = Channel::new("Position", DataType::FLOAT3, 4);
        assert_eq!(ch.num_rows(), 4);
        assert_eq!(ch.float_row(3), Some(&[0.0, 0.0, 0.0][..]));
        assert_eq!(ch.float_row(4), None);
        assert_eq!(ch.int_row(0), None);
    }

    #[test]
    fn test_rows_mut() {
        let mut ch = Channel::new("id", DataType::INT1, 3);
        for (i, row) in ch.int_rows_mut().unwrap().enumerate() {
            row[0] = i as i32 * 10;
        }
        assert_eq!(ch.values(), &ChannelData::Int(vec![0, 10, 20]));
        assert!(ch.float_rows_mut().is_none());
        assert_eq!(ch.row_as_f32(2), Some(vec![20.0]));
    }

    #[test]
    fn test_empty_channel() {
        let ch = Channel::new("v", DataType::FLOAT3, 0);
        assert_eq!(ch.num_rows(), 0);
        assert!(ch.values().is_empty());
    }
}
