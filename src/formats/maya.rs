//! Channel classification shared by the Maya particle writers.

use crate::particles::{Channel, ParticleSet};
use crate::util::ElementType;

/// Attribute types Maya particle files can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum MayaType {
    Int,
    Real,
    Vector,
}

impl MayaType {
    fn of(channel: &Channel) -> Option<Self> {
        match (channel.element_type(), channel.count()) {
            (ElementType::Int, 1) => Some(Self::Int),
            (ElementType::Float, 1) => Some(Self::Real),
            (ElementType::Float, 3 | 4) => Some(Self::Vector),
            _ => None,
        }
    }
}

/// Channels Maya can represent; the rest are skipped with a warning.
///
/// 4-float channels (RGBA colors) become vectors and lose their last
/// component.
pub(super) fn maya_channels<'a>(particles: &'a ParticleSet, format: &str) -> Vec<(&'a Channel, MayaType)> {
    particles
        .channels()
        .filter_map(|c| match MayaType::of(c) {
            Some(t) => {
                if t == MayaType::Vector && c.count() == 4 {
                    tracing::warn!(
                        "Channel \"{}\": {} stores RGB vectors, dropping alpha",
                        c.name(),
                        format
                    );
                }
                Some((c, t))
            }
            None => {
                tracing::warn!(
                    "Skipping channel \"{}\": {} cannot store {} values",
                    c.name(),
                    format,
                    c.data_type()
                );
                None
            }
        })
        .collect()
}

/// First three components of a vector channel row; missing ones are zero.
pub(super) fn vector_row(channel: &Channel, index: usize) -> [f32; 3] {
    let mut v = [0.0; 3];
    if let Some(row) = channel.float_row(index) {
        for (dst, src) in v.iter_mut().zip(row) {
            *dst = *src;
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::test_util::sample_set;
    use crate::util::DataType;

    #[test]
    fn test_classify() {
        let set = sample_set();
        let channels = maya_channels(&set, "PDA");
        let kinds: Vec<(&str, MayaType)> = channels.iter().map(|(c, t)| (c.name(), *t)).collect();
        // uv (2 floats) has no Maya type
        assert_eq!(kinds, [("position", MayaType::Vector), ("id", MayaType::Int)]);
    }

    #[test]
    fn test_rgba_becomes_vector() {
        let mut set = sample_set();
        let color = set.add_channel("objectColor", DataType::FLOAT4).unwrap();
        for row in color.float_rows_mut().unwrap() {
            row.copy_from_slice(&[0.1, 0.2, 0.3, 0.5]);
        }
        let channels = maya_channels(&set, "PDC");
        let (c, t) = channels.last().unwrap();
        assert_eq!((c.name(), *t), ("objectColor", MayaType::Vector));
        assert_eq!(vector_row(c, 1), [0.1, 0.2, 0.3]);
        assert_eq!(vector_row(set.channel("position").unwrap(), 1), [1.0, 2.0, 3.0]);
    }
}
