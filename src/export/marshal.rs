//! Per-kind conversion of host values into channel rows.
//!
//! [`store_attribute`] is the single dispatch point: it matches the
//! attribute's value variant once and then fills every row through the
//! [`StoreRaw`] implementation of that value type.
//!
//! Slot writes are bounded by the row width the type map chose. A row
//! narrower than the value drops trailing components, which is how RGBA
//! colors lose their alpha for formats that map them to 3 floats.

use crate::host::{AttributeData, Shape};
use crate::particles::Channel;
use crate::util::{Color4, Error, Quat, Result, Rotation, Vec2, Vec3, Vec4};

/// Store one host value into the primitive slots of a channel row.
pub trait StoreRaw {
    /// Primitive slot type.
    type Slot: Copy;

    fn store(&self, slots: &mut [Self::Slot]);
}

#[inline]
fn fill<T: Copy>(slots: &mut [T], components: &[T]) {
    for (slot, &c) in slots.iter_mut().zip(components) {
        *slot = c;
    }
}

impl StoreRaw for bool {
    type Slot = i32;
    fn store(&self, slots: &mut [i32]) {
        fill(slots, &[*self as i32]);
    }
}

impl StoreRaw for i32 {
    type Slot = i32;
    fn store(&self, slots: &mut [i32]) {
        fill(slots, &[*self]);
    }
}

impl StoreRaw for Shape {
    type Slot = i32;
    fn store(&self, slots: &mut [i32]) {
        fill(slots, &[self.type_tag()]);
    }
}

impl StoreRaw for f32 {
    type Slot = f32;
    fn store(&self, slots: &mut [f32]) {
        fill(slots, &[*self]);
    }
}

impl StoreRaw for Vec2 {
    type Slot = f32;
    fn store(&self, slots: &mut [f32]) {
        fill(slots, &self.to_array());
    }
}

impl StoreRaw for Vec3 {
    type Slot = f32;
    fn store(&self, slots: &mut [f32]) {
        fill(slots, &self.to_array());
    }
}

impl StoreRaw for Vec4 {
    type Slot = f32;
    fn store(&self, slots: &mut [f32]) {
        fill(slots, &self.to_array());
    }
}

impl StoreRaw for Quat {
    type Slot = f32;
    fn store(&self, slots: &mut [f32]) {
        fill(slots, &[self.x, self.y, self.z, self.w]);
    }
}

impl StoreRaw for Color4 {
    type Slot = f32;
    /// R, G, B always; A only into a 4-wide row.
    fn store(&self, slots: &mut [f32]) {
        fill(slots, &self.to_array());
    }
}

impl StoreRaw for Rotation {
    type Slot = f32;
    /// Writes the representation the value was stored with.
    fn store(&self, slots: &mut [f32]) {
        match *self {
            Rotation::Quaternion(q) => fill(slots, &[q.x, q.y, q.z, q.w]),
            Rotation::AxisAngle { axis, angle } => fill(slots, &[axis.x, axis.y, axis.z, angle]),
            Rotation::Euler(e) => fill(slots, &[e.x, e.y, e.z, 0.0]),
        }
    }
}

fn store_ints<T: StoreRaw<Slot = i32>>(values: &[T], channel: &mut Channel) -> Result<()> {
    let element = channel.element_type();
    let rows = channel.int_rows_mut().ok_or_else(|| Error::TypeMismatch {
        expected: element.to_string(),
        actual: "int".to_string(),
    })?;
    for (value, row) in values.iter().zip(rows) {
        value.store(row);
    }
    Ok(())
}

fn store_floats<T: StoreRaw<Slot = f32>>(values: &[T], channel: &mut Channel) -> Result<()> {
    let element = channel.element_type();
    let rows = channel.float_rows_mut().ok_or_else(|| Error::TypeMismatch {
        expected: element.to_string(),
        actual: "float".to_string(),
    })?;
    for (value, row) in values.iter().zip(rows) {
        value.store(row);
    }
    Ok(())
}

/// Fill every row of `channel` from `data`.
///
/// `data` must hold exactly one value per channel row.
pub fn store_attribute(data: AttributeData<'_>, channel: &mut Channel) -> Result<()> {
    if data.len() != channel.num_rows() {
        return Err(Error::PointCountMismatch {
            expected: channel.num_rows(),
            actual: data.len(),
        });
    }
    match data {
        AttributeData::Bool(v) => store_ints(v, channel),
        AttributeData::Int(v) => store_ints(v, channel),
        AttributeData::Shape(v) => store_ints(v, channel),
        AttributeData::Float(v) => store_floats(v, channel),
        AttributeData::Vector2(v) => store_floats(v, channel),
        AttributeData::Vector3(v) => store_floats(v, channel),
        AttributeData::Vector4(v) => store_floats(v, channel),
        AttributeData::Quaternion(v) => store_floats(v, channel),
        AttributeData::Color4(v) => store_floats(v, channel),
        AttributeData::Rotation(v) => store_floats(v, channel),
        AttributeData::Matrix3(_) | AttributeData::Matrix4(_) | AttributeData::String(_) => {
            Err(Error::UnsupportedDataKind(data.kind().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ShapeKind;
    use crate::particles::ParticleSet;
    use crate::util::{DataType, Mat3};

    fn floats(data: AttributeData<'_>, data_type: DataType) -> Vec<Vec<f32>> {
        let mut set = ParticleSet::new(data.len());
        let ch = set.add_channel("c", data_type).unwrap();
        store_attribute(data, ch).unwrap();
        let ch = set.channel("c").unwrap();
        (0..ch.num_rows()).map(|i| ch.float_row(i).unwrap().to_vec()).collect()
    }

    fn ints(data: AttributeData<'_>) -> Vec<i32> {
        let mut set = ParticleSet::new(data.len());
        let ch = set.add_channel("c", DataType::INT1).unwrap();
        store_attribute(data, ch).unwrap();
        let ch = set.channel("c").unwrap();
        (0..ch.num_rows()).map(|i| ch.int_row(i).unwrap()[0]).collect()
    }

    #[test]
    fn test_scalar_kinds() {
        assert_eq!(ints(AttributeData::Bool(&[true, false])), [1, 0]);
        assert_eq!(ints(AttributeData::Int(&[-4, 9])), [-4, 9]);
        let shapes = [Shape::new(ShapeKind::Sphere), Shape::new(ShapeKind::Reference)];
        assert_eq!(ints(AttributeData::Shape(&shapes)), [5, 129]);
        assert_eq!(floats(AttributeData::Float(&[0.5]), DataType::FLOAT1), [vec![0.5]]);
    }

    #[test]
    fn test_vector_kinds() {
        let v2 = [Vec2::new(1.0, 2.0)];
        assert_eq!(floats(AttributeData::Vector2(&v2), DataType::FLOAT2), [vec![1.0, 2.0]]);
        let v3 = [Vec3::new(1.0, 2.0, 3.0)];
        assert_eq!(floats(AttributeData::Vector3(&v3), DataType::FLOAT3), [vec![1.0, 2.0, 3.0]]);
        let v4 = [Vec4::new(1.0, 2.0, 3.0, 4.0)];
        assert_eq!(floats(AttributeData::Vector4(&v4), DataType::FLOAT4), [vec![1.0, 2.0, 3.0, 4.0]]);
        let q = [Quat::from_xyzw(0.1, 0.2, 0.3, 0.9)];
        assert_eq!(floats(AttributeData::Quaternion(&q), DataType::FLOAT4), [vec![0.1, 0.2, 0.3, 0.9]]);
    }

    #[test]
    fn test_color_alpha() {
        let c = [Color4::new(0.1, 0.2, 0.3, 0.4)];
        assert_eq!(floats(AttributeData::Color4(&c), DataType::FLOAT4), [vec![0.1, 0.2, 0.3, 0.4]]);
        assert_eq!(floats(AttributeData::Color4(&c), DataType::FLOAT3), [vec![0.1, 0.2, 0.3]]);
    }

    #[test]
    fn test_color_never_writes_past_row() {
        let mut slots = [7.0f32; 4];
        Color4::new(0.1, 0.2, 0.3, 0.4).store(&mut slots[..3]);
        assert_eq!(slots, [0.1, 0.2, 0.3, 7.0]);
    }

    #[test]
    fn test_rotation_per_point_repr() {
        let r = [
            Rotation::Euler(Vec3::new(0.5, 0.6, 0.7)),
            Rotation::Quaternion(Quat::from_xyzw(0.0, 0.0, 0.0, 1.0)),
            Rotation::AxisAngle { axis: Vec3::Y, angle: 1.5 },
            Rotation::Euler(Vec3::new(0.1, 0.2, 0.3)),
        ];
        let rows = floats(AttributeData::Rotation(&r), DataType::FLOAT4);
        assert_eq!(rows[0], [0.5, 0.6, 0.7, 0.0]);
        assert_eq!(rows[1], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(rows[2], [0.0, 1.0, 0.0, 1.5]);
        assert_eq!(rows[3], [0.1, 0.2, 0.3, 0.0]);

        // same value gives the same row regardless of its neighbours
        let alone = floats(AttributeData::Rotation(&r[3..]), DataType::FLOAT4);
        assert_eq!(alone[0], rows[3]);
    }

    #[test]
    fn test_euler_clears_fourth_slot() {
        let mut slots = [9.0f32; 4];
        Rotation::Euler(Vec3::ONE).store(&mut slots);
        assert_eq!(slots, [1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_length_mismatch() {
        let mut set = ParticleSet::new(3);
        let ch = set.add_channel("c", DataType::FLOAT1).unwrap();
        let err = store_attribute(AttributeData::Float(&[1.0]), ch).unwrap_err();
        assert!(matches!(err, Error::PointCountMismatch { expected: 3, actual: 1 }));
    }

    #[test]
    fn test_type_mismatch() {
        let mut set = ParticleSet::new(1);
        let ch = set.add_channel("c", DataType::FLOAT1).unwrap();
        let err = store_attribute(AttributeData::Int(&[1]), ch).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_unsupported_kind() {
        let mut set = ParticleSet::new(1);
        let ch = set.add_channel("c", DataType::FLOAT4).unwrap();
        let err = store_attribute(AttributeData::Matrix3(&[Mat3::IDENTITY]), ch).unwrap_err();
        assert!(matches!(err, Error::UnsupportedDataKind(ref k) if k == "matrix3"));
    }
}
