//! Houdini binary geometry (`.bgeo`, version 5) writer.
//!
//! Points are written as homogeneous positions followed by every other
//! channel as a point attribute. A single particle primitive references
//! all points.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use super::{position_channel, write_row, Format, POSITION};
use crate::particles::{Channel, ParticleSet};
use crate::util::{ElementType, Result};

const MAGIC: u32 = u32::from_be_bytes(*b"Bgeo");
const VERSION_CHAR: u8 = b'V';
const VERSION: u32 = 5;
const PARTICLE_PRIMITIVE: u32 = 0x8000;

/// Houdini attribute storage codes.
pub(super) fn houdini_type(channel: &Channel) -> (u32, &'static str) {
    match channel.element_type() {
        ElementType::Int => (1, "int"),
        ElementType::Float if channel.data_type().is_vector3() => (5, "vector"),
        ElementType::Float => (0, "float"),
    }
}

/// Every channel except position, in record-set order.
pub(super) fn point_attributes(particles: &ParticleSet) -> Vec<&Channel> {
    particles.channels().filter(|c| c.name() != POSITION).collect()
}

pub(super) fn write<W: Write>(particles: &ParticleSet, w: &mut W) -> Result<()> {
    let position = position_channel(particles, Format::Bgeo)?;
    let attributes = point_attributes(particles);
    let n = particles.num_particles();

    w.write_u32::<BigEndian>(MAGIC)?;
    w.write_u8(VERSION_CHAR)?;
    w.write_u32::<BigEndian>(VERSION)?;
    w.write_u32::<BigEndian>(n as u32)?; // points
    w.write_u32::<BigEndian>(1)?; // primitives
    w.write_u32::<BigEndian>(0)?; // point groups
    w.write_u32::<BigEndian>(0)?; // primitive groups
    w.write_u32::<BigEndian>(attributes.len() as u32)?;
    w.write_u32::<BigEndian>(0)?; // vertex attributes
    w.write_u32::<BigEndian>(0)?; // primitive attributes
    w.write_u32::<BigEndian>(0)?; // detail attributes

    for attr in &attributes {
        let name = attr.name().as_bytes();
        w.write_u16::<BigEndian>(name.len() as u16)?;
        w.write_all(name)?;
        w.write_u16::<BigEndian>(attr.count() as u16)?;
        w.write_u32::<BigEndian>(houdini_type(attr).0)?;
        super::write_zero_row::<BigEndian, _>(w, attr)?;
    }

    for i in 0..n {
        write_row::<BigEndian, _>(w, position, i)?;
        w.write_f32::<BigEndian>(1.0)?;
        for attr in &attributes {
            write_row::<BigEndian, _>(w, attr, i)?;
        }
    }

    w.write_u32::<BigEndian>(PARTICLE_PRIMITIVE)?;
    w.write_u32::<BigEndian>(n as u32)?;
    for i in 0..n {
        if n <= u16::MAX as usize {
            w.write_u16::<BigEndian>(i as u16)?;
        } else {
            w.write_u32::<BigEndian>(i as u32)?;
        }
    }

    w.write_u8(0x00)?;
    w.write_u8(0xff)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::test_util::sample_set;
    use crate::util::{DataType, Error};
    use byteorder::ReadBytesExt;
    use std::io::{Cursor, Read};

    #[test]
    fn test_header() {
        let mut buf = Vec::new();
        write(&sample_set(), &mut buf).unwrap();

        assert_eq!(&buf[..4], b"Bgeo");
        assert_eq!(buf[4], b'V');
        let mut c = Cursor::new(&buf[5..]);
        let header: Vec<u32> = (0..9).map(|_| c.read_u32::<BigEndian>().unwrap()).collect();
        // version, points, prims, groups x2, point attribs (id, uv), vertex/prim/detail attribs
        assert_eq!(header, [5, 2, 1, 0, 0, 2, 0, 0, 0]);

        // first attribute definition: "id", size 1, int, default 0
        assert_eq!(c.read_u16::<BigEndian>().unwrap(), 2);
        let mut name = [0u8; 2];
        c.read_exact(&mut name).unwrap();
        assert_eq!(&name, b"id");
        assert_eq!(c.read_u16::<BigEndian>().unwrap(), 1);
        assert_eq!(c.read_u32::<BigEndian>().unwrap(), 1);
        assert_eq!(c.read_i32::<BigEndian>().unwrap(), 0);

        assert_eq!(&buf[buf.len() - 2..], &[0x00, 0xff]);
    }

    #[test]
    fn test_requires_position() {
        let mut set = ParticleSet::new(1);
        set.add_channel("P", DataType::FLOAT3).unwrap();
        let err = write(&set, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::MissingChannel { format: "BGEO", .. }));
    }
}
