//! Maya particle disk cache (`.pdc`) writer.
//!
//! Big-endian. Integers are stored as int arrays, reals and vectors as
//! double arrays.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use super::maya::{maya_channels, vector_row, MayaType};
use crate::particles::ParticleSet;
use crate::util::Result;

const MAGIC: &[u8; 4] = b"PDC ";
const FORMAT_VERSION: i32 = 1;
const BYTE_ORDER: i32 = 1;

// attribute type codes
const INT_ARRAY: i32 = 1;
const DOUBLE_ARRAY: i32 = 3;
const VECTOR_ARRAY: i32 = 5;

pub(super) fn write<W: Write>(particles: &ParticleSet, w: &mut W) -> Result<()> {
    let channels = maya_channels(particles, "PDC");
    let n = particles.num_particles();

    w.write_all(MAGIC)?;
    w.write_i32::<BigEndian>(FORMAT_VERSION)?;
    w.write_i32::<BigEndian>(BYTE_ORDER)?;
    w.write_i32::<BigEndian>(0)?; // extra
    w.write_i32::<BigEndian>(0)?; // extra
    w.write_i32::<BigEndian>(n as i32)?;
    w.write_i32::<BigEndian>(channels.len() as i32)?;

    for (channel, kind) in &channels {
        let name = channel.name().as_bytes();
        w.write_i32::<BigEndian>(name.len() as i32)?;
        w.write_all(name)?;
        match kind {
            MayaType::Int => {
                w.write_i32::<BigEndian>(INT_ARRAY)?;
                for i in 0..n {
                    let v = channel.int_row(i).map(|r| r[0]).unwrap_or(0);
                    w.write_i32::<BigEndian>(v)?;
                }
            }
            MayaType::Real => {
                w.write_i32::<BigEndian>(DOUBLE_ARRAY)?;
                for i in 0..n {
                    let v = channel.float_row(i).map(|r| r[0]).unwrap_or(0.0);
                    w.write_f64::<BigEndian>(v as f64)?;
                }
            }
            MayaType::Vector => {
                w.write_i32::<BigEndian>(VECTOR_ARRAY)?;
                for i in 0..n {
                    for v in vector_row(channel, i) {
                        w.write_f64::<BigEndian>(v as f64)?;
                    }
                }
            }
        }
    }
    Ok(())
}
