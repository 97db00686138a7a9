//! RealFlow particle cache (`.bin`) writer.
//!
//! RealFlow reads a fixed record per particle, so only channels with the
//! names in [`RECORD`] are written. Missing fields are zero, any other
//! channel is ignored.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use super::write_fixed_str;
use crate::particles::{ChannelData, ParticleSet};
use crate::util::Result;

const MAGIC: u32 = 0x00FA_BADA;
const FLUID_NAME: &str = "particle-export";
const FLUID_NAME_LEN: usize = 250;
const VERSION: u16 = 9;
const FLUID_TYPE: i32 = 8;
const FPS: i32 = 24;
const RADIUS: f32 = 0.1;

#[derive(Clone, Copy)]
enum Field {
    Float(&'static str, usize),
    Int(&'static str),
    InfoBits,
}

/// Per-particle record, in file order.
const RECORD: [Field; 16] = [
    Field::Float("position", 3),
    Field::Float("velocity", 3),
    Field::Float("force", 3),
    Field::Float("vorticity", 3),
    Field::Float("normal", 3),
    Field::Int("neighbors"),
    Field::Float("uvw", 3),
    Field::InfoBits,
    Field::Float("age", 1),
    Field::Float("isolationTime", 1),
    Field::Float("viscosity", 1),
    Field::Float("density", 1),
    Field::Float("pressure", 1),
    Field::Float("mass", 1),
    Field::Float("temperature", 1),
    Field::Int("id"),
];

fn is_record_field(name: &str) -> bool {
    RECORD.iter().any(|f| match f {
        Field::Float(n, _) | Field::Int(n) => *n == name,
        Field::InfoBits => false,
    })
}

pub(super) fn write<W: Write>(particles: &ParticleSet, w: &mut W) -> Result<()> {
    for channel in particles.channels() {
        if !is_record_field(channel.name()) {
            tracing::debug!(channel = channel.name(), "BIN has no field for channel, ignoring");
        }
    }

    let n = particles.num_particles();
    w.write_u32::<LittleEndian>(MAGIC)?;
    write_fixed_str(w, FLUID_NAME, FLUID_NAME_LEN)?;
    w.write_u16::<LittleEndian>(VERSION)?;
    w.write_f32::<LittleEndian>(1.0)?; // scale
    w.write_i32::<LittleEndian>(FLUID_TYPE)?;
    w.write_f32::<LittleEndian>(0.0)?; // elapsed time
    w.write_i32::<LittleEndian>(0)?; // frame
    w.write_i32::<LittleEndian>(FPS)?;
    w.write_i32::<LittleEndian>(n as i32)?;
    w.write_f32::<LittleEndian>(RADIUS)?;
    // pressure, speed, temperature (max, min, average)
    for _ in 0..9 {
        w.write_f32::<LittleEndian>(0.0)?;
    }
    // emitter position, rotation, scale
    for v in [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0] {
        w.write_f32::<LittleEndian>(v)?;
    }

    for i in 0..n {
        for field in RECORD {
            match field {
                Field::Float(name, width) => {
                    let mut values = particles
                        .channel(name)
                        .and_then(|c| c.row_as_f32(i))
                        .unwrap_or_default();
                    values.resize(width, 0.0);
                    for v in values {
                        w.write_f32::<LittleEndian>(v)?;
                    }
                }
                Field::Int(name) => {
                    let value = particles
                        .channel(name)
                        .and_then(|c| match c.values() {
                            ChannelData::Int(_) => c.int_row(i).map(|r| r[0]),
                            ChannelData::Float(_) => c.float_row(i).map(|r| r[0] as i32),
                        })
                        .unwrap_or(0);
                    w.write_i32::<LittleEndian>(value)?;
                }
                Field::InfoBits => w.write_u16::<LittleEndian>(0)?,
            }
        }
    }

    // no additional data
    w.write_i32::<LittleEndian>(0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::test_util::sample_set;
    use byteorder::ReadBytesExt;
    use std::io::Cursor;

    const RECORD_SIZE: usize = 15 * 4 + 4 + 3 * 4 + 2 + 7 * 4 + 4;
    const HEADER_SIZE: usize = 4 + 250 + 2 + 4 + 4 + 4 + 4 + 4 + 4 + 4 + 9 * 4 + 9 * 4;

    #[test]
    fn test_record_layout() {
        let set = sample_set();
        let mut buf = Vec::new();
        write(&set, &mut buf).unwrap();
        assert_eq!(buf.len(), HEADER_SIZE + 2 * RECORD_SIZE + 4);

        let mut c = Cursor::new(&buf);
        assert_eq!(c.read_u32::<LittleEndian>().unwrap(), MAGIC);

        // second particle: position (1, 2, 3) ... id 101
        let rec = &buf[HEADER_SIZE + RECORD_SIZE..HEADER_SIZE + 2 * RECORD_SIZE];
        let mut r = Cursor::new(rec);
        assert_eq!(r.read_f32::<LittleEndian>().unwrap(), 1.0);
        assert_eq!(r.read_f32::<LittleEndian>().unwrap(), 2.0);
        assert_eq!(r.read_f32::<LittleEndian>().unwrap(), 3.0);
        let mut id = Cursor::new(&rec[RECORD_SIZE - 4..]);
        assert_eq!(id.read_i32::<LittleEndian>().unwrap(), 101);
    }

    #[test]
    fn test_field_names() {
        assert!(is_record_field("isolationTime"));
        assert!(is_record_field("id"));
        assert!(!is_record_field("Position"));
    }
}
