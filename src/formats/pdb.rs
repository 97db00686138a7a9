//! Maya particle database (`.pdb`, 32-bit layout) writer.
//!
//! Little-endian. The on-disk structs still carry the pointer fields of
//! the in-memory layout they were dumped from; those are written as zero.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use super::maya::{maya_channels, vector_row, MayaType};
use super::write_row;
use crate::particles::ParticleSet;
use crate::util::Result;

const MAGIC: i32 = 670;
const SWAP: u16 = 1;
const VERSION: f32 = 1.0;
const PADDING: usize = 32;

// channel type codes
const PDB_VECTOR: u32 = 1;
const PDB_REAL: u32 = 2;
const PDB_LONG: u32 = 3;

pub(super) fn write<W: Write>(particles: &ParticleSet, w: &mut W) -> Result<()> {
    let channels = maya_channels(particles, "PDB");
    let n = particles.num_particles();

    // header
    w.write_i32::<LittleEndian>(MAGIC)?;
    w.write_u16::<LittleEndian>(SWAP)?;
    w.write_f32::<LittleEndian>(VERSION)?;
    w.write_f32::<LittleEndian>(0.0)?; // time
    w.write_u32::<LittleEndian>(n as u32)?; // data size
    w.write_u32::<LittleEndian>(channels.len() as u32)?; // num data
    w.write_all(&[0u8; PADDING])?;
    w.write_u32::<LittleEndian>(0)?; // data pointer

    for (channel, kind) in &channels {
        let (code, element_size) = match kind {
            MayaType::Vector => (PDB_VECTOR, 12),
            MayaType::Real => (PDB_REAL, 4),
            MayaType::Int => (PDB_LONG, 4),
        };

        // channel record
        w.write_u32::<LittleEndian>(0)?; // name pointer
        w.write_u32::<LittleEndian>(code)?;
        w.write_u32::<LittleEndian>(n as u32)?; // size
        w.write_u32::<LittleEndian>(0)?; // active start
        w.write_u32::<LittleEndian>(n.saturating_sub(1) as u32)?; // active end
        w.write_u8(0)?; // hide
        w.write_u8(0)?; // disconnect
        w.write_u16::<LittleEndian>(0)?; // alignment
        w.write_u32::<LittleEndian>(0)?; // data pointer
        w.write_u32::<LittleEndian>(0)?; // link
        w.write_u32::<LittleEndian>(0)?; // next

        let name = channel.name().as_bytes();
        w.write_i32::<LittleEndian>(name.len() as i32)?;
        w.write_all(name)?;

        // channel data record
        w.write_u32::<LittleEndian>(code)?;
        w.write_u32::<LittleEndian>(element_size)?;
        w.write_u32::<LittleEndian>(n as u32)?; // block size
        w.write_u32::<LittleEndian>(1)?; // num blocks
        w.write_u32::<LittleEndian>(0)?; // block pointer

        for i in 0..n {
            if *kind == MayaType::Vector {
                for v in vector_row(channel, i) {
                    w.write_f32::<LittleEndian>(v)?;
                }
            } else {
                write_row::<LittleEndian, _>(w, channel, i)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::test_util::sample_set;
    use crate::util::DataType;
    use byteorder::ReadBytesExt;
    use std::io::Cursor;

    const HEADER_SIZE: usize = 4 + 2 + 4 + 4 + 4 + 4 + PADDING + 4;
    const CHANNEL_SIZE: usize = 36;
    const DATA_RECORD_SIZE: usize = 20;

    #[test]
    fn test_layout() {
        let mut buf = Vec::new();
        write(&sample_set(), &mut buf).unwrap();

        let mut c = Cursor::new(&buf);
        assert_eq!(c.read_i32::<LittleEndian>().unwrap(), 670);
        assert_eq!(c.read_u16::<LittleEndian>().unwrap(), 1);
        assert_eq!(c.read_f32::<LittleEndian>().unwrap(), 1.0);
        assert_eq!(c.read_f32::<LittleEndian>().unwrap(), 0.0);
        assert_eq!(c.read_u32::<LittleEndian>().unwrap(), 2);
        assert_eq!(c.read_u32::<LittleEndian>().unwrap(), 2);

        // position: vector channel, 2 x 12 bytes of data
        let position_len = CHANNEL_SIZE + 4 + 8 + DATA_RECORD_SIZE + 24;
        // id: long channel, 2 x 4 bytes of data
        let id_len = CHANNEL_SIZE + 4 + 2 + DATA_RECORD_SIZE + 8;
        assert_eq!(buf.len(), HEADER_SIZE + position_len + id_len);

        let mut ch = Cursor::new(&buf[HEADER_SIZE + 4..]);
        assert_eq!(ch.read_u32::<LittleEndian>().unwrap(), PDB_VECTOR);
    }

    #[test]
    fn test_rgba_written_as_vector() {
        let mut set = ParticleSet::new(2);
        set.add_channel("objectColor", DataType::FLOAT4).unwrap();
        let mut buf = Vec::new();
        write(&set, &mut buf).unwrap();

        let color_len = CHANNEL_SIZE + 4 + 11 + DATA_RECORD_SIZE + 2 * 12;
        assert_eq!(buf.len(), HEADER_SIZE + color_len);
        let mut ch = Cursor::new(&buf[HEADER_SIZE + CHANNEL_SIZE + 4 + 11..]);
        assert_eq!(ch.read_u32::<LittleEndian>().unwrap(), PDB_VECTOR);
        assert_eq!(ch.read_u32::<LittleEndian>().unwrap(), 12);
    }
}
