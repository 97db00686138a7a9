//! Krakatoa PRT writer.
//!
//! Layout (little-endian):
//! - 56-byte header: magic, header size, signature, version, particle count
//! - reserved int (always 4)
//! - channel table: count, definition size, then per channel a 32-byte
//!   name, data type, arity and byte offset within a particle record
//! - zlib-compressed particle records, channels interleaved per particle

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::write::ZlibEncoder;
use flate2::Compression;

use tracing::warn;

use super::{write_fixed_str, write_row};
use crate::particles::{Channel, ParticleSet};
use crate::util::{ElementType, Error, Result};

const MAGIC: [u8; 8] = [192, b'P', b'R', b'T', b'\r', b'\n', 26, b'\n'];
const HEADER_SIZE: u32 = 56;
const SIGNATURE: &str = "Extensible Particle Format";
const VERSION: u32 = 1;
const RESERVED: u32 = 4;
const CHANNEL_DEF_SIZE: u32 = 44;
const NAME_LEN: usize = 32;

// PRT data type codes
const PRT_INT32: u32 = 1;
const PRT_FLOAT32: u32 = 4;

pub(super) fn write<W: Write>(particles: &ParticleSet, w: &mut W) -> Result<()> {
    let channels = encodable_channels(particles);

    w.write_all(&MAGIC)?;
    w.write_u32::<LittleEndian>(HEADER_SIZE)?;
    write_fixed_str(w, SIGNATURE, NAME_LEN)?;
    w.write_u32::<LittleEndian>(VERSION)?;
    w.write_u64::<LittleEndian>(particles.num_particles() as u64)?;
    w.write_u32::<LittleEndian>(RESERVED)?;

    w.write_u32::<LittleEndian>(channels.len() as u32)?;
    w.write_u32::<LittleEndian>(CHANNEL_DEF_SIZE)?;
    let mut offset = 0u32;
    for channel in &channels {
        let data_type = channel.data_type();
        let code = match data_type.element {
            ElementType::Int => PRT_INT32,
            ElementType::Float => PRT_FLOAT32,
        };
        write_fixed_str(w, channel.name(), NAME_LEN)?;
        w.write_u32::<LittleEndian>(code)?;
        w.write_u32::<LittleEndian>(data_type.count as u32)?;
        w.write_u32::<LittleEndian>(offset)?;
        offset += data_type.num_bytes() as u32;
    }

    let mut encoder = ZlibEncoder::new(w, Compression::default());
    for i in 0..particles.num_particles() {
        for channel in &channels {
            write_row::<LittleEndian, _>(&mut encoder, channel, i)?;
        }
    }
    encoder.finish()?;
    Ok(())
}

/// Channels whose names fit the channel table. The rest are skipped
/// with a warning.
fn encodable_channels(particles: &ParticleSet) -> Vec<&Channel> {
    particles
        .channels()
        .filter(|c| match validate_name(c.name()) {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping channel: PRT {e}");
                false
            }
        })
        .collect()
}

/// Krakatoa channel names are C identifiers of at most 31 bytes.
fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidChannelName {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    if name.is_empty() {
        return Err(invalid("empty name"));
    }
    if name.len() >= NAME_LEN {
        return Err(invalid("longer than 31 bytes"));
    }
    let mut chars = name.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !first_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid("not an identifier"));
    }
    Ok(())
}
