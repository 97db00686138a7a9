//! Particle file writers.
//!
//! Format dispatch is by exact file extension, which must already be
//! lowercase. Each writer encodes a whole [`ParticleSet`] into memory
//! first, so a failed export never leaves a partial file behind.
//!
//! | Extension | Format                         | Byte order |
//! |-----------|--------------------------------|------------|
//! | `prt`     | Krakatoa PRT (zlib payload)    | little     |
//! | `bgeo`    | Houdini binary geometry        | big        |
//! | `geo`     | Houdini ASCII geometry         | -          |
//! | `bin`     | RealFlow particle cache        | little     |
//! | `pda`     | Maya ASCII particle data       | -          |
//! | `pdb`     | Maya particle database         | little     |
//! | `pdc`     | Maya particle disk cache       | big        |

mod bgeo;
mod bin;
mod geo;
mod maya;
mod pda;
mod pdb;
mod pdc;
mod prt;

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use byteorder::{ByteOrder, WriteBytesExt};

use crate::particles::{Channel, ChannelData, ParticleSet};
use crate::util::{Error, Result};

/// On-disk particle format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Prt,
    Bgeo,
    Geo,
    Bin,
    Pda,
    Pdb,
    Pdc,
}

impl Format {
    /// All formats in registration order.
    pub const ALL: [Format; 7] = [
        Self::Prt,
        Self::Bgeo,
        Self::Bin,
        Self::Geo,
        Self::Pda,
        Self::Pdb,
        Self::Pdc,
    ];

    /// Lowercase file extension without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Prt => "prt",
            Self::Bgeo => "bgeo",
            Self::Geo => "geo",
            Self::Bin => "bin",
            Self::Pda => "pda",
            Self::Pdb => "pdb",
            Self::Pdc => "pdc",
        }
    }

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prt => "PRT",
            Self::Bgeo => "BGEO",
            Self::Geo => "GEO",
            Self::Bin => "BIN",
            Self::Pda => "PDA",
            Self::Pdb => "PDB",
            Self::Pdc => "PDC",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Prt => "Krakatoa particle file",
            Self::Bgeo => "Houdini binary geometry",
            Self::Geo => "Houdini ASCII geometry",
            Self::Bin => "RealFlow particle cache",
            Self::Pda => "Maya ASCII particle data",
            Self::Pdb => "Maya particle database",
            Self::Pdc => "Maya particle disk cache",
        }
    }

    /// Look up a format by extension. Matching is case-sensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    /// Format of a path, from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Destination for finished record sets.
pub trait ParticleSink {
    /// Persist `particles` at `path`.
    fn write(&self, particles: &ParticleSet, path: &Path) -> Result<()>;
}

impl<T: ParticleSink + ?Sized> ParticleSink for &T {
    fn write(&self, particles: &ParticleSet, path: &Path) -> Result<()> {
        (**self).write(particles, path)
    }
}

/// Writes record sets to disk, choosing the format by extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileCodec;

impl ParticleSink for FileCodec {
    fn write(&self, particles: &ParticleSet, path: &Path) -> Result<()> {
        write(path, particles)
    }
}

/// Write `particles` to `path` in the format named by its extension.
pub fn write(path: impl AsRef<Path>, particles: &ParticleSet) -> Result<()> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| {
        Error::UnknownFormat(
            path.extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
        )
    })?;
    let bytes = encode(format, particles)?;
    std::fs::write(path, bytes)
        .map_err(|e| Error::write_failed(format!("{}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), %format, "particle file written");
    Ok(())
}

/// Encode `particles` in `format` into a byte buffer.
pub fn encode(format: Format, particles: &ParticleSet) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_to(format, particles, &mut buf)?;
    Ok(buf)
}

/// Encode `particles` in `format` into any writer.
pub fn write_to<W: Write>(format: Format, particles: &ParticleSet, w: &mut W) -> Result<()> {
    match format {
        Format::Prt => prt::write(particles, w),
        Format::Bgeo => bgeo::write(particles, w),
        Format::Geo => geo::write(particles, w),
        Format::Bin => bin::write(particles, w),
        Format::Pda => pda::write(particles, w),
        Format::Pdb => pdb::write(particles, w),
        Format::Pdc => pdc::write(particles, w),
    }
}

/// Write row `index` of `channel` in byte order `B`.
pub(crate) fn write_row<B: ByteOrder, W: Write>(w: &mut W, channel: &Channel, index: usize) -> io::Result<()> {
    let n = channel.count();
    let range = index * n..(index + 1) * n;
    match channel.values() {
        ChannelData::Int(v) => {
            for &x in &v[range] {
                w.write_i32::<B>(x)?;
            }
        }
        ChannelData::Float(v) => {
            for &x in &v[range] {
                w.write_f32::<B>(x)?;
            }
        }
    }
    Ok(())
}

/// Write `count` zero elements of the channel's element type.
pub(crate) fn write_zero_row<B: ByteOrder, W: Write>(w: &mut W, channel: &Channel) -> io::Result<()> {
    for _ in 0..channel.count() {
        match channel.values() {
            ChannelData::Int(_) => w.write_i32::<B>(0)?,
            ChannelData::Float(_) => w.write_f32::<B>(0.0)?,
        }
    }
    Ok(())
}

/// Format row `index` as space separated text.
pub(crate) fn row_text(channel: &Channel, index: usize) -> String {
    let n = channel.count();
    let range = index * n..(index + 1) * n;
    let parts: Vec<String> = match channel.values() {
        ChannelData::Int(v) => v[range].iter().map(|x| x.to_string()).collect(),
        ChannelData::Float(v) => v[range].iter().map(|x| x.to_string()).collect(),
    };
    parts.join(" ")
}

/// The 3-float position channel Houdini writers build points from.
pub(crate) fn position_channel<'a>(particles: &'a ParticleSet, format: Format) -> Result<&'a Channel> {
    particles
        .channel(POSITION)
        .filter(|c| c.data_type().is_vector3())
        .ok_or_else(|| Error::MissingChannel { format: format.name(), channel: POSITION.to_string() })
}

/// Canonical position channel name shared by most writers.
pub(crate) const POSITION: &str = "position";

/// Write `s` into a zero padded field of `len` bytes.
pub(crate) fn write_fixed_str<W: Write>(w: &mut W, s: &str, len: usize) -> io::Result<()> {
    let bytes = s.as_bytes();
    let n = bytes.len().min(len);
    w.write_all(&bytes[..n])?;
    for _ in n..len {
        w.write_u8(0)?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_extension("prt"), Some(Format::Prt));
        assert_eq!(Format::from_extension(".geo"), Some(Format::Geo));
        assert_eq!(Format::from_extension("PRT"), None);
        assert_eq!(Format::from_extension("abc"), None);
        assert_eq!(Format::from_path(Path::new("/tmp/a.b/c.pdc")), Some(Format::Pdc));
        assert_eq!(Format::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_row_text() {
        let set = test_util::sample_set();
        assert_eq!(row_text(set.channel("position").unwrap(), 1), "1 2 3");
        assert_eq!(row_text(set.channel("id").unwrap(), 0), "100");
    }

    #[test]
    fn test_write_unknown_extension() {
        let set = test_util::sample_set();
        let err = write("/nonexistent/out.xyz", &set).unwrap_err();
        assert!(matches!(err, Error::UnknownFormat(ref e) if e == "xyz"));
    }

    #[test]
    fn test_every_format_encodes() {
        let set = test_util::sample_set();
        for format in Format::ALL {
            let bytes = encode(format, &set).unwrap();
            assert!(!bytes.is_empty(), "{format} produced no output");
        }
    }
}
