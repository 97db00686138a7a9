//! Per-format export configuration.
//!
//! Each output format fixes a rename table and a set of type overrides.
//! `.geo` shares the `.bgeo` tables and `.pdb`/`.pdc` share the `.pda`
//! tables. Profiles are built once and never mutated.

use std::path::Path;

use super::{RenameTable, TypeMap};
use crate::formats::Format;
use crate::host::DataKind;
use crate::util::{DataType, Error, Result};

const PRT_RENAMES: &[(&str, &str)] = &[
    ("PointPosition", "Position"),
    ("PointVelocity", "Velocity"),
    ("PointNormal", "Normal"),
    ("PointUV", "TextureCoord"),
];

const HOUDINI_RENAMES: &[(&str, &str)] = &[
    ("PointPosition", "position"),
    ("PointVelocity", "v"),
    ("PointNormal", "N"),
    ("PointUpVector", "up"),
    ("PointUV", "uv"),
    ("Color", "Cd"),
    ("Mass", "mass"),
    ("Size", "pscale"),
    ("Scale", "scalef"),
    ("DragCoefficient", "drag"),
];

const REALFLOW_RENAMES: &[(&str, &str)] = &[
    ("PointPosition", "position"),
    ("PointVelocity", "velocity"),
    ("PointNormal", "normal"),
    ("Force", "force"),
    ("Vorticity", "vorticity"),
    ("Neighbors", "neighbors"),
    ("PointUV", "uvw"),
    ("Age", "age"),
    ("IsolationTime", "isolationTime"),
    ("Viscosity", "viscosity"),
    ("Density", "density"),
    ("Pressure", "pressure"),
    ("Mass", "mass"),
    ("Temperature", "temperature"),
    ("ID", "id"),
];

const MAYA_RENAMES: &[(&str, &str)] = &[
    ("PointPosition", "position"),
    ("PointVelocity", "velocity"),
    ("PointNormal", "normalDir"),
    ("PointUpVector", "upDir"),
    ("Acceleration", "acceleration"),
    ("Force", "force"),
    ("PointUV", "uv"),
    ("Color", "objectColor"),
    ("Mass", "mass"),
    ("Radius", "radius"),
    ("Size", "pointSize"),
    ("Age", "age"),
    ("ID", "id"),
];

/// Rename rules and type overrides for one output format.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportProfile {
    pub format: Format,
    pub renames: RenameTable,
    pub types: TypeMap,
}

impl ExportProfile {
    /// The fixed profile of `format`.
    pub fn for_format(format: Format) -> Self {
        let rgb = TypeMap::new().with_override(DataKind::Color4, DataType::FLOAT3);
        let (renames, types) = match format {
            Format::Prt => (PRT_RENAMES, rgb),
            Format::Bgeo | Format::Geo => (HOUDINI_RENAMES, rgb),
            Format::Bin => (REALFLOW_RENAMES, TypeMap::new()),
            Format::Pda | Format::Pdb | Format::Pdc => (MAYA_RENAMES, TypeMap::new()),
        };
        Self {
            format,
            renames: RenameTable::from_pairs(renames.iter().copied()),
            types,
        }
    }

    /// Profile selected by the extension of `path`, compared case-insensitively.
    pub fn for_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        Format::from_extension(&ext)
            .map(Self::for_format)
            .ok_or(Error::UnknownFormat(ext))
    }
}
