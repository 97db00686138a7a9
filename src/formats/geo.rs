//! Houdini ASCII geometry (`.geo`) writer.

use std::io::Write;

use super::bgeo::{houdini_type, point_attributes};
use super::{position_channel, row_text, Format};
use crate::particles::ParticleSet;
use crate::util::Result;

pub(super) fn write<W: Write>(particles: &ParticleSet, w: &mut W) -> Result<()> {
    let position = position_channel(particles, Format::Geo)?;
    let attributes = point_attributes(particles);
    let n = particles.num_particles();

    writeln!(w, "PGEOMETRY V5")?;
    writeln!(w, "NPoints {} NPrims 1", n)?;
    writeln!(w, "NPointGroups 0 NPrimGroups 0")?;
    writeln!(
        w,
        "NPointAttrib {} NVertexAttrib 0 NPrimAttrib 2 NAttrib 0",
        attributes.len()
    )?;

    if !attributes.is_empty() {
        writeln!(w, "PointAttrib")?;
        for attr in &attributes {
            let defaults = vec!["0"; attr.count()].join(" ");
            writeln!(w, "{} {} {} {}", attr.name(), attr.count(), houdini_type(attr).1, defaults)?;
        }
    }

    for i in 0..n {
        write!(w, "{} 1", row_text(position, i))?;
        if !attributes.is_empty() {
            let values: Vec<String> = attributes.iter().map(|a| row_text(a, i)).collect();
            write!(w, " ({})", values.join("\t"))?;
        }
        writeln!(w)?;
    }

    writeln!(w, "PrimitiveAttrib")?;
    writeln!(w, "generator 1 index 1 papi")?;
    writeln!(w, "pstate 1 index 1 active")?;
    write!(w, "Part {}", n)?;
    for i in 0..n {
        write!(w, " {}", i)?;
    }
    writeln!(w, " [0\t0]")?;
    writeln!(w, "beginExtra")?;
    writeln!(w, "endExtra")?;
    Ok(())
}
