//! Maya ASCII particle data (`.pda`) writer.

use std::io::Write;

use super::maya::{maya_channels, vector_row, MayaType};
use super::row_text;
use crate::particles::ParticleSet;
use crate::util::Result;

pub(super) fn write<W: Write>(particles: &ParticleSet, w: &mut W) -> Result<()> {
    let channels = maya_channels(particles, "PDA");

    writeln!(w, "ATTRIBUTES")?;
    for (channel, _) in &channels {
        write!(w, " {}", channel.name())?;
    }
    writeln!(w)?;

    writeln!(w, "TYPES")?;
    for (_, kind) in &channels {
        let code = match kind {
            MayaType::Int => "I",
            MayaType::Real => "R",
            MayaType::Vector => "V",
        };
        write!(w, " {}", code)?;
    }
    writeln!(w)?;

    writeln!(w, "NUMBER_OF_PARTICLES: {}", particles.num_particles())?;
    writeln!(w, "BEGIN DATA")?;
    for i in 0..particles.num_particles() {
        let row: Vec<String> = channels
            .iter()
            .map(|(c, kind)| match kind {
                MayaType::Vector => {
                    let [x, y, z] = vector_row(c, i);
                    format!("{x} {y} {z}")
                }
                _ => row_text(c, i),
            })
            .collect();
        writeln!(w, "{}", row.join(" "))?;
    }
    Ok(())
}
