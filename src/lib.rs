//! # Particle Export
//!
//! Converts the per-point attributes of host point clouds into particle
//! record sets and writes them as Krakatoa, Houdini, RealFlow or Maya
//! particle files.
//!
//! ## Modules
//!
//! - [`util`] - Basic types (DataType, math values, errors)
//! - [`host`] - Host scene traits and the in-memory JSON scene
//! - [`particles`] - Channel-based particle record set
//! - [`formats`] - Particle file writers
//! - [`export`] - Type mapping, renaming, marshalling and orchestration
//!
//! ## Example
//!
//! ```ignore
//! use particle_export::prelude::*;
//!
//! let scene = MemoryScene::load("scene.json")?;
//! let target = scene.resolve("Model")?;
//! let request = ExportRequest::new("out/cache.bgeo").with_frame(12);
//! let summary = Exporter::for_path(&request.output)?.run(&target, &request)?;
//! ```

pub mod util;
pub mod host;
pub mod particles;
pub mod formats;
pub mod export;

// Re-export commonly used types
pub use util::{DataType, ElementType, Error, Result};
pub use particles::{Channel, ParticleSet};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{DataType, ElementType, Error, Result};
    pub use crate::host::{MemoryScene, Target};
    pub use crate::particles::{Channel, ParticleSet};
    pub use crate::formats::{FileCodec, Format, ParticleSink};
    pub use crate::export::{ExportProfile, ExportRequest, ExportSummary, Exporter, Selection};
}
