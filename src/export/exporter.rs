//! Export orchestration: target dispatch, output paths and handoff to
//! the particle sink.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use super::driver::{export_primitive, AttributeExport};
use super::{Diagnostic, ExportProfile, Selection};
use crate::formats::{FileCodec, Format, ParticleSink};
use crate::host::{Primitive, Target};
use crate::util::{Error, Result};

/// Per-call export parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRequest {
    /// Destination file. For containers, the base of every child's path.
    pub output: PathBuf,
    pub frame: i32,
    /// Comma separated source attribute names; `None` exports everything.
    pub channels: Option<String>,
}

impl ExportRequest {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self { output: output.into(), frame: 1, channels: None }
    }

    pub fn with_frame(mut self, frame: i32) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_channels(mut self, channels: impl Into<String>) -> Self {
        self.channels = Some(channels.into());
        self
    }
}

/// One file handed to the sink.
#[derive(Clone, Debug, PartialEq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub num_particles: usize,
    pub num_channels: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of a successful export.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportSummary {
    pub files: Vec<WrittenFile>,
}

/// Runs exports for one format profile.
///
/// The sink defaults to [`FileCodec`]; any [`ParticleSink`] can stand in.
#[derive(Debug)]
pub struct Exporter<S = FileCodec> {
    profile: ExportProfile,
    sink: S,
}

impl Exporter<FileCodec> {
    /// Exporter writing real files.
    pub fn new(profile: ExportProfile) -> Self {
        Self { profile, sink: FileCodec }
    }

    /// Exporter for the format named by the extension of `output`.
    pub fn for_path(output: &Path) -> Result<Self> {
        ExportProfile::for_path(output).map(Self::new)
    }
}

impl<S: ParticleSink> Exporter<S> {
    pub fn with_sink(profile: ExportProfile, sink: S) -> Self {
        Self { profile, sink }
    }

    pub fn profile(&self) -> &ExportProfile {
        &self.profile
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Export `target` as described by `request`.
    ///
    /// A single primitive goes to `request.output` with its extension
    /// lowercased. A container writes one frame-suffixed file per child
    /// and stops at the first child that fails.
    pub fn run(&self, target: &Target<'_>, request: &ExportRequest) -> Result<ExportSummary> {
        info!("Frame: {}", request.frame);
        info!("UserData: {}", request.channels.as_deref().unwrap_or_default());

        let selection = Selection::parse(request.channels.as_deref());
        let (base, ext) = split_extension(&request.output);
        if Format::from_extension(&ext) != Some(self.profile.format) {
            let err = Error::FormatMismatch {
                expected: self.profile.format.name(),
                path: request.output.display().to_string(),
            };
            error!("{err}");
            return Err(err);
        }
        let mut summary = ExportSummary::default();

        match target {
            Target::Primitive(primitive) => {
                let mut path = base.into_os_string();
                path.push(&ext);
                let file = self.export_one(*primitive, request.frame, &selection, PathBuf::from(path))?;
                summary.files.push(file);
            }
            Target::Container { children, .. } => {
                for child in children {
                    let path = child_output_path(&base, child.name(), request.frame, &ext);
                    let file = self.export_one(child.active_primitive(), request.frame, &selection, path)?;
                    summary.files.push(file);
                }
            }
            Target::Other { class } => {
                let err = Error::UnsupportedTarget(class.clone());
                error!("{err}");
                return Err(err);
            }
        }
        Ok(summary)
    }

    fn export_one(
        &self,
        primitive: &dyn Primitive,
        frame: i32,
        selection: &Selection,
        path: PathBuf,
    ) -> Result<WrittenFile> {
        let _span = tracing::info_span!("export_target", path = %path.display()).entered();

        let AttributeExport { particles, diagnostics } =
            export_primitive(primitive, frame, &self.profile, selection).inspect_err(|e| error!("{e}"))?;
        for d in &diagnostics {
            warn!("{d}");
        }

        info!(
            "Writing {} particles with {} channels to file at path: {}",
            particles.num_particles(),
            particles.num_channels(),
            path.display()
        );
        self.sink.write(&particles, &path).inspect_err(|e| error!("{e}"))?;

        Ok(WrittenFile {
            num_particles: particles.num_particles(),
            num_channels: particles.num_channels(),
            path,
            diagnostics,
        })
    }
}

/// Split `path` into everything before the extension and the extension
/// itself, lowercased and with its leading dot. No extension gives "".
pub fn split_extension(path: &Path) -> (PathBuf, String) {
    match path.extension() {
        Some(ext) => (
            path.with_extension(""),
            format!(".{}", ext.to_string_lossy().to_lowercase()),
        ),
        None => (path.to_path_buf(), String::new()),
    }
}

/// `<base>_<child>.<frame:04><ext>`, e.g. `foo_bar.0007.geo`.
pub fn child_output_path(base: &Path, child: &str, frame: i32, ext: &str) -> PathBuf {
    let mut s = OsString::from(base.as_os_str());
    s.push(format!("_{child}.{frame:04}{ext}"));
    PathBuf::from(s)
}
