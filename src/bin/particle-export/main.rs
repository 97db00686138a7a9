//! particle-export CLI - export point clouds from JSON scenes to particle files.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use particle_export::export::{ExportProfile, ExportRequest, Exporter};
use particle_export::formats::Format;
use particle_export::host::{MemoryScene, SceneObject};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("PARTICLE_EXPORT_BUILD_DATE"),
    " ",
    env!("PARTICLE_EXPORT_BUILD_TIME"),
    ")"
);

/// Export per-point attributes of point clouds to particle files.
#[derive(Parser)]
#[command(name = "particle-export")]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a scene target to a particle file.
    Export {
        /// JSON scene description.
        scene: PathBuf,

        /// Output file; its extension selects the format.
        #[arg(short, long)]
        output: PathBuf,

        /// Frame number.
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        frame: i32,

        /// Attributes to export (comma-separated). Default: all.
        #[arg(short, long)]
        channels: Option<String>,

        /// Model or object to export. Default: first model, else first object.
        #[arg(short, long)]
        target: Option<String>,
    },

    /// List supported formats with their channel renames.
    Formats,

    /// Show objects, models and point attributes of a scene.
    Inspect {
        /// JSON scene description.
        scene: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Export { scene, output, frame, channels, target } => {
            cmd_export(&scene, output, frame, channels, target.as_deref())
        }
        Commands::Formats => {
            cmd_formats();
            Ok(())
        }
        Commands::Inspect { scene } => cmd_inspect(&scene),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr));
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: logging already initialized");
    }
}

fn cmd_export(
    scene_path: &Path,
    output: PathBuf,
    frame: i32,
    channels: Option<String>,
    target: Option<&str>,
) -> anyhow::Result<()> {
    let scene = MemoryScene::load(scene_path)
        .with_context(|| format!("failed to load scene {}", scene_path.display()))?;
    let target = match target {
        Some(name) => scene.resolve(name)?,
        None => scene.default_target()?,
    };

    let exporter = Exporter::for_path(&output)?;
    let request = ExportRequest { output, frame, channels };
    let summary = exporter
        .run(&target, &request)
        .with_context(|| format!("export of {} failed", target.class_name()))?;

    for file in &summary.files {
        println!(
            "{}: {} particles, {} channels",
            file.path.display(),
            file.num_particles,
            file.num_channels
        );
    }
    Ok(())
}

fn cmd_formats() {
    for format in Format::ALL {
        let profile = ExportProfile::for_format(format);
        println!(".{:<6}{}", format.extension(), format.description());
        for (source, dest) in profile.renames.iter() {
            println!("    {source} -> {dest}");
        }
        for (kind, data_type) in profile.types.overrides() {
            println!("    <{kind}> as {data_type}");
        }
    }
}

fn cmd_inspect(scene_path: &Path) -> anyhow::Result<()> {
    let scene = MemoryScene::load(scene_path)
        .with_context(|| format!("failed to load scene {}", scene_path.display()))?;

    println!("Objects:");
    for object in &scene.objects {
        let primitive = object.active_primitive();
        match primitive.point_cloud(0) {
            Some(cloud) => {
                println!("  {} [{}] {} points", object.name(), primitive.type_name(), cloud.point_count());
                for attribute in cloud.attributes() {
                    let mut flags = String::new();
                    if !attribute.context().is_per_point() {
                        flags.push_str(&format!(" ({:?})", attribute.context()));
                    }
                    if !attribute.is_defined() {
                        flags.push_str(" (undefined)");
                    }
                    println!("    {:<20} {}{}", attribute.name(), attribute.data_kind(), flags);
                }
            }
            None => println!("  {} [{}]", object.name(), primitive.type_name()),
        }
    }

    if !scene.models.is_empty() {
        println!("Models:");
        for model in &scene.models {
            println!("  {}: {}", model.name, model.children.join(", "));
        }
    }
    Ok(())
}
