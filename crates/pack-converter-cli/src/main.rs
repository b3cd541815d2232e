//! Pack Converter CLI - converts a Java Edition resource pack into a
//! Bedrock Edition resource pack from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pack_converter::util::fs::atomic_write_json;
use pack_converter::{PackConverter, TextureMappings};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "pack-converter")]
#[command(about = "Convert a Java Edition resource pack into a Bedrock Edition resource pack")]
struct Args {
    /// Java pack directory or .zip archive
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory, or .mcpack/.zip file
    #[arg(short, long)]
    output: PathBuf,

    /// Vanilla Java pack (directory, .zip or client .jar) used as fallback
    #[arg(long)]
    vanilla: Option<PathBuf>,

    /// Place all textures under textures/<dir>/
    #[arg(long)]
    texture_subdirectory: Option<String>,

    /// Extra texture mappings (JSON) layered over the built-in ones
    #[arg(long)]
    mappings: Option<PathBuf>,

    /// Pack name (defaults to the input file name)
    #[arg(long)]
    name: Option<String>,

    /// Write a .mcpack archive regardless of the output extension
    #[arg(long)]
    mcpack: bool,

    /// Write the conversion report as JSON to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Converting {}", args.input.display());

    let mut builder = PackConverter::builder()
        .input(&args.input)
        .output(&args.output)
        .zip_output(args.mcpack);

    if let Some(vanilla) = &args.vanilla {
        info!("Vanilla pack: {}", vanilla.display());
        builder = builder.vanilla_pack_path(vanilla);
    }
    if let Some(subdirectory) = args.texture_subdirectory {
        builder = builder.texture_subdirectory(subdirectory);
    }
    if let Some(name) = args.name {
        builder = builder.pack_name(name);
    }
    if let Some(path) = &args.mappings {
        let mut mappings = TextureMappings::default_mappings()?;
        mappings.merge(
            TextureMappings::load(path)
                .with_context(|| format!("loading mappings from {}", path.display()))?,
        );
        builder = builder.mappings(mappings);
    }

    let report = builder
        .build()?
        .convert()
        .with_context(|| format!("converting {}", args.input.display()))?;

    info!(
        "Done: {} textures, {} extra files, {} warnings, {} errors -> {}",
        report.textures_converted,
        report.extra_files,
        report.warnings,
        report.errors,
        args.output.display()
    );

    if let Some(path) = &args.report {
        atomic_write_json(path, &report)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!("Report written to {}", path.display());
    }

    Ok(())
}
