use std::path::PathBuf;

use clap::{ArgAction, Parser};
use placeholder_gen::{BatchEvent, FontPreference, ManifestError, PlaceholderError, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "placeholder-gen", version)]
/// Generate labeled placeholder PNGs for every entry of a screenshot manifest.
struct Cli {
    /// Input manifest (JSON array of objects with a `filename` field).
    #[arg(long, default_value = placeholder_gen::DEFAULT_MANIFEST_PATH)]
    manifest: PathBuf,

    /// Directory the PNG files are written to.
    #[arg(long, default_value = placeholder_gen::DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Preferred TrueType/OpenType font file.
    #[arg(long, default_value = placeholder_gen::DEFAULT_FONT_PATH)]
    font: PathBuf,

    /// Do not search installed system fonts when the preferred font is unavailable.
    #[arg(long)]
    no_system_fonts: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = RunConfig {
        manifest_path: cli.manifest,
        output_dir: cli.out_dir,
        font: FontPreference {
            preferred_path: Some(cli.font),
            allow_system_fonts: !cli.no_system_fonts,
        },
        ..RunConfig::default()
    };

    let manifest_name = cfg
        .manifest_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| cfg.manifest_path.display().to_string());

    let result = placeholder_gen::run(&cfg, &mut |event: &BatchEvent| match event {
        BatchEvent::Started { total } => {
            println!("🎨 Generating {total} placeholder screenshots...");
        }
        BatchEvent::Progress { generated, total } => {
            println!("📸 Generated {generated}/{total} screenshots...");
        }
        BatchEvent::ItemFailed { filename, reason } => {
            println!("❌ Error generating {filename}: {reason}");
        }
    });

    match result {
        Ok(report) => {
            println!(
                "✅ Successfully generated {} placeholder screenshots!",
                report.generated
            );
        }
        Err(PlaceholderError::Manifest(err)) => {
            tracing::error!(error = %err, "manifest unusable");
            match err {
                ManifestError::NotFound(_) => println!("❌ {manifest_name} not found"),
                ManifestError::Read { source, .. } => {
                    println!("❌ Error reading {manifest_name}: {source}")
                }
                ManifestError::Parse { source, .. } => {
                    println!("❌ Error reading {manifest_name}: {source}")
                }
                ManifestError::NotASequence { .. } => {
                    println!("❌ Invalid {manifest_name} format")
                }
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "run aborted");
            println!("❌ Error: {err}");
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
