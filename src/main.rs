use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medcut::models::{AppConfig, PaletteRequest};
use medcut::services::{discover_inputs, QuantizePipeline};

#[derive(Parser)]
#[command(name = "medcut")]
#[command(about = "Median-cut color quantizer for raw RGB images")]
struct Cli {
    /// YAML config file (defaults to $MEDCUT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantize a raw image (or every .raw file in a directory) to indexed BMP
    Quantize {
        /// Input file named like `name_<W>x<H>.raw`, or a directory of them
        input: PathBuf,

        /// Palette size: a power of two ("16") or a doubling range ("2-256")
        #[arg(short, long)]
        colors: Option<String>,

        /// Directory for output files (default: next to each input)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Also write an indexed PNG preview
        #[arg(long)]
        preview: bool,
    },
    /// Print the palette median cut builds for an image
    Palette {
        /// Input file named like `name_<W>x<H>.raw`
        input: PathBuf,

        /// Palette size (a single power of two)
        #[arg(short, long, default_value = "16")]
        colors: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medcut=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(cli.config.as_deref());

    match cli.command {
        Commands::Quantize {
            input,
            colors,
            output_dir,
            preview,
        } => run_quantize_command(config.with_overrides(colors, output_dir, preview), &input),
        Commands::Palette { input, colors } => run_palette_command(config, &input, &colors),
    }
}

/// Quantize every input at every requested palette size
fn run_quantize_command(config: AppConfig, input: &Path) -> anyhow::Result<()> {
    let request: PaletteRequest = config.colors.parse()?;
    let inputs = discover_inputs(input)?;
    let pipeline = QuantizePipeline::new(config);

    let reports = pipeline.run(&inputs, &request)?;
    for report in &reports {
        println!(
            "{} -> {} ({} colors, {:.1?})",
            report.input.display(),
            report.output.display(),
            report.colors,
            report.elapsed
        );
    }
    Ok(())
}

/// Print one palette as hex, one entry per line
fn run_palette_command(config: AppConfig, input: &Path, colors: &str) -> anyhow::Result<()> {
    let request: PaletteRequest = colors.parse()?;
    let sizes = request.sizes();
    let [size] = sizes.as_slice() else {
        anyhow::bail!("palette command takes a single size, got range '{colors}'");
    };

    let pipeline = QuantizePipeline::new(config);
    let palette = pipeline.palette_for(input, *size)?;
    for (i, color) in palette.colors().iter().enumerate() {
        let marker = if i < palette.filled() { "" } else { " (padding)" };
        println!("{i:3} {color}{marker}");
    }
    Ok(())
}
