use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use symbolgen::{DirectoryAssets, Insets, Label, NoAssets, PixelBuffer, Rgba, SnapshotConfig, Snapshotter};

#[derive(Parser)]
#[command(name = "symbolgen", version, about = "Render symbol icons to PNG")]
struct Cli {
    /// JSON file with surface limits
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a text label
    Label {
        text: String,
        #[arg(long, default_value = "#ffffff")]
        background: String,
        #[arg(long, default_value = "#000000")]
        color: String,
        #[arg(long, default_value_t = 4)]
        padding: u32,
        #[arg(long, default_value_t = 1)]
        scale: u32,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Decode a bundled image asset
    Asset {
        #[arg(long)]
        dir: PathBuf,
        id: String,
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn parse_colour(s: &str) -> anyhow::Result<Rgba> {
    Rgba::from_hex(s).ok_or_else(|| anyhow!("invalid colour {:?}, expected #rrggbb or #rrggbbaa", s))
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SnapshotConfig> {
    match path {
        Some(p) => {
            let json = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            Ok(SnapshotConfig::from_json(&json)?)
        }
        None => Ok(SnapshotConfig::default()),
    }
}

fn write_png(buffer: &PixelBuffer, output: &PathBuf) -> anyhow::Result<()> {
    let png = buffer.to_png()?;
    std::fs::write(output, png).with_context(|| format!("writing {}", output.display()))?;
    println!("{}x{} {}", buffer.width(), buffer.height(), buffer.digest());
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_ref())?;
    match cli.command {
        Command::Label { text, background, color, padding, scale, output } => {
            let snapshotter = Snapshotter::with_config(NoAssets, config);
            let mut label = Label::new(text)
                .with_background(parse_colour(&background)?)
                .with_color(parse_colour(&color)?)
                .with_padding(Insets::uniform(padding))
                .with_scale(scale);
            let buffer = snapshotter.snapshot_view(&mut label)?;
            write_png(&buffer, &output)
        }
        Command::Asset { dir, id, output } => {
            let snapshotter = Snapshotter::with_config(DirectoryAssets::new(dir), config);
            let buffer = snapshotter.snapshot_resource(id)?;
            write_png(&buffer, &output)
        }
    }
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("symbolgen failed: {:#}", e);
        std::process::exit(1);
    }
}
