//! Live trail preview: move the mouse inside the window, press 1-6 to switch
//! kinds.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use mouse_trails::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trails-viewer", version, about = "Preview cursor trail effects in a window")]
struct Cli {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Particle kind active at start
    #[arg(short, long)]
    kind: Option<ParticleKind>,

    /// Window width
    #[arg(long)]
    width: Option<u32>,

    /// Window height
    #[arg(long)]
    height: Option<u32>,

    /// RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.verbose > 0 {
        log::set_max_level(match cli.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    }

    let mut config = match &cli.config {
        Some(path) => TrailConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TrailConfig::default(),
    };
    if let Some(kind) = cli.kind {
        config.kind = kind;
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;

    mouse_trails::viewer::run(&config).context("viewer failed")?;
    Ok(())
}
