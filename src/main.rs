//! Headless runner: drives a scripted pointer through a trail simulation and
//! writes PNG snapshots of the overlay buffer.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, info};
use mouse_trails::prelude::*;
use std::path::PathBuf;

/// Pointer paths the runner can script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PathShape {
    /// Loop around the buffer's centre.
    Circle,
    /// Sweep left to right in a sawtooth.
    Zigzag,
    /// One straight stroke across the middle.
    Line,
}

#[derive(Parser, Debug)]
#[command(name = "mouse-trails", version, about = "Render cursor trail effects to PNG frames")]
struct Cli {
    /// Particle kind by name (hearts, stars, fire, sparks, smoke, sword)
    #[arg(short, long, conflicts_with = "id")]
    kind: Option<ParticleKind>,

    /// Particle kind by menu id (1-6, anything else selects smoke)
    #[arg(long)]
    id: Option<u32>,

    /// Number of frames to simulate
    #[arg(short = 'n', long, default_value_t = 120)]
    frames: u32,

    /// Framebuffer width
    #[arg(long)]
    width: Option<u32>,

    /// Framebuffer height
    #[arg(long)]
    height: Option<u32>,

    /// Global x of the framebuffer's left edge
    #[arg(long, allow_hyphen_values = true)]
    origin_x: Option<i32>,

    /// Global y of the framebuffer's top edge
    #[arg(long, allow_hyphen_values = true)]
    origin_y: Option<i32>,

    /// RNG seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for PNG snapshots
    #[arg(short, long, default_value = "frames")]
    out: PathBuf,

    /// Save every Nth frame (0 saves only the last)
    #[arg(short, long, default_value_t = 10)]
    every: u32,

    /// Pointer path
    #[arg(short, long, value_enum, default_value_t = PathShape::Circle)]
    path: PathShape,

    /// Pointer speed in pixels per frame
    #[arg(long, default_value_t = 12.0)]
    speed: f32,

    /// Pace frames at the configured interval instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Result<TrailConfig> {
        let mut config = match &self.config {
            Some(path) => TrailConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => TrailConfig::default(),
        };

        if let Some(kind) = self.kind {
            config.kind = kind;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(x) = self.origin_x {
            config.origin[0] = x;
        }
        if let Some(y) = self.origin_y {
            config.origin[1] = y;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

/// A pointer script in global coordinates that stays inside the buffer.
fn script(shape: PathShape, config: &TrailConfig, speed: f32) -> ScriptedPointer {
    let size = Vec2::new(config.width as f32, config.height as f32);
    let origin = config.origin().as_vec2();
    let center = origin + size / 2.0;

    let pointer = match shape {
        PathShape::Circle => ScriptedPointer::circle(center, size.min_element() * 0.35, 64),
        PathShape::Zigzag => ScriptedPointer::zigzag(
            Vec2::new(origin.x + size.x * 0.1, center.y + size.y * 0.2),
            size.x * 0.8,
            size.y * 0.4,
            4,
        ),
        PathShape::Line => ScriptedPointer::line(
            Vec2::new(origin.x + size.x * 0.1, center.y),
            Vec2::new(origin.x + size.x * 0.9, center.y),
        ),
    };
    pointer.with_speed(speed).looping(shape != PathShape::Line)
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

    let config = cli.config()?;
    let mut sim = Simulation::from_config(&config)?;
    if let Some(id) = cli.id {
        sim.select_kind(id);
    }

    let mut pointer = script(cli.path, &config, cli.speed);
    let mut clock = FrameClock::new(config.frame_interval());
    if !cli.realtime {
        clock = clock.with_fixed_delta(config.frame_interval().as_secs_f32());
    }

    info!(
        "rendering {} frames of {} at {}x{} into {}",
        cli.frames,
        sim.active_kind(),
        config.width,
        config.height,
        cli.out.display()
    );

    let mut saved = 0;
    for frame in 1..=cli.frames {
        sim.run_frame(&mut pointer, &mut clock);

        let due = cli.every > 0 && frame % cli.every == 0;
        if due || frame == cli.frames {
            let path = cli.out.join(format!("frame_{:05}.png", frame));
            sim.framebuffer()
                .save_png(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            saved += 1;
            debug!("frame {}: {} live particles -> {}", frame, sim.particles().len(), path.display());
        }

        if cli.realtime {
            clock.pace();
        }
    }

    info!(
        "done: {} snapshots over {:.2}s simulated, {} live particles at the end",
        saved,
        clock.elapsed(),
        sim.particles().len()
    );
    Ok(())
}
