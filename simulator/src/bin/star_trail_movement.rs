//! Star trail frame sequences and animated GIFs
//!
//! Rotates a random star field step by step and renders one frame per step.
//! Frames are written as numbered PNG files and assembled into a looping GIF.
//! In `trails` mode each frame builds on the previous one so the trails grow;
//! in `movement` mode each frame shows only the current star positions,
//! starting from the unrotated field.
//!
//! Usage:
//! ```
//! cargo run --bin star_trail_movement -- <N_STARS> <ROTATION_ANGLE> [OPTIONS]
//! ```
//!
//! Example: `cargo run --release --bin star_trail_movement -- 200 30 --mode movement`

use std::fs;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use startrail_sim::config::DELTA_FRAMES_DEG;
use startrail_sim::shared_args::SharedTrailArgs;
use startrail_sim::StarField;
use startrail_viz::{
    frame_count, render_frames, render_initial_positions, AlphaMode, FrameMode, FrameSink,
    GifSink, OutputLayout, PngSequenceSink,
};

/// Frame composition modes
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Trails grow frame by frame
    Trails,
    /// Only current star positions are shown
    Movement,
}

impl std::fmt::Display for ModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeArg::Trails => write!(f, "trails"),
            ModeArg::Movement => write!(f, "movement"),
        }
    }
}

impl From<ModeArg> for FrameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Trails => FrameMode::Trails,
            ModeArg::Movement => FrameMode::Movement,
        }
    }
}

/// Command line arguments for frame rendering
#[derive(Parser, Debug)]
#[command(
    name = "Star Trail Movement",
    about = "Renders star trail frames and assembles them into an animated GIF",
    long_about = None
)]
struct Args {
    #[command(flatten)]
    shared: SharedTrailArgs,

    /// How consecutive frames are composed
    #[arg(long, default_value_t = ModeArg::Trails)]
    mode: ModeArg,

    /// Animation frame rate
    #[arg(long, default_value_t = GifSink::DEFAULT_FPS)]
    fps: u32,

    /// Skip writing the numbered PNG frames
    #[arg(long, default_value_t = false)]
    no_frames: bool,

    /// Skip assembling the GIF
    #[arg(long, default_value_t = false)]
    no_gif: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let started = Instant::now();

    let args = Args::parse();
    if args.no_frames && args.no_gif {
        bail!("Nothing to write: both --no-frames and --no-gif were given");
    }

    let config = args
        .shared
        .to_config(DELTA_FRAMES_DEG)
        .context("Invalid run parameters")?;

    info!(
        "Simulating {} stars over {}° in {}° steps",
        config.n_stars, config.rotation_angle_deg, config.delta_angle_deg
    );
    let field = StarField::generate(&config).context("Failed to generate star field")?;

    let layout = OutputLayout::today(&args.shared.output_dir);
    let options = args.shared.render_options(AlphaMode::Sampled);
    let viewport = field.viewport();

    let initial_path = layout.initial_figure();
    if let Some(dir) = initial_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    info!("Rendering initial figure: {}", initial_path.display());
    render_initial_positions(
        viewport.width,
        viewport.height,
        field.pivot().as_tuple(),
        field.stars(),
        &options,
    )?
    .save(&initial_path)
    .with_context(|| format!("Failed to save {}", initial_path.display()))?;

    let mode = FrameMode::from(args.mode);
    let n_frames = frame_count(field.stars(), mode);
    if n_frames == 0 {
        warn!(
            "Rotation of {}° is less than two {}° steps; no frames to render",
            config.rotation_angle_deg, config.delta_angle_deg
        );
        return Ok(());
    }

    let mut sink: Box<dyn FrameSink> = match (args.no_frames, args.no_gif) {
        (false, false) => Box::new((
            PngSequenceSink::new(layout.frame_dir())?,
            GifSink::new(layout.gif(), args.fps)?,
        )),
        (false, true) => Box::new(PngSequenceSink::new(layout.frame_dir())?),
        _ => Box::new(GifSink::new(layout.gif(), args.fps)?),
    };

    let progress = ProgressBar::new(n_frames as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("█▉▊▋▌▍▎▏ "),
    );
    progress.set_message(format!("Rendering {} frames", args.mode));

    let written = render_frames(
        viewport.width,
        viewport.height,
        field.stars(),
        mode,
        &options,
        sink.as_mut(),
        |_| progress.inc(1),
    )?;
    progress.finish_with_message("Frames rendered");

    sink.finish().context("Failed to finalize output")?;

    if !args.no_gif {
        let gif_path = layout.gif();
        let size = fs::metadata(&gif_path)
            .with_context(|| format!("Failed to stat {}", gif_path.display()))?
            .len();
        info!(
            "GIF {} ({:.1} KiB)",
            gif_path.display(),
            size as f64 / 1024.0
        );
    }

    info!(
        "Wrote {} frames; total time: {:.3} secs",
        written,
        started.elapsed().as_secs_f64()
    );
    Ok(())
}
