//! Single-image star trails
//!
//! Generates a star field around a random pivot, rotates it through the
//! requested angle in small steps and renders every step into one
//! long-exposure image, plus a preview of the initial field.
//!
//! Usage:
//! ```
//! cargo run --bin star_trails -- <N_STARS> <ROTATION_ANGLE> [OPTIONS]
//! ```
//!
//! Example: `cargo run --release --bin star_trails -- 20 30`

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use startrail_sim::config::DELTA_COMPOSITE_DEG;
use startrail_sim::shared_args::SharedTrailArgs;
use startrail_sim::StarField;
use startrail_viz::{render_composite, render_initial_positions, AlphaMode, OutputLayout};

/// Command line arguments for the composite renderer
#[derive(Parser, Debug)]
#[command(
    name = "Star Trails",
    about = "Renders a long-exposure star trail image of a randomly rotating sky",
    long_about = None
)]
struct Args {
    #[command(flatten)]
    shared: SharedTrailArgs,

    /// Opacity used for every trail point
    #[arg(long, default_value_t = 0.5)]
    trail_alpha: f64,

    /// Draw each star with its own sampled opacity instead of --trail-alpha
    #[arg(long, default_value_t = false)]
    sampled_alpha: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let started = Instant::now();

    let args = Args::parse();
    let config = args
        .shared
        .to_config(DELTA_COMPOSITE_DEG)
        .context("Invalid run parameters")?;

    info!(
        "Simulating {} stars over {}° in {}° steps",
        config.n_stars, config.rotation_angle_deg, config.delta_angle_deg
    );
    let field = StarField::generate(&config).context("Failed to generate star field")?;
    if field.trail_len() == 0 {
        warn!("Rotation is smaller than two steps; the composite will show no trails");
    }

    let layout = OutputLayout::now(&args.shared.output_dir);
    if let Some(dir) = layout.initial_figure().parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let alpha_mode = if args.sampled_alpha {
        AlphaMode::Sampled
    } else {
        AlphaMode::Fixed(args.trail_alpha)
    };
    let options = args.shared.render_options(alpha_mode);
    let viewport = field.viewport();

    let initial_path = layout.initial_figure();
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

    let trails_path = layout.composite_figure();
    info!("Rendering star trail figure: {}", trails_path.display());
    render_composite(viewport.width, viewport.height, field.stars(), &options)?
        .save(&trails_path)
        .with_context(|| format!("Failed to save {}", trails_path.display()))?;

    info!(
        "Total time: {:.3} secs",
        started.elapsed().as_secs_f64()
    );
    Ok(())
}
