//! Command line arguments shared by the star trail binaries

use std::path::PathBuf;

use clap::Parser;
use startrail_viz::{parse_hex_color, AlphaMode, RenderOptions};

use crate::config::{ConfigError, TrailConfig};
use crate::field::CornerMode;

/// Parse a background color in `#rrggbb` form
fn parse_background(s: &str) -> Result<[u8; 3], String> {
    parse_hex_color(s).map_err(|e| e.to_string())
}

/// Parse a strictly positive float
fn parse_positive(s: &str) -> Result<f64, String> {
    let value = s
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{value} must be a positive number"))
    }
}

/// Common arguments shared across the star trail binaries
#[derive(Parser, Debug, Clone)]
pub struct SharedTrailArgs {
    /// Number of stars in the field
    #[arg(required_unless_present = "config")]
    pub n_stars: Option<usize>,

    /// Total rotation of the sky in degrees
    #[arg(required_unless_present = "config", allow_negative_numbers = true)]
    pub rotation_angle: Option<f64>,

    /// Angular step between trail positions in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub delta_angle: Option<f64>,

    /// Random seed for a reproducible field
    #[arg(long)]
    pub seed: Option<u64>,

    /// Size the enclosing radius with the swapped-axis corner enumeration of the early scripts
    #[arg(long, default_value_t = false)]
    pub legacy_corners: bool,

    /// JSON run configuration; replaces the positional arguments
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Root directory for Figures/, Gif_Figures/ and GIFs/
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Image pixels per viewport unit
    #[arg(long, default_value_t = 60.0, value_parser = parse_positive)]
    pub pixels_per_unit: f64,

    /// Marker radius in pixels for the largest stars
    #[arg(long, default_value_t = 2.0, value_parser = parse_positive)]
    pub marker_scale: f64,

    /// Sky background color
    #[arg(long, default_value = "#000814", value_parser = parse_background)]
    pub background: [u8; 3],
}

impl SharedTrailArgs {
    /// Build the run configuration, validating every parameter
    ///
    /// `default_delta_deg` applies when neither `--delta-angle` nor a config
    /// file sets the step. Command line `--seed`, `--delta-angle` and
    /// `--legacy-corners` override values from a config file.
    pub fn to_config(&self, default_delta_deg: f64) -> Result<TrailConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => TrailConfig::load_json(path)?,
            None => {
                let n_stars = self.n_stars.ok_or(ConfigError::NonPositiveStarCount)?;
                let rotation = self.rotation_angle.unwrap_or(0.0);
                TrailConfig::new(
                    n_stars,
                    rotation,
                    self.delta_angle.unwrap_or(default_delta_deg),
                )?
            }
        };

        if let Some(delta) = self.delta_angle {
            config.delta_angle_deg = delta;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.legacy_corners {
            config.corner_mode = CornerMode::Legacy;
        }

        config.validate()?;
        Ok(config)
    }

    /// Rendering options with the given opacity rule
    pub fn render_options(&self, alpha_mode: AlphaMode) -> RenderOptions {
        RenderOptions {
            pixels_per_unit: self.pixels_per_unit,
            background: self.background,
            marker_scale: self.marker_scale,
            alpha_mode,
            ..RenderOptions::default()
        }
    }
}
