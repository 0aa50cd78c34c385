//! Run configuration and input validation
//!
//! A [`TrailConfig`] fully describes a run: how many stars, how far the sky
//! turns, the angular step, the viewport and an optional seed. Configs are
//! validated on construction and on load so invalid input fails fast, before
//! any sampling happens.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algo::rotation::RotationSchedule;
use crate::field::{CornerMode, Viewport};
use crate::units::{Angle, AngleExt};

/// Step used for single-image long exposures
pub const DELTA_COMPOSITE_DEG: f64 = 0.01;
/// Step used for frame sequences
pub const DELTA_FRAMES_DEG: f64 = 0.1;
/// Step used for live animations
pub const DELTA_ANIMATION_DEG: f64 = 1.0;

/// Invalid run parameters
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Star count must be positive")]
    NonPositiveStarCount,
    #[error("Rotation angle must be a positive finite value, got {0}")]
    NonPositiveRotation(f64),
    #[error("Delta angle must be a positive finite value, got {0}")]
    NonPositiveDeltaAngle(f64),
    #[error("Rotation needs {0} steps, more than a run can hold")]
    TooManySteps(f64),
    #[error("Viewport must have positive finite size, got {width} x {height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parameters of a single star trail run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailConfig {
    /// Number of stars to place
    pub n_stars: usize,
    /// Total rotation of the sky in degrees
    pub rotation_angle_deg: f64,
    /// Angular step between trail positions in degrees
    #[serde(default = "default_delta_angle_deg")]
    pub delta_angle_deg: f64,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub corner_mode: CornerMode,
    /// Seed for reproducible fields; entropy is used when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_delta_angle_deg() -> f64 {
    DELTA_FRAMES_DEG
}

impl TrailConfig {
    /// Create a validated config on the default viewport
    pub fn new(
        n_stars: usize,
        rotation_angle_deg: f64,
        delta_angle_deg: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            n_stars,
            rotation_angle_deg,
            delta_angle_deg,
            viewport: Viewport::default(),
            corner_mode: CornerMode::default(),
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_corner_mode(mut self, corner_mode: CornerMode) -> Self {
        self.corner_mode = corner_mode;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Result<Self, ConfigError> {
        viewport.validate()?;
        self.viewport = viewport;
        Ok(self)
    }

    /// Check every parameter, reporting the first one that is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_stars == 0 {
            return Err(ConfigError::NonPositiveStarCount);
        }
        self.viewport.validate()?;
        self.schedule().map(|_| ())
    }

    pub fn rotation_angle(&self) -> Angle {
        Angle::from_degrees(self.rotation_angle_deg)
    }

    pub fn delta_angle(&self) -> Angle {
        Angle::from_degrees(self.delta_angle_deg)
    }

    /// Rotation schedule derived from the configured angles
    pub fn schedule(&self) -> Result<RotationSchedule, ConfigError> {
        RotationSchedule::new(
            self.rotation_angle().as_radians(),
            self.delta_angle().as_radians(),
        )
    }

    /// Load and validate a config from a JSON file
    pub fn load_json(path: &Path) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty-printed JSON
    pub fn save_json(&self, path: &Path) -> Result<(), ConfigError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
