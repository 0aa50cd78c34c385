//! Viewport, rotation pivot and initial star placement
//!
//! The pivot is drawn uniformly inside the viewport. The enclosing radius is
//! the largest distance from the pivot to a viewport corner, so a disk of
//! that radius about the pivot covers the whole viewport wherever the pivot
//! lands and every part of the frame sees stars sweeping through it.
//!
//! Star positions are drawn uniformly over the *bounding square* of that
//! disk, not over the disk itself. Density per unit area is therefore the
//! same everywhere in the square, and stars in the square's corners lie
//! outside the enclosing circle. This matches the look of the reference
//! renders and is kept deliberately.

use log::debug;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::algo::geometry::{distance, Point2};
use crate::config::ConfigError;

/// Fixed plot rectangle with its origin at (0, 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    /// 16:9 frame used by all renders
    fn default() -> Self {
        Self {
            width: 16.0,
            height: 9.0,
        }
    }
}

impl Viewport {
    /// Create a viewport, rejecting empty or non-finite dimensions
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        let viewport = Self { width, height };
        viewport.validate()?;
        Ok(viewport)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// The four corners used to size the enclosing radius
    pub fn corners(&self, mode: CornerMode) -> [Point2; 4] {
        let (w, h) = (self.width, self.height);
        match mode {
            CornerMode::Geometric => [
                Point2::new(0.0, 0.0),
                Point2::new(w, 0.0),
                Point2::new(0.0, h),
                Point2::new(w, h),
            ],
            CornerMode::Legacy => [
                Point2::new(0.0, 0.0),
                Point2::new(0.0, w),
                Point2::new(h, 0.0),
                Point2::new(h, w),
            ],
        }
    }

    /// True if `p` lies inside the closed viewport rectangle
    pub fn contains(&self, p: &Point2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// How the viewport corners are enumerated for the enclosing radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerMode {
    /// True rectangle corners (0,0), (w,0), (0,h), (w,h)
    #[default]
    Geometric,
    /// Corners (0,0), (0,w), (h,0), (h,w) with width and height swapped
    /// between axes, as the early star-trail scripts computed them
    Legacy,
}

/// Maximum distance from `pivot` to the viewport corners
pub fn enclosing_radius(viewport: &Viewport, pivot: &Point2, mode: CornerMode) -> f64 {
    viewport
        .corners(mode)
        .iter()
        .map(|corner| distance(pivot, corner))
        .fold(0.0, f64::max)
}

/// Draw a pivot uniformly inside the viewport
pub fn sample_pivot<R: Rng + ?Sized>(viewport: &Viewport, rng: &mut R) -> Point2 {
    Point2::new(
        rng.gen_range(0.0..viewport.width),
        rng.gen_range(0.0..viewport.height),
    )
}

/// Draw a pivot and compute its enclosing radius
///
/// # Returns
/// * `(pivot, r_max)` - pivot inside the viewport and the radius reaching every corner
pub fn sample_pivot_and_radius<R: Rng + ?Sized>(
    viewport: &Viewport,
    mode: CornerMode,
    rng: &mut R,
) -> (Point2, f64) {
    let pivot = sample_pivot(viewport, rng);
    let r_max = enclosing_radius(viewport, &pivot, mode);
    debug!(
        "Pivot at ({:.4}, {:.4}), enclosing radius {:.4} ({:?} corners)",
        pivot.x, pivot.y, r_max, mode
    );
    (pivot, r_max)
}

/// Draw `n_stars` positions uniformly over the square `pivot ± r_max`
///
/// x and y are drawn independently, x first, for each star in turn.
pub fn sample_positions<R: Rng + ?Sized>(
    pivot: &Point2,
    r_max: f64,
    n_stars: usize,
    rng: &mut R,
) -> Vec<Point2> {
    let x_dist = Uniform::new_inclusive(pivot.x - r_max, pivot.x + r_max);
    let y_dist = Uniform::new_inclusive(pivot.y - r_max, pivot.y + r_max);

    (0..n_stars)
        .map(|_| {
            let x = x_dist.sample(rng);
            let y = y_dist.sample(rng);
            Point2::new(x, y)
        })
        .collect()
}
