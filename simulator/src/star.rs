//! Stars and the star field
//!
//! A [`StarField`] owns everything a render needs: the viewport, the pivot,
//! the enclosing radius, the rotation schedule and one [`Star`] per star.
//! All of it is computed once at construction and is read-only afterwards.
//!
//! Randomness flows from a single caller-supplied generator. The pivot and
//! the initial positions are drawn from it in sequence. Attributes are drawn
//! from an independent `StdRng` per star, seeded from a base value taken
//! from that same generator plus the star index, so stars can be built in
//! parallel and a seed still reproduces the whole field.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::BetaError;
use rayon::prelude::*;
use startrail_viz::TrailSprite;
use thiserror::Error;

use crate::algo::geometry::Point2;
use crate::algo::polar::{to_polar, PolarCoord};
use crate::algo::rotation::{build_trail, position_at_step, RotationSchedule};
use crate::attributes::{AttributeSampler, Rgb, StarAttributes};
use crate::config::{ConfigError, TrailConfig};
use crate::field::{sample_pivot_and_radius, sample_positions, CornerMode, Viewport};

/// Failures while building a star field
#[derive(Error, Debug)]
pub enum StarFieldError {
    #[error("Invalid input: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid attribute distribution: {0}")]
    Distribution(#[from] BetaError),
}

/// A single star: fixed geometry, precomputed trail and visual attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    index: usize,
    initial_position: Point2,
    pivot: Point2,
    polar: PolarCoord,
    schedule: RotationSchedule,
    trail: Vec<Point2>,
    attributes: StarAttributes,
}

impl Star {
    /// Build a star from its initial position, computing polar form and trail
    pub fn new(
        index: usize,
        initial_position: Point2,
        pivot: &Point2,
        schedule: &RotationSchedule,
        attributes: StarAttributes,
    ) -> Self {
        let polar = to_polar(&initial_position, pivot);
        let trail = build_trail(pivot, &polar, schedule);
        Self {
            index,
            initial_position,
            pivot: *pivot,
            polar,
            schedule: *schedule,
            trail,
            attributes,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn initial_position(&self) -> Point2 {
        self.initial_position
    }

    /// Distance from the pivot, constant under rotation
    pub fn radius(&self) -> f64 {
        self.polar.radius
    }

    /// Phase angle about the pivot in radians, in (-π, π]
    pub fn initial_angle(&self) -> f64 {
        self.polar.angle
    }

    pub fn initial_angle_degrees(&self) -> f64 {
        self.polar.angle.to_degrees()
    }

    pub fn polar(&self) -> PolarCoord {
        self.polar
    }

    /// Positions at rotation steps `1..n_rotations`
    pub fn trail(&self) -> &[Point2] {
        &self.trail
    }

    /// Position after `step` rotation steps, for any step including 0
    pub fn position_at(&self, step: usize) -> Point2 {
        position_at_step(&self.pivot, &self.polar, &self.schedule, step)
    }

    pub fn attributes(&self) -> &StarAttributes {
        &self.attributes
    }

    pub fn alpha(&self) -> f64 {
        self.attributes.alpha
    }

    pub fn size(&self) -> f64 {
        self.attributes.size
    }

    pub fn color(&self) -> Rgb {
        self.attributes.color
    }
}

impl TrailSprite for Star {
    fn initial_position(&self) -> (f64, f64) {
        self.initial_position.as_tuple()
    }

    fn trail_len(&self) -> usize {
        self.trail.len()
    }

    fn trail_point(&self, step: usize) -> Option<(f64, f64)> {
        self.trail.get(step).map(Point2::as_tuple)
    }

    fn position_at(&self, step: usize) -> (f64, f64) {
        Star::position_at(self, step).as_tuple()
    }

    fn alpha(&self) -> f64 {
        self.attributes.alpha
    }

    fn size(&self) -> f64 {
        self.attributes.size
    }

    fn color(&self) -> [f64; 3] {
        self.attributes.color.as_array()
    }
}

/// A generated star field rotating about a single pivot
#[derive(Debug, Clone)]
pub struct StarField {
    viewport: Viewport,
    corner_mode: CornerMode,
    pivot: Point2,
    enclosing_radius: f64,
    schedule: RotationSchedule,
    stars: Vec<Star>,
}

impl StarField {
    /// Generate the field described by a validated config
    ///
    /// Uses `config.seed` when present and fresh entropy otherwise.
    pub fn generate(config: &TrailConfig) -> Result<Self, StarFieldError> {
        config.validate()?;
        let schedule = config.schedule()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self::sample(
            &config.viewport,
            config.corner_mode,
            schedule,
            config.n_stars,
            &mut rng,
        )
    }

    /// Sample a field of `n_stars` stars from `rng`
    ///
    /// `n_stars == 0` yields an empty field with a pivot and radius but no
    /// stars.
    pub fn sample<R: Rng + ?Sized>(
        viewport: &Viewport,
        corner_mode: CornerMode,
        schedule: RotationSchedule,
        n_stars: usize,
        rng: &mut R,
    ) -> Result<Self, StarFieldError> {
        viewport.validate()?;
        let sampler = AttributeSampler::new()?;

        let (pivot, enclosing_radius) = sample_pivot_and_radius(viewport, corner_mode, rng);
        let positions = sample_positions(&pivot, enclosing_radius, n_stars, rng);
        let attribute_seed: u64 = rng.gen();

        if schedule.is_degenerate() {
            warn!(
                "Rotation covers {} step(s) of {:.4} rad; trails will be empty",
                schedule.n_rotations(),
                schedule.delta_angle()
            );
        }

        let stars: Vec<Star> = positions
            .into_par_iter()
            .enumerate()
            .map(|(index, position)| {
                let mut star_rng = StdRng::seed_from_u64(attribute_seed.wrapping_add(index as u64));
                let attributes = sampler.sample(index, &mut star_rng);
                Star::new(index, position, &pivot, &schedule, attributes)
            })
            .collect();

        info!(
            "Generated {} stars about pivot ({:.3}, {:.3}), r_max {:.3}, {} trail steps each",
            stars.len(),
            pivot.x,
            pivot.y,
            enclosing_radius,
            schedule.trail_len()
        );
        debug!(
            "{} of {} stars drew vivid colors",
            stars
                .iter()
                .filter(|s| AttributeSampler::is_vivid(s.index()))
                .count(),
            stars.len()
        );

        Ok(Self {
            viewport: *viewport,
            corner_mode,
            pivot,
            enclosing_radius,
            schedule,
            stars,
        })
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn corner_mode(&self) -> CornerMode {
        self.corner_mode
    }

    pub fn pivot(&self) -> Point2 {
        self.pivot
    }

    pub fn enclosing_radius(&self) -> f64 {
        self.enclosing_radius
    }

    pub fn schedule(&self) -> &RotationSchedule {
        &self.schedule
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Length of every star's trail
    pub fn trail_len(&self) -> usize {
        self.schedule.trail_len()
    }

    /// Positions of all stars after `step` rotation steps
    ///
    /// This is the per-frame update used by animations. Step 0 gives the
    /// initial positions; any step may be requested, including ones past
    /// the end of the trails.
    pub fn positions_at(&self, step: usize) -> Vec<Point2> {
        self.stars.iter().map(|star| star.position_at(step)).collect()
    }
}
