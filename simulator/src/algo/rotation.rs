//! Discrete rotation of stars about the pivot
//!
//! A star keeps its radius for the whole run; only its phase advances by a
//! fixed `delta_angle` per step. Step `i` sits at `initial_angle + i * delta_angle`.
//! Trails hold steps `1..n_rotations`, so a trail has `n_rotations - 1`
//! entries and step 0 (the initial position) is not part of it.

use crate::config::ConfigError;

use super::geometry::Point2;
use super::polar::{from_polar, PolarCoord};

/// Ratios this close to an integer are treated as that integer when counting steps
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Largest step count a schedule may hold; every star stores one trail point per step
pub const MAX_ROTATION_STEPS: usize = 1_000_000;

/// Number and size of the angular steps making up a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationSchedule {
    /// Angular increment per step in radians
    delta_angle: f64,
    /// `floor(rotation_angle / delta_angle)`, snapped to the nearest integer
    /// when the ratio is within a relative `1e-9` of it
    n_rotations: usize,
}

impl RotationSchedule {
    /// Build a schedule covering `rotation_angle` in steps of `delta_angle` (both radians)
    ///
    /// A rotation smaller than one step is not an error: the schedule simply
    /// has no trail steps.
    ///
    /// # Errors
    /// * `NonPositiveRotation` if `rotation_angle` is not a positive finite number
    /// * `NonPositiveDeltaAngle` if `delta_angle` is not a positive finite number
    /// * `TooManySteps` if the step count exceeds [`MAX_ROTATION_STEPS`]
    pub fn new(rotation_angle: f64, delta_angle: f64) -> Result<Self, ConfigError> {
        if !(rotation_angle.is_finite() && rotation_angle > 0.0) {
            return Err(ConfigError::NonPositiveRotation(rotation_angle));
        }
        if !(delta_angle.is_finite() && delta_angle > 0.0) {
            return Err(ConfigError::NonPositiveDeltaAngle(delta_angle));
        }

        let ratio = rotation_angle / delta_angle;
        let nearest = ratio.round();
        let steps = if (ratio - nearest).abs() < STEP_COUNT_TOLERANCE * nearest.max(1.0) {
            nearest
        } else {
            ratio.floor()
        };
        if !(steps <= MAX_ROTATION_STEPS as f64) {
            return Err(ConfigError::TooManySteps(ratio));
        }

        Ok(Self {
            delta_angle,
            n_rotations: steps as usize,
        })
    }

    pub fn delta_angle(&self) -> f64 {
        self.delta_angle
    }

    pub fn n_rotations(&self) -> usize {
        self.n_rotations
    }

    /// Length of every trail produced under this schedule
    pub fn trail_len(&self) -> usize {
        self.n_rotations.saturating_sub(1)
    }

    /// True when the rotation is too small to produce a single trail step
    pub fn is_degenerate(&self) -> bool {
        self.trail_len() == 0
    }

    /// Phase offset accumulated after `step` steps
    pub fn angle_offset(&self, step: usize) -> f64 {
        step as f64 * self.delta_angle
    }
}

/// Position of a star after `step` rotation steps
///
/// Step 0 reproduces the star's initial position.
pub fn position_at_step(
    pivot: &Point2,
    polar: &PolarCoord,
    schedule: &RotationSchedule,
    step: usize,
) -> Point2 {
    let rotated = PolarCoord {
        radius: polar.radius,
        angle: polar.angle + schedule.angle_offset(step),
    };
    from_polar(&rotated, pivot)
}

/// Build the trail of a single star: its positions at steps `1..n_rotations`
pub fn build_trail(pivot: &Point2, polar: &PolarCoord, schedule: &RotationSchedule) -> Vec<Point2> {
    (1..schedule.n_rotations())
        .map(|step| position_at_step(pivot, polar, schedule, step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::geometry::distance;
    use crate::algo::polar::to_polar;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_schedule_counts_whole_steps() {
        let schedule = RotationSchedule::new(TAU, FRAC_PI_2).unwrap();
        assert_eq!(schedule.n_rotations(), 4);
        assert_eq!(schedule.trail_len(), 3);

        let partial = RotationSchedule::new(1.0, 0.3).unwrap();
        assert_eq!(partial.n_rotations(), 3);
    }

    #[test]
    fn test_schedule_degree_ratios_do_not_lose_a_step() {
        // 30 degrees in 0.1 degree steps is 299.99999... in floating point
        let schedule = RotationSchedule::new(30f64.to_radians(), 0.1f64.to_radians()).unwrap();
        assert_eq!(schedule.n_rotations(), 300);
    }

    #[test]
    fn test_schedule_rejects_invalid_angles() {
        assert!(matches!(
            RotationSchedule::new(0.0, 0.1),
            Err(ConfigError::NonPositiveRotation(_))
        ));
        assert!(matches!(
            RotationSchedule::new(-1.0, 0.1),
            Err(ConfigError::NonPositiveRotation(_))
        ));
        assert!(matches!(
            RotationSchedule::new(1.0, 0.0),
            Err(ConfigError::NonPositiveDeltaAngle(_))
        ));
        assert!(matches!(
            RotationSchedule::new(1.0, f64::NAN),
            Err(ConfigError::NonPositiveDeltaAngle(_))
        ));
    }

    #[test]
    fn test_schedule_rejects_huge_step_counts() {
        assert!(matches!(
            RotationSchedule::new(1e300, 1e-300),
            Err(ConfigError::TooManySteps(r)) if r.is_infinite()
        ));
        assert!(matches!(
            RotationSchedule::new(TAU, TAU / 2e6),
            Err(ConfigError::TooManySteps(_))
        ));

        let at_cap = RotationSchedule::new(MAX_ROTATION_STEPS as f64, 1.0).unwrap();
        assert_eq!(at_cap.n_rotations(), MAX_ROTATION_STEPS);
    }

    #[test]
    fn test_degenerate_schedule_gives_empty_trail() {
        let schedule = RotationSchedule::new(0.05, 0.1).unwrap();
        assert_eq!(schedule.n_rotations(), 0);
        assert!(schedule.is_degenerate());

        let one_step = RotationSchedule::new(0.1, 0.1).unwrap();
        assert_eq!(one_step.n_rotations(), 1);
        assert!(one_step.is_degenerate());

        let pivot = Point2::new(1.0, 1.0);
        let polar = PolarCoord {
            radius: 2.0,
            angle: 0.3,
        };
        assert!(build_trail(&pivot, &polar, &schedule).is_empty());
        assert!(build_trail(&pivot, &polar, &one_step).is_empty());
    }

    #[test]
    fn test_quarter_turn_trail() {
        let pivot = Point2::new(8.0, 4.5);
        let start = Point2::new(10.0, 4.5);
        let polar = to_polar(&start, &pivot);
        let schedule = RotationSchedule::new(TAU, FRAC_PI_2).unwrap();

        let trail = build_trail(&pivot, &polar, &schedule);
        assert_eq!(trail.len(), 3);

        let expected = [(8.0, 6.5), (6.0, 4.5), (8.0, 2.5)];
        for (point, (ex, ey)) in trail.iter().zip(expected) {
            assert_relative_eq!(point.x, ex, epsilon = 1e-12);
            assert_relative_eq!(point.y, ey, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_trail_preserves_radius_and_step() {
        let pivot = Point2::new(3.0, 7.0);
        let start = Point2::new(-4.0, 1.0);
        let polar = to_polar(&start, &pivot);
        let delta = 1.5f64.to_radians();
        let schedule = RotationSchedule::new(PI, delta).unwrap();

        let trail = build_trail(&pivot, &polar, &schedule);
        assert_eq!(trail.len(), schedule.trail_len());

        for point in &trail {
            assert_relative_eq!(distance(point, &pivot), polar.radius, epsilon = 1e-9);
        }

        for pair in trail.windows(2) {
            let a = to_polar(&pair[0], &pivot).angle;
            let b = to_polar(&pair[1], &pivot).angle;
            let step = (b - a).rem_euclid(TAU);
            assert_relative_eq!(step, delta, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_step_zero_is_initial_position() {
        let pivot = Point2::new(0.5, 0.25);
        let start = Point2::new(-3.0, 2.0);
        let polar = to_polar(&start, &pivot);
        let schedule = RotationSchedule::new(1.0, 0.01).unwrap();

        let p0 = position_at_step(&pivot, &polar, &schedule, 0);
        assert_relative_eq!(p0.x, start.x, epsilon = 1e-12);
        assert_relative_eq!(p0.y, start.y, epsilon = 1e-12);
    }
}
