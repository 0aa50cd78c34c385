//! Cartesian/polar conversion about an arbitrary pivot

use super::geometry::{distance, Point2};

/// Position of a point expressed relative to a pivot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarCoord {
    /// Distance from the pivot, always >= 0
    pub radius: f64,
    /// Signed phase angle in radians, in (-π, π]
    pub angle: f64,
}

/// Convert a position into radius and phase angle about `pivot`
///
/// Uses the two-argument arctangent so the quadrant is resolved from the
/// signs of both offsets and a zero y-offset is handled without division.
pub fn to_polar(position: &Point2, pivot: &Point2) -> PolarCoord {
    let (dx, dy) = position.offset_from(pivot);
    PolarCoord {
        radius: distance(pivot, position),
        angle: dy.atan2(dx),
    }
}

/// Reconstruct the Cartesian position of `coord` about `pivot`
pub fn from_polar(coord: &PolarCoord, pivot: &Point2) -> Point2 {
    let (sin, cos) = coord.angle.sin_cos();
    Point2::new(pivot.x + coord.radius * cos, pivot.y + coord.radius * sin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_axis_aligned_offsets() {
        let pivot = Point2::new(5.0, 5.0);

        let east = to_polar(&Point2::new(7.0, 5.0), &pivot);
        assert_relative_eq!(east.radius, 2.0);
        assert_relative_eq!(east.angle, 0.0);

        let north = to_polar(&Point2::new(5.0, 8.0), &pivot);
        assert_relative_eq!(north.radius, 3.0);
        assert_relative_eq!(north.angle, FRAC_PI_2);

        let west = to_polar(&Point2::new(1.0, 5.0), &pivot);
        assert_relative_eq!(west.radius, 4.0);
        assert_relative_eq!(west.angle, PI);

        let south = to_polar(&Point2::new(5.0, 4.0), &pivot);
        assert_relative_eq!(south.angle, -FRAC_PI_2);
    }

    #[test]
    fn test_quadrants_are_distinguished() {
        let pivot = Point2::ORIGIN;
        let q1 = to_polar(&Point2::new(1.0, 1.0), &pivot);
        let q3 = to_polar(&Point2::new(-1.0, -1.0), &pivot);

        // A single-argument arctangent of dy/dx would collapse these two
        assert_relative_eq!(q1.angle, PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(q3.angle, -3.0 * PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_random_points() {
        let mut rng = StdRng::seed_from_u64(7);
        let pivot = Point2::new(3.3, 6.1);

        for _ in 0..500 {
            let p = Point2::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0));
            let polar = to_polar(&p, &pivot);

            assert!(polar.radius >= 0.0);
            assert!(polar.angle > -PI && polar.angle <= PI);

            let back = from_polar(&polar, &pivot);
            assert_relative_eq!(back.x, p.x, epsilon = 1e-9);
            assert_relative_eq!(back.y, p.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_point_at_pivot() {
        let pivot = Point2::new(2.0, 2.0);
        let polar = to_polar(&pivot, &pivot);
        assert_eq!(polar.radius, 0.0);
        assert_eq!(polar.angle, 0.0);
    }
}
