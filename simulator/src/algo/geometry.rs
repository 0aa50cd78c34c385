//! Planar points and distances
//!
//! All coordinates live in the viewport's world units with the origin at the
//! lower-left corner and y pointing up.

use serde::{Deserialize, Serialize};

/// A point in the 2-D viewport plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of this point relative to `origin`, returned as (dx, dy)
    pub fn offset_from(&self, origin: &Point2) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points
///
/// # Arguments
/// * `p1` - First point
/// * `p2` - Second point
///
/// # Returns
/// Non-negative distance `sqrt((x2-x1)^2 + (y2-y1)^2)`
pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    let (dx, dy) = p2.offset_from(p1);
    dx.hypot(dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_pythagorean_triple() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_relative_eq!(distance(&a, &b), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point2::new(-2.5, 7.25);
        let b = Point2::new(11.0, -1.5);
        assert_relative_eq!(distance(&a, &b), distance(&b, &a), epsilon = 1e-12);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Point2::new(8.0, 4.5);
        assert_eq!(distance(&p, &p), 0.0);
    }

    #[test]
    fn test_offset_from() {
        let pivot = Point2::new(1.0, 2.0);
        let p = Point2::new(4.0, 0.5);
        assert_eq!(p.offset_from(&pivot), (3.0, -1.5));
    }
}
