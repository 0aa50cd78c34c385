//! Type-safe angles
//!
//! Angles enter the program in degrees (command line, config files) and the
//! geometry works in radians. The `uom` angle type carries the value between
//! the two so a conversion is never applied twice.

use uom::si::angle::{degree, radian};

/// Type alias for plane angles
pub type Angle = uom::si::f64::Angle;

/// Extension trait for angle conversions
pub trait AngleExt {
    /// Create angle from degrees
    fn from_degrees(degrees: f64) -> Self;

    /// Get angle in degrees
    fn as_degrees(&self) -> f64;

    /// Create angle from radians
    fn from_radians(radians: f64) -> Self;

    /// Get angle in radians
    fn as_radians(&self) -> f64;
}

impl AngleExt for Angle {
    fn from_degrees(degrees: f64) -> Self {
        Angle::new::<degree>(degrees)
    }

    fn as_degrees(&self) -> f64 {
        self.get::<degree>()
    }

    fn from_radians(radians: f64) -> Self {
        Angle::new::<radian>(radians)
    }

    fn as_radians(&self) -> f64 {
        self.get::<radian>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_angle_conversions() {
        let half_turn = Angle::from_degrees(180.0);
        assert_relative_eq!(half_turn.as_radians(), PI, epsilon = 1e-12);

        let step = Angle::from_degrees(0.1);
        assert_relative_eq!(step.as_radians(), 0.1f64.to_radians(), epsilon = 1e-15);

        let right = Angle::from_radians(PI / 2.0);
        assert_relative_eq!(right.as_degrees(), 90.0, epsilon = 1e-10);
    }

    #[test]
    fn test_angle_math() {
        let a = Angle::from_degrees(30.0);
        let b = Angle::from_degrees(60.0);
        assert_relative_eq!((a + b).as_degrees(), 90.0, epsilon = 1e-10);
        assert_relative_eq!((b - a).as_degrees(), 30.0, epsilon = 1e-10);
        assert!(a < b);
    }
}
