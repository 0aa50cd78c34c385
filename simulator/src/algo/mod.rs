//! Geometric algorithms behind the star trail simulation
//!
//! This module provides planar distances, polar conversion about a pivot and
//! the discrete rotation stepper that produces each star's trail.

pub mod geometry;
pub mod polar;
pub mod rotation;

pub use geometry::{distance, Point2};
pub use polar::{from_polar, to_polar, PolarCoord};
pub use rotation::{build_trail, position_at_step, RotationSchedule};
