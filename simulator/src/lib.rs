//! Synthetic star trail simulation
//!
//! This crate places a random star field around a randomly chosen rotation
//! pivot, rotates it in fixed angular steps to produce each star's trail, and
//! samples per-star opacity, size and color so the field resembles a real
//! night sky. Rendering lives in the `startrail_viz` crate; the binaries in
//! this crate connect the two.

pub mod algo;
pub mod attributes;
pub mod config;
pub mod field;
pub mod shared_args;
pub mod star;
pub mod units;

// Re-exports for easier access
pub use algo::geometry::{distance, Point2};
pub use algo::polar::{from_polar, to_polar, PolarCoord};
pub use algo::rotation::{build_trail, position_at_step, RotationSchedule};
pub use attributes::{hsv_to_rgb, AttributeSampler, Hsv, Rgb, StarAttributes};
pub use config::{ConfigError, TrailConfig};
pub use field::{
    enclosing_radius, sample_pivot, sample_pivot_and_radius, sample_positions, CornerMode,
    Viewport,
};
pub use star::{Star, StarField, StarFieldError};
pub use units::{Angle, AngleExt};
