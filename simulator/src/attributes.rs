//! Visual attributes of stars: opacity, size and color
//!
//! Attributes are drawn from shaped distributions so the field reads like a
//! real night sky:
//!
//! - **Alpha**: `1 - Beta(2, 15)`, so most stars are nearly opaque and a few are faint
//! - **Size**: `Beta(2, 4)`, varied but mostly small
//! - **Color**: drawn in HSV. Every 50th star (index 0, 50, 100, ...) is vivid with hue,
//!   saturation and value all uniform on [0, 1]. All other stars keep a uniform hue
//!   but take saturation `Beta(1, 15)` and value `1 - Beta(1, 15)`, which keeps them
//!   close to white.
//!
//! Attributes do not depend on geometry and are joined with trails only when
//! rendering.

use rand::Rng;
use rand_distr::{Beta, BetaError, Distribution};
use serde::{Deserialize, Serialize};

/// Beta shape parameters for the opacity draw (`alpha = 1 - Beta`)
pub const ALPHA_BETA_PARAMS: (f64, f64) = (2.0, 15.0);
/// Beta shape parameters for the size draw
pub const SIZE_BETA_PARAMS: (f64, f64) = (2.0, 4.0);
/// Beta shape parameters for saturation and inverted value of pale stars
pub const PALE_BETA_PARAMS: (f64, f64) = (1.0, 15.0);
/// One star in this many, by index, gets a vivid color
pub const VIVID_INTERVAL: usize = 50;

/// Hue, saturation, value triple, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Red, green, blue triple, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Quantize to 8-bit channels, clamping out-of-range input
    pub fn to_rgb8(&self) -> [u8; 3] {
        self.as_array()
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

/// Standard HSV to RGB conversion
///
/// Hue wraps at 1.0: the sextant index is taken modulo 6, so `h = 1.0`
/// maps to the same color as `h = 0.0`.
pub fn hsv_to_rgb(hsv: &Hsv) -> Rgb {
    let Hsv { h, s, v } = *hsv;
    if s == 0.0 {
        return Rgb::new(v, v, v);
    }

    let scaled = h * 6.0;
    let sextant = scaled.floor();
    let f = scaled - sextant;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sextant as i64).rem_euclid(6) {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}

/// Opacity, size and color of one star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarAttributes {
    /// Opacity in (0, 1)
    pub alpha: f64,
    /// Relative marker size in (0, 1)
    pub size: f64,
    /// Color as drawn
    pub hsv: Hsv,
    /// Color converted for rendering
    pub color: Rgb,
}

/// Sampler holding the fixed attribute distributions
#[derive(Debug, Clone, Copy)]
pub struct AttributeSampler {
    alpha_dist: Beta<f64>,
    size_dist: Beta<f64>,
    pale_dist: Beta<f64>,
}

impl AttributeSampler {
    pub fn new() -> Result<Self, BetaError> {
        Ok(Self {
            alpha_dist: Beta::new(ALPHA_BETA_PARAMS.0, ALPHA_BETA_PARAMS.1)?,
            size_dist: Beta::new(SIZE_BETA_PARAMS.0, SIZE_BETA_PARAMS.1)?,
            pale_dist: Beta::new(PALE_BETA_PARAMS.0, PALE_BETA_PARAMS.1)?,
        })
    }

    /// Whether the star at `index` takes the vivid color branch
    pub fn is_vivid(index: usize) -> bool {
        index % VIVID_INTERVAL == 0
    }

    pub fn sample_alpha<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        1.0 - self.alpha_dist.sample(rng)
    }

    pub fn sample_size<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.size_dist.sample(rng)
    }

    /// Draw the HSV color of the star at `index`
    pub fn sample_hsv<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Hsv {
        let h = rng.gen::<f64>();
        if Self::is_vivid(index) {
            let s = rng.gen::<f64>();
            let v = rng.gen::<f64>();
            Hsv { h, s, v }
        } else {
            let s = self.pale_dist.sample(rng);
            let v = 1.0 - self.pale_dist.sample(rng);
            Hsv { h, s, v }
        }
    }

    /// Draw all attributes of the star at `index`: alpha, then size, then color
    pub fn sample<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> StarAttributes {
        let alpha = self.sample_alpha(rng);
        let size = self.sample_size(rng);
        let hsv = self.sample_hsv(index, rng);
        StarAttributes {
            alpha,
            size,
            hsv,
            color: hsv_to_rgb(&hsv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_rgb(actual: Rgb, expected: (f64, f64, f64)) {
        assert_relative_eq!(actual.r, expected.0, epsilon = 1e-12);
        assert_relative_eq!(actual.g, expected.1, epsilon = 1e-12);
        assert_relative_eq!(actual.b, expected.2, epsilon = 1e-12);
    }

    #[test]
    fn test_hsv_primaries() {
        let rgb = |h, s, v| hsv_to_rgb(&Hsv { h, s, v });
        assert_rgb(rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_rgb(rgb(1.0 / 3.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_rgb(rgb(2.0 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0));
        assert_rgb(rgb(1.0 / 6.0, 1.0, 1.0), (1.0, 1.0, 0.0));
        assert_rgb(rgb(0.5, 1.0, 1.0), (0.0, 1.0, 1.0));
        assert_rgb(rgb(5.0 / 6.0, 1.0, 1.0), (1.0, 0.0, 1.0));
    }

    #[test]
    fn test_hsv_grey_and_wrap() {
        assert_rgb(hsv_to_rgb(&Hsv { h: 0.7, s: 0.0, v: 0.4 }), (0.4, 0.4, 0.4));
        assert_eq!(
            hsv_to_rgb(&Hsv { h: 1.0, s: 0.5, v: 0.8 }),
            hsv_to_rgb(&Hsv { h: 0.0, s: 0.5, v: 0.8 })
        );
    }

    #[test]
    fn test_hsv_half_saturation() {
        // h = 0.25 is halfway between yellow and green
        assert_rgb(
            hsv_to_rgb(&Hsv { h: 0.25, s: 0.5, v: 1.0 }),
            (0.75, 1.0, 0.5),
        );
    }

    #[test]
    fn test_rgb8_quantization() {
        assert_eq!(Rgb::new(1.0, 0.0, 0.5).to_rgb8(), [255, 0, 128]);
        assert_eq!(Rgb::new(1.2, -0.1, 0.0).to_rgb8(), [255, 0, 0]);
    }

    #[test]
    fn test_vivid_index_rule() {
        assert!(AttributeSampler::is_vivid(0));
        assert!(AttributeSampler::is_vivid(50));
        assert!(AttributeSampler::is_vivid(100));
        assert!(!AttributeSampler::is_vivid(1));
        assert!(!AttributeSampler::is_vivid(49));
        assert!(!AttributeSampler::is_vivid(51));
    }

    #[test]
    fn test_alpha_and_size_strictly_inside_unit_interval() {
        let sampler = AttributeSampler::new().unwrap();
        let mut rng = StdRng::seed_from_u64(2024);

        for index in 0..10_000 {
            let attrs = sampler.sample(index, &mut rng);
            assert!(attrs.alpha > 0.0 && attrs.alpha < 1.0, "alpha {}", attrs.alpha);
            assert!(attrs.size > 0.0 && attrs.size < 1.0, "size {}", attrs.size);
            for c in attrs.color.as_array() {
                assert!((0.0..=1.0).contains(&c), "channel {}", c);
            }
        }
    }

    #[test]
    fn test_distribution_means() {
        let sampler = AttributeSampler::new().unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let n = 20_000;

        let (mut alpha_sum, mut size_sum) = (0.0, 0.0);
        for _ in 0..n {
            alpha_sum += sampler.sample_alpha(&mut rng);
            size_sum += sampler.sample_size(&mut rng);
        }

        // E[1 - Beta(2, 15)] = 15/17, E[Beta(2, 4)] = 1/3
        assert_relative_eq!(alpha_sum / n as f64, 15.0 / 17.0, epsilon = 0.01);
        assert_relative_eq!(size_sum / n as f64, 1.0 / 3.0, epsilon = 0.01);
    }

    #[test]
    fn test_vivid_stars_are_more_saturated() {
        let sampler = AttributeSampler::new().unwrap();
        let mut rng = StdRng::seed_from_u64(31);

        let (mut vivid, mut pale) = (Vec::new(), Vec::new());
        for index in 0..50_000 {
            let hsv = sampler.sample_hsv(index, &mut rng);
            if AttributeSampler::is_vivid(index) {
                vivid.push(hsv.s);
            } else {
                pale.push(hsv.s);
            }
        }

        let mean = |xs: &[f64]| xs.iter().sum::<f64>() / xs.len() as f64;
        assert_eq!(vivid.len(), 1000);

        // Uniform saturation averages 0.5, Beta(1, 15) averages 1/16
        assert!(mean(&vivid) > 0.4, "vivid mean {}", mean(&vivid));
        assert!(mean(&pale) < 0.1, "pale mean {}", mean(&pale));
        assert!(mean(&vivid) > 4.0 * mean(&pale));
    }

    #[test]
    fn test_pale_stars_are_bright() {
        let sampler = AttributeSampler::new().unwrap();
        let mut rng = StdRng::seed_from_u64(8);

        let values: Vec<f64> = (1..5_000)
            .filter(|i| !AttributeSampler::is_vivid(*i))
            .map(|i| sampler.sample_hsv(i, &mut rng).v)
            .collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert!(mean > 0.9, "pale value mean {}", mean);
    }
}
