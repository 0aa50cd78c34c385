//! Drawable star interface

/// A star as seen by the renderer
///
/// Positions are world coordinates. Trail index 0 is the first rotation step
/// after the initial position.
pub trait TrailSprite {
    /// Position before any rotation
    fn initial_position(&self) -> (f64, f64);

    /// Number of positions in the trail
    fn trail_len(&self) -> usize;

    /// Position at trail index `step`, or `None` past the end of the trail
    fn trail_point(&self, step: usize) -> Option<(f64, f64)>;

    /// Position after `step` rotation steps, where step 0 is the initial
    /// position and step `k > 0` matches trail index `k - 1`
    fn position_at(&self, step: usize) -> (f64, f64);

    /// Opacity in (0, 1)
    fn alpha(&self) -> f64;

    /// Relative marker size in (0, 1)
    fn size(&self) -> f64;

    /// RGB color with channels in [0, 1]
    fn color(&self) -> [f64; 3];
}

#[cfg(test)]
pub(crate) mod test_sprites {
    use super::TrailSprite;

    /// Minimal sprite for renderer tests
    #[derive(Debug, Clone)]
    pub struct DotSprite {
        pub start: (f64, f64),
        pub trail: Vec<(f64, f64)>,
        pub alpha: f64,
        pub size: f64,
        pub color: [f64; 3],
    }

    impl TrailSprite for DotSprite {
        fn initial_position(&self) -> (f64, f64) {
            self.start
        }

        fn trail_len(&self) -> usize {
            self.trail.len()
        }

        fn trail_point(&self, step: usize) -> Option<(f64, f64)> {
            self.trail.get(step).copied()
        }

        fn position_at(&self, step: usize) -> (f64, f64) {
            match step.checked_sub(1) {
                None => self.start,
                Some(i) => self.trail.get(i).copied().unwrap_or(self.start),
            }
        }

        fn alpha(&self) -> f64 {
            self.alpha
        }

        fn size(&self) -> f64 {
            self.size
        }

        fn color(&self) -> [f64; 3] {
            self.color
        }
    }
}
