//! World-space drawing surface
//!
//! Markers are rasterized with `tiny_skia` onto an opaque pixmap and copied
//! into an `RgbImage` when a frame is taken.

use image::{Rgb, RgbImage};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::color::unit_to_u8;
use crate::{Result, VizError};

/// An opaque drawing surface covering a `width x height` world viewport
///
/// World y points up; image rows count down from the top edge.
#[derive(Clone)]
pub struct Canvas {
    pixmap: Pixmap,
    world_height: f64,
    pixels_per_unit: f64,
}

impl Canvas {
    /// Create a canvas filled with `background`
    ///
    /// # Arguments
    /// * `world_width` - Viewport width in world units
    /// * `world_height` - Viewport height in world units
    /// * `pixels_per_unit` - Image pixels per world unit
    /// * `background` - Fill color
    pub fn new(
        world_width: f64,
        world_height: f64,
        pixels_per_unit: f64,
        background: [u8; 3],
    ) -> Result<Self> {
        if !(pixels_per_unit.is_finite() && pixels_per_unit > 0.0) {
            return Err(VizError::InvalidResolution(pixels_per_unit));
        }

        let width_px = (world_width * pixels_per_unit).round();
        let height_px = (world_height * pixels_per_unit).round();
        let max = u32::MAX as f64;
        if !(width_px >= 1.0 && height_px >= 1.0 && width_px <= max && height_px <= max) {
            return Err(VizError::InvalidResolution(pixels_per_unit));
        }

        let mut pixmap = Pixmap::new(width_px as u32, height_px as u32)
            .ok_or(VizError::InvalidResolution(pixels_per_unit))?;
        let [r, g, b] = background;
        pixmap.fill(Color::from_rgba8(r, g, b, 255));

        Ok(Self {
            pixmap,
            world_height,
            pixels_per_unit,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    /// Map world coordinates to continuous pixel coordinates
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.pixels_per_unit,
            (self.world_height - y) * self.pixels_per_unit,
        )
    }

    /// Draw an anti-aliased filled disc at world position (x, y)
    ///
    /// The disc is composited source-over with opacity `alpha`. Markers partly
    /// or entirely outside the canvas are clipped.
    pub fn stamp(&mut self, x: f64, y: f64, radius_px: f64, color: [f64; 3], alpha: f64) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha == 0.0 {
            return;
        }

        let (cx, cy) = self.to_pixel(x, y);
        // Non-finite centers and radii yield no path
        let Some(circle) = PathBuilder::from_circle(cx as f32, cy as f32, radius_px as f32) else {
            return;
        };

        let [r, g, b] = color.map(unit_to_u8);
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, unit_to_u8(alpha));
        paint.anti_alias = true;

        self.pixmap.fill_path(
            &circle,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Copy of the current contents as an RGB image
    pub fn to_image(&self) -> RgbImage {
        let mut image = RgbImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgb([c.red(), c.green(), c.blue()]);
        }
        image
    }

    pub fn into_image(self) -> RgbImage {
        self.to_image()
    }
}
