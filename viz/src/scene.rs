//! Rendering of whole star fields
//!
//! Three products are supported, mirroring the classic star-trail workflow:
//! a preview of the initial field with its pivot, a single long-exposure
//! composite of every trail, and one frame per rotation step.

use image::RgbImage;
use log::{debug, info, warn};

use crate::canvas::Canvas;
use crate::color::BACKGROUND_COLOR;
use crate::sink::FrameSink;
use crate::sprite::TrailSprite;
use crate::Result;

/// Marker color for the rotation pivot in the preview
const PIVOT_COLOR: [f64; 3] = [1.0, 0.5, 0.05];
/// Marker color for stars in the preview
const PREVIEW_STAR_COLOR: [f64; 3] = [0.12, 0.47, 0.71];

/// Which opacity each star is drawn with
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlphaMode {
    /// Each star's own sampled alpha
    Sampled,
    /// The same alpha for every star
    Fixed(f64),
}

/// How consecutive frames relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMode {
    /// Each frame adds the current step on top of all previous ones, so trails grow
    Trails,
    /// Each frame shows only the current positions, so stars move
    Movement,
}

/// Options shared by all renderers
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Image pixels per world unit
    pub pixels_per_unit: f64,
    /// Sky color
    pub background: [u8; 3],
    /// Marker radius in pixels for a star of size 1.0
    pub marker_scale: f64,
    /// Smallest marker radius in pixels
    pub min_marker_radius: f64,
    pub alpha_mode: AlphaMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pixels_per_unit: 60.0,
            background: BACKGROUND_COLOR,
            marker_scale: 2.0,
            min_marker_radius: 0.5,
            alpha_mode: AlphaMode::Sampled,
        }
    }
}

impl RenderOptions {
    fn marker_radius<S: TrailSprite>(&self, star: &S) -> f64 {
        (star.size() * self.marker_scale).max(self.min_marker_radius)
    }

    fn alpha<S: TrailSprite>(&self, star: &S) -> f64 {
        match self.alpha_mode {
            AlphaMode::Sampled => star.alpha(),
            AlphaMode::Fixed(alpha) => alpha,
        }
    }

    fn canvas(&self, width: f64, height: f64) -> Result<Canvas> {
        Canvas::new(width, height, self.pixels_per_unit, self.background)
    }
}

fn stamp_trail_step<S: TrailSprite>(
    canvas: &mut Canvas,
    stars: &[S],
    step: usize,
    options: &RenderOptions,
) {
    for star in stars {
        if let Some((x, y)) = star.trail_point(step) {
            canvas.stamp(x, y, options.marker_radius(star), star.color(), options.alpha(star));
        }
    }
}

fn stamp_positions<S: TrailSprite>(
    canvas: &mut Canvas,
    stars: &[S],
    step: usize,
    options: &RenderOptions,
) {
    for star in stars {
        let (x, y) = star.position_at(step);
        canvas.stamp(x, y, options.marker_radius(star), star.color(), options.alpha(star));
    }
}

/// Number of frames [`render_frames`] produces for `stars` in `mode`
///
/// Trails mode draws one frame per trail step. Movement mode also draws the
/// unrotated field first, so it produces one frame per rotation step
/// including step 0. Both are 0 when no star has a trail.
pub fn frame_count<S: TrailSprite>(stars: &[S], mode: FrameMode) -> usize {
    let trail_len = stars.iter().map(TrailSprite::trail_len).max().unwrap_or(0);
    match (mode, trail_len) {
        (_, 0) => 0,
        (FrameMode::Trails, n) => n,
        (FrameMode::Movement, n) => n + 1,
    }
}

/// Render the unrotated field with the pivot marked
pub fn render_initial_positions<S: TrailSprite>(
    width: f64,
    height: f64,
    pivot: (f64, f64),
    stars: &[S],
    options: &RenderOptions,
) -> Result<RgbImage> {
    let mut canvas = options.canvas(width, height)?;
    let star_radius = options.marker_scale.max(options.min_marker_radius) * 1.5;

    for star in stars {
        let (x, y) = star.initial_position();
        canvas.stamp(x, y, star_radius, PREVIEW_STAR_COLOR, 1.0);
    }
    canvas.stamp(pivot.0, pivot.1, star_radius * 2.0, PIVOT_COLOR, 1.0);

    debug!("Rendered initial positions of {} stars", stars.len());
    Ok(canvas.into_image())
}

/// Render every trail of every star into a single long-exposure image
pub fn render_composite<S: TrailSprite>(
    width: f64,
    height: f64,
    stars: &[S],
    options: &RenderOptions,
) -> Result<RgbImage> {
    let mut canvas = options.canvas(width, height)?;
    let mut points = 0usize;

    for star in stars {
        let radius = options.marker_radius(star);
        let alpha = options.alpha(star);
        let color = star.color();
        for step in 0..star.trail_len() {
            if let Some((x, y)) = star.trail_point(step) {
                canvas.stamp(x, y, radius, color, alpha);
                points += 1;
            }
        }
    }

    if points == 0 {
        warn!("Composite has no trail points; image contains only background");
    }
    info!(
        "Rendered composite of {} stars ({} trail points)",
        stars.len(),
        points
    );
    Ok(canvas.into_image())
}

/// Render one frame per step and hand each to `sink`
///
/// In [`FrameMode::Trails`] frame `i` adds trail step `i` on top of all
/// earlier frames. In [`FrameMode::Movement`] frame `i` shows every star at
/// rotation step `i`, starting from the initial positions. See
/// [`frame_count`] for the number of frames.
///
/// `on_frame` is called after each frame is written with the zero-based frame
/// index, for progress reporting. Returns the number of frames written.
pub fn render_frames<S, K, F>(
    width: f64,
    height: f64,
    stars: &[S],
    mode: FrameMode,
    options: &RenderOptions,
    sink: &mut K,
    mut on_frame: F,
) -> Result<usize>
where
    S: TrailSprite,
    K: FrameSink + ?Sized,
    F: FnMut(usize),
{
    let n_frames = frame_count(stars, mode);
    if n_frames == 0 {
        warn!("No trail steps to render; rotation is smaller than one step or field is empty");
        return Ok(0);
    }

    let mut accumulated = options.canvas(width, height)?;
    for step in 0..n_frames {
        let frame = match mode {
            FrameMode::Trails => {
                stamp_trail_step(&mut accumulated, stars, step, options);
                accumulated.to_image()
            }
            FrameMode::Movement => {
                let mut canvas = options.canvas(width, height)?;
                stamp_positions(&mut canvas, stars, step, options);
                canvas.into_image()
            }
        };
        sink.write_frame(step, &frame)?;
        on_frame(step);
    }

    debug!("Rendered {} {:?} frames", n_frames, mode);
    Ok(n_frames)
}
