//! Raster rendering of star trails.
//!
//! This crate turns star trail geometry into pictures: a preview of the
//! initial field, a single long-exposure composite, and per-step frame
//! sequences written as PNG files or assembled into an animated GIF.
//!
//! It knows nothing about how stars are generated. Anything implementing
//! [`TrailSprite`] can be drawn: an initial position, an ordered trail of
//! positions, and an opacity, size and color.
//!
//! # Coordinates
//! Stars live in world units on a `width x height` viewport with the origin at
//! the lower-left corner and y pointing up, as on a plot. [`Canvas`] maps the
//! viewport onto an image at a fixed number of pixels per world unit and flips
//! the y axis.
//!
//! # Modules
//!
//! ## Canvas (`canvas`)
//! Background fill, world-to-pixel mapping and alpha-blended round markers.
//!
//! ## Scene rendering (`scene`)
//! - **Initial preview**: star positions before rotation plus the pivot marker
//! - **Composite**: every trail point of every star in one image
//! - **Frames**: one image per rotation step, either accumulating trails or
//!   showing only the current positions
//!
//! ## Frame sinks (`sink`)
//! Destinations for frame sequences: numbered PNG files, an animated GIF, or
//! both at once.
//!
//! ## Output naming (`naming`)
//! Date-stamped output directories and file names.
//!
//! # Usage
//! ```rust,ignore
//! use startrail_viz::{render_composite, RenderOptions};
//!
//! let options = RenderOptions::default();
//! let image = render_composite(16.0, 9.0, &stars, &options)?;
//! image.save("Star_Trails.png")?;
//! ```

use thiserror::Error;

/// Error types for rendering operations.
#[derive(Debug, Error)]
pub enum VizError {
    /// Image encoding or decoding failure.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem failure while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An animation was finished without receiving any frames.
    #[error("Animation has no frames")]
    EmptyAnimation,

    /// A frame arrived after the animation was finalized.
    #[error("Animation already finished")]
    AnimationFinished,

    /// A color string could not be parsed.
    #[error("Invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    /// Pixel scale or viewport produced an unusable image size.
    #[error("Invalid resolution: {0} pixels per unit")]
    InvalidResolution(f64),
}

/// Standard Result type for all rendering operations.
pub type Result<T> = std::result::Result<T, VizError>;

pub mod canvas;
pub mod color;
pub mod naming;
pub mod scene;
pub mod sink;
pub mod sprite;

pub use canvas::Canvas;
pub use color::{parse_hex_color, BACKGROUND_COLOR};
pub use naming::OutputLayout;
pub use scene::{
    frame_count, render_composite, render_frames, render_initial_positions, AlphaMode, FrameMode,
    RenderOptions,
};
pub use sink::{FrameSink, GifSink, PngSequenceSink};
pub use sprite::TrailSprite;
