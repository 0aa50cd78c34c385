//! Frame destinations
//!
//! A [`FrameSink`] receives rendered frames in order. Sinks can be combined
//! with a tuple, so a single render pass can write numbered PNG frames and
//! assemble the GIF at the same time.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, RgbImage};
use log::{debug, info};

use crate::{Result, VizError};

/// Receiver of an ordered frame sequence
pub trait FrameSink {
    /// Accept frame `index` (zero-based, increasing)
    fn write_frame(&mut self, index: usize, frame: &RgbImage) -> Result<()>;

    /// Flush any buffered output once all frames have been written
    fn finish(&mut self) -> Result<()>;
}

/// Writes each frame as `Star_Trails_NNNN.png` into a directory
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    written: usize,
}

impl PngSequenceSink {
    /// Create the sink, creating `dir` if it does not exist
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, written: 0 })
    }

    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("Star_Trails_{index:04}.png"))
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn write_frame(&mut self, index: usize, frame: &RgbImage) -> Result<()> {
        let path = self.frame_path(index);
        frame.save(&path)?;
        self.written += 1;
        debug!("Wrote frame {}", path.display());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        info!("Wrote {} PNG frames to {}", self.written, self.dir.display());
        Ok(())
    }
}

/// Encoded GIF bytes shared between the encoder and its sink
///
/// The encoder only writes the GIF trailer when dropped, so it writes into
/// memory and the sink moves the finished bytes to disk itself.
#[derive(Clone, Default)]
struct GifBuffer(Rc<RefCell<Vec<u8>>>);

impl GifBuffer {
    fn take(&self) -> Vec<u8> {
        self.0.take()
    }
}

impl Write for GifBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Streams frames into an infinitely looping animated GIF
///
/// Frames are encoded as they arrive; the file is written by
/// [`FrameSink::finish`].
pub struct GifSink {
    path: PathBuf,
    buffer: GifBuffer,
    encoder: Option<GifEncoder<GifBuffer>>,
    delay: Delay,
    written: usize,
}

impl GifSink {
    /// Frame rate used by the animated renders
    pub const DEFAULT_FPS: u32 = 20;

    /// Create the GIF at `path`, creating parent directories as needed
    ///
    /// The file is created up front so an unwritable path fails here rather
    /// than after every frame has been rendered.
    pub fn new(path: impl AsRef<Path>, fps: u32) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        File::create(&path)?;

        let buffer = GifBuffer::default();
        let mut encoder = GifEncoder::new(buffer.clone());
        encoder.set_repeat(Repeat::Infinite)?;

        Ok(Self {
            path,
            buffer,
            encoder: Some(encoder),
            delay: Delay::from_numer_denom_ms(1000, fps.max(1)),
            written: 0,
        })
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

impl FrameSink for GifSink {
    fn write_frame(&mut self, _index: usize, frame: &RgbImage) -> Result<()> {
        let encoder = self.encoder.as_mut().ok_or(VizError::AnimationFinished)?;
        let rgba = DynamicImage::ImageRgb8(frame.clone()).to_rgba8();
        encoder.encode_frame(Frame::from_parts(rgba, 0, 0, self.delay))?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.written == 0 {
            return Err(VizError::EmptyAnimation);
        }
        let Some(encoder) = self.encoder.take() else {
            return Ok(());
        };
        // Dropping the encoder appends the trailer
        drop(encoder);

        fs::write(&self.path, self.buffer.take())?;
        info!(
            "Assembled {} frames into {}",
            self.written,
            self.path.display()
        );
        Ok(())
    }
}

impl<A: FrameSink, B: FrameSink> FrameSink for (A, B) {
    fn write_frame(&mut self, index: usize, frame: &RgbImage) -> Result<()> {
        self.0.write_frame(index, frame)?;
        self.1.write_frame(index, frame)
    }

    fn finish(&mut self) -> Result<()> {
        self.0.finish()?;
        self.1.finish()
    }
}
