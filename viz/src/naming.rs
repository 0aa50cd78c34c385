//! Date-stamped output locations
//!
//! Renders land in three folders under an output root:
//!
//! - `Figures/` for still images (`Stars_Initial_<stamp>.png`, `Star_Trails_<stamp>.png`)
//! - `Gif_Figures/Star_Trail_Movement_<stamp>/` for numbered frames
//! - `GIFs/` for assembled animations (`Star_Trail_Movement_<stamp>.gif`)
//!
//! Stamps look like `v20180106` (day precision) or `v20171124_213005`
//! (second precision).

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

/// Day-precision stamp, e.g. `v20180106`
pub fn day_stamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("v%Y%m%d").to_string()
}

/// Second-precision stamp, e.g. `v20171124_213005`
pub fn second_stamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("v%Y%m%d_%H%M%S").to_string()
}

/// Output file locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
    stamp: String,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>, stamp: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            stamp: stamp.into(),
        }
    }

    /// Layout stamped with today's local date
    pub fn today(root: impl Into<PathBuf>) -> Self {
        Self::new(root, day_stamp(&Local::now()))
    }

    /// Layout stamped with the current local time to the second
    pub fn now(root: impl Into<PathBuf>) -> Self {
        Self::new(root, second_stamp(&Local::now()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn stamp(&self) -> &str {
        &self.stamp
    }

    pub fn initial_figure(&self) -> PathBuf {
        self.root
            .join("Figures")
            .join(format!("Stars_Initial_{}.png", self.stamp))
    }

    pub fn composite_figure(&self) -> PathBuf {
        self.root
            .join("Figures")
            .join(format!("Star_Trails_{}.png", self.stamp))
    }

    pub fn frame_dir(&self) -> PathBuf {
        self.root
            .join("Gif_Figures")
            .join(format!("Star_Trail_Movement_{}", self.stamp))
    }

    pub fn gif(&self) -> PathBuf {
        self.root
            .join("GIFs")
            .join(format!("Star_Trail_Movement_{}.gif", self.stamp))
    }
}
