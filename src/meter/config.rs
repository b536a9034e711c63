//! Configuration structures and defaults for the meters.
//!
//! Frame rate, bar geometry, spinner glyphs and the erase model are plain
//! per-meter values, so meters with different settings can coexist in one
//! program.
//!
//! # Examples
//!
//! ```rust
//! use progress_meter::meter::{EraseMode, MeterConfig};
//!
//! let config = MeterConfig {
//!     frame_rate: 10,
//!     bar_width: 40,
//!     erase_mode: EraseMode::Ansi,
//!     ..MeterConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! assert_eq!(config.frame_interval().as_millis(), 100);
//! ```

use crate::error::{Error, Result};
use crate::render::{bar, spinner, BarFace, MAX_INDICATOR_WIDTH};
use crate::utils::segment_width;

use std::time::Duration;

/// How previously printed columns are erased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EraseMode {
    /// Move back with backspace characters and overwrite with spaces.
    ///
    /// Works on any console, including dumb terminals and log captures.
    #[default]
    Backspace,
    /// Use ANSI cursor-back and clear-to-end-of-line sequences.
    Ansi,
}

/// Configuration structure for a meter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterConfig {
    /// Maximum number of redraws per second.
    pub frame_rate: u32,
    /// Number of units between the frame characters of a bar.
    pub bar_width: usize,
    /// Characters a bar is drawn with.
    pub bar_face: BarFace,
    /// Spinner animation frames, shown in order.
    pub spinner_glyphs: Vec<String>,
    /// How previously printed columns are erased.
    pub erase_mode: EraseMode,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            frame_rate: Self::DEFAULT_FRAME_RATE,
            bar_width: Self::DEFAULT_BAR_WIDTH,
            bar_face: BarFace::default(),
            spinner_glyphs: spinner::DEFAULT_GLYPHS.iter().map(|g| g.to_string()).collect(),
            erase_mode: EraseMode::default(),
        }
    }
}

impl MeterConfig {
    /// Redraws per second unless configured otherwise.
    pub const DEFAULT_FRAME_RATE: u32 = 4;
    /// Bar width unless configured otherwise.
    pub const DEFAULT_BAR_WIDTH: usize = 20;

    /// Minimum time between two visible redraws.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    /// Check that every setting can be rendered.
    pub fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 {
            return Err(Error::InvalidFrameRate(self.frame_rate));
        }

        // the drawn bar plus its separator must fit the indicator columns
        let bar_cols = bar::max_columns(self.bar_width, &self.bar_face).saturating_add(1);
        if self.bar_width == 0 || bar_cols > MAX_INDICATOR_WIDTH {
            return Err(Error::InvalidBarWidth(self.bar_width));
        }

        if self.spinner_glyphs.is_empty() {
            return Err(Error::InvalidSpinner("no glyphs".to_string()));
        }
        for glyph in &self.spinner_glyphs {
            let width = segment_width(glyph);
            if width == 0 || width > MAX_INDICATOR_WIDTH {
                return Err(Error::InvalidSpinner(format!("unusable glyph {glyph:?}")));
            }
        }

        Ok(())
    }
}
