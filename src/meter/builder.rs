//! Builder pattern implementation for creating [`Meter`] instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use progress_meter::{Kind, MeterBuilder};
//!
//! # fn main() -> progress_meter::Result<()> {
//! let meter = MeterBuilder::new(Kind::Bar)
//!     .max_value(2560)
//!     .label("downloading")
//!     .right_label("linux.tar.gz")
//!     .bar_width(30)
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Output and Look
//!
//! ```rust
//! use progress_meter::meter::EraseMode;
//! use progress_meter::{Kind, MeterBuilder};
//!
//! # fn main() -> progress_meter::Result<()> {
//! let meter = MeterBuilder::new(Kind::Spinner)
//!     .writer(std::io::stderr())
//!     .spinner_glyphs(["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
//!     .frame_rate(10)
//!     .erase_mode(EraseMode::Ansi)
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Hidden Meters
//!
//! ```rust
//! use progress_meter::{Kind, MeterBuilder};
//!
//! // Everything the meter draws is discarded
//! let meter = MeterBuilder::hidden(Kind::Percent).max_value(100).build();
//! assert!(meter.is_ok());
//! ```

use super::config::{EraseMode, MeterConfig};
use super::meter::Meter;
use crate::error::Result;
use crate::redraw::{Clock, SystemClock};
use crate::render::{BarFace, Kind};

use std::borrow::Cow;
use std::io::{self, Sink, Stdout, Write};

/// A builder used to create a [`Meter`].
///
/// Bar and percentage meters need a [`max_value`](MeterBuilder::max_value)
/// greater than zero; [`build`](MeterBuilder::build) rejects them otherwise.
pub struct MeterBuilder<'a, W: Write = Stdout> {
    kind: Kind,
    value: u64,
    max_value: u64,
    label: Option<Cow<'a, str>>,
    right_label: Option<Cow<'a, str>>,
    config: MeterConfig,
    writer: W,
    clock: Box<dyn Clock>,
}

impl<'a> MeterBuilder<'a, Stdout> {
    /// Creates a builder drawing on standard output with the default options.
    pub fn new(kind: Kind) -> Self {
        Self::with_writer(kind, io::stdout())
    }
}

impl<'a> MeterBuilder<'a, Sink> {
    /// Convenience function for a meter whose output is discarded.
    pub fn hidden(kind: Kind) -> Self {
        Self::with_writer(kind, io::sink())
    }
}

impl<'a, W: Write> MeterBuilder<'a, W> {
    fn with_writer(kind: Kind, writer: W) -> Self {
        Self {
            kind,
            value: 0,
            max_value: 0,
            label: None,
            right_label: None,
            config: MeterConfig::default(),
            writer,
            clock: Box::new(SystemClock),
        }
    }

    /// Sets the stream the meter draws on.
    pub fn writer<T: Write>(self, writer: T) -> MeterBuilder<'a, T> {
        MeterBuilder {
            kind: self.kind,
            value: self.value,
            max_value: self.max_value,
            label: self.label,
            right_label: self.right_label,
            config: self.config,
            writer,
            clock: self.clock,
        }
    }

    /// Set the starting value.
    pub fn value(mut self, value: u64) -> Self {
        self.value = value;
        self
    }

    /// Set the maximum value.
    pub fn max_value(mut self, max_value: u64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Set the text printed left of the indicator.
    pub fn label(mut self, label: impl Into<Cow<'a, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the text printed right of the indicator.
    pub fn right_label(mut self, right_label: impl Into<Cow<'a, str>>) -> Self {
        self.right_label = Some(right_label.into());
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MeterConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the maximum number of redraws per second.
    pub fn frame_rate(mut self, frame_rate: u32) -> Self {
        self.config.frame_rate = frame_rate;
        self
    }

    /// Set the number of units of a bar.
    pub fn bar_width(mut self, bar_width: usize) -> Self {
        self.config.bar_width = bar_width;
        self
    }

    /// Set the characters a bar is drawn with.
    pub fn bar_face(mut self, bar_face: BarFace) -> Self {
        self.config.bar_face = bar_face;
        self
    }

    /// Set the spinner animation frames.
    pub fn spinner_glyphs<I, S>(mut self, glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.spinner_glyphs = glyphs.into_iter().map(Into::into).collect();
        self
    }

    /// Set how previously printed columns are erased.
    pub fn erase_mode(mut self, erase_mode: EraseMode) -> Self {
        self.config.erase_mode = erase_mode;
        self
    }

    /// Set the clock the frame rate gate reads.
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Create the [`Meter`] with the specified options.
    pub fn build(self) -> Result<Meter<'a, W>> {
        self.config.validate()?;

        let mut meter = Meter::from_parts(self.kind, self.config, self.writer, self.clock);
        if self.kind.needs_max_value() {
            meter.set_max_value(self.max_value)?;
        }
        meter.set_value(self.value);
        if let Some(label) = self.label {
            meter.set_label(label);
        }
        if let Some(right_label) = self.right_label {
            meter.set_right_label(right_label);
        }
        Ok(meter)
    }
}
