//! Indicator renderers.
//!
//! Each indicator kind has a pure renderer that turns the meter's state into
//! the text shown on the terminal line. Renderers never touch the output
//! stream; the redraw controller decides when their text gets printed.
//!
//! - [`bar`] - a fixed-width bar such as `|==========          |`
//! - [`percent`] - a fixed-width percentage such as `" 42%"`
//! - [`spinner`] - a single rotating glyph for work of unknown length
//!
//! # Examples
//!
//! ```rust
//! use progress_meter::render::{bar, percent, BarFace};
//!
//! assert_eq!(bar::render(10, 20, 20, &BarFace::default()), "|==========          |");
//! assert_eq!(percent::render(512, 1024), " 50%");
//! ```

pub mod bar;
pub mod percent;
pub mod spinner;

pub use bar::BarFace;

use crate::error::Error;
use crate::meter::MeterConfig;

use std::fmt;
use std::str::FromStr;

/// Upper bound, in terminal columns, of any indicator text.
pub const MAX_INDICATOR_WIDTH: usize = 64;

/// The rendering style of a meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A bar filling up from left to right.
    Bar,
    /// A percentage counter.
    Percent,
    /// A spinner for work without a known maximum.
    Spinner,
}

impl Kind {
    /// Return `true` if the kind divides by the meter's maximum value.
    pub fn needs_max_value(self) -> bool {
        matches!(self, Kind::Bar | Kind::Percent)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Bar => "bar",
            Kind::Percent => "percent",
            Kind::Spinner => "spinner",
        };
        f.write_str(name)
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(Kind::Bar),
            "percent" | "percentage" => Ok(Kind::Percent),
            "spinner" => Ok(Kind::Spinner),
            _ => Err(Error::InvalidKind(s.to_string())),
        }
    }
}

/// Scale `value / max_value` to `scale` units, rounding half up.
///
/// `value` is clamped to `max_value` and a zero maximum yields zero, so the
/// result is always within `0..=scale`.
pub fn scaled_units(value: u64, max_value: u64, scale: u64) -> u64 {
    if max_value == 0 {
        return 0;
    }

    let value = u128::from(value.min(max_value));
    let max_value = u128::from(max_value);
    let scale = u128::from(scale);

    // floor(value * scale / max + 1/2), without going through floats
    ((2 * value * scale + max_value) / (2 * max_value)) as u64
}

/// Render the indicator text for `kind`.
///
/// The spinner phase must already have been advanced by the caller.
pub(crate) fn render_frame(
    kind: Kind,
    value: u64,
    max_value: u64,
    phase: usize,
    config: &MeterConfig,
) -> String {
    match kind {
        Kind::Bar => bar::render(value, max_value, config.bar_width, &config.bar_face),
        Kind::Percent => percent::render(value, max_value),
        Kind::Spinner => spinner::render(phase, &config.spinner_glyphs).to_string(),
    }
}
