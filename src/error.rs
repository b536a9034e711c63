//! Error handling for the progress meters.
//!
//! Steady-state meter operations are total: a stalled clock or an unchanged
//! frame is a silent no-op, not an error. What remains are configuration
//! mistakes, which are rejected as early as possible, and failures of the
//! underlying output stream.

use std::io;
use thiserror::Error;

/// Errors that can happen when using a progress meter.
#[derive(Error, Debug)]
pub enum Error {
    /// The text does not name an indicator kind.
    ///
    /// Returned when parsing a [`Kind`](crate::Kind) from a string, e.g. a
    /// value taken from a host program's command line.
    #[error("Invalid indicator kind: {0}")]
    InvalidKind(String),

    /// A bar or percentage meter was given a maximum value of zero.
    ///
    /// The maximum is the denominator of every bar and percentage render, so
    /// it is rejected before anything is drawn.
    #[error("Invalid maximum value: {0} (must be greater than zero)")]
    InvalidMaxValue(u64),

    /// The frame rate is zero.
    #[error("Invalid frame rate: {0} (must be greater than zero)")]
    InvalidFrameRate(u32),

    /// The bar width is zero, or the bar does not fit the indicator buffer.
    #[error("Invalid bar width: {0}")]
    InvalidBarWidth(usize),

    /// A bar face is not made of exactly four characters.
    #[error("Invalid bar face: {0:?}")]
    InvalidBarFace(String),

    /// The spinner glyph set is empty, or one of its glyphs is too wide.
    #[error("Invalid spinner glyphs: {0}")]
    InvalidSpinner(String),

    /// I/O Error.
    ///
    /// Writing or flushing the output stream failed.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a meter error.
pub type Result<T> = std::result::Result<T, Error>;
