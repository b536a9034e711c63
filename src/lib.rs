//! In-place progress meters for text consoles.
//!
//! A meter draws a bar, a percentage or a spinner on the current terminal
//! line and keeps it up to date as work progresses, rewriting only the part of
//! the line that changed and never more often than its frame rate allows.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use progress_meter::{Kind, MeterBuilder};
//!
//! # fn main() -> progress_meter::Result<()> {
//! let mut meter = MeterBuilder::new(Kind::Bar)
//!     .max_value(2560)
//!     .label("downloading")
//!     .right_label("linux.tar.gz")
//!     .build()?;
//!
//! meter.show()?;
//! let mut received = 0;
//! while received < 2560 {
//!     received += 15;
//!     meter.update(received)?;
//! }
//! meter.finish()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`meter`] - The [`Meter`], its [`MeterBuilder`] and [`MeterConfig`]
//! - [`render`] - Pure renderers for each indicator [`Kind`]
//! - [`redraw`] - Frame rate gate, render snapshot and clock
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Terminal column measurement

pub mod error;
pub mod meter;
pub mod redraw;
pub mod render;
pub mod utils;

pub use error::{Error, Result};
pub use meter::{EraseMode, Meter, MeterBuilder, MeterConfig};
pub use redraw::{Clock, RedrawController, SystemClock};
pub use render::{BarFace, Kind};
