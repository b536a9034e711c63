//! Meter module containing the progress meter, its builder and configuration.
//!
//! # Overview
//!
//! - `meter` - the [`Meter`] and its show / update / finish lifecycle
//! - `builder` - [`MeterBuilder`] for configuring meters
//! - `config` - [`MeterConfig`] and [`EraseMode`]
//!
//! # Examples
//!
//! ```rust
//! use progress_meter::{Kind, MeterBuilder};
//!
//! # fn main() -> progress_meter::Result<()> {
//! let mut spinner = MeterBuilder::new(Kind::Spinner)
//!     .writer(Vec::new())
//!     .label("busy")
//!     .right_label("please wait")
//!     .build()?;
//!
//! spinner.show()?;
//! spinner.update(0)?;
//! spinner.finish()?;
//! assert_eq!(spinner.get_ref().last(), Some(&b'\n'));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod meter;

pub use builder::MeterBuilder;
pub use config::{EraseMode, MeterConfig};
pub use meter::Meter;
