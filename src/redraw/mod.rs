//! Redraw control: when to reprint a meter, and how.
//!
//! A meter may receive thousands of updates per second from a tight loop.
//! The redraw controller throttles them to the configured frame rate and
//! suppresses frames whose text did not change, so the terminal only sees a
//! write when something visible actually moved.
//!
//! # Overview
//!
//! - `controller` - frame rate gate and render snapshot
//! - `clock` - the monotonic time source the gate reads
//! - `terminal` - erase and rewrite sequences written to the output stream
//!
//! # Examples
//!
//! ```rust
//! use progress_meter::redraw::RedrawController;
//! use std::time::{Duration, Instant};
//!
//! let mut redraw = RedrawController::new(Duration::from_millis(250));
//! let start = Instant::now();
//! redraw.commit(" 10%".to_string(), start);
//!
//! assert!(!redraw.frame_due(start + Duration::from_millis(100)));
//! assert!(redraw.frame_due(start + Duration::from_millis(250)));
//! assert!(!redraw.is_changed(" 10%"));
//! ```

pub mod clock;
pub mod controller;
pub(crate) mod terminal;

pub use clock::{Clock, SystemClock};
pub use controller::RedrawController;
