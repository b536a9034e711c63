//! Shared utility functions.
//!
//! - [`width`] - terminal column measurement for labels and indicator text

pub mod width;

pub use width::{display_width, segment_width};
