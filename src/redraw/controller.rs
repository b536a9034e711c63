//! Frame rate gate and render snapshot.

use crate::utils::segment_width;

use std::time::{Duration, Instant};

/// Tracks what a meter last printed, and when.
///
/// The snapshot is the indicator text currently visible on the terminal
/// line. It is empty while the meter is not shown.
#[derive(Debug, Clone)]
pub struct RedrawController {
    /// Minimum time between two visible redraws.
    frame_interval: Duration,
    /// Clock reading at the last successful render.
    last_timestamp: Option<Instant>,
    /// Indicator text of the last successful render.
    snapshot: String,
}

impl RedrawController {
    /// Create a controller allowing one redraw per `frame_interval`.
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            last_timestamp: None,
            snapshot: String::new(),
        }
    }

    /// Gets the minimum time between two redraws.
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Gets the clock reading of the last render, if any.
    pub fn last_timestamp(&self) -> Option<Instant> {
        self.last_timestamp
    }

    /// Gets the indicator text currently on screen.
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    /// Columns the snapshot occupies on screen, separator included.
    pub fn segment_width(&self) -> usize {
        segment_width(&self.snapshot)
    }

    /// Return `true` if a new frame may be drawn at `now`.
    ///
    /// A clock that stalled or went backwards never lets a frame through.
    pub fn frame_due(&self, now: Instant) -> bool {
        let Some(last) = self.last_timestamp else {
            return true;
        };

        match now.checked_duration_since(last) {
            Some(elapsed) if !elapsed.is_zero() => elapsed >= self.frame_interval,
            _ => false,
        }
    }

    /// Return `true` if `candidate` differs from what is on screen.
    pub fn is_changed(&self, candidate: &str) -> bool {
        candidate != self.snapshot
    }

    /// Record `text` as printed at `now`.
    pub fn commit(&mut self, text: String, now: Instant) {
        self.snapshot = text;
        self.last_timestamp = Some(now);
    }

    /// Forget the snapshot and timestamp; nothing is on screen anymore.
    pub fn clear(&mut self) {
        self.snapshot.clear();
        self.last_timestamp = None;
    }
}
