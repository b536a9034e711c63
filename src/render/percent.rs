//! Percentage renderer.

use super::scaled_units;

/// Columns taken by a rendered percentage.
pub const WIDTH: usize = 4;

/// Whole percentage of `value / max_value`, rounded half up, at most 100.
pub fn percentage(value: u64, max_value: u64) -> u64 {
    scaled_units(value, max_value, 100).min(100)
}

/// Render the percentage right-aligned in a fixed four column field.
///
/// ```rust
/// use progress_meter::render::percent;
///
/// assert_eq!(percent::render(0, 1024), "  0%");
/// assert_eq!(percent::render(2048, 1024), "100%");
/// ```
pub fn render(value: u64, max_value: u64) -> String {
    format!("{:>3}%", percentage(value, max_value))
}
