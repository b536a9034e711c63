//! Terminal column measurement.
//!
//! Erase sequences move the cursor by columns, not bytes, so every width the
//! redraw controller works with goes through these helpers.

use console::measure_text_width;

/// Number of terminal columns `text` occupies.
///
/// ```rust
/// use progress_meter::utils::display_width;
///
/// assert_eq!(display_width("|=== |"), 6);
/// assert_eq!(display_width("⠋"), 1);
/// ```
pub fn display_width(text: &str) -> usize {
    measure_text_width(text)
}

/// Columns taken by `text` once printed with its trailing separator space.
///
/// Empty text is never printed, so it takes no columns at all.
pub fn segment_width(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        display_width(text) + 1
    }
}
