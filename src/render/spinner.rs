//! Spinner renderer.

/// The default rotation: four strokes turning clockwise.
pub const DEFAULT_GLYPHS: [&str; 4] = ["|", "/", "-", "\\"];

/// Phase following `phase` in a cycle of `len` glyphs.
pub fn advance(phase: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (phase + 1) % len
}

/// Glyph shown at `phase`.
pub fn render(phase: usize, glyphs: &[String]) -> &str {
    if glyphs.is_empty() {
        return "";
    }
    &glyphs[phase % glyphs.len()]
}
