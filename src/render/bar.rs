//! Bar renderer.

use super::scaled_units;
use crate::error::Error;
use crate::utils::display_width;

use std::fmt;
use std::iter;
use std::str::FromStr;

/// The four characters a bar is drawn with.
///
/// The string form lists them as `left`, `empty`, `fill`, `right`, so the
/// default face reads `"| =|"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarFace {
    /// Opening frame character.
    pub left: char,
    /// Character for completed units.
    pub fill: char,
    /// Character for units still to do.
    pub empty: char,
    /// Closing frame character.
    pub right: char,
}

impl Default for BarFace {
    fn default() -> Self {
        Self::new('|', '=', ' ', '|')
    }
}

impl BarFace {
    /// Create a new [`BarFace`].
    pub const fn new(left: char, fill: char, empty: char, right: char) -> Self {
        Self {
            left,
            fill,
            empty,
            right,
        }
    }
}

impl FromStr for BarFace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        match chars.as_slice() {
            [left, empty, fill, right] => Ok(Self::new(*left, *fill, *empty, *right)),
            _ => Err(Error::InvalidBarFace(s.to_string())),
        }
    }
}

impl fmt::Display for BarFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}", self.left, self.empty, self.fill, self.right)
    }
}

/// Widest a bar of `width` units can get on screen, in columns.
///
/// Fill and empty characters may differ in width, so this assumes the wider
/// of the two for every unit.
pub fn max_columns(width: usize, face: &BarFace) -> usize {
    let cols = |c: char| display_width(c.encode_utf8(&mut [0; 4]));
    let unit = cols(face.fill).max(cols(face.empty));
    width
        .saturating_mul(unit)
        .saturating_add(cols(face.left) + cols(face.right))
}

/// Number of filled units out of `width` for `value / max_value`.
pub fn filled_units(value: u64, max_value: u64, width: usize) -> usize {
    scaled_units(value, max_value, width as u64) as usize
}

/// Render a bar of `width` units between the face's frame characters.
///
/// ```rust
/// use progress_meter::render::{bar, BarFace};
///
/// let face: BarFace = "[.#]".parse().unwrap();
/// assert_eq!(bar::render(3, 4, 8, &face), "[######..]");
/// ```
pub fn render(value: u64, max_value: u64, width: usize, face: &BarFace) -> String {
    let filled = filled_units(value, max_value, width);

    let mut bar = String::with_capacity(width + 2);
    bar.push(face.left);
    bar.extend(iter::repeat(face.fill).take(filled));
    bar.extend(iter::repeat(face.empty).take(width - filled));
    bar.push(face.right);
    bar
}
