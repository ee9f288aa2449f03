//! Color identity symbols and their canonical ordering

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five color identity symbols
///
/// Variants are declared in canonical `W, U, B, R, G` order, so the derived
/// `Ord` is the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    /// All colors in canonical order
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Parses a symbol, ignoring case and surrounding whitespace
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim().to_ascii_uppercase().as_str() {
            "W" => Some(Self::White),
            "U" => Some(Self::Blue),
            "B" => Some(Self::Black),
            "R" => Some(Self::Red),
            "G" => Some(Self::Green),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::White => "W",
            Self::Blue => "U",
            Self::Black => "B",
            Self::Red => "R",
            Self::Green => "G",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Filters raw symbols to known colors and returns them in `W, U, B, R, G` order
///
/// Unknown symbols and duplicates are dropped; absent colors are omitted.
///
/// # Example
///
/// ```
/// use commander_harvest::deck::{canonical_colors, Color};
///
/// assert_eq!(canonical_colors(["U", "W", "X"]), vec![Color::White, Color::Blue]);
/// ```
pub fn canonical_colors<I, S>(raw: I) -> Vec<Color>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let present: Vec<Color> = raw
        .into_iter()
        .filter_map(|symbol| Color::from_symbol(symbol.as_ref()))
        .collect();

    Color::ALL
        .into_iter()
        .filter(|color| present.contains(color))
        .collect()
}
