//! Tokens: the colored tiles that fill the board.
//!
//! A `Token` has no identity beyond its `Color` - two tokens of the same
//! color are interchangeable, and match detection compares colors only.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// A tile color from the fixed six-color palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    /// The full palette, in order. The first two entries are the colors
    /// subject to the placement cap at board construction.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    /// The colors capped to [`PLACEMENT_CAP`](crate::board::PLACEMENT_CAP)
    /// occurrences during initial board construction.
    pub const CAPPED: [Color; 2] = [Color::Red, Color::Green];

    /// Draw a uniformly random color from the full palette.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Color {
        // ALL is non-empty, so choose never returns None
        *rng.choose(&Self::ALL).unwrap_or(&Color::Red)
    }

    /// Check if this color is subject to the placement cap.
    #[must_use]
    pub fn is_capped(self) -> bool {
        Self::CAPPED.contains(&self)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
        };
        write!(f, "{name}")
    }
}

/// A single tile occupying one board cell.
///
/// Immutable value type: the color is fixed at construction and equality
/// is equality-by-color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    color: Color,
}

impl Token {
    /// Create a token of the given color.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// Create a token with a random color from the full palette.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        Self::new(Color::random(rng))
    }

    /// Get the token's color.
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}
