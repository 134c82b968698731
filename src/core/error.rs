//! Engine error taxonomy.
//!
//! Every fallible board operation returns an explicit `BoardError` instead
//! of panicking or leaving the behavior undefined. The orchestrating layer
//! decides what to surface to the player; nothing here is fatal.

use super::position::Pos;

/// Errors reported by board operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Width or height below the 3-cell minimum at construction.
    InvalidDimensions { width: usize, height: usize },

    /// A position argument outside `[0, height) x [0, width)`.
    OutOfBounds(Pos),

    /// Cascade resolution exceeded its round cap without reaching a
    /// match-free board. Practically unreachable with random refills, but
    /// bounded so the loop has a defined failure mode.
    CascadeLimitExceeded { rounds: usize },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "board dimensions {width}x{height} below 3x3 minimum")
            }
            BoardError::OutOfBounds(pos) => {
                write!(f, "position {pos} outside the board")
            }
            BoardError::CascadeLimitExceeded { rounds } => {
                write!(f, "cascade did not settle after {rounds} rounds")
            }
        }
    }
}

impl std::error::Error for BoardError {}
