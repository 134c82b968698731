//! Board coordinates.
//!
//! The crate uses one coordinate convention everywhere: `(row, col)`, with
//! row 0 at the top of the board. Rows grow downward (the direction tokens
//! fall), columns grow rightward.

use serde::{Deserialize, Serialize};

/// A board cell coordinate: `(row, col)`, row 0 at the top.
///
/// ```
/// use gemgrid::core::Pos;
///
/// let a = Pos::new(2, 3);
/// assert!(a.is_adjacent(Pos::new(2, 4))); // right neighbor
/// assert!(a.is_adjacent(Pos::new(1, 3))); // above
/// assert!(!a.is_adjacent(Pos::new(3, 4))); // diagonal
/// assert!(!a.is_adjacent(a)); // self
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    /// Create a position from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether two positions are orthogonal neighbors.
    ///
    /// True iff the Manhattan distance between them is exactly 1: the
    /// positions differ by one in exactly one axis. Diagonal neighbors and
    /// identical positions are not adjacent.
    #[must_use]
    pub fn is_adjacent(self, other: Pos) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr + dc == 1
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
