//! Match detection: runs of three or more same-colored tokens.
//!
//! Detection is a pure full-grid scan. Every 3-wide horizontal window and
//! every 3-tall vertical window whose tokens share a color contributes all
//! three positions to the result set. Longer runs fall out naturally: a run
//! of four produces two overlapping triples whose union is all four cells,
//! so the set is never run-segmented.

use rustc_hash::FxHashSet;

use super::grid::Board;
use crate::core::Pos;

impl Board {
    /// Find every position that is part of a horizontal or vertical run of
    /// three or more same-colored tokens.
    ///
    /// Read-only; returns an empty set when the board has no matches.
    #[must_use]
    pub fn find_matches(&self) -> FxHashSet<Pos> {
        let mut matches = FxHashSet::default();

        // Horizontal runs
        for row in 0..self.height() {
            for col in 0..self.width() - 2 {
                let color = self.token(Pos::new(row, col)).color();
                if self.token(Pos::new(row, col + 1)).color() == color
                    && self.token(Pos::new(row, col + 2)).color() == color
                {
                    matches.insert(Pos::new(row, col));
                    matches.insert(Pos::new(row, col + 1));
                    matches.insert(Pos::new(row, col + 2));
                }
            }
        }

        // Vertical runs
        for col in 0..self.width() {
            for row in 0..self.height() - 2 {
                let color = self.token(Pos::new(row, col)).color();
                if self.token(Pos::new(row + 1, col)).color() == color
                    && self.token(Pos::new(row + 2, col)).color() == color
                {
                    matches.insert(Pos::new(row, col));
                    matches.insert(Pos::new(row + 1, col));
                    matches.insert(Pos::new(row + 2, col));
                }
            }
        }

        matches
    }

    /// Whether the board currently contains any match.
    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.find_matches().is_empty()
    }
}
