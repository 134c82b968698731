//! Cascade resolution: clear, gravity, refill, repeat.
//!
//! Resolution loops to a fixed point: detect matches, clear every matched
//! cell, compact each column downward so survivors keep their relative
//! order, refill from the top with unconstrained random colors, re-detect.
//! Refills can form new matches, so one move can chain through several
//! rounds.
//!
//! The loop is bounded at `width * height` rounds. A random refill stream
//! that kept producing matches that long is astronomically unlikely, but
//! the bound turns "cannot happen" into a defined, testable error.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::Board;
use crate::core::{BoardError, GameRng, Pos, Token};

/// Per-round record of a cascade resolution.
///
/// Each entry is the number of cells cleared in one round, in order. The
/// caller decides how to score: the classic rule counts only the first
/// round (the match the player made), chain-bonus rules sum them all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeReport {
    /// Cleared-cell count per round. Most moves settle in one round.
    rounds: SmallVec<[usize; 4]>,
}

impl CascadeReport {
    /// Cleared-cell counts, one entry per round.
    #[must_use]
    pub fn rounds(&self) -> &[usize] {
        &self.rounds
    }

    /// Cells cleared in the first round (the player-visible match), or 0
    /// if the board was already settled.
    #[must_use]
    pub fn first_round(&self) -> usize {
        self.rounds.first().copied().unwrap_or(0)
    }

    /// Total cells cleared across every round.
    #[must_use]
    pub fn total_cleared(&self) -> usize {
        self.rounds.iter().sum()
    }

    /// True if the board was already match-free and nothing was cleared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

impl Board {
    /// Resolve the board to a match-free fixed point.
    ///
    /// Postcondition on success: [`Board::find_matches`] returns the empty
    /// set, and every column still holds exactly `height` tokens.
    ///
    /// Returns `CascadeLimitExceeded` if the board has not settled after
    /// `width * height` rounds.
    pub fn resolve(&mut self, rng: &mut GameRng) -> Result<CascadeReport, BoardError> {
        let round_cap = self.width() * self.height();
        let mut report = CascadeReport::default();

        loop {
            let matches = self.find_matches();
            if matches.is_empty() {
                return Ok(report);
            }
            if report.rounds.len() == round_cap {
                return Err(BoardError::CascadeLimitExceeded { rounds: round_cap });
            }

            report.rounds.push(matches.len());

            for col in 0..self.width() {
                // Survivors top-to-bottom, then compacted to the column
                // bottom beneath fresh tokens.
                let kept: SmallVec<[Token; 16]> = (0..self.height())
                    .filter(|&row| !matches.contains(&Pos::new(row, col)))
                    .map(|row| self.token(Pos::new(row, col)))
                    .collect();

                let refill = self.height() - kept.len();
                for row in 0..refill {
                    self.set_token(Pos::new(row, col), Token::random(rng));
                }
                for (offset, token) in kept.into_iter().enumerate() {
                    self.set_token(Pos::new(refill + offset, col), token);
                }
            }
        }
    }

    /// Pre-game normalization: resolve any matches a fresh board happened
    /// to contain.
    ///
    /// Construction never guarantees a match-free grid; this is the
    /// explicit second step of the create-then-normalize contract. The
    /// report says how much was churned away before first display.
    pub fn normalize(&mut self, rng: &mut GameRng) -> Result<CascadeReport, BoardError> {
        self.resolve(rng)
    }
}
