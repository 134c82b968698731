//! Session implementation: the move cycle over a board.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{BoardError, GameRng, GameRngState, Pos};

/// Points awarded per token cleared by the player's own match (the first
/// cascade round). Chain rounds refill the board but do not score.
pub const POINTS_PER_TOKEN: u64 = 10;

/// What a call to [`Session::select`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First pick of a pair; the cell is now selected.
    Selected(Pos),

    /// Second pick was not adjacent to the first; selection cleared, no
    /// swap attempted, no move consumed.
    Reselected,

    /// The swap produced a match. The board has been fully resolved.
    Matched {
        /// Cells cleared by the player's match (first cascade round).
        cleared: usize,
        /// Points awarded for this move.
        points: u64,
        /// Total cascade rounds the move chained through.
        rounds: usize,
    },

    /// The swap produced no match and was reverted. The move is still
    /// consumed.
    Reverted,

    /// No moves left; the pick was ignored.
    GameOver,
}

/// Everything needed to rewind one move: grid, bookkeeping, and the exact
/// random stream position, so a replayed move produces identical refills.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct Snapshot {
    board: Board,
    score: u64,
    moves_left: u32,
    rng: GameRngState,
}

/// Builder for a [`Session`].
///
/// ```
/// use gemgrid::session::SessionBuilder;
///
/// let session = SessionBuilder::new()
///     .dimensions(8, 8)
///     .max_moves(20)
///     .build(42)
///     .unwrap();
/// assert_eq!(session.moves_left(), 20);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SessionBuilder {
    width: usize,
    height: usize,
    max_moves: u32,
    normalize_start: bool,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            max_moves: 20,
            normalize_start: true,
        }
    }
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board dimensions. Values below
    /// [`MIN_DIMENSION`](crate::board::MIN_DIMENSION) are rejected at
    /// build time.
    #[must_use]
    pub fn dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the move budget.
    #[must_use]
    pub fn max_moves(mut self, moves: u32) -> Self {
        self.max_moves = moves;
        self
    }

    /// Whether to resolve away any matches the fresh board happened to
    /// contain before play starts. Defaults to true.
    #[must_use]
    pub fn normalize_start(mut self, normalize: bool) -> Self {
        self.normalize_start = normalize;
        self
    }

    /// Build the session with a seeded random stream.
    pub fn build(self, seed: u64) -> Result<Session, BoardError> {
        let mut rng = GameRng::new(seed);
        let mut board = Board::new(self.width, self.height, &mut rng)?;

        if self.normalize_start {
            board.normalize(&mut rng)?;
        }

        Ok(Session {
            board,
            rng,
            score: 0,
            moves_left: self.max_moves,
            selected: None,
            history: Vector::new(),
        })
    }
}

/// A single game in progress: a board plus score, move budget, the current
/// selection, and an undo history of full snapshots.
#[derive(Clone)]
pub struct Session {
    board: Board,
    rng: GameRng,
    score: u64,
    moves_left: u32,
    selected: Option<Pos>,
    history: Vector<Snapshot>,
}

impl Session {
    /// The board, read-only. Use [`Session::select`] to play.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Moves remaining in the budget.
    #[must_use]
    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    /// The currently selected cell, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    /// Completed moves (matched or reverted) so far.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// True once the move budget is exhausted.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.moves_left == 0
    }

    /// Pick a cell, driving the move state machine one step.
    ///
    /// - No selection: the cell becomes selected.
    /// - Selection exists, pick is adjacent: swap; on a match, resolve the
    ///   cascade and score the first round; otherwise revert. Either way
    ///   one move is consumed and an undo snapshot is recorded.
    /// - Selection exists, pick is not adjacent: selection clears and
    ///   nothing else happens.
    ///
    /// Out-of-bounds picks fail with `OutOfBounds` and change nothing.
    pub fn select(&mut self, pos: Pos) -> Result<SelectOutcome, BoardError> {
        if self.is_over() {
            return Ok(SelectOutcome::GameOver);
        }
        self.board.check_bounds(pos)?;

        match self.selected.take() {
            None => {
                self.selected = Some(pos);
                Ok(SelectOutcome::Selected(pos))
            }
            Some(first) if first.is_adjacent(pos) => self.play_move(first, pos),
            Some(_) => Ok(SelectOutcome::Reselected),
        }
    }

    /// Rewind the last completed move. Returns false if there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(snapshot) => {
                self.board = snapshot.board;
                self.score = snapshot.score;
                self.moves_left = snapshot.moves_left;
                self.rng = GameRng::from_state(&snapshot.rng);
                self.selected = None;
                true
            }
            None => false,
        }
    }

    fn play_move(&mut self, first: Pos, second: Pos) -> Result<SelectOutcome, BoardError> {
        let snapshot = Snapshot {
            board: self.board.snapshot(),
            score: self.score,
            moves_left: self.moves_left,
            rng: self.rng.state(),
        };

        self.board.swap(first, second)?;

        let outcome = if self.board.has_matches() {
            let report = self.board.resolve(&mut self.rng)?;
            let cleared = report.first_round();
            let points = cleared as u64 * POINTS_PER_TOKEN;
            self.score += points;
            SelectOutcome::Matched {
                cleared,
                points,
                rounds: report.rounds().len(),
            }
        } else {
            // Swap involution: reapplying restores the pre-move grid
            self.board.swap(first, second)?;
            SelectOutcome::Reverted
        };

        self.moves_left -= 1;
        self.history.push_back(snapshot);
        Ok(outcome)
    }
}
