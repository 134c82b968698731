//! The board grid: construction, swapping, and cell access.
//!
//! ## Construction
//!
//! Every cell is filled with a random palette color, subject to the
//! placement cap: the first two palette colors (red and green) may each
//! appear at most [`PLACEMENT_CAP`] times across the whole board. Capped
//! draws over the limit are redrawn. The cap is a soft anti-clustering
//! heuristic only - a fresh board may still contain matches, and callers
//! wanting a match-free start invoke [`Board::normalize`] explicitly.
//!
//! ## Snapshots
//!
//! `Board` is `Clone`, and [`Board::snapshot`] is the explicit deep-copy
//! operation undo histories are built on. Callers never receive aliased
//! access to the internal grid.

use serde::{Deserialize, Serialize};

use crate::core::{BoardError, Color, GameRng, Pos, Token};

/// Minimum board width and height.
pub const MIN_DIMENSION: usize = 3;

/// Maximum occurrences of each capped color on a freshly constructed board.
pub const PLACEMENT_CAP: usize = 3;

/// A `height x width` grid of tokens.
///
/// Row-major storage, `(row, col)` addressing with row 0 at the top.
/// Dimensions are fixed at construction; outside an in-progress clear step
/// every cell holds exactly one token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Token>,
}

impl Board {
    /// Create a board filled with random tokens.
    ///
    /// Enforces the placement cap on red and green, and rejects dimensions
    /// below [`MIN_DIMENSION`] with `InvalidDimensions`.
    ///
    /// The result is NOT guaranteed match-free; call [`Board::normalize`]
    /// before first display if that matters.
    pub fn new(width: usize, height: usize, rng: &mut GameRng) -> Result<Self, BoardError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let mut capped_counts = [0usize; Color::CAPPED.len()];
        let mut cells = Vec::with_capacity(width * height);

        for _ in 0..width * height {
            let color = loop {
                let color = Color::random(rng);
                match capped_index(color) {
                    Some(i) if capped_counts[i] >= PLACEMENT_CAP => continue,
                    Some(i) => {
                        capped_counts[i] += 1;
                        break color;
                    }
                    None => break color,
                }
            };
            cells.push(Token::new(color));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a board from explicit rows of colors. Test and scenario setup.
    ///
    /// Rows must be non-empty, of equal length, and satisfy the minimum
    /// dimensions.
    pub fn from_rows(rows: &[Vec<Color>]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if height < MIN_DIMENSION || width < MIN_DIMENSION {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let cells = rows
            .iter()
            .flat_map(|row| row.iter().copied().map(Token::new))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Board width (number of columns).
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height (number of rows).
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the token at a position, if in bounds.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<&Token> {
        if self.in_bounds(pos) {
            Some(&self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Get the color at a position.
    pub fn color_at(&self, pos: Pos) -> Result<Color, BoardError> {
        self.get(pos)
            .map(|token| token.color())
            .ok_or(BoardError::OutOfBounds(pos))
    }

    /// Exchange the tokens at two positions, in place.
    ///
    /// Applying the same swap twice restores the original grid - the
    /// revert-on-no-match pattern relies on this involution.
    ///
    /// Adjacency is deliberately not checked here; callers consult
    /// [`Pos::is_adjacent`] before (or revert after) as they see fit.
    pub fn swap(&mut self, pos1: Pos, pos2: Pos) -> Result<(), BoardError> {
        self.check_bounds(pos1)?;
        self.check_bounds(pos2)?;

        let i = self.index(pos1);
        let j = self.index(pos2);
        self.cells.swap(i, j);
        Ok(())
    }

    /// Explicit deep copy for undo snapshots.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// Iterate over all cell positions, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Pos::new(row, col)))
    }

    /// Count the cells holding the given color.
    #[must_use]
    pub fn count_color(&self, color: Color) -> usize {
        self.cells.iter().filter(|t| t.color() == color).count()
    }

    pub(crate) fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub(crate) fn check_bounds(&self, pos: Pos) -> Result<(), BoardError> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds(pos))
        }
    }

    pub(crate) fn index(&self, pos: Pos) -> usize {
        pos.row * self.width + pos.col
    }

    pub(crate) fn token(&self, pos: Pos) -> Token {
        self.cells[self.index(pos)]
    }

    pub(crate) fn set_token(&mut self, pos: Pos, token: Token) {
        let i = self.index(pos);
        self.cells[i] = token;
    }
}

fn capped_index(color: Color) -> Option<usize> {
    Color::CAPPED.iter().position(|&c| c == color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let mut rng = GameRng::new(42);
        let board = Board::new(8, 6, &mut rng).unwrap();

        assert_eq!(board.width(), 8);
        assert_eq!(board.height(), 6);
        assert_eq!(board.positions().count(), 48);

        // Every cell populated
        for pos in board.positions() {
            assert!(board.get(pos).is_some());
        }
    }

    #[test]
    fn test_rejects_small_dimensions() {
        let mut rng = GameRng::new(42);

        assert_eq!(
            Board::new(2, 8, &mut rng).unwrap_err(),
            BoardError::InvalidDimensions {
                width: 2,
                height: 8
            }
        );
        assert_eq!(
            Board::new(8, 0, &mut rng).unwrap_err(),
            BoardError::InvalidDimensions {
                width: 8,
                height: 0
            }
        );
    }

    #[test]
    fn test_placement_cap() {
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let board = Board::new(8, 8, &mut rng).unwrap();

            for color in Color::CAPPED {
                assert!(
                    board.count_color(color) <= PLACEMENT_CAP,
                    "seed {seed}: {color} over cap"
                );
            }
        }
    }

    #[test]
    fn test_construction_is_deterministic() {
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        let board1 = Board::new(8, 8, &mut rng1).unwrap();
        let board2 = Board::new(8, 8, &mut rng2).unwrap();

        assert_eq!(board1, board2);
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(&[
            vec![Color::Red, Color::Blue, Color::Red],
            vec![Color::Blue, Color::Red, Color::Blue],
            vec![Color::Red, Color::Blue, Color::Red],
        ])
        .unwrap();

        assert_eq!(board.color_at(Pos::new(0, 0)).unwrap(), Color::Red);
        assert_eq!(board.color_at(Pos::new(1, 2)).unwrap(), Color::Blue);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = Board::from_rows(&[
            vec![Color::Red, Color::Blue, Color::Red],
            vec![Color::Blue, Color::Red],
            vec![Color::Red, Color::Blue, Color::Red],
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_swap() {
        let mut board = Board::from_rows(&[
            vec![Color::Red, Color::Blue, Color::Yellow],
            vec![Color::Green, Color::Purple, Color::Orange],
            vec![Color::Blue, Color::Red, Color::Green],
        ])
        .unwrap();

        board.swap(Pos::new(0, 0), Pos::new(0, 1)).unwrap();

        assert_eq!(board.color_at(Pos::new(0, 0)).unwrap(), Color::Blue);
        assert_eq!(board.color_at(Pos::new(0, 1)).unwrap(), Color::Red);
    }

    #[test]
    fn test_swap_involution() {
        let mut rng = GameRng::new(5);
        let mut board = Board::new(5, 5, &mut rng).unwrap();
        let original = board.snapshot();

        let p1 = Pos::new(1, 2);
        let p2 = Pos::new(4, 0);
        board.swap(p1, p2).unwrap();
        board.swap(p1, p2).unwrap();

        assert_eq!(board, original);
    }

    #[test]
    fn test_swap_out_of_bounds() {
        let mut rng = GameRng::new(42);
        let mut board = Board::new(4, 4, &mut rng).unwrap();
        let before = board.snapshot();

        let bad = Pos::new(4, 0);
        assert_eq!(
            board.swap(Pos::new(0, 0), bad).unwrap_err(),
            BoardError::OutOfBounds(bad)
        );

        // Failed swap leaves the grid untouched
        assert_eq!(board, before);
    }

    #[test]
    fn test_color_at_out_of_bounds() {
        let mut rng = GameRng::new(42);
        let board = Board::new(4, 4, &mut rng).unwrap();

        let bad = Pos::new(0, 9);
        assert_eq!(board.color_at(bad).unwrap_err(), BoardError::OutOfBounds(bad));
        assert!(board.get(bad).is_none());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::from_rows(&[
            vec![Color::Red, Color::Blue, Color::Yellow],
            vec![Color::Green, Color::Purple, Color::Orange],
            vec![Color::Blue, Color::Red, Color::Green],
        ])
        .unwrap();
        let snapshot = board.snapshot();

        board.swap(Pos::new(0, 0), Pos::new(0, 1)).unwrap();

        // Mutating the board never touches the snapshot
        assert_ne!(board, snapshot);
        assert_eq!(snapshot.color_at(Pos::new(0, 0)).unwrap(), Color::Red);
    }

    #[test]
    fn test_board_serde_roundtrip() {
        let mut rng = GameRng::new(42);
        let board = Board::new(5, 5, &mut rng).unwrap();

        let bytes = bincode::serialize(&board).unwrap();
        let back: Board = bincode::deserialize(&bytes).unwrap();

        assert_eq!(board, back);
    }
}
