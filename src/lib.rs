//! # gemgrid
//!
//! A match-3 board engine: a rectangular grid of colored tokens where
//! swapping two adjacent tokens clears, scores, and refills any resulting
//! run of three or more.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: board construction, swapping, match detection, and
//!    cascade resolution. Rendering, animation, and input handling belong
//!    to whatever layer sits on top.
//!
//! 2. **Deterministic**: every random draw comes from an injected, seeded
//!    [`GameRng`]. Same seed, same game.
//!
//! 3. **Explicit contracts**: dimensions are validated at construction,
//!    positions at use, and the cascade loop is bounded. Failures are
//!    [`BoardError`] values, never panics.
//!
//! ## Coordinates
//!
//! One convention everywhere: `(row, col)` with row 0 at the top. Tokens
//! fall toward higher row indices.
//!
//! ## Modules
//!
//! - `core`: tokens, positions, errors, RNG
//! - `board`: the grid and its operations (construct, swap, detect, resolve)
//! - `session`: headless move-cycle orchestration (selection, scoring, undo)
//!
//! ## Example
//!
//! ```
//! use gemgrid::board::Board;
//! use gemgrid::core::{GameRng, Pos};
//!
//! let mut rng = GameRng::new(42);
//! let mut board = Board::new(8, 8, &mut rng)?;
//!
//! // Fresh boards may contain matches; settle them before first display.
//! board.normalize(&mut rng)?;
//! assert!(board.find_matches().is_empty());
//!
//! // Try a move: swap, then resolve or revert.
//! let (a, b) = (Pos::new(4, 4), Pos::new(4, 5));
//! assert!(a.is_adjacent(b));
//! board.swap(a, b)?;
//! if board.find_matches().is_empty() {
//!     board.swap(a, b)?; // no match - swap back
//! } else {
//!     let report = board.resolve(&mut rng)?;
//!     println!("cleared {} tokens", report.total_cleared());
//! }
//! # Ok::<(), gemgrid::core::BoardError>(())
//! ```

pub mod board;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::board::{Board, CascadeReport, MIN_DIMENSION, PLACEMENT_CAP};
pub use crate::core::{BoardError, Color, GameRng, GameRngState, Pos, Token};
pub use crate::session::{SelectOutcome, Session, SessionBuilder, POINTS_PER_TOKEN};
