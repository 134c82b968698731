//! Headless move-cycle orchestration: selection, scoring, undo.
//!
//! Drives the engine through the per-move state machine a UI would
//! otherwise run: pick a cell, pick an adjacent cell, swap, then either
//! resolve the match or revert the swap. Rendering and animation belong to
//! whatever presentation layer sits on top.

mod game;

pub use game::{SelectOutcome, Session, SessionBuilder, POINTS_PER_TOKEN};
