//! The board: a grid of tokens plus the operations over it.
//!
//! - `grid`: construction under the placement cap, swapping, cell access
//! - `matches`: pure run-of-three detection
//! - `cascade`: the clear / gravity / refill resolution loop

mod cascade;
mod grid;
mod matches;

pub use cascade::CascadeReport;
pub use grid::{Board, MIN_DIMENSION, PLACEMENT_CAP};
