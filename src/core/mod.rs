//! Core engine types: tokens, positions, errors, RNG.
//!
//! These are the leaf building blocks the board and session layers are
//! assembled from.

pub mod error;
pub mod position;
pub mod rng;
pub mod token;

pub use error::BoardError;
pub use position::Pos;
pub use rng::{GameRng, GameRngState};
pub use token::{Color, Token};
