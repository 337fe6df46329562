//! Core draughts types.
//!
//! - `Color`, `Rank` and `Piece` - sides and piece identity
//! - `Square` - (row, col) coordinate
//! - `MoveSequence` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{MoveList, MoveSequence};
pub use piece::{Color, Piece, Rank};
pub use square::{Square, BOARD_SIZE};
