//! Draughts board representation and rules.
//!
//! An 8×8 grid of optional pieces with legal move generation (compulsory
//! maximal capture chains), move application with promotion, material
//! evaluation and a fixed-depth alpha-beta search.
//!
//! # Example
//! ```
//! use draughts_engine::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod diagram;
mod error;
mod eval;
mod make_unmake;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, DiagramError, MoveError, SquareError};
pub use search::{find_best_move, SearchLimits, SearchResult, SearchStats, WIN_SCORE};
pub use state::{Board, UnmakeInfo};
pub use types::{Color, MoveList, MoveSequence, Piece, Rank, Square, BOARD_SIZE};
