//! Draughts (8×8 checkers) rules engine with a fixed-depth alpha-beta player.
//!
//! - [`board`]: pieces, squares, board state, legal move generation with
//!   forced maximal captures, move application and search
//! - [`game`]: game sessions with undo history, and a registry of sessions
//! - [`protocol`]: line-oriented text front end used by the binary

#[macro_use]
mod logging;

pub mod board;
pub mod config;
pub mod game;
pub mod protocol;
pub mod sync;

pub use board::{
    find_best_move, Board, Color, MoveSequence, Piece, Rank, SearchLimits, SearchResult, Square,
};
pub use config::EngineOptions;
pub use game::{GameError, GameSession, GameStatus, SessionId, SessionRegistry};
pub use sync::StopFlag;
