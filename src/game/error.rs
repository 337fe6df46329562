//! Error type for session operations.

use std::fmt;

use super::SessionId;
use crate::board::{BoardError, MoveError, SquareError};

/// Error type for rejected session operations.
///
/// Nothing is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The move was rejected by the rules
    Move(MoveError),
    /// A caller-supplied board snapshot is malformed
    InvalidBoard(BoardError),
    /// Requested search depth outside 1..=max
    InvalidDepth { depth: u32, max: u32 },
    /// Undo with no recorded move
    EmptyHistory,
    /// No session under this id
    UnknownSession { id: SessionId },
    /// The session was mutated while a detached search was running
    SessionChanged { id: SessionId },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Move(e) => write!(f, "{e}"),
            GameError::InvalidBoard(e) => write!(f, "Invalid board: {e}"),
            GameError::InvalidDepth { depth, max } => {
                write!(f, "Search depth {depth} out of range (must be 1-{max})")
            }
            GameError::EmptyHistory => write!(f, "Nothing to undo"),
            GameError::UnknownSession { id } => write!(f, "Unknown session {id}"),
            GameError::SessionChanged { id } => {
                write!(f, "Session {id} changed during search")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(e) => Some(e),
            GameError::InvalidBoard(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::Move(e)
    }
}

impl From<SquareError> for GameError {
    fn from(e: SquareError) -> Self {
        GameError::Move(MoveError::InvalidSquare(e))
    }
}

impl From<BoardError> for GameError {
    fn from(e: BoardError) -> Self {
        GameError::InvalidBoard(e)
    }
}
