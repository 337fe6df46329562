//! Error types for board operations.

use std::fmt;

use super::Color;
use super::Square;

/// Error type for square parsing and coordinate conversion failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: i64 },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: i64 },
    /// Text is not of the form `row,col`
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}', expected 'row,col'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected board snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Snapshot does not have 8 rows
    WrongRowCount { found: usize },
    /// A row does not have 8 cells
    WrongRowLength { row: usize, found: usize },
    /// Cell code outside {-2, -1, 0, 1, 2}
    InvalidCode { square: Square, code: i8 },
    /// A piece sits on a light square
    UnplayableSquare { square: Square },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongRowCount { found } => {
                write!(f, "Board must have 8 rows, found {found}")
            }
            BoardError::WrongRowLength { row, found } => {
                write!(f, "Row {row} must have 8 cells, found {found}")
            }
            BoardError::InvalidCode { square, code } => {
                write!(f, "Invalid cell code {code} at {square}")
            }
            BoardError::UnplayableSquare { square } => {
                write!(f, "Piece on non-playable square {square}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for board diagram parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// Diagram must be `<rows> <side>`
    MissingSideToMove,
    /// Side to move must be 'w' or 'b'
    InvalidSideToMove { found: String },
    /// Invalid piece character
    InvalidPiece { char: char },
    /// Wrong number of rows
    WrongRowCount { found: usize },
    /// A row does not describe exactly 8 cells
    WrongRowLength { row: usize, cells: usize },
    /// The described position breaks a board invariant
    Board(BoardError),
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::MissingSideToMove => {
                write!(f, "Diagram must be followed by the side to move")
            }
            DiagramError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            DiagramError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in diagram")
            }
            DiagramError::WrongRowCount { found } => {
                write!(f, "Diagram must have 8 rows, found {found}")
            }
            DiagramError::WrongRowLength { row, cells } => {
                write!(f, "Diagram row {row} describes {cells} cells, expected 8")
            }
            DiagramError::Board(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DiagramError {}

impl From<BoardError> for DiagramError {
    fn from(e: BoardError) -> Self {
        DiagramError::Board(e)
    }
}

/// Error type for moves rejected before touching the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate of the sequence is off the board or malformed
    InvalidSquare(SquareError),
    /// No piece on the origin square
    EmptyOrigin { square: Square },
    /// The origin piece belongs to the side not on move
    WrongSideToMove { square: Square, to_move: Color },
    /// Sequence is not in the legal move set for its origin
    IllegalSequence { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidSquare(e) => write!(f, "{e}"),
            MoveError::EmptyOrigin { square } => {
                write!(f, "No piece on origin square {square}")
            }
            MoveError::WrongSideToMove { square, to_move } => {
                write!(f, "Piece on {square} does not belong to {to_move}, who is to move")
            }
            MoveError::IllegalSequence { notation } => {
                write!(f, "Illegal move sequence '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidSquare(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(e: SquareError) -> Self {
        MoveError::InvalidSquare(e)
    }
}
