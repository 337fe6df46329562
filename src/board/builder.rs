//! Fluent builder for constructing positions.
//!
//! Places pieces verbatim, without the playable-square check applied to
//! caller snapshots, so tests can set up any diagonal geometry.
//!
//! # Example
//! ```
//! use draughts_engine::board::{BoardBuilder, Color, Square};
//!
//! let board = BoardBuilder::new()
//!     .man(Square(5, 0), Color::White)
//!     .king(Square(2, 3), Color::Black)
//!     .build();
//! assert_eq!(board.count(Color::White), 1);
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder { board: Board::new() }
    }

    /// Place a piece, replacing whatever stood on the square. Off-board
    /// squares are ignored.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.board.set_piece(square, piece);
        self
    }

    #[must_use]
    pub fn man(self, square: Square, color: Color) -> Self {
        self.piece(square, Piece::man(color))
    }

    #[must_use]
    pub fn king(self, square: Square, color: Color) -> Self {
        self.piece(square, Piece::king(color))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.remove_piece(square);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
