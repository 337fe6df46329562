//! Board state, undo records and the cell-code wire format.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::{Color, Piece, Rank, Square, BOARD_SIZE};

/// Undo record for one applied move sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    /// The piece as it stood on the origin square before the move
    pub(crate) moved: Piece,
    /// Jumped pieces with the squares they were removed from, in order
    pub(crate) captured: Vec<(Square, Piece)>,
    pub(crate) promoted: bool,
}

impl UnmakeInfo {
    /// Number of pieces removed by the move
    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }

    #[must_use]
    pub fn promoted(&self) -> bool {
        self.promoted
    }
}

/// 8×8 grid of optional pieces.
///
/// `Copy`: search and session history keep their own boards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<i8>>", into = "Vec<Vec<i8>>"))]
pub struct Board {
    pub(crate) cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: twelve men per side on the dark squares of
    /// each side's three home rows.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            for row in color.home_rows() {
                for col in 0..BOARD_SIZE {
                    let sq = Square(row, col);
                    if sq.is_playable() {
                        board.set_piece(sq, Piece::man(color));
                    }
                }
            }
        }
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The piece on `sq`; `None` for empty and off-board squares.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells.get(sq.0)?.get(sq.1).copied().flatten()
    }

    /// Returns false for off-board squares.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        matches!(self.cells.get(sq.0).and_then(|row| row.get(sq.1)), Some(None))
    }

    #[inline]
    /// Off-board squares are ignored.
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        if let Some(cell) = self.cells.get_mut(sq.0).and_then(|row| row.get_mut(sq.1)) {
            *cell = Some(piece);
        }
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.cells.get_mut(sq.0)?.get_mut(sq.1)?.take()
    }

    /// Occupied squares of `color` in row-major order, columns ascending
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    #[must_use]
    pub fn count_rank(&self, color: Color, rank: Rank) -> usize {
        self.pieces(color).filter(|(_, p)| p.rank == rank).count()
    }

    /// Returns the side left without pieces, if any
    #[must_use]
    pub fn eliminated_side(&self) -> Option<Color> {
        Color::BOTH.into_iter().find(|&color| self.count(color) == 0)
    }

    /// Checks that every piece stands on a playable square.
    pub fn validate(&self) -> Result<(), BoardError> {
        match Square::all().find(|&sq| !sq.is_playable() && !self.is_empty(sq)) {
            Some(square) => Err(BoardError::UnplayableSquare { square }),
            None => Ok(()),
        }
    }

    /// Wire representation: rows of signed cell codes, 0 for empty.
    #[must_use]
    pub fn to_rows(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0i8; BOARD_SIZE]; BOARD_SIZE];
        for sq in Square::all() {
            rows[sq.0][sq.1] = self.piece_at(sq).map_or(0, Piece::code);
        }
        rows
    }

    /// Parse a caller-supplied snapshot of cell codes.
    ///
    /// Rejects wrong dimensions, unknown codes and pieces on light squares.
    pub fn from_rows<R: AsRef<[i8]>>(rows: &[R]) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::WrongRowCount { found: rows.len() });
        }
        let mut board = Board::empty();
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != BOARD_SIZE {
                return Err(BoardError::WrongRowLength {
                    row,
                    found: cells.len(),
                });
            }
            for (col, &code) in cells.iter().enumerate() {
                let square = Square(row, col);
                if code == 0 {
                    continue;
                }
                let piece = Piece::from_code(code).ok_or(BoardError::InvalidCode { square, code })?;
                board.set_piece(square, piece);
            }
        }
        board.validate()?;
        Ok(board)
    }
}

impl TryFrom<Vec<Vec<i8>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<i8>>) -> Result<Self, Self::Error> {
        Board::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<i8>> {
    fn from(board: Board) -> Self {
        board.to_rows().iter().map(|row| row.to_vec()).collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.rows_diagram())
    }
}

/// Grid rendering, row 0 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0 1 2 3 4 5 6 7")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{row} ")?;
            for col in 0..BOARD_SIZE {
                let c = self.piece_at(Square(row, col)).map_or('.', Piece::to_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
