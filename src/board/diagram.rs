//! Compact text notation for positions.
//!
//! Eight rows separated by `/`, row 0 first. `w`/`b` are men, `W`/`B` kings,
//! `.` or a digit run marks empty cells. The side to move follows after a
//! space, e.g. the starting position:
//!
//! ```text
//! .b.b.b.b/b.b.b.b./.b.b.b.b/8/8/w.w.w.w./.w.w.w.w/w.w.w.w. w
//! ```

use super::error::DiagramError;
use super::{Board, Color, Piece, Square, BOARD_SIZE};

impl Board {
    /// Parse a diagram into a board and the side to move.
    pub fn from_diagram(diagram: &str) -> Result<(Board, Color), DiagramError> {
        let mut parts = diagram.split_whitespace();
        let rows = parts.next().ok_or(DiagramError::MissingSideToMove)?;
        let side = parts.next().ok_or(DiagramError::MissingSideToMove)?;

        let turn = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(DiagramError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let board = Board::from_rows_diagram(rows)?;
        Ok((board, turn))
    }

    /// Parse only the row section of a diagram.
    pub fn from_rows_diagram(rows: &str) -> Result<Board, DiagramError> {
        let row_strs: Vec<&str> = rows.split('/').collect();
        if row_strs.len() != BOARD_SIZE {
            return Err(DiagramError::WrongRowCount {
                found: row_strs.len(),
            });
        }

        let mut board = Board::empty();
        for (row, row_str) in row_strs.iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                    continue;
                }
                if c == '.' {
                    col += 1;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(DiagramError::InvalidPiece { char: c })?;
                if col >= BOARD_SIZE {
                    return Err(DiagramError::WrongRowLength {
                        row,
                        cells: col + 1,
                    });
                }
                board.set_piece(Square(row, col), piece);
                col += 1;
            }
            if col != BOARD_SIZE {
                return Err(DiagramError::WrongRowLength { row, cells: col });
            }
        }

        board.validate()?;
        Ok(board)
    }

    /// Render the board and side to move as a diagram.
    #[must_use]
    pub fn to_diagram(&self, turn: Color) -> String {
        format!("{} {}", self.rows_diagram(), turn.to_char())
    }

    /// Row section of the diagram, one character per cell.
    #[must_use]
    pub fn rows_diagram(&self) -> String {
        (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| self.piece_at(Square(row, col)).map_or('.', Piece::to_char))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
