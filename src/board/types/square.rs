//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the board, represented as (row, col).
///
/// Row 0 is Black's home edge, row 7 is White's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i64, i64)", into = "(usize, usize)"))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Bounds-check a square built directly from its fields.
    pub fn checked(self) -> Result<Square, SquareError> {
        let signed = |v: usize| i64::try_from(v).unwrap_or(i64::MAX);
        if self.0 >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds {
                row: signed(self.0),
            });
        }
        if self.1 >= BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds {
                col: signed(self.1),
            });
        }
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Only dark squares, where row + col is odd, ever hold pieces.
    #[inline]
    #[must_use]
    pub const fn is_playable(self) -> bool {
        (self.0 + self.1) % 2 == 1
    }

    /// The square `steps` diagonal steps away in direction `(dr, dc)`, if on the board
    #[inline]
    #[must_use]
    pub fn offset(self, (dr, dc): (isize, isize), steps: isize) -> Option<Square> {
        let row = self.0.checked_add_signed(dr * steps)?;
        let col = self.1.checked_add_signed(dc * steps)?;
        Square::new(row, col)
    }

    /// Midpoint of a two-square diagonal jump from `self` to `to`
    #[must_use]
    pub fn jumped_square(self, to: Square) -> Option<Square> {
        if self.0.abs_diff(to.0) == 2 && self.1.abs_diff(to.1) == 2 {
            Some(Square((self.0 + to.0) / 2, (self.1 + to.1) / 2))
        } else {
            None
        }
    }

    /// All 64 squares, row-major with ascending columns
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

impl TryFrom<(i64, i64)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (i64, i64)) -> Result<Self, Self::Error> {
        let in_range = |v: i64| usize::try_from(v).ok().filter(|v| *v < BOARD_SIZE);
        let row = in_range(row).ok_or(SquareError::RowOutOfBounds { row })?;
        let col = in_range(col).ok_or(SquareError::ColOutOfBounds { col })?;
        Ok(Square(row, col))
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.0, sq.1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let (row, col) = s.trim().split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse::<i64>().map_err(|_| invalid())?;
        let col = col.trim().parse::<i64>().map_err(|_| invalid())?;
        Square::try_from((row, col))
    }
}
