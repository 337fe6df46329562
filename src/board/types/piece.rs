//! Piece, rank and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Diagonal unit vectors in generation order.
const ALL_DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const WHITE_FORWARD: [(isize, isize); 2] = [(-1, -1), (-1, 1)];
const BLACK_FORWARD: [(isize, isize); 2] = [(1, -1), (1, 1)];

/// The two sides.
///
/// White moves first, starts on rows 5-7 and advances toward row 0.
/// Black starts on rows 0-2 and advances toward row 7.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Sign used in the wire cell codes (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row on which this color's men are crowned
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rows occupied by this color's men in the starting position
    #[must_use]
    pub(crate) const fn home_rows(self) -> std::ops::Range<usize> {
        match self {
            Color::White => 5..8,
            Color::Black => 0..3,
        }
    }

    /// Single-letter tag used by the diagram notation (`w` / `b`)
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Rank of a piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rank {
    Man,
    King,
}

impl Rank {
    /// Material value used by the evaluation (man=3, king=5)
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Rank::Man => 3,
            Rank::King => 5,
        }
    }
}

/// A piece on the board: a side and a rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Piece { color, rank }
    }

    #[inline]
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Piece::new(color, Rank::Man)
    }

    #[inline]
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Piece::new(color, Rank::King)
    }

    #[inline]
    #[must_use]
    pub const fn is_man(self) -> bool {
        matches!(self.rank, Rank::Man)
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Returns the same piece promoted to king
    #[inline]
    #[must_use]
    pub const fn crowned(self) -> Self {
        Piece::king(self.color)
    }

    /// Diagonal directions this piece may step or jump in.
    ///
    /// Men only move along the two forward diagonals of their color,
    /// kings use all four.
    #[must_use]
    pub const fn directions(self) -> &'static [(isize, isize)] {
        match (self.rank, self.color) {
            (Rank::King, _) => &ALL_DIAGONALS,
            (Rank::Man, Color::White) => &WHITE_FORWARD,
            (Rank::Man, Color::Black) => &BLACK_FORWARD,
        }
    }

    /// Wire cell code: magnitude 1 for a man, 2 for a king, signed by color
    #[inline]
    #[must_use]
    pub const fn code(self) -> i8 {
        let magnitude = match self.rank {
            Rank::Man => 1,
            Rank::King => 2,
        };
        magnitude * self.color.sign()
    }

    /// Decode a non-zero wire cell code
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Piece> {
        match code {
            1 => Some(Piece::man(Color::White)),
            2 => Some(Piece::king(Color::White)),
            -1 => Some(Piece::man(Color::Black)),
            -2 => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }

    /// Diagram character: lowercase for men, uppercase for kings
    #[must_use]
    pub const fn to_char(self) -> char {
        match (self.color, self.rank) {
            (Color::White, Rank::Man) => 'w',
            (Color::White, Rank::King) => 'W',
            (Color::Black, Rank::Man) => 'b',
            (Color::Black, Rank::King) => 'B',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'w' => Some(Piece::man(Color::White)),
            'W' => Some(Piece::king(Color::White)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn men_move_forward_only() {
        assert_eq!(Piece::man(Color::White).directions(), &[(-1, -1), (-1, 1)]);
        assert_eq!(Piece::man(Color::Black).directions(), &[(1, -1), (1, 1)]);
    }

    #[test]
    fn kings_move_in_all_diagonals() {
        for color in Color::BOTH {
            assert_eq!(Piece::king(color).directions().len(), 4);
        }
    }

    #[test]
    fn codes_round_trip() {
        for code in [-2, -1, 1, 2] {
            let piece = Piece::from_code(code).unwrap();
            assert_eq!(piece.code(), code);
        }
        assert_eq!(Piece::from_code(0), None);
        assert_eq!(Piece::from_code(3), None);
    }

    #[test]
    fn crowning_keeps_color() {
        let king = Piece::man(Color::Black).crowned();
        assert!(king.is_king());
        assert_eq!(king.color, Color::Black);
    }
}
