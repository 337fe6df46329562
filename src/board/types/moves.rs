//! Move sequence type and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveError;

/// An ordered list of squares visited by one piece in one turn.
///
/// Either a single diagonal step (two squares) or a chain of jumps, each
/// consecutive pair two diagonal squares apart. A sequence is applied as a
/// whole or not at all.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Square>", into = "Vec<Square>"))]
pub struct MoveSequence(Vec<Square>);

/// Legal moves in generation order.
pub type MoveList = Vec<MoveSequence>;

impl MoveSequence {
    /// Build a sequence from its squares. At least two squares are required.
    pub fn new(squares: Vec<Square>) -> Result<Self, MoveError> {
        if squares.len() < 2 {
            return Err(MoveError::IllegalSequence {
                notation: join_squares(&squares, "-"),
            });
        }
        Ok(MoveSequence(squares))
    }

    /// A single diagonal step
    #[must_use]
    pub fn step(from: Square, to: Square) -> Self {
        MoveSequence(vec![from, to])
    }

    /// Build a sequence from signed wire coordinates, bounds-checking each pair.
    pub fn from_coords(coords: &[(i64, i64)]) -> Result<Self, MoveError> {
        let squares = coords
            .iter()
            .map(|&pair| Square::try_from(pair))
            .collect::<Result<Vec<_>, _>>()?;
        MoveSequence::new(squares)
    }

    /// Squares as `(row, col)` pairs for the wire format
    #[must_use]
    pub fn to_coords(&self) -> Vec<(usize, usize)> {
        self.0.iter().map(|sq| (sq.0, sq.1)).collect()
    }

    #[inline]
    #[must_use]
    pub fn origin(&self) -> Square {
        self.0[0]
    }

    #[inline]
    #[must_use]
    pub fn destination(&self) -> Square {
        self.0[self.0.len() - 1]
    }

    #[inline]
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a sequence holds at least two squares.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive (from, to) pairs
    pub fn steps(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns true if the first step is a jump
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.origin().jumped_square(self.0[1]).is_some()
    }

    /// Squares jumped over, in order
    #[must_use]
    pub fn captured_squares(&self) -> Vec<Square> {
        self.steps()
            .filter_map(|(from, to)| from.jumped_square(to))
            .collect()
    }

    pub(crate) fn from_path(path: &[Square]) -> Self {
        debug_assert!(path.len() >= 2);
        MoveSequence(path.to_vec())
    }
}

impl Index<usize> for MoveSequence {
    type Output = Square;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl TryFrom<Vec<Square>> for MoveSequence {
    type Error = MoveError;

    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        MoveSequence::new(squares)
    }
}

impl From<MoveSequence> for Vec<Square> {
    fn from(seq: MoveSequence) -> Self {
        seq.0
    }
}

fn join_squares(squares: &[Square], sep: &str) -> String {
    squares
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// `-` between squares of a simple step, `x` between squares of a jump chain.
impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { "x" } else { "-" };
        write!(f, "{}", join_squares(&self.0, sep))
    }
}

impl FromStr for MoveSequence {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .trim()
            .split(['-', 'x'])
            .map(str::parse::<Square>)
            .collect::<Result<Vec<_>, _>>()?;
        MoveSequence::new(squares)
    }
}
