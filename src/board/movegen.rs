//! Legal move generation.
//!
//! Captures are compulsory: when any piece of the side to move can jump,
//! the legal set is the union of every maximal jump chain and no simple step
//! is legal. Otherwise the legal set is every one-step diagonal move.
//! Moves come out in row-major piece order, then direction order, then
//! depth-first chain order.

use super::error::MoveError;
use super::{Board, Color, MoveList, MoveSequence, Piece, Square};

impl Board {
    /// All legal sequences for `turn`.
    #[must_use]
    pub fn legal_moves(&self, turn: Color) -> MoveList {
        let captures = self.capture_moves(turn);
        if !captures.is_empty() {
            return captures;
        }
        self.simple_moves(turn)
    }

    /// Legal sequences for `turn` starting on `origin`.
    ///
    /// Empty when the square is off the board, empty or holds an opposing
    /// piece, and when another piece has a compulsory capture this one
    /// cannot match.
    #[must_use]
    pub fn legal_moves_from(&self, turn: Color, origin: Square) -> MoveList {
        let mut moves = MoveList::new();
        if origin.checked().is_err() {
            return moves;
        }
        let Some(piece) = self.piece_at(origin) else {
            return moves;
        };
        if piece.color != turn {
            return moves;
        }

        if self.has_capture(turn) {
            self.captures_from(origin, piece, &mut moves);
        } else {
            self.simple_moves_from(origin, piece, &mut moves);
        }
        moves
    }

    /// Returns true if any piece of `turn` has a jump available.
    #[must_use]
    pub fn has_capture(&self, turn: Color) -> bool {
        self.pieces(turn).any(|(sq, piece)| {
            piece
                .directions()
                .iter()
                .any(|&dir| self.jump_in(sq, piece, dir).is_some())
        })
    }

    /// Returns true if `turn` can make any move at all.
    #[must_use]
    pub fn has_legal_moves(&self, turn: Color) -> bool {
        self.has_capture(turn)
            || self.pieces(turn).any(|(sq, piece)| {
                piece
                    .directions()
                    .iter()
                    .any(|&dir| sq.offset(dir, 1).is_some_and(|to| self.is_empty(to)))
            })
    }

    /// Checks that `seq` is legal for `turn` without applying it.
    pub fn check_move(&self, turn: Color, seq: &MoveSequence) -> Result<(), MoveError> {
        for &sq in seq.squares() {
            sq.checked()?;
        }
        let origin = seq.origin();
        let piece = self
            .piece_at(origin)
            .ok_or(MoveError::EmptyOrigin { square: origin })?;
        if piece.color != turn {
            return Err(MoveError::WrongSideToMove {
                square: origin,
                to_move: turn,
            });
        }
        if !self.legal_moves_from(turn, origin).contains(seq) {
            return Err(MoveError::IllegalSequence {
                notation: seq.to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn is_legal(&self, turn: Color, seq: &MoveSequence) -> bool {
        self.check_move(turn, seq).is_ok()
    }

    fn capture_moves(&self, turn: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (sq, piece) in self.pieces(turn) {
            self.captures_from(sq, piece, &mut moves);
        }
        moves
    }

    fn simple_moves(&self, turn: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (sq, piece) in self.pieces(turn) {
            self.simple_moves_from(sq, piece, &mut moves);
        }
        moves
    }

    fn simple_moves_from(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        for &dir in piece.directions() {
            if let Some(to) = from.offset(dir, 1) {
                if self.is_empty(to) {
                    moves.push(MoveSequence::step(from, to));
                }
            }
        }
    }

    /// Jumped and landing squares for a jump from `from` in direction `dir`.
    fn jump_in(&self, from: Square, piece: Piece, dir: (isize, isize)) -> Option<(Square, Square)> {
        let over = from.offset(dir, 1)?;
        let land = from.offset(dir, 2)?;
        let victim = self.piece_at(over)?;
        (victim.color != piece.color && self.is_empty(land)).then_some((over, land))
    }

    fn captures_from(&self, origin: Square, piece: Piece, moves: &mut MoveList) {
        let mut scratch = *self;
        let mut path = vec![origin];
        scratch.extend_chain(piece, &mut path, moves);
    }

    /// Depth-first search of jump chains continuing from the end of `path`.
    ///
    /// Each jump lifts the victim off the scratch board before recursing, so
    /// a piece can be taken at most once per chain and vacated squares
    /// (the origin included) count as empty landings. A path is recorded only
    /// when it cannot be extended.
    fn extend_chain(&mut self, piece: Piece, path: &mut Vec<Square>, moves: &mut MoveList) {
        let from = path[path.len() - 1];
        let mut extended = false;

        for &dir in piece.directions() {
            let Some((over, land)) = self.jump_in(from, piece, dir) else {
                continue;
            };
            extended = true;

            let victim = self.remove_piece(over);
            self.remove_piece(from);
            self.set_piece(land, piece);
            path.push(land);

            self.extend_chain(piece, path, moves);

            path.pop();
            self.remove_piece(land);
            self.set_piece(from, piece);
            if let Some(victim) = victim {
                self.set_piece(over, victim);
            }
        }

        if !extended && path.len() > 1 {
            moves.push(MoveSequence::from_path(path));
        }
    }
}
