//! Applying and reverting move sequences.

use super::error::MoveError;
use super::{Board, Color, MoveSequence, UnmakeInfo};

impl Board {
    /// Validate `seq` for `turn` and apply it.
    ///
    /// Either the whole sequence is committed or the board is untouched.
    pub fn play(&mut self, turn: Color, seq: &MoveSequence) -> Result<UnmakeInfo, MoveError> {
        self.check_move(turn, seq)?;
        self.make_move(seq).ok_or(MoveError::EmptyOrigin {
            square: seq.origin(),
        })
    }

    /// Apply a sequence produced by the move generator.
    ///
    /// Jumped pieces are removed, the mover lands on the final square and a
    /// man ending on its promotion row is crowned. Promotion is decided once,
    /// after the whole chain. Returns `None` (board unchanged) if the origin
    /// is empty.
    pub(crate) fn make_move(&mut self, seq: &MoveSequence) -> Option<UnmakeInfo> {
        let moved = self.remove_piece(seq.origin())?;

        let mut captured = Vec::new();
        for (from, to) in seq.steps() {
            if let Some(over) = from.jumped_square(to) {
                if let Some(victim) = self.remove_piece(over) {
                    captured.push((over, victim));
                }
            }
        }

        let dest = seq.destination();
        let promoted = moved.is_man() && dest.row() == moved.color.promotion_row();
        let landed = if promoted { moved.crowned() } else { moved };
        self.set_piece(dest, landed);

        Some(UnmakeInfo {
            moved,
            captured,
            promoted,
        })
    }

    /// Reverse a `make_move` of the same sequence.
    pub(crate) fn unmake_move(&mut self, seq: &MoveSequence, info: UnmakeInfo) {
        // Destination first: a king's chain may end where it started.
        self.remove_piece(seq.destination());
        for (sq, piece) in info.captured {
            self.set_piece(sq, piece);
        }
        self.set_piece(seq.origin(), info.moved);
    }
}
