//! Static evaluation: material only.

use super::{Board, Color};

impl Board {
    /// Material of one side, 3 per man and 5 per king.
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.pieces(color).map(|(_, piece)| piece.rank.value()).sum()
    }

    /// Material balance from `perspective`'s point of view.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        self.material(perspective) - self.material(perspective.opponent())
    }
}
