//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal move generation and forced captures
//! - `make_unmake.rs` - Move application, promotion and undo
//! - `search.rs` - Alpha-beta search results and limits
//! - `edge_cases.rs` - Corners, blocked sides and unusual geometry
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;

use crate::board::{Board, MoveSequence, Square};

/// Build a sequence from coordinate pairs.
pub(super) fn seq(coords: &[(usize, usize)]) -> MoveSequence {
    let squares = coords.iter().map(|&(r, c)| Square(r, c)).collect();
    MoveSequence::new(squares).expect("at least two squares")
}

/// Total number of pieces on the board.
pub(super) fn piece_total(board: &Board) -> usize {
    Square::all().filter(|&sq| !board.is_empty(sq)).count()
}
