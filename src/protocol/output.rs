//! Reply formatting for the text protocol.

use crate::board::{Board, Color, MoveSequence};
use crate::game::{EngineMove, GameStatus};

#[must_use]
pub fn format_board(board: &Board, turn: Color) -> String {
    format!("board {}", board.to_diagram(turn))
}

/// `moves` followed by each sequence; a bare `moves` when there are none.
#[must_use]
pub fn format_moves(moves: &[MoveSequence]) -> String {
    let mut out = String::from("moves");
    for seq in moves {
        out.push(' ');
        out.push_str(&seq.to_string());
    }
    out
}

#[must_use]
pub fn format_played(seq: &MoveSequence) -> String {
    format!("played {seq}")
}

#[must_use]
pub fn format_bestmove(mv: &EngineMove) -> String {
    let mut out = format!(
        "bestmove {} score {} nodes {}",
        mv.sequence, mv.score, mv.stats.nodes
    );
    if !mv.completed {
        out.push_str(" partial");
    }
    out
}

#[must_use]
pub fn format_status(status: GameStatus) -> String {
    format!("status {status}")
}

#[must_use]
pub fn format_error(message: &str) -> String {
    format!("error {message}")
}
