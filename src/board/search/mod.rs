//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! - Material-only evaluation from the root side's point of view
//! - Terminal at depth 0 or when either side has no pieces left
//! - A side with pieces but no legal move loses at interior nodes
//! - Optional deadline and stop flag, polled at every node
//!
//! The caller's board is never touched: the search copies it once and uses
//! make/unmake on the copy.

mod alphabeta;

use std::time::{Duration, Instant};

use crate::sync::StopFlag;

use super::{Board, Color, MoveSequence};

/// Score magnitude of a side that cannot move, before ply adjustment.
pub const WIN_SCORE: i32 = 10_000;

/// Bounds on one search.
#[derive(Clone, Debug)]
pub struct SearchLimits {
    /// Plies to search; 0 is treated as 1
    pub depth: u32,
    /// Wall-clock cutoff
    pub deadline: Option<Instant>,
    /// External abort signal
    pub stop: Option<StopFlag>,
}

impl SearchLimits {
    /// Pure fixed-depth search.
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchLimits {
            depth,
            deadline: None,
            stop: None,
        }
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline `limit` from now.
    #[must_use]
    pub fn with_time_limit(self, limit: Duration) -> Self {
        self.with_deadline(Instant::now() + limit)
    }

    #[must_use]
    pub fn with_stop(mut self, stop: StopFlag) -> Self {
        self.stop = Some(stop);
        self
    }
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Outcome of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best sequence for the side to move, `None` if it has no legal move
    /// or the game is already decided
    pub best_move: Option<MoveSequence>,
    /// Evaluation of `best_move` from the searching side's point of view
    pub score: i32,
    pub depth: u32,
    pub stats: SearchStats,
    /// False if a deadline or stop flag cut the search short
    pub completed: bool,
}

/// Find the best move for `turn` on `board`.
///
/// Among equally scored moves the first in generation order wins.
#[must_use]
pub fn find_best_move(board: &Board, turn: Color, limits: &SearchLimits) -> SearchResult {
    let depth = limits.depth.max(1);
    engine_debug!("search start: {turn} to move, depth {depth}");

    let mut searcher = alphabeta::Searcher::new(board, turn, limits);
    let result = searcher.search_root(depth);

    match &result.best_move {
        Some(mv) => engine_debug!(
            "search done: best {mv} score {} nodes {} cutoffs {}{}",
            result.score,
            result.stats.nodes,
            result.stats.cutoffs,
            if result.completed { "" } else { " (aborted)" }
        ),
        None => engine_debug!("search done: {turn} has no move"),
    }
    result
}
