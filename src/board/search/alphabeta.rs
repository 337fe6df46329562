use std::time::Instant;

use super::{SearchLimits, SearchResult, SearchStats, WIN_SCORE};
use crate::board::{Board, Color, MoveSequence};

const INFINITY: i32 = 30_000;

/// Deadline is checked once per this many nodes, the stop flag at every node.
const TIME_CHECK_INTERVAL: u64 = 256;

/// Search context for a single search
pub(super) struct Searcher<'a> {
    /// Private copy; make/unmake happens here
    board: Board,
    /// The maximizing side
    root: Color,
    limits: &'a SearchLimits,
    stats: SearchStats,
    aborted: bool,
}

impl<'a> Searcher<'a> {
    pub(super) fn new(board: &Board, root: Color, limits: &'a SearchLimits) -> Self {
        Searcher {
            board: *board,
            root,
            limits,
            stats: SearchStats::default(),
            aborted: false,
        }
    }

    pub(super) fn search_root(&mut self, depth: u32) -> SearchResult {
        self.stats.nodes += 1;
        let static_eval = self.board.evaluate(self.root);

        let moves = if self.board.eliminated_side().is_some() {
            Vec::new()
        } else {
            self.board.legal_moves(self.root)
        };
        if moves.is_empty() {
            return self.finish(None, static_eval, depth);
        }

        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<(&MoveSequence, i32)> = None;

        for mv in &moves {
            let Some(info) = self.board.make_move(mv) else {
                continue;
            };
            let score = self.minimax(self.root.opponent(), depth - 1, 1, alpha, beta);
            self.board.unmake_move(mv, info);

            if self.aborted {
                break;
            }
            engine_trace!("root move {mv} scored {score}");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        match best {
            Some((mv, score)) => self.finish(Some(mv.clone()), score, depth),
            // Cut off before the first root move finished.
            None => self.finish(moves.first().cloned(), static_eval, depth),
        }
    }

    /// Minimax value of the current board with `turn` to move, from the
    /// root side's point of view.
    fn minimax(
        &mut self,
        turn: Color,
        depth: u32,
        ply: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if self.should_stop() {
            self.aborted = true;
            return self.board.evaluate(self.root);
        }
        if depth == 0 || self.board.eliminated_side().is_some() {
            return self.board.evaluate(self.root);
        }

        let maximizing = turn == self.root;
        let moves = self.board.legal_moves(turn);
        if moves.is_empty() {
            let blocked = WIN_SCORE - ply;
            return if maximizing { -blocked } else { blocked };
        }

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in &moves {
            let Some(info) = self.board.make_move(mv) else {
                continue;
            };
            let score = self.minimax(turn.opponent(), depth - 1, ply + 1, alpha, beta);
            self.board.unmake_move(mv, info);

            if self.aborted {
                return best;
            }
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    fn should_stop(&self) -> bool {
        if self.limits.stop.as_ref().is_some_and(|s| s.is_stopped()) {
            return true;
        }
        match self.limits.deadline {
            Some(deadline) if self.stats.nodes % TIME_CHECK_INTERVAL == 0 => {
                Instant::now() >= deadline
            }
            _ => false,
        }
    }

    fn finish(&self, best_move: Option<MoveSequence>, score: i32, depth: u32) -> SearchResult {
        SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats,
            completed: !self.aborted,
        }
    }
}
