//! One game: board, side to move and undo history.

use std::fmt;

use crate::board::{find_best_move, Board, Color, MoveList, MoveSequence, SearchResult, SearchStats, Square};
use crate::config::EngineOptions;

use super::GameError;

/// Outcome by piece count alone.
///
/// A side that still has pieces but no legal move is reported as
/// `InProgress`; use [`Board::has_legal_moves`] to detect that case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    WhiteWins,
    BlackWins,
    InProgress,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::WhiteWins => write!(f, "white-wins"),
            GameStatus::BlackWins => write!(f, "black-wins"),
            GameStatus::InProgress => write!(f, "in-progress"),
        }
    }
}

/// A move chosen by the engine and committed to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineMove {
    pub sequence: MoveSequence,
    pub score: i32,
    pub stats: SearchStats,
    pub completed: bool,
}

impl EngineMove {
    pub(crate) fn from_search(sequence: MoveSequence, result: &SearchResult) -> Self {
        EngineMove {
            sequence,
            score: result.score,
            stats: result.stats,
            completed: result.completed,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Snapshot {
    board: Board,
    turn: Color,
}

/// Board, turn and history for one game.
///
/// Every mutation goes through a legality check first; a rejected call
/// leaves the session untouched.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    turn: Color,
    history: Vec<Snapshot>,
    options: EngineOptions,
    generation: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    #[must_use]
    pub fn with_options(options: EngineOptions) -> Self {
        GameSession {
            board: Board::new(),
            turn: Color::White,
            history: Vec::new(),
            options,
            generation: 0,
        }
    }

    /// Back to the starting position with White to move and no history.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Color::White;
        self.history.clear();
        self.generation += 1;
        engine_debug!("session reset");
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut EngineOptions {
        &mut self.options
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Bumped on every mutation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Diagram of the current position.
    #[must_use]
    pub fn diagram(&self) -> String {
        self.board.to_diagram(self.turn)
    }

    /// Replace the board and side to move with a caller snapshot.
    ///
    /// History is kept, so `undo` after a later move can walk back past the
    /// resync into server-held positions.
    pub fn load_position(&mut self, board: Board, turn: Color) -> Result<(), GameError> {
        board.validate()?;
        self.board = board;
        self.turn = turn;
        self.generation += 1;
        engine_debug!("position loaded: {}", self.diagram());
        Ok(())
    }

    /// Parse and load a wire snapshot of cell codes.
    pub fn load_rows<R: AsRef<[i8]>>(&mut self, rows: &[R], turn: Color) -> Result<(), GameError> {
        let board = Board::from_rows(rows)?;
        self.load_position(board, turn)
    }

    /// Legal sequences for the side to move, optionally from one square only.
    #[must_use]
    pub fn legal_moves(&self, origin: Option<Square>) -> MoveList {
        match origin {
            Some(sq) => self.board.legal_moves_from(self.turn, sq),
            None => self.board.legal_moves(self.turn),
        }
    }

    /// Legal sequences from raw coordinates; off-board squares yield none.
    #[must_use]
    pub fn legal_moves_at(&self, row: i64, col: i64) -> MoveList {
        match Square::try_from((row, col)) {
            Ok(sq) => self.legal_moves(Some(sq)),
            Err(_) => MoveList::new(),
        }
    }

    /// Validate and commit a move for the side to move.
    pub fn submit_move(&mut self, seq: &MoveSequence) -> Result<&Board, GameError> {
        let before = Snapshot {
            board: self.board,
            turn: self.turn,
        };
        self.board.play(self.turn, seq)?;
        self.history.push(before);
        self.turn = self.turn.opponent();
        self.generation += 1;
        engine_debug!("{} played {seq}", before.turn);
        Ok(&self.board)
    }

    /// Restore the board and turn from before the last committed move.
    pub fn undo(&mut self) -> Result<&Board, GameError> {
        let Snapshot { board, turn } = self.history.pop().ok_or(GameError::EmptyHistory)?;
        self.board = board;
        self.turn = turn;
        self.generation += 1;
        engine_debug!("undo, {turn} to move");
        Ok(&self.board)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.board.eliminated_side() {
            Some(Color::White) => GameStatus::BlackWins,
            Some(Color::Black) => GameStatus::WhiteWins,
            None => GameStatus::InProgress,
        }
    }

    /// Search the current position without committing anything.
    pub fn think(&self, depth: Option<u32>) -> Result<SearchResult, GameError> {
        let depth = self.options.resolve_depth(depth)?;
        let limits = self.options.search_limits(depth);
        Ok(find_best_move(&self.board, self.turn, &limits))
    }

    /// Search for the side to move and commit the chosen move.
    ///
    /// `Ok(None)` when that side has no legal move or the game is decided.
    pub fn engine_move(&mut self, depth: Option<u32>) -> Result<Option<EngineMove>, GameError> {
        let result = self.think(depth)?;
        let Some(sequence) = result.best_move.clone() else {
            return Ok(None);
        };
        self.submit_move(&sequence)?;
        Ok(Some(EngineMove::from_search(sequence, &result)))
    }
}
