//! Sessions keyed by id, one lock per session.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{find_best_move, Board, Color, SearchLimits, SearchResult};
use crate::config::EngineOptions;

use super::{EngineMove, GameError, GameSession};

/// Identifier handed out by [`SessionRegistry::create`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub type SharedSession = Arc<Mutex<GameSession>>;

/// Owns every active session.
///
/// The map lock is held only to look sessions up; each session has its own
/// lock so games never wait on each other.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, SharedSession>>,
    next_id: AtomicU64,
    options: EngineOptions,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl SessionRegistry {
    /// `options` seeds every session created afterwards.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        SessionRegistry {
            sessions: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            options,
        }
    }

    /// Start a game in the initial position.
    pub fn create(&self) -> SessionId {
        let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let session = GameSession::with_options(self.options.clone());
        self.sessions.lock().insert(id, Arc::new(Mutex::new(session)));
        engine_debug!("session {id} created");
        id
    }

    pub fn get(&self, id: SessionId) -> Result<SharedSession, GameError> {
        self.sessions
            .lock()
            .get(&id)
            .cloned()
            .ok_or(GameError::UnknownSession { id })
    }

    /// Returns false if no session had this id.
    pub fn remove(&self, id: SessionId) -> bool {
        self.sessions.lock().remove(&id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    /// Run `f` with exclusive access to one session.
    pub fn with_session<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut GameSession) -> R,
    ) -> Result<R, GameError> {
        let session = self.get(id)?;
        let mut guard = session.lock();
        Ok(f(&mut *guard))
    }

    /// Search without holding the session lock, then commit.
    ///
    /// The search runs on a copy of the board. If the session was mutated
    /// in the meantime the result is discarded with `SessionChanged`.
    pub fn engine_move(
        &self,
        id: SessionId,
        depth: Option<u32>,
    ) -> Result<Option<EngineMove>, GameError> {
        let pending = self.begin_search(id, depth)?;
        let result = pending.search();
        pending.commit(&result)
    }

    /// Snapshot a session for a search that runs without its lock.
    pub fn begin_search(
        &self,
        id: SessionId,
        depth: Option<u32>,
    ) -> Result<PendingSearch, GameError> {
        let session = self.get(id)?;
        let guard = session.lock();
        let depth = guard.options().resolve_depth(depth)?;
        let pending = PendingSearch {
            id,
            board: *guard.board(),
            turn: guard.turn(),
            generation: guard.generation(),
            limits: guard.options().search_limits(depth),
            session: Arc::clone(&session),
        };
        drop(guard);
        Ok(pending)
    }
}

/// A session snapshot taken by [`SessionRegistry::begin_search`].
pub struct PendingSearch {
    id: SessionId,
    session: SharedSession,
    board: Board,
    turn: Color,
    generation: u64,
    limits: SearchLimits,
}

impl PendingSearch {
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Limits the search will run with; add a stop flag here to make it
    /// cancellable.
    pub fn limits_mut(&mut self) -> &mut SearchLimits {
        &mut self.limits
    }

    /// Search the snapshot. No lock is held.
    #[must_use]
    pub fn search(&self) -> SearchResult {
        find_best_move(&self.board, self.turn, &self.limits)
    }

    /// Commit the search's move if the session is unchanged since the snapshot.
    pub fn commit(self, result: &SearchResult) -> Result<Option<EngineMove>, GameError> {
        let Some(sequence) = result.best_move.clone() else {
            return Ok(None);
        };

        let id = self.id;
        let mut guard = self.session.lock();
        if guard.generation() != self.generation {
            engine_debug!("session {id} changed during search, dropping {sequence}");
            return Err(GameError::SessionChanged { id });
        }
        guard.submit_move(&sequence)?;
        Ok(Some(EngineMove::from_search(sequence, result)))
    }
}
