//! Game sessions: the owned unit of mutable state.
//!
//! A [`GameSession`] holds one board, the side to move and an undo stack.
//! A [`SessionRegistry`] owns many sessions keyed by [`SessionId`], each
//! behind its own lock.

mod error;
mod registry;
mod session;

pub use error::GameError;
pub use registry::{PendingSearch, SessionId, SessionRegistry, SharedSession};
pub use session::{EngineMove, GameSession, GameStatus};
