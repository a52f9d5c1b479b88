//! Game sessions: the attempt and status state machine.
//!
//! - `GameSession`: owns config, secret, history and status
//! - `Attempt` / `Status`: history records and lifecycle
//! - `Rejection`: why an action was refused
//! - `SessionSnapshot`: serializable read-only view

pub mod state;
pub mod error;
pub mod game;
pub mod snapshot;

pub use state::{Attempt, Status};
pub use error::Rejection;
pub use game::GameSession;
pub use snapshot::SessionSnapshot;
