//! Game session module
//!
//! All gameplay rules live here. This module must stay pure:
//! - Secrets come from a `SecretSource` only
//! - No storage, DOM, or terminal dependencies
//! - Persistence is the caller's job (see `crate::app`)

pub mod guess;
pub mod secret;
pub mod session;
pub mod state;

pub use guess::{InvalidGuess, parse_guess};
pub use secret::{ScriptedSecrets, SecretSource, SeededSecrets};
pub use session::GameSession;
pub use state::{Feedback, SessionPhase, SessionState};
