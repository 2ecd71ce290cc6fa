//! Session state types
//!
//! Everything the presentation layer reads back after a guess lives here.

use serde::{Deserialize, Serialize};

/// Feedback for the most recent action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Feedback {
    /// Fresh session, waiting for the first guess
    #[default]
    Prompt,
    /// Last input was not a number in range (no turn consumed)
    Invalid,
    /// Last guess was below the secret
    TooLow,
    /// Last guess was above the secret
    TooHigh,
    /// Last guess hit the secret; session is over
    Won,
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Accepting guesses
    Active,
    /// Secret found, rejecting guesses until the next start
    Over,
}

/// Snapshot of a session after `start` or `submit_guess`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Counted guesses so far (invalid input never counts)
    pub guess_count: u32,
    /// True once the secret has been found
    pub is_over: bool,
    /// Feedback for the most recent action
    pub feedback: Feedback,
}

impl SessionState {
    /// State right after a session starts
    pub fn fresh() -> Self {
        Self {
            guess_count: 0,
            is_over: false,
            feedback: Feedback::Prompt,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_over {
            SessionPhase::Over
        } else {
            SessionPhase::Active
        }
    }

    /// Final guess count if this snapshot reports a win
    pub fn won_in(&self) -> Option<u32> {
        (self.feedback == Feedback::Won).then_some(self.guess_count)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::fresh()
    }
}
