//! Guess the Number - a single-page number guessing game
//!
//! Core modules:
//! - `game`: Session rules (secret draw, guess parsing, feedback)
//! - `best_score`: Best score tracking persisted through `platform::storage`
//! - `platform`: Browser/native platform abstraction
//! - `app`: Composition of session + best score owned by the front end
//! - `ui`: HUD view model (feedback text, labels, control state)

pub mod app;
pub mod best_score;
pub mod game;
pub mod platform;
pub mod ui;

pub use app::App;
pub use best_score::BestScore;
pub use game::{Feedback, GameSession, SessionState};

/// Game configuration constants
pub mod consts {
    /// Smallest accepted guess (and smallest possible secret)
    pub const MIN_GUESS: u32 = 1;
    /// Largest accepted guess (and largest possible secret)
    pub const MAX_GUESS: u32 = 100;

    /// Storage key for the best score (JSON-encoded integer)
    pub const HIGH_SCORE_KEY: &str = "guessTheNumberHighScore";

    /// Directory name under the platform data dir (native only)
    pub const APP_DIR_NAME: &str = "guess-the-number";
}
