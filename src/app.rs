//! Top-level composition of a running game
//!
//! Front ends own exactly one `App`. It loads the best score once, runs
//! sessions, and records each win.

use crate::best_score::BestScore;
use crate::game::{GameSession, SecretSource, SessionState};
use crate::platform::Storage;
use crate::ui::Hud;

/// Session + best score, wired together
#[derive(Debug)]
pub struct App<S: SecretSource, T: Storage> {
    session: GameSession<S>,
    scores: BestScore<T>,
}

impl<S: SecretSource, T: Storage> App<S, T> {
    /// Load the best score from `storage` and start the first session
    pub fn new(secrets: S, storage: T) -> Self {
        let scores = BestScore::load(storage);
        let session = GameSession::new(secrets);
        Self { session, scores }
    }

    /// Begin a new session ("Play Again")
    pub fn start(&mut self) -> SessionState {
        self.session.start()
    }

    /// Submit a raw guess, recording the best score on a win
    pub fn submit(&mut self, raw: &str) -> SessionState {
        let was_over = self.session.is_over();
        let state = self.session.submit_guess(raw);

        // A finished session keeps reporting Won; only record the winning guess
        if let (false, Some(count)) = (was_over, state.won_in()) {
            let best = self.scores.record_if_better(count);
            log::info!("Won in {} guesses (best: {})", count, best);
        }

        state
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn best_score(&self) -> Option<u32> {
        self.scores.best()
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    pub fn hud(&self) -> Hud {
        Hud::new(&self.session.state(), self.scores.best())
    }
}
