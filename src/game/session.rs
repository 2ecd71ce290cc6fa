//! Game session rules
//!
//! A session is either Active (accepting guesses) or Over (secret found).
//! `start` is the only way back to Active; a winning guess is the only way
//! into Over.

use std::cmp::Ordering;

use super::guess::{InvalidGuess, parse_guess};
use super::secret::{SecretSource, SeededSecrets};
use super::state::{Feedback, SessionPhase, SessionState};
use crate::consts::{MAX_GUESS, MIN_GUESS};

/// One guess-the-number session plus the source of future secrets
#[derive(Debug, Clone)]
pub struct GameSession<S: SecretSource = SeededSecrets> {
    source: S,
    secret: u32,
    state: SessionState,
}

impl<S: SecretSource> GameSession<S> {
    /// Create a session and immediately start it
    pub fn new(source: S) -> Self {
        let mut session = Self {
            source,
            secret: MIN_GUESS,
            state: SessionState::fresh(),
        };
        session.start();
        session
    }

    /// Draw a fresh secret and reset counters
    pub fn start(&mut self) -> SessionState {
        self.secret = self.source.draw().clamp(MIN_GUESS, MAX_GUESS);
        self.state = SessionState::fresh();
        log::info!("New session started");
        self.state
    }

    /// Apply one raw guess from the input field
    ///
    /// Blank input and guesses after a win are ignored. Anything that is not
    /// a number in range sets `Feedback::Invalid` without using a turn.
    pub fn submit_guess(&mut self, raw: &str) -> SessionState {
        if self.state.phase() == SessionPhase::Over {
            log::debug!("Guess ignored, session is over");
            return self.state;
        }

        let guess = match parse_guess(raw) {
            Ok(guess) => guess,
            Err(InvalidGuess::Empty) => return self.state,
            Err(err) => {
                log::debug!("Rejected guess {:?}: {}", raw, err);
                self.state.feedback = Feedback::Invalid;
                return self.state;
            }
        };

        self.state.guess_count += 1;
        self.state.feedback = match guess.cmp(&self.secret) {
            Ordering::Equal => {
                self.state.is_over = true;
                log::info!("Secret found in {} guesses", self.state.guess_count);
                Feedback::Won
            }
            Ordering::Less => Feedback::TooLow,
            Ordering::Greater => Feedback::TooHigh,
        };
        log::debug!(
            "Guess #{}: {} -> {:?}",
            self.state.guess_count,
            guess,
            self.state.feedback
        );

        self.state
    }

    /// Current snapshot
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.phase() == SessionPhase::Over
    }

    /// The secret for this session (revealed by front ends on quit)
    pub fn secret(&self) -> u32 {
        self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedSecrets;
    use proptest::prelude::*;

    fn session_with_secret(secret: u32) -> GameSession<ScriptedSecrets> {
        GameSession::new(ScriptedSecrets::fixed(secret))
    }

    #[test]
    fn test_start_resets_state() {
        let mut session = session_with_secret(42);
        assert_eq!(session.state(), SessionState::fresh());

        session.submit_guess("10");
        assert_eq!(session.state().phase(), SessionPhase::Active);
        session.submit_guess("42");
        assert!(session.is_over());
        assert_eq!(session.state().phase(), SessionPhase::Over);

        let state = session.start();
        assert_eq!(state.phase(), SessionPhase::Active);
        assert_eq!(state.guess_count, 0);
        assert!(!state.is_over);
        assert_eq!(state.feedback, Feedback::Prompt);
    }

    #[test]
    fn test_scenario_secret_42() {
        let mut session = session_with_secret(42);

        let state = session.submit_guess("50");
        assert_eq!(state.feedback, Feedback::TooHigh);
        assert_eq!(state.guess_count, 1);

        let state = session.submit_guess("10");
        assert_eq!(state.feedback, Feedback::TooLow);
        assert_eq!(state.guess_count, 2);

        let state = session.submit_guess("42");
        assert_eq!(state.feedback, Feedback::Won);
        assert_eq!(state.guess_count, 3);
        assert!(state.is_over);
        assert_eq!(state.won_in(), Some(3));
    }

    #[test]
    fn test_invalid_input_does_not_count() {
        let mut session = session_with_secret(42);

        for raw in ["abc", "150", "0", "-3"] {
            let state = session.submit_guess(raw);
            assert_eq!(state.feedback, Feedback::Invalid, "input {:?}", raw);
            assert_eq!(state.guess_count, 0);
        }
    }

    #[test]
    fn test_blank_input_is_noop() {
        let mut session = session_with_secret(42);
        session.submit_guess("50");
        let before = session.state();

        assert_eq!(session.submit_guess(""), before);
        assert_eq!(session.submit_guess("   "), before);
        assert_eq!(session.state().feedback, Feedback::TooHigh);
    }

    #[test]
    fn test_guesses_after_win_are_ignored() {
        let mut session = session_with_secret(7);
        let won = session.submit_guess("7");
        assert_eq!(won.won_in(), Some(1));

        assert_eq!(session.submit_guess("50"), won);
        assert_eq!(session.submit_guess("abc"), won);
        assert_eq!(session.submit_guess("7"), won);
    }

    #[test]
    fn test_secret_fixed_until_restart() {
        let mut session = GameSession::new(ScriptedSecrets::new(vec![10, 90]));
        assert_eq!(session.secret(), 10);
        session.submit_guess("50");
        session.submit_guess("abc");
        assert_eq!(session.secret(), 10);

        session.start();
        assert_eq!(session.secret(), 90);
    }

    #[test]
    fn test_out_of_range_source_is_clamped() {
        let session = GameSession::new(ScriptedSecrets::fixed(500));
        assert_eq!(session.secret(), MAX_GUESS);

        let session = GameSession::new(ScriptedSecrets::fixed(0));
        assert_eq!(session.secret(), MIN_GUESS);
    }

    #[test]
    fn test_seeded_session_is_reproducible() {
        let a = GameSession::new(SeededSecrets::new(2024));
        let b = GameSession::new(SeededSecrets::new(2024));
        assert_eq!(a.secret(), b.secret());
    }

    proptest! {
        #[test]
        fn prop_direction_matches_secret(secret in 1u32..=100, guess in 1u32..=100) {
            prop_assume!(guess != secret);
            let mut session = session_with_secret(secret);
            let state = session.submit_guess(&guess.to_string());
            let expected = if guess < secret { Feedback::TooLow } else { Feedback::TooHigh };
            prop_assert_eq!(state.feedback, expected);
            prop_assert!(!state.is_over);
        }

        #[test]
        fn prop_count_tracks_valid_guesses(
            secret in 1u32..=100,
            inputs in proptest::collection::vec(
                prop_oneof![
                    (1u32..=100).prop_map(|g| g.to_string()),
                    (101u32..1000).prop_map(|g| g.to_string()),
                    "[a-z]{1,5}",
                ],
                0..30,
            ),
        ) {
            let mut session = session_with_secret(secret);
            let mut expected = 0;
            for raw in &inputs {
                let before = session.state();
                let after = session.submit_guess(raw);
                if before.is_over {
                    prop_assert_eq!(after, before);
                    continue;
                }
                if parse_guess(raw).is_ok() {
                    expected += 1;
                }
                prop_assert_eq!(after.guess_count, expected);
            }
        }
    }
}
