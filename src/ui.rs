//! HUD view model
//!
//! Turns session state into the text and control flags the front ends
//! render. Colors and layout stay in the page stylesheet; the tone only
//! names which class to apply.

use crate::consts::{MAX_GUESS, MIN_GUESS};
use crate::game::{Feedback, SessionPhase, SessionState};

/// Visual category of a feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Info,
    Error,
    Hint,
    Success,
}

impl FeedbackTone {
    pub fn of(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Prompt => FeedbackTone::Info,
            Feedback::Invalid => FeedbackTone::Error,
            Feedback::TooLow | Feedback::TooHigh => FeedbackTone::Hint,
            Feedback::Won => FeedbackTone::Success,
        }
    }

    /// CSS class for the feedback element
    pub fn css_class(&self) -> &'static str {
        match self {
            FeedbackTone::Info => "feedback-info",
            FeedbackTone::Error => "feedback-error",
            FeedbackTone::Hint => "feedback-hint",
            FeedbackTone::Success => "feedback-success",
        }
    }

    pub const ALL: [FeedbackTone; 4] = [
        FeedbackTone::Info,
        FeedbackTone::Error,
        FeedbackTone::Hint,
        FeedbackTone::Success,
    ];
}

/// Human-readable feedback line
pub fn feedback_message(state: &SessionState) -> String {
    match state.feedback {
        Feedback::Prompt => format!("Guess a number between {} and {}.", MIN_GUESS, MAX_GUESS),
        Feedback::Invalid => format!(
            "Please enter a valid number between {} and {}.",
            MIN_GUESS, MAX_GUESS
        ),
        Feedback::TooLow => "Too low! Try again.".to_string(),
        Feedback::TooHigh => "Too high! Try again.".to_string(),
        Feedback::Won => format!("You got it in {} guesses!", state.guess_count),
    }
}

/// Best score display ("-" before the first win)
pub fn best_score_label(best: Option<u32>) -> String {
    best.map(|b| b.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Everything the front end needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub feedback: String,
    pub tone: FeedbackTone,
    pub guess_count: u32,
    pub best_score: String,
    /// Guess input accepts text (false once the secret is found)
    pub input_enabled: bool,
    /// Show "Play Again" in place of "Submit Guess"
    pub show_play_again: bool,
}

impl Hud {
    pub fn new(state: &SessionState, best: Option<u32>) -> Self {
        let over = state.phase() == SessionPhase::Over;
        Self {
            feedback: feedback_message(state),
            tone: FeedbackTone::of(state.feedback),
            guess_count: state.guess_count,
            best_score: best_score_label(best),
            input_enabled: !over,
            show_play_again: over,
        }
    }
}

/// Whether the input field should be cleared after a submission
///
/// Counted guesses clear it; rejected input stays so it can be fixed.
pub fn clears_input(before: &SessionState, after: &SessionState) -> bool {
    after.guess_count > before.guess_count
}

/// Submit is only enabled with something typed in
pub fn submit_enabled(raw: &str, state: &SessionState) -> bool {
    !raw.is_empty() && state.phase() == SessionPhase::Active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(guess_count: u32, feedback: Feedback) -> SessionState {
        SessionState {
            guess_count,
            is_over: feedback == Feedback::Won,
            feedback,
        }
    }

    #[test]
    fn test_feedback_messages() {
        assert_eq!(
            feedback_message(&SessionState::fresh()),
            "Guess a number between 1 and 100."
        );
        assert_eq!(
            feedback_message(&state(0, Feedback::Invalid)),
            "Please enter a valid number between 1 and 100."
        );
        assert_eq!(feedback_message(&state(2, Feedback::TooLow)), "Too low! Try again.");
        assert_eq!(feedback_message(&state(2, Feedback::TooHigh)), "Too high! Try again.");
        assert_eq!(
            feedback_message(&state(3, Feedback::Won)),
            "You got it in 3 guesses!"
        );
    }

    #[test]
    fn test_tones() {
        assert_eq!(FeedbackTone::of(Feedback::Prompt), FeedbackTone::Info);
        assert_eq!(FeedbackTone::of(Feedback::Invalid), FeedbackTone::Error);
        assert_eq!(FeedbackTone::of(Feedback::TooLow), FeedbackTone::Hint);
        assert_eq!(FeedbackTone::of(Feedback::TooHigh), FeedbackTone::Hint);
        assert_eq!(FeedbackTone::of(Feedback::Won), FeedbackTone::Success);
    }

    #[test]
    fn test_best_score_label() {
        assert_eq!(best_score_label(None), "-");
        assert_eq!(best_score_label(Some(4)), "4");
    }

    #[test]
    fn test_hud_for_active_and_won() {
        let hud = Hud::new(&state(1, Feedback::TooHigh), None);
        assert!(hud.input_enabled);
        assert!(!hud.show_play_again);
        assert_eq!(hud.best_score, "-");
        assert_eq!(hud.guess_count, 1);

        let hud = Hud::new(&state(5, Feedback::Won), Some(5));
        assert!(!hud.input_enabled);
        assert!(hud.show_play_again);
        assert_eq!(hud.best_score, "5");
        assert_eq!(hud.tone, FeedbackTone::Success);
    }

    #[test]
    fn test_input_clearing_and_submit() {
        let before = state(1, Feedback::TooLow);
        assert!(clears_input(&before, &state(2, Feedback::TooHigh)));
        assert!(!clears_input(&before, &state(1, Feedback::Invalid)));

        assert!(!submit_enabled("", &before));
        assert!(submit_enabled("12", &before));
        assert!(!submit_enabled("12", &state(3, Feedback::Won)));
    }
}
