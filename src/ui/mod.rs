//! Rendering boundary
//!
//! `ViewModel` is everything a frontend needs to draw one frame. Frontends
//! rebuild it after every action and never read `GameState` directly.

use crate::sim::{Feedback, GameState};

/// Page heading
pub const TITLE: &str = "Welcome to Scramble.";

/// Label of the restart button shown once the game is over
pub const RESTART_LABEL: &str = "Play again?";

/// Message shown for a feedback value
pub fn feedback_message(feedback: Feedback) -> Option<&'static str> {
    match feedback {
        Feedback::None => None,
        Feedback::Pass => Some("⚠ You skipped. Next word."),
        Feedback::Win => Some("✅ Correct! Next word."),
        Feedback::Fail => Some("❌ Wrong. Try again."),
        Feedback::OverWin => Some("🎉 You won! Game Over."),
        Feedback::OverFail => Some("😩 You lost! Game Over."),
    }
}

/// Alert style class for a feedback value
pub fn feedback_class(feedback: Feedback) -> Option<&'static str> {
    match feedback {
        Feedback::None => None,
        Feedback::Pass => Some("alert-warning"),
        Feedback::Win => Some("alert-success"),
        Feedback::Fail => Some("alert-danger"),
        Feedback::OverWin => Some("alert-info"),
        Feedback::OverFail => Some("alert-secondary"),
    }
}

/// Feedback banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: &'static str,
    pub class: &'static str,
}

/// Display state for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Scrambled word, uppercased
    pub display_word: String,
    pub points: u32,
    pub strikes: u32,
    pub passes: u32,
    /// Current guess buffer
    pub guess: String,
    /// Feedback banner, hidden when `None`
    pub banner: Option<Banner>,
    pub input_enabled: bool,
    pub pass_enabled: bool,
    pub show_restart: bool,
    pub game_over: bool,
}

impl ViewModel {
    pub fn from_state(state: &GameState) -> Self {
        let game_over = state.game_over();
        let banner = feedback_message(state.feedback)
            .zip(feedback_class(state.feedback))
            .map(|(message, class)| Banner { message, class });

        Self {
            display_word: state.round.scrambled_word.to_uppercase(),
            points: state.score.points,
            strikes: state.score.strikes,
            passes: state.score.passes,
            guess: state.guess.clone(),
            banner,
            input_enabled: !game_over,
            pass_enabled: state.score.passes > 0 && !game_over,
            show_restart: game_over,
            game_over,
        }
    }

    /// Text of the pass button
    pub fn pass_label(&self) -> String {
        format!("{} Passes Remaining", self.passes)
    }
}
