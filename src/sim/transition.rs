//! State transitions
//!
//! Every player action runs to completion here before the next one is handled.
//! Actions that are not allowed in the current state are silently ignored.

use rand::Rng;

use super::state::{Feedback, GameState, GameStatus, Round, Score};
use crate::settings::Rules;
use crate::words_match;

/// A player action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the guess buffer (typing)
    SetGuess(String),
    /// Submit a guess for the current word
    SubmitGuess(String),
    /// Spend a pass on the current word
    Skip,
    /// Start over
    Restart,
}

/// How a guess was judged (the transient round outcome)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// What an action did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Not allowed right now, state untouched
    Ignored,
    /// Only the guess buffer changed
    GuessEdited,
    /// A guess or skip was played (snapshot must be written)
    Played,
    /// New game (snapshot must be cleared)
    Restarted,
}

/// Judge a guess against the round (case-insensitive)
pub fn judge(round: &Round, guess: &str) -> Verdict {
    if words_match(guess, &round.original_word) {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

/// Derive feedback from the score and pool as they were before the transition.
///
/// The strike check comes first: a player already one strike from the limit
/// ends the game on `OverFail`, even with a correct guess on the last word.
pub fn compute_feedback(
    before: &Score,
    words_remaining: usize,
    trigger: Feedback,
    rules: &Rules,
) -> Feedback {
    if before.strikes.saturating_add(1) >= rules.max_strikes {
        return Feedback::OverFail;
    }
    if words_remaining == 1 && trigger == Feedback::Win {
        return Feedback::OverWin;
    }
    trigger
}

/// Move to the next word. The last word is never removed.
pub fn advance_word<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    if state.words.len() <= 1 {
        return;
    }
    let current = &state.round.original_word;
    state.words.retain(|w| w != current);
    if let Some(next) = state.words.first() {
        state.round = Round::new(next, rng);
    }
}

/// Apply an action in place
pub fn apply<R: Rng + ?Sized>(
    state: &mut GameState,
    action: &Action,
    rules: &Rules,
    rng: &mut R,
) -> Change {
    match action {
        Action::SetGuess(text) => {
            if state.status != GameStatus::Playing {
                return Change::Ignored;
            }
            state.guess.clone_from(text);
            Change::GuessEdited
        }
        Action::SubmitGuess(text) => submit_guess(state, text, rules, rng),
        Action::Skip => skip(state, rng),
        Action::Restart => {
            *state = GameState::new(rules, rng);
            Change::Restarted
        }
    }
}

/// Pure transition: return the state after `action`
pub fn transition<R: Rng + ?Sized>(
    state: &GameState,
    action: &Action,
    rules: &Rules,
    rng: &mut R,
) -> GameState {
    let mut next = state.clone();
    apply(&mut next, action, rules, rng);
    next
}

fn submit_guess<R: Rng + ?Sized>(
    state: &mut GameState,
    guess: &str,
    rules: &Rules,
    rng: &mut R,
) -> Change {
    if state.status != GameStatus::Playing {
        return Change::Ignored;
    }

    let before = state.score;
    let remaining = state.words.len();

    let trigger = match judge(&state.round, guess) {
        Verdict::Correct => {
            state.score.points = state.score.points.saturating_add(1);
            advance_word(state, rng);
            Feedback::Win
        }
        Verdict::Incorrect => {
            state.score.strikes += 1;
            Feedback::Fail
        }
    };

    state.feedback = compute_feedback(&before, remaining, trigger, rules);
    state.status = GameStatus::from_feedback(state.feedback);
    state.guess.clear();
    Change::Played
}

fn skip<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Change {
    if state.status != GameStatus::Playing || state.score.passes == 0 {
        return Change::Ignored;
    }
    state.score.passes -= 1;
    state.feedback = Feedback::Pass;
    advance_word(state, rng);
    Change::Played
}
