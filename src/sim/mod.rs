//! Game simulation module
//!
//! All gameplay logic lives here. Transitions are pure functions of the
//! current state, the action, the rules and an injected RNG; no DOM or storage
//! access outside of `GameStateMachine`.

pub mod machine;
pub mod state;
pub mod transition;

pub use machine::GameStateMachine;
pub use state::{Feedback, GameState, GameStatus, Round, Score, UnknownFeedback};
pub use transition::{Action, Change, Verdict, advance_word, apply, compute_feedback, judge, transition};
