//! Capital Scramble - a word-scramble game for the browser
//!
//! Core modules:
//! - `sim`: Game state machine (rounds, scoring, feedback)
//! - `shuffle`: Fisher-Yates scrambling of words
//! - `persistence`: Key-value storage port and session snapshots
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Data-driven game rules
//! - `ui`: View model and DOM frontend

pub mod persistence;
pub mod platform;
pub mod settings;
pub mod shuffle;
pub mod sim;
pub mod ui;

pub use persistence::{KeyValueStore, MemoryStore, Snapshot, StoreError};
pub use settings::Rules;
pub use shuffle::{shuffle, shuffle_str};
pub use sim::{Action, Feedback, GameState, GameStateMachine, GameStatus, Round, Score};
pub use ui::ViewModel;

/// Game configuration constants
pub mod consts {
    /// Wrong guesses allowed before the game is lost
    pub const MAX_STRIKES: u32 = 3;
    /// Passes granted at the start of every game
    pub const STARTING_PASSES: u32 = 3;

    /// Words played, in order
    pub const WORLD_CAPITALS: [&str; 9] = [
        "Tokyo", "Paris", "London", "Berlin", "Madrid", "Rome", "Ottawa", "Beijing", "Moscow",
    ];
}

/// Case-insensitive word comparison used for guesses
#[inline]
pub fn words_match(guess: &str, target: &str) -> bool {
    guess.to_lowercase() == target.to_lowercase()
}

/// True if `a` is a rearrangement of the characters of `b`
pub fn is_char_permutation(a: &str, b: &str) -> bool {
    let mut a: Vec<char> = a.chars().collect();
    let mut b: Vec<char> = b.chars().collect();
    if a.len() != b.len() {
        return false;
    }
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
