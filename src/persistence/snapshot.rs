//! Session snapshot
//!
//! Mirrors the game state under fixed storage keys as plain strings, so the
//! stored session stays readable from browser dev tools.

use rand::Rng;

use super::{KeyValueStore, StoreError};
use crate::settings::{Rules, is_valid_word_list};
use crate::shuffle::shuffle_str;
use crate::sim::{Feedback, GameState, GameStatus, Round, Score};
use crate::is_char_permutation;

/// Storage keys
pub mod keys {
    pub const WORDS: &str = "words";
    pub const ORIGINAL_WORD: &str = "originalWord";
    pub const CURRENT_WORD: &str = "currentWord";
    pub const POINTS: &str = "points";
    pub const STRIKES: &str = "strikes";
    pub const PASSES: &str = "passes";
    pub const FEEDBACK: &str = "feedback";

    /// Every key a snapshot owns
    pub const ALL: [&str; 7] = [WORDS, ORIGINAL_WORD, CURRENT_WORD, POINTS, STRIKES, PASSES, FEEDBACK];
}

/// Persisted view of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub words: Vec<String>,
    pub original_word: String,
    pub current_word: String,
    pub points: u32,
    pub strikes: u32,
    pub passes: u32,
    pub feedback: Feedback,
}

impl Snapshot {
    /// Capture a game state
    pub fn from_state(state: &GameState) -> Self {
        Self {
            words: state.words.clone(),
            original_word: state.round.original_word.clone(),
            current_word: state.round.scrambled_word.clone(),
            points: state.score.points,
            strikes: state.score.strikes,
            passes: state.score.passes,
            feedback: state.feedback,
        }
    }

    /// Write every key. Keeps going after a failure and reports the first one.
    pub fn write<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        let words = serde_json::to_string(&self.words)
            .map_err(|e| StoreError::Rejected(e.to_string()))?;
        let entries = [
            (keys::WORDS, words),
            (keys::ORIGINAL_WORD, self.original_word.clone()),
            (keys::CURRENT_WORD, self.current_word.clone()),
            (keys::POINTS, self.points.to_string()),
            (keys::STRIKES, self.strikes.to_string()),
            (keys::PASSES, self.passes.to_string()),
            (keys::FEEDBACK, self.feedback.as_str().to_string()),
        ];

        let mut result = Ok(());
        for (key, value) in entries {
            if let Err(e) = store.set(key, &value) {
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }

    /// Remove every snapshot key (other keys are left alone)
    pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), StoreError> {
        let mut result = Ok(());
        for key in keys::ALL {
            if let Err(e) = store.remove(key) {
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }

    /// True if any snapshot key is present
    pub fn exists<S: KeyValueStore + ?Sized>(store: &S) -> bool {
        keys::ALL.iter().any(|key| store.get(key).is_some())
    }

    /// Read a snapshot, repairing each missing or malformed value.
    ///
    /// Returns `None` when nothing was stored.
    pub fn read<S, R>(store: &S, rules: &Rules, rng: &mut R) -> Option<Self>
    where
        S: KeyValueStore + ?Sized,
        R: Rng + ?Sized,
    {
        if !Self::exists(store) {
            return None;
        }

        let words = store
            .get(keys::WORDS)
            .and_then(|json| serde_json::from_str::<Vec<String>>(&json).ok())
            .filter(|words| is_valid_word_list(words))
            .unwrap_or_else(|| {
                log::warn!("Stored word list missing or malformed, using rules' list");
                rules.words.clone()
            });

        // Word lists are validated non-empty above
        let head = words.first().cloned().unwrap_or_default();
        let original_word = store
            .get(keys::ORIGINAL_WORD)
            .filter(|word| words.contains(word))
            .unwrap_or(head);

        let current_word = store
            .get(keys::CURRENT_WORD)
            .filter(|scrambled| is_char_permutation(scrambled, &original_word))
            .unwrap_or_else(|| shuffle_str(&original_word, rng));

        // A session can't score more points than it has words
        let points = read_count(store, keys::POINTS)
            .filter(|&points| {
                let ok = points as usize <= rules.words.len().max(words.len());
                if !ok {
                    log::warn!("Stored points out of range: {}", points);
                }
                ok
            })
            .unwrap_or(0);
        let strikes = read_count(store, keys::STRIKES)
            .unwrap_or(0)
            .min(rules.max_strikes);
        let passes = read_count(store, keys::PASSES).unwrap_or(rules.starting_passes);

        let feedback = if strikes >= rules.max_strikes {
            Feedback::OverFail
        } else {
            store
                .get(keys::FEEDBACK)
                .and_then(|name| name.parse::<Feedback>().ok())
                .filter(|&feedback| {
                    let ok = feedback_fits(feedback, words.len(), points, strikes, rules);
                    if !ok {
                        log::warn!("Stored feedback {:?} does not match the score", feedback);
                    }
                    ok
                })
                .unwrap_or_default()
        };

        Some(Self {
            words,
            original_word,
            current_word,
            points,
            strikes,
            passes,
            feedback,
        })
    }

    /// Rebuild the game state
    pub fn into_state(self) -> GameState {
        GameState {
            words: self.words,
            round: Round {
                original_word: self.original_word,
                scrambled_word: self.current_word,
            },
            score: Score {
                points: self.points,
                strikes: self.strikes,
                passes: self.passes,
            },
            guess: String::new(),
            status: GameStatus::from_feedback(self.feedback),
            feedback: self.feedback,
        }
    }
}

/// Whether a game with this pool and score could have ended on `feedback`
fn feedback_fits(
    feedback: Feedback,
    words_remaining: usize,
    points: u32,
    strikes: u32,
    rules: &Rules,
) -> bool {
    match feedback {
        Feedback::OverWin => words_remaining == 1 && points > 0,
        Feedback::OverFail => strikes.saturating_add(1) >= rules.max_strikes,
        _ => true,
    }
}

/// Parse a non-negative integer value
fn read_count<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<u32> {
    let raw = store.get(key)?;
    match raw.trim().parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => {
            log::warn!("Stored {} is not a count: {:?}", key, raw);
            None
        }
    }
}
