//! Game rules
//!
//! Persisted separately from the session snapshot, so a restart keeps them.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_STRIKES, STARTING_PASSES, WORLD_CAPITALS};
use crate::persistence::KeyValueStore;

/// Tunable rules for a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Strikes that end the game
    pub max_strikes: u32,
    /// Passes granted on a new game
    pub starting_passes: u32,
    /// Word list, in play order
    pub words: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_strikes: MAX_STRIKES,
            starting_passes: STARTING_PASSES,
            words: WORLD_CAPITALS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Rules {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "scramble_rules";

    /// Check the rules can drive a game
    pub fn is_valid(&self) -> bool {
        self.max_strikes > 0 && is_valid_word_list(&self.words)
    }

    /// Parse a JSON rules document, falling back to defaults when invalid
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Rules>(json) {
            Ok(rules) if rules.is_valid() => rules,
            Ok(_) => {
                log::warn!("Stored rules are invalid, using defaults");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not parse stored rules ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load rules from the store (defaults when absent)
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Some(json) => {
                let rules = Self::from_json(&json);
                log::info!(
                    "Loaded rules: {} words, {} strikes, {} passes",
                    rules.words.len(),
                    rules.max_strikes,
                    rules.starting_passes
                );
                rules
            }
            None => Self::default(),
        }
    }

    /// Save rules to the store
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if let Err(e) = store.set(Self::STORAGE_KEY, &json) {
                    log::warn!("Rules not saved: {}", e);
                }
            }
            Err(e) => log::warn!("Rules not serialized: {}", e),
        }
    }
}

/// A playable word list: non-empty, no blank words, no duplicates
pub fn is_valid_word_list(words: &[String]) -> bool {
    if words.is_empty() || words.iter().any(|w| w.is_empty()) {
        return false;
    }
    // Words must be unique so removal by value is unambiguous
    let mut sorted: Vec<&String> = words.iter().collect();
    sorted.sort();
    sorted.windows(2).all(|pair| pair[0] != pair[1])
}
