//! Game state and core types
//!
//! Everything needed to resume a session lives in `GameState`.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::settings::Rules;
use crate::shuffle::shuffle_str;

/// Result of the last transition, shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Feedback {
    /// Nothing to report (fresh game)
    #[default]
    None,
    /// Word skipped with a pass
    Pass,
    /// Correct guess, next word
    Win,
    /// Wrong guess, try again
    Fail,
    /// Last word guessed, game won
    OverWin,
    /// Out of strikes, game lost
    OverFail,
}

impl Feedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::None => "",
            Feedback::Pass => "PASS",
            Feedback::Win => "WIN",
            Feedback::Fail => "FAIL",
            Feedback::OverWin => "OVER_WIN",
            Feedback::OverFail => "OVER_FAIL",
        }
    }

    /// Whether this feedback ends the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, Feedback::OverWin | Feedback::OverFail)
    }
}

/// Unrecognized feedback name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feedback: {0:?}")]
pub struct UnknownFeedback(pub String);

impl FromStr for Feedback {
    type Err = UnknownFeedback;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Feedback::None),
            "PASS" => Ok(Feedback::Pass),
            "WIN" => Ok(Feedback::Win),
            "FAIL" => Ok(Feedback::Fail),
            "OVER_WIN" => Ok(Feedback::OverWin),
            "OVER_FAIL" => Ok(Feedback::OverFail),
            _ => Err(UnknownFeedback(s.to_string())),
        }
    }
}

/// Where the game is at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Accepting guesses and skips
    #[default]
    Playing,
    /// Last word guessed
    GameWon,
    /// Out of strikes
    GameLost,
}

impl GameStatus {
    /// Settle the status implied by a feedback value
    pub fn from_feedback(feedback: Feedback) -> Self {
        match feedback {
            Feedback::OverWin => GameStatus::GameWon,
            Feedback::OverFail => GameStatus::GameLost,
            _ => GameStatus::Playing,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameStatus::Playing
    }
}

/// The word being played
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Word the player must find
    pub original_word: String,
    /// Characters of `original_word` in shuffled order
    pub scrambled_word: String,
}

impl Round {
    /// Start a round on `word` with a fresh scramble
    pub fn new<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Self {
        Self {
            original_word: word.to_string(),
            scrambled_word: shuffle_str(word, rng),
        }
    }
}

/// Points, strikes and passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub points: u32,
    pub strikes: u32,
    pub passes: u32,
}

impl Score {
    /// Score at the start of a game
    pub fn initial(rules: &Rules) -> Self {
        Self {
            points: 0,
            strikes: 0,
            passes: rules.starting_passes,
        }
    }
}

/// Complete session state (serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Words left to play, current word included
    pub words: Vec<String>,
    /// Current round
    pub round: Round,
    /// Score
    pub score: Score,
    /// Text typed so far (not persisted)
    #[serde(skip)]
    pub guess: String,
    /// Result of the last transition
    pub feedback: Feedback,
    /// Current status
    pub status: GameStatus,
}

impl GameState {
    /// Fresh game from the rules' word list
    pub fn new<R: Rng + ?Sized>(rules: &Rules, rng: &mut R) -> Self {
        let words = rules.words.clone();
        let first = words.first().map(String::as_str).unwrap_or_default();
        let round = Round::new(first, rng);
        Self {
            words,
            round,
            score: Score::initial(rules),
            guess: String::new(),
            feedback: Feedback::None,
            status: GameStatus::Playing,
        }
    }

    /// Words left, current word included
    pub fn words_remaining(&self) -> usize {
        self.words.len()
    }

    /// True once the game is won or lost
    pub fn game_over(&self) -> bool {
        self.status.is_over()
    }
}
