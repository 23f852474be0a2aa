//! Game session driver
//!
//! Owns the state, rules, RNG and storage. Every played guess or skip is
//! written to storage; a restart clears it.

use rand::Rng;

use super::state::{Feedback, GameState, GameStatus, Round, Score};
use super::transition::{Action, Change, apply};
use crate::persistence::{KeyValueStore, Snapshot};
use crate::settings::Rules;

/// A game session bound to a store
#[derive(Debug)]
pub struct GameStateMachine<S: KeyValueStore, R: Rng> {
    state: GameState,
    rules: Rules,
    store: S,
    rng: R,
}

impl<S: KeyValueStore, R: Rng> GameStateMachine<S, R> {
    /// Load rules from the store and resume the stored session (if any)
    pub fn new(store: S, rng: R) -> Self {
        let rules = Rules::load(&store);
        Self::with_rules(store, rules, rng)
    }

    /// Resume or start a session with explicit rules
    pub fn with_rules(store: S, rules: Rules, mut rng: R) -> Self {
        let state = match Snapshot::read(&store, &rules, &mut rng) {
            Some(snapshot) => {
                let state = snapshot.into_state();
                log::info!(
                    "Resumed session: {} words left, {} points, {} strikes",
                    state.words_remaining(),
                    state.score.points,
                    state.score.strikes
                );
                state
            }
            None => {
                log::info!("Starting new game with {} words", rules.words.len());
                GameState::new(&rules, &mut rng)
            }
        };

        Self {
            state,
            rules,
            store,
            rng,
        }
    }

    /// Run one action and sync storage
    pub fn dispatch(&mut self, action: Action) -> Change {
        let change = apply(&mut self.state, &action, &self.rules, &mut self.rng);
        match change {
            Change::Ignored => log::debug!("Ignored {:?} while {:?}", action, self.state.status),
            Change::GuessEdited => {}
            Change::Played => {
                log::debug!(
                    "{:?} -> {:?} ({} pts, {} strikes, {} passes)",
                    action,
                    self.state.feedback,
                    self.state.score.points,
                    self.state.score.strikes,
                    self.state.score.passes
                );
                match self.state.status {
                    GameStatus::GameWon => log::info!("Game won with {} points", self.state.score.points),
                    GameStatus::GameLost => log::info!("Game lost with {} points", self.state.score.points),
                    GameStatus::Playing => {}
                }
                self.save();
            }
            Change::Restarted => {
                if let Err(e) = Snapshot::clear(&mut self.store) {
                    log::warn!("Saved session not cleared: {}", e);
                }
                log::info!("Game restarted");
            }
        }
        change
    }

    /// Submit a guess for the current word
    pub fn submit_guess(&mut self, guess: &str) -> Change {
        self.dispatch(Action::SubmitGuess(guess.to_string()))
    }

    /// Submit whatever is in the guess buffer
    pub fn submit_current_guess(&mut self) -> Change {
        let guess = self.state.guess.clone();
        self.dispatch(Action::SubmitGuess(guess))
    }

    /// Spend a pass on the current word
    pub fn skip(&mut self) -> Change {
        self.dispatch(Action::Skip)
    }

    /// Start a new game and forget the saved one
    pub fn restart(&mut self) -> Change {
        self.dispatch(Action::Restart)
    }

    /// Replace the guess buffer
    pub fn set_guess(&mut self, text: &str) -> Change {
        self.dispatch(Action::SetGuess(text.to_string()))
    }

    fn save(&mut self) {
        if let Err(e) = Snapshot::from_state(&self.state).write(&mut self.store) {
            log::warn!("Session not saved: {}", e);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn round(&self) -> &Round {
        &self.state.round
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn guess(&self) -> &str {
        &self.state.guess
    }

    pub fn feedback(&self) -> Feedback {
        self.state.feedback
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn words_remaining(&self) -> usize {
        self.state.words_remaining()
    }

    /// True once the game is won or lost
    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, keys};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn machine() -> GameStateMachine<MemoryStore, Pcg32> {
        GameStateMachine::new(MemoryStore::new(), Pcg32::seed_from_u64(42))
    }

    #[test]
    fn test_fresh_machine() {
        let m = machine();
        assert_eq!(m.words_remaining(), 9);
        assert_eq!(m.score(), Score { points: 0, strikes: 0, passes: 3 });
        assert_eq!(m.feedback(), Feedback::None);
        assert!(!m.game_over());
        assert!(m.store().is_empty());
    }

    #[test]
    fn test_guess_writes_snapshot() {
        let mut m = machine();
        m.submit_guess("Tokyo");
        assert_eq!(m.store().get(keys::POINTS).as_deref(), Some("1"));
        assert_eq!(m.store().get(keys::ORIGINAL_WORD).as_deref(), Some("Paris"));
        assert_eq!(
            m.store().get(keys::CURRENT_WORD).as_deref(),
            Some(m.round().scrambled_word.as_str())
        );
    }

    #[test]
    fn test_typing_is_not_saved() {
        let mut m = machine();
        m.set_guess("Tok");
        assert_eq!(m.guess(), "Tok");
        assert!(m.store().is_empty());
    }

    #[test]
    fn test_submit_current_guess_uses_buffer() {
        let mut m = machine();
        m.set_guess("tokyo");
        assert_eq!(m.submit_current_guess(), Change::Played);
        assert_eq!(m.score().points, 1);
        assert_eq!(m.guess(), "");
    }

    #[test]
    fn test_ignored_skip_does_not_write() {
        let mut store = MemoryStore::new();
        store.set(keys::PASSES, "0").unwrap();
        let mut m = GameStateMachine::new(store, Pcg32::seed_from_u64(1));
        let before = m.store().len();

        assert_eq!(m.skip(), Change::Ignored);
        assert_eq!(m.store().len(), before);
    }

    #[test]
    fn test_failed_writes_do_not_stop_play() {
        let mut m = GameStateMachine::new(MemoryStore::read_only(), Pcg32::seed_from_u64(1));
        assert_eq!(m.submit_guess("tokyo"), Change::Played);
        assert_eq!(m.score().points, 1);
        assert_eq!(m.restart(), Change::Restarted);
        assert_eq!(m.score().points, 0);
    }
}
