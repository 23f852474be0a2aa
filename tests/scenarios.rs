//! Game scenarios driven through `GameStateMachine` over an in-memory store.

use capital_scramble::persistence::keys;
use capital_scramble::sim::Change;
use capital_scramble::{
    Feedback, GameStateMachine, GameStatus, KeyValueStore, MemoryStore, Rules, Score, Snapshot,
    is_char_permutation,
};
use rand::SeedableRng;
use rand_pcg::Pcg32;

type Machine<'a> = GameStateMachine<&'a mut MemoryStore, Pcg32>;

fn machine(store: &mut MemoryStore) -> Machine<'_> {
    GameStateMachine::new(store, Pcg32::seed_from_u64(2024))
}

/// Guess every word except the last `keep`
fn play_through(m: &mut Machine<'_>, keep: usize) {
    while m.words_remaining() > keep {
        let word = m.round().original_word.clone();
        m.submit_guess(&word);
    }
}

#[test]
fn starting_state() {
    let mut store = MemoryStore::new();
    let m = machine(&mut store);

    assert_eq!(m.words_remaining(), 9);
    assert_eq!(m.score(), Score { points: 0, strikes: 0, passes: 3 });
    assert_eq!(m.feedback(), Feedback::None);
    assert_eq!(m.status(), GameStatus::Playing);
    assert!(is_char_permutation(&m.round().scrambled_word, "Tokyo"));
}

#[test]
fn correct_first_guess() {
    let mut store = MemoryStore::new();
    let mut m = machine(&mut store);
    m.submit_guess("TOKYO");

    assert_eq!(m.score().points, 1);
    assert_eq!(m.words_remaining(), 8);
    assert_eq!(m.feedback(), Feedback::Win);
    assert_eq!(m.status(), GameStatus::Playing);
}

#[test]
fn three_wrong_guesses_end_the_game() {
    let mut store = MemoryStore::new();
    let mut m = machine(&mut store);
    m.submit_guess("Kyoto");
    m.submit_guess("");
    assert_eq!(m.feedback(), Feedback::Fail);
    m.submit_guess("Osaka");

    assert_eq!(m.score().strikes, 3);
    assert_eq!(m.feedback(), Feedback::OverFail);
    assert_eq!(m.status(), GameStatus::GameLost);
    assert!(m.game_over());

    let before = m.state().clone();
    assert_eq!(m.submit_guess("Tokyo"), Change::Ignored);
    assert_eq!(m.skip(), Change::Ignored);
    assert_eq!(m.state(), &before);
}

#[test]
fn winning_the_last_word() {
    let mut store = MemoryStore::new();
    let mut m = machine(&mut store);
    play_through(&mut m, 1);
    assert_eq!(m.round().original_word, "Moscow");
    assert_eq!(m.feedback(), Feedback::Win);

    m.submit_guess("moscow");
    assert_eq!(m.score().points, 9);
    assert_eq!(m.feedback(), Feedback::OverWin);
    assert_eq!(m.status(), GameStatus::GameWon);
    assert_eq!(m.submit_guess("moscow"), Change::Ignored);
}

#[test]
fn last_word_is_kept_until_resolved() {
    let mut store = MemoryStore::new();
    let mut m = machine(&mut store);
    play_through(&mut m, 1);

    m.skip();
    assert_eq!(m.feedback(), Feedback::Pass);
    assert_eq!(m.status(), GameStatus::Playing);
    assert_eq!(m.words_remaining(), 1);

    m.submit_guess("wrong");
    assert_eq!(m.words_remaining(), 1);
    assert_eq!(m.round().original_word, "Moscow");
}

#[test]
fn skip_without_passes_changes_nothing() {
    let mut store = MemoryStore::new();
    let mut m = machine(&mut store);
    for _ in 0..3 {
        assert_eq!(m.skip(), Change::Played);
    }
    assert_eq!(m.score().passes, 0);
    assert_eq!(m.words_remaining(), 6);

    let before = m.state().clone();
    assert_eq!(m.skip(), Change::Ignored);
    assert_eq!(m.state(), &before);
    assert_eq!(m.feedback(), Feedback::Pass);
}

#[test]
fn restart_resets_and_clears_storage() {
    let mut store = MemoryStore::new();
    store.set(Rules::STORAGE_KEY, r#"{"starting_passes": 3}"#).unwrap();
    {
        let mut m = machine(&mut store);
        m.submit_guess("tokyo");
        m.skip();
        m.submit_guess("nope");
        m.restart();

        assert_eq!(m.words_remaining(), 9);
        assert_eq!(m.round().original_word, "Tokyo");
        assert_eq!(m.score(), Score { points: 0, strikes: 0, passes: 3 });
        assert_eq!(m.feedback(), Feedback::None);
        assert_eq!(m.status(), GameStatus::Playing);
    }
    assert!(!Snapshot::exists(&store));
    assert!(store.get(Rules::STORAGE_KEY).is_some());
}

#[test]
fn restart_twice_matches_restart_once() {
    let mut store = MemoryStore::new();
    let mut m = machine(&mut store);
    m.submit_guess("nope");
    m.restart();
    let once = m.state().clone();
    m.restart();
    let twice = m.state().clone();

    assert_eq!(once.words, twice.words);
    assert_eq!(once.score, twice.score);
    assert_eq!(once.feedback, twice.feedback);
    assert_eq!(once.status, twice.status);
    assert_eq!(once.round.original_word, twice.round.original_word);
    assert!(is_char_permutation(&twice.round.scrambled_word, "Tokyo"));
    drop(m);
    assert!(!Snapshot::exists(&store));
}

#[test]
fn reload_resumes_session() {
    let mut store = MemoryStore::new();
    let saved = {
        let mut m = machine(&mut store);
        m.submit_guess("tokyo");
        m.skip();
        m.submit_guess("nope");
        m.state().clone()
    };
    assert_eq!(store.get(keys::STRIKES).as_deref(), Some("1"));

    let m = GameStateMachine::new(&mut store, Pcg32::seed_from_u64(1));
    assert_eq!(m.state(), &saved);
    assert_eq!(m.round().original_word, "London");
}

#[test]
fn reload_keeps_finished_game_finished() {
    let mut store = MemoryStore::new();
    {
        let mut m = machine(&mut store);
        play_through(&mut m, 1);
        m.submit_guess("Moscow");
        assert_eq!(m.status(), GameStatus::GameWon);
    }

    let m = GameStateMachine::new(&mut store, Pcg32::seed_from_u64(1));
    assert_eq!(m.status(), GameStatus::GameWon);
    assert_eq!(m.feedback(), Feedback::OverWin);
    assert!(m.game_over());
}

#[test]
fn custom_rules_from_store() {
    let mut store = MemoryStore::new();
    store
        .set(
            Rules::STORAGE_KEY,
            r#"{"max_strikes": 1, "starting_passes": 0, "words": ["Lima", "Quito"]}"#,
        )
        .unwrap();
    let mut m = machine(&mut store);

    assert_eq!(m.words_remaining(), 2);
    assert_eq!(m.score().passes, 0);
    assert_eq!(m.skip(), Change::Ignored);

    m.submit_guess("Bogota");
    assert_eq!(m.feedback(), Feedback::OverFail);
    assert_eq!(m.status(), GameStatus::GameLost);
}
