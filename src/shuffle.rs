//! Scrambling utilities
//!
//! Shuffles always work on a copy; the source is never touched. There is no
//! guarantee the result differs from the input (short words often come back
//! unchanged).

use rand::Rng;

/// Return a uniformly shuffled copy of `src` (Fisher-Yates)
pub fn shuffle<T: Clone, R: Rng + ?Sized>(src: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = src.to_vec();
    for i in (1..copy.len()).rev() {
        let j = rng.random_range(0..=i);
        copy.swap(i, j);
    }
    copy
}

/// Shuffle a string by character and rejoin
pub fn shuffle_str<R: Rng + ?Sized>(src: &str, rng: &mut R) -> String {
    let chars: Vec<char> = src.chars().collect();
    shuffle(&chars, rng).into_iter().collect()
}
