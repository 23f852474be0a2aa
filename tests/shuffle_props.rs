//! Property tests for the scrambling utilities.
//!
//! Pure and deterministic: every case carries its own seed.

use capital_scramble::{is_char_permutation, shuffle, shuffle_str};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

proptest! {
    /// Property: shuffle returns the same multiset of items
    #[test]
    fn prop_shuffle_is_permutation(
        src in prop::collection::vec(any::<u16>(), 1..64),
        seed in any::<u64>(),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let out = shuffle(&src, &mut rng);

        prop_assert_eq!(out.len(), src.len());
        let mut a = out.clone();
        let mut b = src.clone();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    /// Property: the source slice is left untouched
    #[test]
    fn prop_shuffle_does_not_mutate_input(
        src in prop::collection::vec(any::<u8>(), 1..64),
        seed in any::<u64>(),
    ) {
        let before = src.clone();
        let mut rng = Pcg32::seed_from_u64(seed);
        let _ = shuffle(&src, &mut rng);
        prop_assert_eq!(src, before);
    }

    /// Property: string shuffles keep length and characters
    #[test]
    fn prop_shuffle_str_keeps_chars(src in "\\PC{0,24}", seed in any::<u64>()) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let out = shuffle_str(&src, &mut rng);

        prop_assert_eq!(out.chars().count(), src.chars().count());
        prop_assert!(is_char_permutation(&out, &src));
    }
}
