use alloc::vec::Vec;

use crate::SeedRandom;

/// Fisher-Yates shuffle in place, from the last element down to the second.
pub fn shuffle_in_place<T>(items: &mut [T], rng: &mut SeedRandom) {
    for current in (1..items.len()).rev() {
        let pick = rng.below(current + 1);
        items.swap(current, pick);
    }
}

/// Permutation of `items` that depends only on `seed`.
pub fn shuffle<T: Clone>(items: &[T], seed: &str) -> Vec<T> {
    let mut result = items.to_vec();
    shuffle_in_place(&mut result, &mut SeedRandom::new(seed));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    #[test]
    fn known_permutations_are_stable() {
        assert_eq!(
            shuffle(&numbers(24), "12345678"),
            [
                9, 0, 3, 5, 20, 4, 17, 22, 8, 10, 2, 7, 19, 6, 13, 11, 21, 1, 12, 23, 14, 16, 15, 18
            ]
        );
        assert_eq!(
            shuffle(&numbers(24), "wttaa"),
            [
                10, 23, 13, 21, 20, 3, 14, 8, 18, 15, 7, 17, 9, 5, 11, 16, 0, 1, 19, 2, 4, 22, 12, 6
            ]
        );
        assert_eq!(shuffle(&numbers(10), ""), [7, 1, 5, 4, 3, 0, 8, 6, 9, 2]);
    }

    #[test]
    fn repeated_calls_agree() {
        let items = numbers(30);
        assert_eq!(shuffle(&items, "again"), shuffle(&items, "again"));
    }

    #[test]
    fn result_is_a_permutation() {
        let items = numbers(24);
        for seed in ["a", "b", "99999999", "ünïcødé 🎉"] {
            let mut shuffled = shuffle(&items, seed);
            assert_eq!(shuffled.len(), items.len());
            shuffled.sort_unstable();
            assert_eq!(shuffled, items);
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let items = numbers(8);
        let _ = shuffle(&items, "seed");
        assert_eq!(items, numbers(8));
    }

    #[test]
    fn tiny_inputs_come_back_unchanged() {
        assert!(shuffle::<u8>(&[], "seed").is_empty());
        assert_eq!(shuffle(&[42], "seed"), [42]);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let items = numbers(24);
        assert_ne!(shuffle(&items, "12345678"), shuffle(&items, "12345679"));
    }
}
