//! Sequence factories and copying helpers: arithmetic ranges, shuffled and
//! sampled copies, first-occurrence deduplication.
//!
//! None of these are used by the combinator core; they produce fresh
//! vectors and leave their inputs untouched.

use std::collections::HashSet;
use std::hash::Hash;

use rand::Rng;

use crate::combinators::each;

/// Produce the arithmetic progression `first, first + step, ...`,
/// exclusive of `last`.
///
/// Returns an empty vector when `step` is zero or points away from `last`,
/// so no argument combination can run away.
///
/// # Examples
///
/// ```
/// use seqfn::range;
///
/// assert_eq!(range(5, 10, 1), vec![5, 6, 7, 8, 9]);
/// assert_eq!(range(5, 0, -1), vec![5, 4, 3, 2, 1]);
/// assert_eq!(range(1, 10, 2), vec![1, 3, 5, 7, 9]);
/// assert_eq!(range(5, 0, 1), Vec::<i64>::new());
/// assert_eq!(range(5, 10, 0), Vec::<i64>::new());
/// ```
pub fn range(first: i64, last: i64, step: i64) -> Vec<i64> {
    if step == 0 || (first < last && step < 0) || (first > last && step > 0) {
        return Vec::new();
    }

    let keep_going: fn(i64, i64) -> bool = if last < first {
        |current, last| current > last
    } else {
        |current, last| current < last
    };

    let mut run = Vec::new();
    let mut current = first;
    while keep_going(current, last) {
        run.push(current);
        current = match current.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    run
}

/// A uniformly shuffled copy of `list`, using the given random source.
///
/// Fisher-Yates over the copy; the original order is untouched. Pass a
/// seeded RNG for reproducible decks.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use seqfn::shuffle_with;
///
/// let deck = [1, 2, 3, 4, 5];
/// let mut rng = StdRng::seed_from_u64(7);
/// let shuffled = shuffle_with(&deck, &mut rng);
/// let mut sorted = shuffled.clone();
/// sorted.sort();
/// assert_eq!(sorted, deck);
/// ```
pub fn shuffle_with<T: Clone, R: Rng>(list: &[T], rng: &mut R) -> Vec<T> {
    let mut deck = list.to_vec();
    for index in (1..deck.len()).rev() {
        let other = rng.gen_range(0..=index);
        deck.swap(index, other);
    }
    deck
}

/// A uniformly shuffled copy of `list`, using the thread-local RNG.
pub fn shuffle<T: Clone>(list: &[T]) -> Vec<T> {
    shuffle_with(list, &mut rand::thread_rng())
}

/// A random subset of `count` elements (fewer if the list is shorter),
/// using the given random source.
pub fn sample_with<T: Clone, R: Rng>(list: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut deck = shuffle_with(list, rng);
    deck.truncate(count);
    deck
}

/// A random subset of `count` elements (fewer if the list is shorter),
/// using the thread-local RNG.
pub fn sample<T: Clone>(list: &[T], count: usize) -> Vec<T> {
    sample_with(list, count, &mut rand::thread_rng())
}

/// Copies of the elements with duplicates removed, keeping the first
/// occurrence of each and its position.
///
/// # Examples
///
/// ```
/// use seqfn::unique;
///
/// assert_eq!(unique(&[1, 1, 2, 3, 2]), vec![1, 2, 3]);
/// ```
pub fn unique<T: Clone + Eq + Hash>(list: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut uniques = Vec::new();
    each(list, |item| {
        if seen.insert(item.clone()) {
            uniques.push(item.clone());
        }
    });
    uniques
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{range, sample_with, shuffle_with, unique};

    #[test]
    fn range_walks_in_either_direction() {
        assert_eq!(range(5, 10, 1), vec![5, 6, 7, 8, 9]);
        assert_eq!(range(5, 0, -1), vec![5, 4, 3, 2, 1]);
        assert_eq!(range(1, 10, 2), vec![1, 3, 5, 7, 9]);
        assert_eq!(range(0, -5, -1), vec![0, -1, -2, -3, -4]);
    }

    #[test]
    fn degenerate_ranges_are_empty() {
        assert_eq!(range(5, 10, 0), Vec::<i64>::new());
        assert_eq!(range(5, 0, 1), Vec::<i64>::new());
        assert_eq!(range(0, 5, -1), Vec::<i64>::new());
        assert_eq!(range(3, 3, 1), Vec::<i64>::new());
    }

    #[test]
    fn shuffle_permutes_without_losing_elements() {
        let deck: Vec<i32> = (0..32).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let shuffled = shuffle_with(&deck, &mut rng);
        assert_eq!(shuffled.len(), deck.len());
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, deck);
    }

    #[test]
    fn shuffle_leaves_the_original_untouched() {
        let deck = [1, 2, 3, 4];
        let mut rng = StdRng::seed_from_u64(1);
        let _ = shuffle_with(&deck, &mut rng);
        assert_eq!(deck, [1, 2, 3, 4]);
    }

    #[test]
    fn shuffle_of_tiny_decks_is_trivial() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(shuffle_with(&[] as &[i32], &mut rng), Vec::<i32>::new());
        assert_eq!(shuffle_with(&[9], &mut rng), vec![9]);
    }

    #[test]
    fn sample_draws_at_most_count_elements() {
        let deck: Vec<i32> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let drawn = sample_with(&deck, 4, &mut rng);
        assert_eq!(drawn.len(), 4);
        assert!(drawn.iter().all(|n| deck.contains(n)));

        let everything = sample_with(&deck, 100, &mut rng);
        assert_eq!(everything.len(), deck.len());
    }

    #[test]
    fn unique_keeps_first_occurrences_in_order() {
        assert_eq!(unique(&[1, 1, 2, 3, 2]), vec![1, 2, 3]);
        assert_eq!(unique(&["a", "b", "a"]), vec!["a", "b"]);
        assert_eq!(unique(&[] as &[i32]), Vec::<i32>::new());
    }
}
