//! Traversal combinators over borrowed sequences.
//!
//! Every function here drives one or two [`Cursor`]s to exhaustion with the
//! `while !cursor.is_done()` discipline, invokes a caller-supplied callback
//! per step, and returns an aggregate: a fresh vector, a scalar, or a flag.
//! The input sequence is never mutated.

use crate::cursor::Cursor;

/// Invoke `func` once per element, front to back, discarding its results.
///
/// This is the substrate for [`filter`], [`reject`], [`count`] and the
/// qualifiers; it performs exactly `list.len()` cursor steps.
///
/// # Examples
///
/// ```
/// use seqfn::each;
///
/// let mut seen = Vec::new();
/// each(&[1, 2, 3], |n| seen.push(n * 10));
/// assert_eq!(seen, vec![10, 20, 30]);
/// ```
pub fn each<T>(list: &[T], mut func: impl FnMut(&T)) {
    let mut cursor = Cursor::forward(list);
    while !cursor.is_done() {
        if let Some(item) = cursor.step() {
            func(item);
        }
    }
}

/// Invoke `func` once per element, back to front.
///
/// # Examples
///
/// ```
/// use seqfn::reverse_each;
///
/// let mut seen = Vec::new();
/// reverse_each(&[1, 2, 3], |n| seen.push(*n));
/// assert_eq!(seen, vec![3, 2, 1]);
/// ```
pub fn reverse_each<T>(list: &[T], mut func: impl FnMut(&T)) {
    let mut cursor = Cursor::reverse(list);
    while !cursor.is_done() {
        if let Some(item) = cursor.step() {
            func(item);
        }
    }
}

/// Like [`each`], but threads a running index starting at zero.
pub fn enumerate<T>(list: &[T], func: impl FnMut(i64, &T)) {
    enumerate_from(list, 0, func)
}

/// Like [`each`], but threads a running index starting at `start`.
///
/// The index advances once per step no matter what the callback does; the
/// offset may be negative, and the index wraps at the `i64` limits.
///
/// # Examples
///
/// ```
/// use seqfn::enumerate_from;
///
/// let mut pairs = Vec::new();
/// enumerate_from(&["a", "b"], 10, |i, s| pairs.push((i, *s)));
/// assert_eq!(pairs, vec![(10, "a"), (11, "b")]);
/// ```
pub fn enumerate_from<T>(list: &[T], start: i64, mut func: impl FnMut(i64, &T)) {
    let mut index = start;
    let mut cursor = Cursor::forward(list);
    while !cursor.is_done() {
        if let Some(item) = cursor.step() {
            func(index, item);
        }
        // Still one increment per step at the numeric limit, wrapping
        // instead of panicking in debug builds.
        index = index.wrapping_add(1);
    }
}

/// Produce a new vector of the same length where element *i* is
/// `func(&list[i])`.
///
/// # Examples
///
/// ```
/// use seqfn::map;
///
/// let doubled = map(&[1, 2, 3], |n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<T, U>(list: &[T], mut func: impl FnMut(&T) -> U) -> Vec<U> {
    let mut mapped = Vec::with_capacity(list.len());
    each(list, |item| mapped.push(func(item)));
    mapped
}

/// Fold the sequence front to back into a single value.
///
/// With `initial` of `None`, the first element is consumed by one seeding
/// cursor step before the fold loop starts; a single-element sequence is
/// then already exhausted and its element comes back untouched, without
/// `func` ever running. Returns `None` only when the sequence is empty and
/// no initial value was given.
///
/// # Examples
///
/// ```
/// use seqfn::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], None, |acc, n| acc * n), Some(6));
/// assert_eq!(reduce(&[1, 2, 3], Some(4), |acc, n| acc * n), Some(24));
/// assert_eq!(reduce(&[], None, |acc: i32, n| acc + n), None);
/// ```
pub fn reduce<T: Clone>(
    list: &[T],
    initial: Option<T>,
    mut func: impl FnMut(T, &T) -> T,
) -> Option<T> {
    let mut cursor = Cursor::forward(list);
    let mut accumulator = match initial {
        Some(seed) => seed,
        None => cursor.step()?.clone(),
    };
    while !cursor.is_done() {
        if let Some(item) = cursor.step() {
            accumulator = func(accumulator, item);
        }
    }
    Some(accumulator)
}

/// Fold the sequence back to front; otherwise identical to [`reduce`],
/// including the seeding step (which here consumes the *last* element).
///
/// # Examples
///
/// ```
/// use seqfn::reverse_reduce;
///
/// let joined = reverse_reduce(
///     &["a".to_string(), "b".to_string(), "c".to_string()],
///     None,
///     |acc, s| acc + s,
/// );
/// assert_eq!(joined.as_deref(), Some("cba"));
/// ```
pub fn reverse_reduce<T: Clone>(
    list: &[T],
    initial: Option<T>,
    mut func: impl FnMut(T, &T) -> T,
) -> Option<T> {
    let mut cursor = Cursor::reverse(list);
    let mut accumulator = match initial {
        Some(seed) => seed,
        None => cursor.step()?.clone(),
    };
    while !cursor.is_done() {
        if let Some(item) = cursor.step() {
            accumulator = func(accumulator, item);
        }
    }
    Some(accumulator)
}

/// Collect copies of the elements for which `pred` returns `true`,
/// preserving their order.
///
/// # Examples
///
/// ```
/// use seqfn::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4], |n| n % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<T: Clone>(list: &[T], mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    let mut kept = Vec::new();
    each(list, |item| {
        if pred(item) {
            kept.push(item.clone());
        }
    });
    kept
}

/// Collect copies of the elements for which `pred` returns `false`; the
/// complement of [`filter`] under the same predicate.
pub fn reject<T: Clone>(list: &[T], mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    let mut kept = Vec::new();
    each(list, |item| {
        if !pred(item) {
            kept.push(item.clone());
        }
    });
    kept
}

/// `true` if `pred` holds for every element.
///
/// Stops at the first `false`; `true` on an empty sequence.
///
/// # Examples
///
/// ```
/// use seqfn::all;
///
/// assert!(!all(&[2, 6, 12], |n| *n < 5));
/// assert!(all(&[2, 6, 12], |n| *n < 50));
/// ```
pub fn all<T>(list: &[T], mut pred: impl FnMut(&T) -> bool) -> bool {
    let mut cursor = Cursor::forward(list);
    while !cursor.is_done() {
        if let Some(item) = cursor.step() {
            if !pred(item) {
                return false;
            }
        }
    }
    true
}

/// `true` if `pred` holds for at least one element.
///
/// Stops at the first `true`; `false` on an empty sequence.
pub fn any<T>(list: &[T], mut pred: impl FnMut(&T) -> bool) -> bool {
    let mut cursor = Cursor::forward(list);
    while !cursor.is_done() {
        if let Some(item) = cursor.step() {
            if pred(item) {
                return true;
            }
        }
    }
    false
}

/// `true` if `pred` holds for no element.
///
/// Stops at the first `true`; `true` on an empty sequence.
pub fn none<T>(list: &[T], mut pred: impl FnMut(&T) -> bool) -> bool {
    let mut cursor = Cursor::forward(list);
    while !cursor.is_done() {
        if let Some(item) = cursor.step() {
            if pred(item) {
                return false;
            }
        }
    }
    true
}

/// Count the elements for which `pred` returns `true`.
///
/// Unlike the qualifiers, this always traverses the whole sequence.
///
/// # Examples
///
/// ```
/// use seqfn::count;
///
/// assert_eq!(count(&[5, 6, 12], |n| *n < 7), 2);
/// ```
pub fn count<T>(list: &[T], mut pred: impl FnMut(&T) -> bool) -> usize {
    let mut tally = 0;
    each(list, |item| {
        if pred(item) {
            tally += 1;
        }
    });
    tally
}

/// The largest element under `PartialOrd`, or `None` on an empty sequence.
///
/// # Examples
///
/// ```
/// use seqfn::max;
///
/// assert_eq!(max(&[5, 6, 12]), Some(12));
/// assert_eq!(max::<i32>(&[]), None);
/// ```
pub fn max<T: PartialOrd + Clone>(list: &[T]) -> Option<T> {
    max_by(list, |best, candidate| best < candidate)
}

/// The largest element under a caller-supplied ordering.
///
/// `less(best, candidate)` returns `true` when `candidate` should replace
/// the current best. The fold is seeded with the first element.
///
/// # Examples
///
/// ```
/// use seqfn::max_by;
///
/// // Largest by absolute value.
/// assert_eq!(max_by(&[3, -7, 5], |a: &i32, b: &i32| a.abs() < b.abs()), Some(-7));
/// ```
pub fn max_by<T: Clone>(list: &[T], mut less: impl FnMut(&T, &T) -> bool) -> Option<T> {
    let seed = list.first()?.clone();
    reduce(list, Some(seed), |best, candidate| {
        if less(&best, candidate) {
            candidate.clone()
        } else {
            best
        }
    })
}

/// The smallest element under `PartialOrd`, or `None` on an empty sequence.
pub fn min<T: PartialOrd + Clone>(list: &[T]) -> Option<T> {
    min_by(list, |best, candidate| best > candidate)
}

/// The smallest element under a caller-supplied ordering.
///
/// `greater(best, candidate)` returns `true` when `candidate` should
/// replace the current best. The fold is seeded with the first element.
pub fn min_by<T: Clone>(list: &[T], mut greater: impl FnMut(&T, &T) -> bool) -> Option<T> {
    let seed = list.first()?.clone();
    reduce(list, Some(seed), |best, candidate| {
        if greater(&best, candidate) {
            candidate.clone()
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_visits_every_element_in_order() {
        let mut seen = Vec::new();
        each(&[1, 2, 3], |n| seen.push(*n));
        assert_eq!(seen, vec![1, 2, 3]);

        let mut ticks = 0;
        each(&[] as &[i32], |_| ticks += 1);
        assert_eq!(ticks, 0);
    }

    #[test]
    fn reverse_each_visits_back_to_front() {
        let mut seen = Vec::new();
        reverse_each(&['a', 'b', 'c'], |c| seen.push(*c));
        assert_eq!(seen, vec!['c', 'b', 'a']);
    }

    #[test]
    fn enumerate_threads_the_index() {
        let mut pairs = Vec::new();
        enumerate(&["x", "y", "z"], |i, s| pairs.push((i, *s)));
        assert_eq!(pairs, vec![(0, "x"), (1, "y"), (2, "z")]);
    }

    #[test]
    fn enumerate_from_accepts_any_offset() {
        let mut indices = Vec::new();
        enumerate_from(&[9, 9, 9], -1, |i, _| indices.push(i));
        assert_eq!(indices, vec![-1, 0, 1]);
    }

    #[test]
    fn enumerate_from_wraps_at_the_index_limit() {
        let mut indices = Vec::new();
        enumerate_from(&[9, 9, 9], i64::MAX - 1, |i, _| indices.push(i));
        assert_eq!(indices, vec![i64::MAX - 1, i64::MAX, i64::MIN]);
    }

    #[test]
    fn map_preserves_length_and_order() {
        assert_eq!(map(&[1, 2, 3], |n| n * n), vec![1, 4, 9]);
        assert_eq!(map(&[] as &[i32], |n| n + 1), Vec::<i32>::new());
    }

    #[test]
    fn reduce_folds_all_values() {
        assert_eq!(reduce(&[1, 2, 3], None, |acc, n| acc * n), Some(6));
        assert_eq!(reduce(&[1, 2, 3], Some(4), |acc, n| acc * n), Some(24));
    }

    #[test]
    fn reduce_concatenates_strings_with_initial() {
        let letters: Vec<String> = ["e", "l", "l", "o", "!"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let result = reduce(&letters, Some("h".to_string()), |acc, s| acc + s);
        assert_eq!(result.as_deref(), Some("hello!"));
    }

    #[test]
    fn reduce_of_empty_without_initial_is_none() {
        let mut ticks = 0;
        let result = reduce(&[] as &[i32], None, |acc, n| {
            ticks += 1;
            acc + n
        });
        assert_eq!(result, None);
        assert_eq!(ticks, 0);
    }

    #[test]
    fn reduce_of_single_element_returns_the_seed_untouched() {
        let mut ticks = 0;
        let result = reduce(&[41], None, |acc, n| {
            ticks += 1;
            acc + n
        });
        assert_eq!(result, Some(41));
        assert_eq!(ticks, 0);
    }

    #[test]
    fn reverse_reduce_folds_back_to_front() {
        let words: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let result = reverse_reduce(&words, None, |acc, s| acc + s);
        assert_eq!(result.as_deref(), Some("cba"));

        // Seeded, the whole sequence is folded in reverse.
        let result = reverse_reduce(&[1, 2, 3], Some(100), |acc, n| acc - n);
        assert_eq!(result, Some(100 - 3 - 2 - 1));
    }

    #[test]
    fn filter_and_reject_partition_the_sequence() {
        let items = [1, 2, 3, 4, 5, 6];
        let even = |n: &i32| n % 2 == 0;
        let kept = filter(&items, even);
        let dropped = reject(&items, even);
        assert_eq!(kept, vec![2, 4, 6]);
        assert_eq!(dropped, vec![1, 3, 5]);
        assert_eq!(kept.len() + dropped.len(), items.len());
    }

    #[test]
    fn qualifiers_decide_on_the_first_deciding_element() {
        assert!(!all(&[2, 6, 12], |n| *n < 5));
        assert!(!any(&[5, 6, 12], |n| *n < 5));
        assert!(none(&[5, 6, 12], |n| *n < 5));
        assert!(!none(&[2, 6, 12], |n| *n < 5));
    }

    #[test]
    fn qualifiers_on_empty_sequences_return_their_defaults() {
        let empty: [i32; 0] = [];
        assert!(all(&empty, |_| false));
        assert!(!any(&empty, |_| true));
        assert!(none(&empty, |_| true));
    }

    #[test]
    fn all_and_any_short_circuit() {
        let mut calls = 0;
        assert!(!all(&[1, 2, 3, 4], |n| {
            calls += 1;
            *n < 2
        }));
        assert_eq!(calls, 2);

        calls = 0;
        assert!(any(&[1, 2, 3, 4], |n| {
            calls += 1;
            *n == 2
        }));
        assert_eq!(calls, 2);
    }

    #[test]
    fn count_never_short_circuits() {
        let mut calls = 0;
        let tally = count(&[5, 6, 12], |n| {
            calls += 1;
            *n < 7
        });
        assert_eq!(tally, 2);
        assert_eq!(calls, 3);
    }

    #[test]
    fn min_and_max_pick_extremes() {
        assert_eq!(max(&[5, 6, 12]), Some(12));
        assert_eq!(min(&[5, 6, 12]), Some(5));
        assert_eq!(max(&[7]), Some(7));
        assert_eq!(max::<i32>(&[]), None);
        assert_eq!(min::<i32>(&[]), None);
    }

    #[test]
    fn min_and_max_accept_custom_orderings() {
        assert_eq!(max_by(&[3_i32, -7, 5], |a, b| a.abs() < b.abs()), Some(-7));
        assert_eq!(min_by(&[3_i32, -7, 5], |a, b| a.abs() > b.abs()), Some(3));
    }
}
