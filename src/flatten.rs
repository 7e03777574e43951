use crate::cursor::Cursor;

/// An element of an arbitrarily nested sequence: either a leaf value or a
/// sequence of further nested elements.
///
/// The variant test is what decides whether [`flatten`] descends into a
/// value or emits it; there is no depth limit baked into the type.
///
/// # Examples
///
/// ```
/// use seqfn::Nested;
///
/// let leaf: Nested<i32> = 7.into();
/// let seq: Nested<i32> = vec![Nested::Leaf(1), Nested::Leaf(2)].into();
/// assert!(leaf.is_leaf());
/// assert!(!seq.is_leaf());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A plain value at some nesting depth.
    Leaf(T),
    /// A nested sequence to descend into.
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// `true` for [`Nested::Leaf`].
    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Leaf(value)
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::Seq(items)
    }
}

/// Linearize a nested sequence into its leaf values, depth-first and
/// left-to-right.
///
/// The descent is iterative: suspended cursors wait on an explicit work
/// list while a fresh cursor walks the nested sequence, so the call stack
/// does not grow with nesting depth and inputs of unbounded depth are fine.
/// The work list is popped last-in-first-out, which is what keeps sibling
/// branches in depth-first order once nesting goes deeper than two levels.
///
/// Flattening an already-flat sequence yields its elements unchanged.
///
/// # Examples
///
/// ```
/// use seqfn::{flatten, Nested};
///
/// let list = [
///     Nested::Seq(vec![
///         Nested::Leaf(1),
///         Nested::Seq(vec![Nested::Leaf(2)]),
///         Nested::Leaf(3),
///     ]),
///     Nested::Leaf(4),
/// ];
/// assert_eq!(flatten(&list), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T: Clone>(list: &[Nested<T>]) -> Vec<T> {
    let mut flat = Vec::new();
    let mut suspended = vec![Cursor::forward(list)];

    while let Some(mut cursor) = suspended.pop() {
        while !cursor.is_done() {
            match cursor.step() {
                Some(Nested::Leaf(value)) => flat.push(value.clone()),
                Some(Nested::Seq(inner)) => {
                    // Suspend the outer traversal and resume it only after
                    // the nested sequence is exhausted.
                    suspended.push(cursor);
                    cursor = Cursor::forward(inner);
                }
                None => break,
            }
        }
    }

    flat
}

#[cfg(test)]
mod tests {
    use super::{flatten, Nested};

    macro_rules! nest {
        ([$($item:tt),* $(,)?]) => {
            Nested::Seq(vec![$(nest!($item)),*])
        };
        ($value:expr) => {
            Nested::Leaf($value)
        };
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let empty: [Nested<i32>; 0] = [];
        assert_eq!(flatten(&empty), Vec::<i32>::new());
    }

    #[test]
    fn already_flat_input_comes_back_unchanged() {
        let list = [nest!(1), nest!(10), nest!(2)];
        assert_eq!(flatten(&list), vec![1, 10, 2]);
    }

    #[test]
    fn nested_input_flattens_depth_first() {
        let list = [
            nest!([[4, 4, [4]], 3, 3, 3]),
            nest!([[2], [2]]),
            nest!([1, 1]),
            nest!(0),
            nest!([[[0]]]),
            nest!(0),
            nest!(0),
        ];
        assert_eq!(
            flatten(&list),
            vec![4, 4, 4, 3, 3, 3, 2, 2, 1, 1, 0, 0, 0, 0]
        );
    }

    #[test]
    fn deepest_suspension_resumes_first() {
        // A queue-ordered work list would emit 4 before 3 here.
        let list = [nest!([1, [2], 3]), nest!(4)];
        assert_eq!(flatten(&list), vec![1, 2, 3, 4]);

        // Three suspension levels pending at once; queue order would
        // interleave the shallower siblings ahead of 3 and 4.
        let list = [nest!([1, [2, [3], 4], 5]), nest!(6)];
        assert_eq!(flatten(&list), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn unbounded_nesting_depth_does_not_grow_the_stack() {
        let mut node = Nested::Leaf(1);
        for _ in 0..4096 {
            node = Nested::Seq(vec![node]);
        }
        let list = [node, Nested::Leaf(2)];
        assert_eq!(flatten(&list), vec![1, 2]);
    }

    #[test]
    fn input_is_not_consumed() {
        let list = [nest!([6]), nest!(2), nest!(12)];
        let flat = flatten(&list);
        assert_eq!(flat, vec![6, 2, 12]);
        assert_eq!(list[1], Nested::Leaf(2));
    }
}
