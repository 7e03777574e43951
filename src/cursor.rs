use std::fmt;
use std::fmt::Formatter;
use std::iter::FusedIterator;

/// The traversal direction of a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From the first element toward the last.
    Forward,
    /// From the last element toward the first.
    Reverse,
}

/// A resumable traversal position over a borrowed sequence.
///
/// A `Cursor` is like an iterator, except that its completion is observable
/// *before* the final fruitless call: [`is_done`] becomes `true` on the very
/// [`step`] that returns the last remaining element in the traversal
/// direction. A loop of the form `while !cursor.is_done() { cursor.step() }`
/// therefore performs exactly *n* steps over an *n*-element sequence and
/// never makes an extra call that would yield nothing.
///
/// A forward cursor starts before the first element, a reverse cursor after
/// the last. Each `step` moves exactly one position toward the opposite end,
/// never skipping and never revisiting. Once the traversal is exhausted,
/// further `step` calls are no-ops that return `None`.
///
/// The backing sequence is only borrowed; a cursor never mutates it, and the
/// references it yields borrow from the sequence, not from the cursor, so
/// they stay usable while the cursor keeps moving.
///
/// [`is_done`]: Cursor::is_done
/// [`step`]: Cursor::step
///
/// # Examples
///
/// The cursor position is denoted by `|`:
/// ```
/// use seqfn::Cursor;
///
/// let items = ['A', 'B', 'C'];
///
/// // [|A B C]
/// let mut cursor = Cursor::forward(&items);
/// assert!(!cursor.is_done());
///
/// // [ A|B C]
/// assert_eq!(cursor.step(), Some(&'A'));
/// assert!(!cursor.is_done());
///
/// // [ A B|C]
/// assert_eq!(cursor.step(), Some(&'B'));
/// assert!(!cursor.is_done());
///
/// // [ A B C|] -- completion is reported with the last element, not after it
/// assert_eq!(cursor.step(), Some(&'C'));
/// assert!(cursor.is_done());
///
/// // Stepping past the end is a no-op.
/// assert_eq!(cursor.step(), None);
/// assert!(cursor.is_done());
/// ```
///
/// An empty sequence starts already complete:
/// ```
/// use seqfn::Cursor;
///
/// let empty: [i32; 0] = [];
/// let mut cursor = Cursor::forward(&empty);
/// assert!(cursor.is_done());
/// assert_eq!(cursor.step(), None);
/// ```
pub struct Cursor<'a, T: 'a> {
    items: &'a [T],
    direction: Direction,
    /// Number of elements already yielded, counted in traversal order.
    taken: usize,
    done: bool,
}

impl<'a, T: 'a> Cursor<'a, T> {
    /// Create a cursor over `items` moving in the given direction.
    pub fn new(items: &'a [T], direction: Direction) -> Self {
        Self {
            items,
            direction,
            taken: 0,
            done: items.is_empty(),
        }
    }

    /// Create a cursor positioned before the first element, moving toward
    /// the last.
    pub fn forward(items: &'a [T]) -> Self {
        Self::new(items, Direction::Forward)
    }

    /// Create a cursor positioned after the last element, moving toward
    /// the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqfn::Cursor;
    ///
    /// let items = [1, 2, 3];
    /// let mut cursor = Cursor::reverse(&items);
    /// assert_eq!(cursor.step(), Some(&3));
    /// assert_eq!(cursor.step(), Some(&2));
    /// assert_eq!(cursor.step(), Some(&1));
    /// assert!(cursor.is_done());
    /// ```
    pub fn reverse(items: &'a [T]) -> Self {
        Self::new(items, Direction::Reverse)
    }

    /// The traversal direction this cursor was created with.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the traversal has yielded its last element.
    ///
    /// Has no side effects. `true` from creation for an empty sequence.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one position and return the element there, or `None` if the
    /// traversal is already exhausted.
    ///
    /// This is the only mutator: each call moves the position by exactly one
    /// toward the terminal end, and the completion flag flips on the call
    /// that returns the final element.
    pub fn step(&mut self) -> Option<&'a T> {
        if self.taken >= self.items.len() {
            return None;
        }
        let index = match self.direction {
            Direction::Forward => self.taken,
            Direction::Reverse => self.items.len() - 1 - self.taken,
        };
        self.taken += 1;
        self.done = self.taken >= self.items.len();
        Some(&self.items[index])
    }

    fn remaining(&self) -> usize {
        self.items.len() - self.taken
    }
}

impl<'a, T: 'a> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("direction", &self.direction)
            .field("remaining", &self.remaining())
            .finish()
    }
}

/// An iterator over the elements a [`Cursor`] has not yet yielded.
///
/// Created by the `IntoIterator` impl on [`Cursor`]. It drives [`step`]
/// underneath, so it observes the same order the cursor would, and it is
/// fused: once exhausted it keeps returning `None`.
///
/// [`step`]: Cursor::step
///
/// # Examples
///
/// ```
/// use seqfn::Cursor;
///
/// let items = [1, 2, 3];
/// let collected: Vec<&i32> = Cursor::reverse(&items).into_iter().collect();
/// assert_eq!(collected, [&3, &2, &1]);
/// ```
pub struct CursorIter<'a, T: 'a> {
    cursor: Cursor<'a, T>,
}

impl<'a, T: 'a> Iterator for CursorIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T: 'a> ExactSizeIterator for CursorIter<'a, T> {}

impl<'a, T: 'a> FusedIterator for CursorIter<'a, T> {}

impl<'a, T: 'a> IntoIterator for Cursor<'a, T> {
    type Item = &'a T;
    type IntoIter = CursorIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter { cursor: self }
    }
}
