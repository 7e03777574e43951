//! This crate provides a small family of functional combinators over
//! finite, in-memory sequences, all built on one resumable traversal
//! abstraction: the [`Cursor`].
//!
//! A cursor tracks a position over a borrowed slice, moving forward or in
//! reverse, and reports completion *with* the final element rather than
//! after it: a `while !cursor.is_done() { cursor.step() }` loop makes
//! exactly *n* steps over *n* elements and never a wasted one.
//!
//! ```
//! use seqfn::Cursor;
//!
//! let items = [1, 2, 3];
//! let mut cursor = Cursor::forward(&items);
//!
//! let mut total = 0;
//! while !cursor.is_done() {
//!     if let Some(n) = cursor.step() {
//!         total += n;
//!     }
//! }
//! assert_eq!(total, 6);
//! ```
//!
//! # Combinators
//!
//! The traversal layer drives cursors to exhaustion and aggregates:
//! [`each`], [`reverse_each`], [`enumerate`], [`map`], [`reduce`],
//! [`reverse_reduce`], [`filter`], [`reject`], the short-circuiting
//! qualifiers [`all`], [`any`], [`none`], plus [`count`], [`min`] and
//! [`max`].
//!
//! ```
//! use seqfn::{all, count, filter, map, reduce};
//!
//! let items = [5, 6, 12];
//!
//! assert_eq!(map(&items, |n| n * 2), vec![10, 12, 24]);
//! assert_eq!(reduce(&items, None, |acc, n| acc + n), Some(23));
//! assert_eq!(filter(&items, |n| n % 2 == 0), vec![6, 12]);
//! assert_eq!(count(&items, |n| *n < 7), 2);
//! assert!(!all(&items, |n| *n < 5));
//! ```
//!
//! # Flattening
//!
//! [`flatten()`] linearizes arbitrarily nested sequences ([`Nested`])
//! depth-first and left-to-right, suspending cursors on an explicit work
//! list instead of recursing, so nesting depth is unbounded.
//!
//! ```
//! use seqfn::{flatten, Nested};
//!
//! let list = [
//!     Nested::Seq(vec![Nested::Leaf(1), Nested::Seq(vec![Nested::Leaf(2)])]),
//!     Nested::Leaf(3),
//! ];
//! assert_eq!(flatten(&list), vec![1, 2, 3]);
//! ```
//!
//! # Call-gated wrappers
//!
//! Orthogonal to the cursors, [`curry`], [`stretch_curry`], [`only`],
//! [`after`], [`partial`] and [`times`] wrap a callable in a private
//! counter or argument accumulator.
//!
//! ```
//! use seqfn::{curry, only};
//!
//! let mut add3 = curry(3, |args: Vec<i32>| args.iter().sum::<i32>())?;
//! assert_eq!(add3.feed(1)?, None);
//! assert_eq!(add3.feed(2)?, None);
//! assert_eq!(add3.feed(3)?, Some(6));
//!
//! let mut gate = only(1, |n: i32| n + 1);
//! assert_eq!(gate.call(1), Some(2));
//! assert_eq!(gate.call(2), None);
//! # Ok::<(), seqfn::InvalidArgument>(())
//! ```
//!
//! # Errors
//!
//! The only error type is [`InvalidArgument`], raised eagerly before any
//! traversal or counter state exists; a failed call has done no work.
//! Everything here is synchronous and single-owner: cursors and gated
//! state take `&mut self` for every mutation and are never shared.

#[doc(inline)]
pub use combinators::{
    all, any, count, each, enumerate, enumerate_from, filter, map, max, max_by, min, min_by, none,
    reduce, reject, reverse_each, reverse_reduce,
};
#[doc(inline)]
pub use cursor::{Cursor, CursorIter, Direction};
#[doc(inline)]
pub use error::InvalidArgument;
#[doc(inline)]
pub use factory::{range, sample, sample_with, shuffle, shuffle_with, unique};
#[doc(inline)]
pub use flatten::{flatten, Nested};
#[doc(inline)]
pub use gated::{
    after, curry, only, partial, stretch_curry, times, After, Curried, Only, StretchCurried,
};

pub mod combinators;
pub mod cursor;
pub mod error;
pub mod factory;
pub mod flatten;
pub mod gated;
