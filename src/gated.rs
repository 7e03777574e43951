//! Call-count-gated function wrappers.
//!
//! Each factory here wraps a callable in a small private state machine: an
//! argument accumulator ([`curry`], [`stretch_curry`]), a countdown of
//! allowed calls ([`only`]), or a countdown of suppressed calls
//! ([`after`]). The state lives inside the returned value, is mutated only
//! by invoking it, and cannot be reset or inspected from outside.
//!
//! A closure cannot hand itself back to be called again, so each wrapper
//! is a struct with a single invoke method: feeding a curried value
//! answers `Ok(None)` until the argument list saturates, then
//! `Ok(Some(result))` exactly once.

use std::mem;

use crate::error::InvalidArgument;

/// Invoke `func` exactly `count` times, synchronously and in order.
///
/// # Examples
///
/// ```
/// use seqfn::times;
///
/// let mut ticks = 0;
/// times(3, || ticks += 1);
/// assert_eq!(ticks, 3);
/// ```
pub fn times(count: usize, mut func: impl FnMut()) {
    for _ in 0..count {
        func();
    }
}

/// Bind the leading argument of `func`, returning a callable of the rest.
///
/// Purely stateless composition: no counters, no accumulator. To bind
/// several leading values, make `bound` a tuple.
///
/// # Examples
///
/// ```
/// use seqfn::partial;
///
/// let mut add_ten = partial(|a: i32, b: i32| a + b, 10);
/// assert_eq!(add_ten(1), 11);
/// assert_eq!(add_ten(5), 15);
/// ```
pub fn partial<A, B, R, F>(mut func: F, bound: A) -> impl FnMut(B) -> R
where
    A: Clone,
    F: FnMut(A, B) -> R,
{
    move |rest| func(bound.clone(), rest)
}

/// A callable accumulating one argument per invocation; see [`curry`].
pub struct Curried<T, F> {
    arity: usize,
    stock: Vec<T>,
    func: Option<F>,
}

/// Wrap `func` so it fires only once `arity` arguments have been fed in,
/// one per call.
///
/// [`Curried::feed`] appends its argument to the private stock and answers
/// `Ok(None)` while the stock is short of the arity. The call that
/// completes the stock invokes `func` with all arguments in feed order and
/// answers `Ok(Some(result))`. Feeding a saturated value fails with
/// [`InvalidArgument::Saturated`] and does not invoke anything; an arity of
/// zero is rejected here, at construction.
///
/// # Examples
///
/// ```
/// use seqfn::curry;
///
/// let mut add3 = curry(3, |args: Vec<i32>| args.iter().sum::<i32>())?;
/// assert_eq!(add3.feed(1)?, None);
/// assert_eq!(add3.feed(2)?, None);
/// assert_eq!(add3.feed(3)?, Some(6));
/// assert!(add3.feed(4).is_err());
/// # Ok::<(), seqfn::InvalidArgument>(())
/// ```
pub fn curry<T, R, F>(arity: usize, func: F) -> Result<Curried<T, F>, InvalidArgument>
where
    F: FnOnce(Vec<T>) -> R,
{
    if arity == 0 {
        return Err(InvalidArgument::ZeroArity);
    }
    Ok(Curried {
        arity,
        stock: Vec::with_capacity(arity),
        func: Some(func),
    })
}

impl<T, F> Curried<T, F> {
    /// Feed one argument; fires the wrapped function on the call that
    /// reaches the arity.
    pub fn feed<R>(&mut self, arg: T) -> Result<Option<R>, InvalidArgument>
    where
        F: FnOnce(Vec<T>) -> R,
    {
        match self.func.take() {
            None => Err(InvalidArgument::Saturated),
            Some(func) => {
                self.stock.push(arg);
                if self.stock.len() < self.arity {
                    self.func = Some(func);
                    Ok(None)
                } else {
                    Ok(Some(func(mem::take(&mut self.stock))))
                }
            }
        }
    }
}

/// A callable accumulating a batch of arguments per invocation; see
/// [`stretch_curry`].
pub struct StretchCurried<T, F> {
    arity: usize,
    stock: Vec<T>,
    func: Option<F>,
}

/// Like [`curry`], but each call may feed any number of arguments at once,
/// and the wrapped function fires as soon as the accumulated count reaches
/// *or exceeds* the arity.
///
/// # Examples
///
/// ```
/// use seqfn::stretch_curry;
///
/// let mut sum = stretch_curry(4, |args: Vec<i32>| args.iter().sum::<i32>())?;
/// assert_eq!(sum.feed([1, 2])?, None);
/// // Overshooting the arity still fires, with all five arguments.
/// assert_eq!(sum.feed([3, 4, 5])?, Some(15));
/// # Ok::<(), seqfn::InvalidArgument>(())
/// ```
pub fn stretch_curry<T, R, F>(arity: usize, func: F) -> Result<StretchCurried<T, F>, InvalidArgument>
where
    F: FnOnce(Vec<T>) -> R,
{
    if arity == 0 {
        return Err(InvalidArgument::ZeroArity);
    }
    Ok(StretchCurried {
        arity,
        stock: Vec::with_capacity(arity),
        func: Some(func),
    })
}

impl<T, F> StretchCurried<T, F> {
    /// Feed a batch of arguments; fires the wrapped function on the call
    /// whose batch brings the accumulated count up to the arity or past it.
    pub fn feed<R, I>(&mut self, args: I) -> Result<Option<R>, InvalidArgument>
    where
        F: FnOnce(Vec<T>) -> R,
        I: IntoIterator<Item = T>,
    {
        match self.func.take() {
            None => Err(InvalidArgument::Saturated),
            Some(func) => {
                self.stock.extend(args);
                if self.stock.len() < self.arity {
                    self.func = Some(func);
                    Ok(None)
                } else {
                    Ok(Some(func(mem::take(&mut self.stock))))
                }
            }
        }
    }
}

/// A callable whose wrapped function runs only for the first `n` calls;
/// see [`only`].
pub struct Only<F> {
    remaining: usize,
    func: F,
}

/// Wrap `func` so only the first `count` invocations reach it.
///
/// Later calls return `None` without invoking anything. A `count` of zero
/// means the wrapped function never runs.
///
/// # Examples
///
/// ```
/// use seqfn::only;
///
/// let mut twice = only(2, |n: i32| n * 10);
/// assert_eq!(twice.call(1), Some(10));
/// assert_eq!(twice.call(2), Some(20));
/// assert_eq!(twice.call(3), None);
/// ```
pub fn only<F>(count: usize, func: F) -> Only<F> {
    Only {
        remaining: count,
        func,
    }
}

impl<F> Only<F> {
    /// Invoke the wrapped function if any allowed calls remain.
    pub fn call<A, R>(&mut self, arg: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some((self.func)(arg))
    }
}

/// A callable whose wrapped function runs only after the first `n` calls;
/// see [`after`].
pub struct After<F> {
    suppressed: usize,
    func: F,
}

/// Wrap `func` so the first `count` invocations are swallowed.
///
/// Each suppressed call returns `None` and invokes nothing; from call
/// `count + 1` onward every call reaches the wrapped function.
///
/// # Examples
///
/// ```
/// use seqfn::after;
///
/// let mut late = after(2, |n: i32| n * 10);
/// assert_eq!(late.call(1), None);
/// assert_eq!(late.call(2), None);
/// assert_eq!(late.call(3), Some(30));
/// assert_eq!(late.call(4), Some(40));
/// ```
pub fn after<F>(count: usize, func: F) -> After<F> {
    After {
        suppressed: count,
        func,
    }
}

impl<F> After<F> {
    /// Invoke the wrapped function unless this call is still suppressed.
    pub fn call<A, R>(&mut self, arg: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if self.suppressed > 0 {
            self.suppressed -= 1;
            return None;
        }
        Some((self.func)(arg))
    }
}
