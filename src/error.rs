use thiserror::Error;

/// The single error kind of this crate.
///
/// Every fallible entry point validates its arguments eagerly, before any
/// cursor or counter state is created, and reports a violated contract
/// through one of these variants. There is no recovery path: a failed call
/// has done no work and left no partial state behind.
///
/// Most of the shape contracts of the source library (sequence-ness,
/// integer-ness, callability) are compile-time facts here, so only the
/// contracts that stay runtime-checkable appear as variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// A curried callable requires an arity of at least one.
    #[error("curry arity must be at least 1")]
    ZeroArity,
    /// A curried callable was invoked again after it had already
    /// accumulated its full argument list and fired.
    #[error("curried function invoked after saturation")]
    Saturated,
}
