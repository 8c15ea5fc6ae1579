//! Either type - a success value or a typed failure reason.
//!
//! This module provides the `Either<F, S>` type, which represents a value
//! that is either a `Success(value)` or a `Failure(reason)`. This is
//! commonly used in functional programming for:
//!
//! - Error handling with a caller-defined reason type
//! - Short-circuiting pipelines that need to report why they stopped
//! - Converting to [`Maybe`] when the reason no longer matters
//!
//! # Examples
//!
//! ```rust
//! use twofold::control::Either;
//!
//! // Creating Either values
//! let success: Either<String, i32> = Either::Success(42);
//! let failure: Either<String, i32> = Either::Failure("bad input".to_string());
//!
//! // Pattern matching
//! match success {
//!     Either::Success(n) => println!("Got {}", n),
//!     Either::Failure(reason) => println!("Failed: {}", reason),
//! }
//!
//! // Using fold to handle both cases
//! let message = failure.fold(
//!     |reason| format!("error: {}", reason),
//!     |n| format!("value: {}", n),
//! );
//! assert_eq!(message, "error: bad input");
//! ```

use std::fmt;

#[cfg(feature = "async")]
use std::future::Future;

use super::maybe::Maybe;

/// A disjoint result: a success value or a failure reason.
///
/// `Either<F, S>` represents a value that is either `Failure(reason)` or
/// `Success(value)`. The failure side always carries a caller-meaningful
/// reason; there is no bare failure variant. Combinators consume the
/// container and return a fresh one, and a supplied transformation
/// function is never invoked on the `Failure` branch.
///
/// # Type Parameters
///
/// * `F` - The type of the failure reason
/// * `S` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use twofold::control::Either;
///
/// let success: Either<String, i32> = Either::Success(42);
/// let doubled = success.map(|n| n * 2);
/// assert_eq!(doubled, Either::Success(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<F, S> {
    /// The variant carrying the reason there is no success value.
    Failure(F),
    /// The variant carrying the success value.
    Success(S),
}

impl<F, S> Either<F, S> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Success(42);
    /// assert!(success.is_success());
    ///
    /// let failure: Either<String, i32> = Either::Failure("oops".to_string());
    /// assert!(!failure.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let failure: Either<String, i32> = Either::Failure("oops".to_string());
    /// assert!(failure.is_failure());
    ///
    /// let success: Either<String, i32> = Either::Success(42);
    /// assert!(!success.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Success(42);
    /// assert_eq!(success.success_ref(), Some(&42));
    ///
    /// let failure: Either<String, i32> = Either::Failure("oops".to_string());
    /// assert_eq!(failure.success_ref(), None);
    /// ```
    #[inline]
    pub const fn success_ref(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure reason if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let failure: Either<String, i32> = Either::Failure("oops".to_string());
    /// assert_eq!(failure.failure_ref(), Some(&"oops".to_string()));
    ///
    /// let success: Either<String, i32> = Either::Success(42);
    /// assert_eq!(success.failure_ref(), None);
    /// ```
    #[inline]
    pub const fn failure_ref(&self) -> Option<&F> {
        match self {
            Self::Failure(reason) => Some(reason),
            Self::Success(_) => None,
        }
    }

    // =========================================================================
    // Mapping and Chaining
    // =========================================================================

    /// Applies a function to the success value if present.
    ///
    /// If this is `Success(v)`, returns `Success(function(v))`.
    /// If this is `Failure(e)`, returns `Failure(e)` unchanged without
    /// invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Success(21);
    /// assert_eq!(success.map(|n| n * 2), Either::Success(42));
    ///
    /// let failure: Either<String, i32> = Either::Failure("oops".to_string());
    /// assert_eq!(failure.map(|n| n * 2), Either::Failure("oops".to_string()));
    /// ```
    #[inline]
    pub fn map<U, Op>(self, function: Op) -> Either<F, U>
    where
        Op: FnOnce(S) -> U,
    {
        match self {
            Self::Success(value) => Either::Success(function(value)),
            Self::Failure(reason) => Either::Failure(reason),
        }
    }

    /// Applies a function to the failure reason if present.
    ///
    /// If this is `Failure(e)`, returns `Failure(function(e))`.
    /// If this is `Success(v)`, returns `Success(v)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let failure: Either<String, i32> = Either::Failure("oops".to_string());
    /// let tagged = failure.map_failure(|reason| format!("parse: {}", reason));
    /// assert_eq!(tagged, Either::Failure("parse: oops".to_string()));
    ///
    /// let success: Either<String, i32> = Either::Success(42);
    /// let tagged = success.map_failure(|reason| format!("parse: {}", reason));
    /// assert_eq!(tagged, Either::Success(42));
    /// ```
    #[inline]
    pub fn map_failure<G, Op>(self, function: Op) -> Either<G, S>
    where
        Op: FnOnce(F) -> G,
    {
        match self {
            Self::Success(value) => Either::Success(value),
            Self::Failure(reason) => Either::Failure(function(reason)),
        }
    }

    /// Chains a function that itself returns an `Either`.
    ///
    /// If this is `Success(v)`, returns `function(v)` as-is. If this is
    /// `Failure(e)`, returns `Failure(e)` without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// fn positive(n: i32) -> Either<String, i32> {
    ///     if n > 0 {
    ///         Either::Success(n)
    ///     } else {
    ///         Either::Failure("not positive".to_string())
    ///     }
    /// }
    ///
    /// assert_eq!(Either::Success(3).bind(positive), Either::Success(3));
    /// assert_eq!(
    ///     Either::Success(-3).bind(positive),
    ///     Either::Failure("not positive".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn bind<U, Op>(self, function: Op) -> Either<F, U>
    where
        Op: FnOnce(S) -> Either<F, U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(reason) => Either::Failure(reason),
        }
    }

    // =========================================================================
    // Fold and Extraction (Terminal)
    // =========================================================================

    /// Eliminates the `Either` by applying one of two functions.
    ///
    /// The failure handler comes first, matching the argument order of
    /// [`Maybe::fold`](Maybe::fold) where the "no value" side also comes
    /// first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::Failure(42);
    /// let result = failure.fold(|n| n.to_string(), |s| s);
    /// assert_eq!(result, "42");
    ///
    /// let success: Either<i32, String> = Either::Success("hello".to_string());
    /// let result = success.fold(|n: i32| n.to_string(), |s| s);
    /// assert_eq!(result, "hello");
    /// ```
    #[inline]
    pub fn fold<U, FOp, SOp>(self, on_failure: FOp, on_success: SOp) -> U
    where
        FOp: FnOnce(F) -> U,
        SOp: FnOnce(S) -> U,
    {
        match self {
            Self::Failure(reason) => on_failure(reason),
            Self::Success(value) => on_success(value),
        }
    }

    /// Single-default form of [`fold`](Self::fold), for parity with
    /// [`Maybe::fold`](Maybe::fold).
    ///
    /// Returns `on_success(v)` for `Success(v)` and `default` verbatim for
    /// `Failure`, without inspecting the reason.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Success(21);
    /// assert_eq!(success.fold_or(0, |n| n * 2), 42);
    ///
    /// let failure: Either<String, i32> = Either::Failure("oops".to_string());
    /// assert_eq!(failure.fold_or(0, |n| n * 2), 0);
    /// ```
    #[inline]
    pub fn fold_or<U, Op>(self, default: U, on_success: Op) -> U
    where
        Op: FnOnce(S) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or the supplied default on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Success(42);
    /// assert_eq!(success.otherwise(0), 42);
    ///
    /// let failure: Either<String, i32> = Either::Failure("oops".to_string());
    /// assert_eq!(failure.otherwise(0), 0);
    /// ```
    #[inline]
    pub fn otherwise(self, default: S) -> S {
        self.success_or(default)
    }

    /// Returns the success value, or the supplied default on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Success(42);
    /// assert_eq!(success.success_or(0), 42);
    ///
    /// let failure: Either<String, i32> = Either::Failure("oops".to_string());
    /// assert_eq!(failure.success_or(0), 0);
    /// ```
    #[inline]
    pub fn success_or(self, default: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the failure reason, or the supplied default on success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let failure: Either<String, i32> = Either::Failure("oops".to_string());
    /// assert_eq!(failure.failure_or("fine".to_string()), "oops".to_string());
    ///
    /// let success: Either<String, i32> = Either::Success(42);
    /// assert_eq!(success.failure_or("fine".to_string()), "fine".to_string());
    /// ```
    #[inline]
    pub fn failure_or(self, default: F) -> F {
        match self {
            Self::Failure(reason) => reason,
            Self::Success(_) => default,
        }
    }

    /// Returns the success value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Success(42);
    /// assert_eq!(success.unwrap_success(), 42);
    /// ```
    #[inline]
    pub fn unwrap_success(self) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Either::unwrap_success()` on a `Failure` value"),
        }
    }

    /// Returns the failure reason, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let failure: Either<String, i32> = Either::Failure("oops".to_string());
    /// assert_eq!(failure.unwrap_failure(), "oops".to_string());
    /// ```
    #[inline]
    pub fn unwrap_failure(self) -> F {
        match self {
            Self::Failure(reason) => reason,
            Self::Success(_) => panic!("called `Either::unwrap_failure()` on a `Success` value"),
        }
    }

    // =========================================================================
    // Side-Effect Hooks (Fluent)
    // =========================================================================

    /// Invokes a callback on the success value if present, returning the
    /// container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let mut seen = None;
    /// let value: Either<String, i32> =
    ///     Either::Success(42).on_success(|n| seen = Some(*n));
    /// assert_eq!(value, Either::Success(42));
    /// assert_eq!(seen, Some(42));
    /// ```
    #[inline]
    pub fn on_success<Op>(self, callback: Op) -> Self
    where
        Op: FnOnce(&S),
    {
        if let Self::Success(value) = &self {
            callback(value);
        }
        self
    }

    /// Invokes a callback on the failure reason if present, returning the
    /// container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let mut seen = None;
    /// let value: Either<String, i32> =
    ///     Either::Failure("oops".to_string()).on_failure(|e| seen = Some(e.clone()));
    /// assert_eq!(value, Either::Failure("oops".to_string()));
    /// assert_eq!(seen, Some("oops".to_string()));
    /// ```
    #[inline]
    pub fn on_failure<Op>(self, callback: Op) -> Self
    where
        Op: FnOnce(&F),
    {
        if let Self::Failure(reason) = &self {
            callback(reason);
        }
        self
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a [`Maybe`], discarding the failure reason.
    ///
    /// `Success(v)` becomes `Present(v)`; `Failure(e)` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::{Either, Maybe};
    ///
    /// let success: Either<String, i32> = Either::Success(42);
    /// assert_eq!(success.to_maybe(), Maybe::Present(42));
    ///
    /// let failure: Either<String, i32> = Either::Failure("oops".to_string());
    /// assert_eq!(failure.to_maybe(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<S> {
        match self {
            Self::Success(value) => Maybe::Present(value),
            Self::Failure(_) => Maybe::Absent,
        }
    }

    /// Swaps the `Failure` and `Success` variants.
    ///
    /// `Failure(e)` becomes `Success(e)`, and `Success(v)` becomes
    /// `Failure(v)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Success(42);
    /// assert_eq!(success.swap(), Either::Failure(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<S, F> {
        match self {
            Self::Failure(reason) => Either::Success(reason),
            Self::Success(value) => Either::Failure(value),
        }
    }

    // =========================================================================
    // Construction Helpers
    // =========================================================================

    /// Constructs from the nullable boundary, supplying the reason to use
    /// when the value is missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let some = Either::from_option(Some(42), "missing");
    /// assert_eq!(some, Either::Success(42));
    ///
    /// let none = Either::from_option(None::<i32>, "missing");
    /// assert_eq!(none, Either::Failure("missing"));
    /// ```
    #[inline]
    pub fn from_option(option: Option<S>, reason: F) -> Self {
        match option {
            Some(value) => Self::Success(value),
            None => Self::Failure(reason),
        }
    }

    /// Runs a fallible operation, using the caller-supplied reason on
    /// error.
    ///
    /// `Ok(v)` becomes `Success(v)`; any `Err` becomes `Failure(reason)`.
    /// The caught error value is discarded: the reason describes the
    /// failure in the caller's vocabulary, not the callee's. To carry an
    /// error value verbatim, convert a `Result` with `Either::from`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let parsed = Either::attempt(|| "42".parse::<i32>(), "not a number");
    /// assert_eq!(parsed, Either::Success(42));
    ///
    /// let failed = Either::attempt(|| "nope".parse::<i32>(), "not a number");
    /// assert_eq!(failed, Either::Failure("not a number"));
    /// ```
    #[inline]
    pub fn attempt<E, Op>(operation: Op, reason: F) -> Self
    where
        Op: FnOnce() -> Result<S, E>,
    {
        match operation() {
            Ok(value) => Self::Success(value),
            Err(_) => Self::Failure(reason),
        }
    }
}

// =============================================================================
// Asynchronous Combinators
// =============================================================================

#[cfg(feature = "async")]
impl<F, S> Either<F, S> {
    /// Applies an asynchronous function to the success value if present.
    ///
    /// On `Success(v)`, awaits `function(v)` and wraps the result in
    /// `Success`. On `Failure(e)`, resolves to `Failure(e)` without
    /// invoking `function`. A failing future is not caught; conversion at
    /// the boundary is the job of [`attempt_async`](Self::attempt_async).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let success: Either<String, i32> = Either::Success(21);
    /// let result = success.map_async(|n| async move { n * 2 }).await;
    /// assert_eq!(result, Either::Success(42));
    /// # }
    /// ```
    pub async fn map_async<U, Op, Fut>(self, function: Op) -> Either<F, U>
    where
        Op: FnOnce(S) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Either::Success(function(value).await),
            Self::Failure(reason) => Either::Failure(reason),
        }
    }

    /// Chains an asynchronous function that itself returns an `Either`.
    ///
    /// On `Success(v)`, awaits `function(v)` and returns it as-is. On
    /// `Failure(e)`, resolves to `Failure(e)` without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let result: Either<String, i32> = Either::Success(5)
    ///     .bind_async(|n| async move {
    ///         if n > 0 {
    ///             Either::Success(n * 2)
    ///         } else {
    ///             Either::Failure("not positive".to_string())
    ///         }
    ///     })
    ///     .await;
    /// assert_eq!(result, Either::Success(10));
    /// # }
    /// ```
    pub async fn bind_async<U, Op, Fut>(self, function: Op) -> Either<F, U>
    where
        Op: FnOnce(S) -> Fut,
        Fut: Future<Output = Either<F, U>>,
    {
        match self {
            Self::Success(value) => function(value).await,
            Self::Failure(reason) => Either::Failure(reason),
        }
    }

    /// Collapses the container asynchronously.
    ///
    /// On `Success(v)`, awaits `function(v)`. On `Failure`, resolves to
    /// `default` immediately; `function` is never scheduled and the reason
    /// is not inspected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let failure: Either<String, i32> = Either::Failure("oops".to_string());
    /// let result = failure.fold_async(42, |n| async move { n * 2 }).await;
    /// assert_eq!(result, 42);
    /// # }
    /// ```
    pub async fn fold_async<U, Op, Fut>(self, default: U, function: Op) -> U
    where
        Op: FnOnce(S) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => function(value).await,
            Self::Failure(_) => default,
        }
    }

    /// Awaits a fallible asynchronous operation, carrying the error value
    /// into `Failure` verbatim.
    ///
    /// This is the one boundary where the rejection value itself becomes
    /// the reason; the synchronous [`attempt`](Self::attempt) uses a
    /// caller-supplied default instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let fetched: Either<String, i32> =
    ///     Either::attempt_async(async { Err("timed out".to_string()) }).await;
    /// assert_eq!(fetched, Either::Failure("timed out".to_string()));
    /// # }
    /// ```
    pub async fn attempt_async<Fut>(operation: Fut) -> Self
    where
        Fut: Future<Output = Result<S, F>>,
    {
        match operation.await {
            Ok(value) => Self::Success(value),
            Err(reason) => Self::Failure(reason),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<F: fmt::Debug, S: fmt::Debug> fmt::Debug for Either<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(reason) => formatter.debug_tuple("Failure").field(reason).finish(),
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<F, S> From<Result<S, F>> for Either<F, S> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(v)` becomes `Success(v)`, and `Err(e)` becomes `Failure(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = ok.into();
    /// assert_eq!(either, Either::Success(42));
    ///
    /// let err: Result<i32, String> = Err("oops".to_string());
    /// let either: Either<String, i32> = err.into();
    /// assert_eq!(either, Either::Failure("oops".to_string()));
    /// ```
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(reason) => Self::Failure(reason),
        }
    }
}

impl<F, S> From<Either<F, S>> for Result<S, F> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Success(v)` becomes `Ok(v)`, and `Failure(e)` becomes `Err(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Success(42);
    /// let result: Result<i32, String> = success.into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(either: Either<F, S>) -> Self {
        match either {
            Either::Failure(reason) => Err(reason),
            Either::Success(value) => Ok(value),
        }
    }
}
