//! Maybe type - an optional value without a null sentinel.
//!
//! This module provides the `Maybe<T>` type, which represents a value that
//! is either `Present(value)` or `Absent`. This is commonly used in
//! functional programming for:
//!
//! - Representing "a value or nothing" without null checks
//! - Short-circuiting pipelines: once a chain is `Absent`, every later
//!   `map`/`bind` is skipped
//! - Converting to [`Either`] when the missing case needs a reason
//!
//! # Examples
//!
//! ```rust
//! use twofold::control::Maybe;
//!
//! // Creating Maybe values
//! let present: Maybe<i32> = Maybe::Present(42);
//! let absent: Maybe<i32> = Maybe::Absent;
//!
//! // Pattern matching
//! match present {
//!     Maybe::Present(n) => println!("Got {}", n),
//!     Maybe::Absent => println!("Got nothing"),
//! }
//!
//! // Using fold to collapse both cases into one value
//! let doubled = absent.fold(0, |n| n * 2);
//! assert_eq!(doubled, 0);
//! ```

use std::fmt;

#[cfg(feature = "async")]
use std::future::Future;

use super::either::Either;

/// An optional value.
///
/// `Maybe<T>` represents a value that is either `Present(value)` or
/// `Absent`. The variant is fixed at construction: combinators always
/// consume the container and return a new one, and a supplied
/// transformation function is never invoked on `Absent`.
///
/// # Type Parameters
///
/// * `T` - The type of the held value
///
/// # Examples
///
/// ```rust
/// use twofold::control::Maybe;
///
/// let value: Maybe<i32> = Maybe::Present(21);
/// assert_eq!(value.map(|n| n * 2), Maybe::Present(42));
///
/// let nothing: Maybe<i32> = Maybe::Absent;
/// assert_eq!(nothing.map(|n| n * 2), Maybe::Absent);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// The variant holding exactly one value.
    Present(T),
    /// The variant holding no value.
    Absent,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Present(42);
    /// assert!(present.is_present());
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert!(!absent.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is an `Absent` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert!(absent.is_absent());
    ///
    /// let present: Maybe<i32> = Maybe::Present(42);
    /// assert!(!present.is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the held value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Present(42);
    /// assert_eq!(present.value_ref(), Some(&42));
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert_eq!(absent.value_ref(), None);
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Mapping and Chaining
    // =========================================================================

    /// Applies a function to the held value if present.
    ///
    /// If this is `Present(v)`, returns `Present(function(v))`.
    /// If this is `Absent`, returns `Absent` without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Present(21);
    /// assert_eq!(present.map(|n| n * 2), Maybe::Present(42));
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert_eq!(absent.map(|n| n * 2), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Chains a function that itself returns a `Maybe`.
    ///
    /// If this is `Present(v)`, returns `function(v)` as-is. If this is
    /// `Absent`, returns `Absent` without invoking `function`. Unlike
    /// [`map`](Self::map), the function decides whether the chain
    /// continues.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// fn non_empty(s: &str) -> Maybe<&str> {
    ///     if s.is_empty() { Maybe::Absent } else { Maybe::Present(s) }
    /// }
    ///
    /// assert_eq!(Maybe::Present("hi").bind(non_empty), Maybe::Present("hi"));
    /// assert_eq!(Maybe::Present("").bind(non_empty), Maybe::Absent);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keeps the held value only if the predicate holds.
    ///
    /// `Present(v)` becomes `Absent` when `predicate(&v)` is false;
    /// `Absent` stays `Absent` and the predicate is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let even = Maybe::Present(4).filter(|n| n % 2 == 0);
    /// assert_eq!(even, Maybe::Present(4));
    ///
    /// let odd = Maybe::Present(3).filter(|n| n % 2 == 0);
    /// assert_eq!(odd, Maybe::Absent);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    // =========================================================================
    // Fold and Extraction (Terminal)
    // =========================================================================

    /// Collapses the container into a bare value.
    ///
    /// Returns `function(v)` for `Present(v)` and `default` for `Absent`.
    /// The "no value" side comes first, uniformly with
    /// [`Either::fold`](Either::fold).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Present(21);
    /// assert_eq!(present.fold(0, |n| n * 2), 42);
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert_eq!(absent.fold(0, |n| n * 2), 0);
    /// ```
    #[inline]
    pub fn fold<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default,
        }
    }

    /// Returns the held value, or the supplied default if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Present(42);
    /// assert_eq!(present.otherwise(0), 42);
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert_eq!(absent.otherwise(0), 0);
    /// ```
    #[inline]
    pub fn otherwise(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the held value, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Absent` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Present(42);
    /// assert_eq!(present.unwrap_present(), 42);
    /// ```
    #[inline]
    pub fn unwrap_present(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("called `Maybe::unwrap_present()` on an `Absent` value"),
        }
    }

    // =========================================================================
    // Side-Effect Hooks (Fluent)
    // =========================================================================

    /// Invokes a callback on the held value if present, returning the
    /// container unchanged.
    ///
    /// The callback receives a reference; the same `Present` value flows
    /// through, so hooks can be inserted anywhere in a chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let mut seen = None;
    /// let value = Maybe::Present(42).on_present(|n| seen = Some(*n));
    /// assert_eq!(value, Maybe::Present(42));
    /// assert_eq!(seen, Some(42));
    /// ```
    #[inline]
    pub fn on_present<F>(self, callback: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            callback(value);
        }
        self
    }

    /// Invokes a callback if absent, returning the container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let mut missing = false;
    /// let value: Maybe<i32> = Maybe::Absent.on_absent(|| missing = true);
    /// assert_eq!(value, Maybe::Absent);
    /// assert!(missing);
    /// ```
    #[inline]
    pub fn on_absent<F>(self, callback: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            callback();
        }
        self
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an [`Either`], supplying the reason to use when absent.
    ///
    /// `Present(v)` becomes `Success(v)`; `Absent` becomes
    /// `Failure(reason)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::{Either, Maybe};
    ///
    /// let present: Maybe<i32> = Maybe::Present(42);
    /// assert_eq!(present.to_either("missing"), Either::Success(42));
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert_eq!(absent.to_either("missing"), Either::Failure("missing"));
    /// ```
    #[inline]
    pub fn to_either<F>(self, reason: F) -> Either<F, T> {
        match self {
            Self::Present(value) => Either::Success(value),
            Self::Absent => Either::Failure(reason),
        }
    }

    /// Converts into an `Option`, consuming the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Present(42);
    /// assert_eq!(present.into_option(), Some(42));
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert_eq!(absent.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Construction Helpers
    // =========================================================================

    /// Constructs from the nullable boundary: `Some` becomes `Present`,
    /// `None` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(42)), Maybe::Present(42));
    /// assert_eq!(Maybe::from_option(None::<i32>), Maybe::Absent);
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Runs a fallible operation, discarding the error detail.
    ///
    /// `Ok(v)` becomes `Present(v)`; any `Err` becomes `Absent`. When the
    /// reason matters, use [`Either::attempt`] instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let parsed = Maybe::attempt(|| "42".parse::<i32>());
    /// assert_eq!(parsed, Maybe::Present(42));
    ///
    /// let failed = Maybe::attempt(|| "nope".parse::<i32>());
    /// assert_eq!(failed, Maybe::Absent);
    /// ```
    #[inline]
    pub fn attempt<E, F>(operation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        match operation() {
            Ok(value) => Self::Present(value),
            Err(_) => Self::Absent,
        }
    }
}

// =============================================================================
// Asynchronous Combinators
// =============================================================================

#[cfg(feature = "async")]
impl<T> Maybe<T> {
    /// Applies an asynchronous function to the held value if present.
    ///
    /// On `Present(v)`, awaits `function(v)` and wraps the result in
    /// `Present`. On `Absent`, resolves to `Absent` without invoking
    /// `function`. A failing future is not caught; conversion at the
    /// boundary is the job of [`attempt_async`](Self::attempt_async).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let present: Maybe<i32> = Maybe::Present(21);
    /// let result = present.map_async(|n| async move { n * 2 }).await;
    /// assert_eq!(result, Maybe::Present(42));
    /// # }
    /// ```
    pub async fn map_async<U, F, Fut>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value).await),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Chains an asynchronous function that itself returns a `Maybe`.
    ///
    /// On `Present(v)`, awaits `function(v)` and returns it as-is. On
    /// `Absent`, resolves to `Absent` without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let result = Maybe::Present(5)
    ///     .bind_async(|n| async move {
    ///         if n > 0 { Maybe::Present(n * 2) } else { Maybe::Absent }
    ///     })
    ///     .await;
    /// assert_eq!(result, Maybe::Present(10));
    /// # }
    /// ```
    pub async fn bind_async<U, F, Fut>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Self::Present(value) => function(value).await,
            Self::Absent => Maybe::Absent,
        }
    }

    /// Collapses the container asynchronously.
    ///
    /// On `Present(v)`, awaits `function(v)`. On `Absent`, resolves to
    /// `default` immediately; `function` is never scheduled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// let result = absent.fold_async(42, |n| async move { n * 2 }).await;
    /// assert_eq!(result, 42);
    /// # }
    /// ```
    pub async fn fold_async<U, F, Fut>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Present(value) => function(value).await,
            Self::Absent => default,
        }
    }

    /// Awaits a fallible asynchronous operation, discarding the error.
    ///
    /// `Ok(v)` becomes `Present(v)`; any `Err` becomes `Absent`. This is
    /// the async counterpart of [`attempt`](Self::attempt) and the only
    /// async entry point that converts a failure into a container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let parsed = Maybe::attempt_async(async { "42".parse::<i32>() }).await;
    /// assert_eq!(parsed, Maybe::Present(42));
    /// # }
    /// ```
    pub async fn attempt_async<E, Fut>(operation: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>>,
    {
        match operation.await {
            Ok(value) => Self::Present(value),
            Err(_) => Self::Absent,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Some(v)` becomes `Present(v)`, and `None` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let maybe: Maybe<i32> = Some(42).into();
    /// assert_eq!(maybe, Maybe::Present(42));
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// `Present(v)` becomes `Some(v)`, and `Absent` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::control::Maybe;
    ///
    /// let option: Option<i32> = Maybe::Present(42).into();
    /// assert_eq!(option, Some(42));
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_maybe_present_construction() {
        let value: Maybe<i32> = Maybe::Present(42);
        assert!(value.is_present());
        assert!(!value.is_absent());
    }

    #[rstest]
    fn test_maybe_absent_construction() {
        let value: Maybe<i32> = Maybe::Absent;
        assert!(value.is_absent());
        assert!(!value.is_present());
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let some: Option<i32> = Some(42);
        let maybe: Maybe<i32> = some.into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(42));

        let none: Option<i32> = None;
        let maybe: Maybe<i32> = none.into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, None);
    }
}
