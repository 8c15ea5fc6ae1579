//! Aggregation helpers over sequences of [`Either`].

use crate::control::Either;

/// Collects the value of every `Success` element, in original order.
///
/// `Failure` elements are skipped. Empty or all-`Failure` input yields an
/// empty vector; this helper never fails.
///
/// # Examples
///
/// ```rust
/// use twofold::collect::either::success_values;
/// use twofold::control::Either;
///
/// let items: Vec<Either<String, i32>> = vec![
///     Either::Success(1),
///     Either::Failure("bad".to_string()),
///     Either::Success(3),
/// ];
/// assert_eq!(success_values(items), vec![1, 3]);
/// ```
pub fn success_values<F, S, I>(items: I) -> Vec<S>
where
    I: IntoIterator<Item = Either<F, S>>,
{
    items
        .into_iter()
        .filter_map(|item| item.fold(|_| None, Some))
        .collect()
}

/// Collects the reason of every `Failure` element, in original order.
///
/// `Success` elements are skipped.
///
/// # Examples
///
/// ```rust
/// use twofold::collect::either::failure_values;
/// use twofold::control::Either;
///
/// let items: Vec<Either<String, i32>> = vec![
///     Either::Success(1),
///     Either::Failure("bad".to_string()),
///     Either::Success(3),
/// ];
/// assert_eq!(failure_values(items), vec!["bad".to_string()]);
/// ```
pub fn failure_values<F, S, I>(items: I) -> Vec<F>
where
    I: IntoIterator<Item = Either<F, S>>,
{
    items
        .into_iter()
        .filter_map(|item| item.fold(Some, |_| None))
        .collect()
}

/// Collects all success values, failing only when there are none.
///
/// This is an at-least-one policy, distinct from the all-or-nothing
/// [`sequence`]: failures are silently dropped, and
/// `Failure(default_reason)` is returned only when the input holds zero
/// successes (including the empty input). None of the original failure
/// reasons is ever reported.
///
/// # Examples
///
/// ```rust
/// use twofold::collect::either::successes_or;
/// use twofold::control::Either;
///
/// let mixed: Vec<Either<String, i32>> = vec![
///     Either::Success(1),
///     Either::Failure("bad".to_string()),
///     Either::Success(3),
/// ];
/// assert_eq!(
///     successes_or(mixed, "all failed".to_string()),
///     Either::Success(vec![1, 3]),
/// );
///
/// let barren: Vec<Either<String, i32>> =
///     vec![Either::Failure("bad".to_string())];
/// assert_eq!(
///     successes_or(barren, "all failed".to_string()),
///     Either::Failure("all failed".to_string()),
/// );
/// ```
pub fn successes_or<F, S, I>(items: I, default_reason: F) -> Either<F, Vec<S>>
where
    I: IntoIterator<Item = Either<F, S>>,
{
    let values = success_values(items);
    if values.is_empty() {
        Either::Failure(default_reason)
    } else {
        Either::Success(values)
    }
}

/// Collects every value only if every element is `Success`.
///
/// Returns the first `Failure` encountered verbatim, preserving its
/// original reason; later elements are not inspected and no partial
/// result is produced. Empty input yields `Success` of an empty vector.
///
/// # Examples
///
/// ```rust
/// use twofold::collect::either::sequence;
/// use twofold::control::Either;
///
/// let all: Vec<Either<String, i32>> =
///     vec![Either::Success(1), Either::Success(2)];
/// assert_eq!(sequence(all), Either::Success(vec![1, 2]));
///
/// let mixed: Vec<Either<String, i32>> = vec![
///     Either::Success(1),
///     Either::Failure("first".to_string()),
///     Either::Failure("second".to_string()),
/// ];
/// assert_eq!(sequence(mixed), Either::Failure("first".to_string()));
/// ```
pub fn sequence<F, S, I>(items: I) -> Either<F, Vec<S>>
where
    I: IntoIterator<Item = Either<F, S>>,
{
    let iterator = items.into_iter();
    let mut values = Vec::with_capacity(iterator.size_hint().0);
    for item in iterator {
        match item {
            Either::Success(value) => values.push(value),
            Either::Failure(reason) => return Either::Failure(reason),
        }
    }
    Either::Success(values)
}

/// Returns the first `Success` element in iteration order, or
/// `Failure(default_reason)` if there is none.
///
/// # Examples
///
/// ```rust
/// use twofold::collect::either::first_success;
/// use twofold::control::Either;
///
/// let items: Vec<Either<String, i32>> = vec![
///     Either::Failure("bad".to_string()),
///     Either::Success(2),
///     Either::Success(3),
/// ];
/// assert_eq!(
///     first_success(items, "none".to_string()),
///     Either::Success(2),
/// );
///
/// let barren: Vec<Either<String, i32>> =
///     vec![Either::Failure("bad".to_string())];
/// assert_eq!(
///     first_success(barren, "none".to_string()),
///     Either::Failure("none".to_string()),
/// );
/// ```
pub fn first_success<F, S, I>(items: I, default_reason: F) -> Either<F, S>
where
    I: IntoIterator<Item = Either<F, S>>,
{
    items
        .into_iter()
        .find(Either::is_success)
        .unwrap_or(Either::Failure(default_reason))
}
