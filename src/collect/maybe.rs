//! Aggregation helpers over sequences of [`Maybe`].

use crate::control::Maybe;

/// Collects the held value of every `Present` element, in original order.
///
/// `Absent` elements are skipped. Empty or all-`Absent` input yields an
/// empty vector; this helper never fails.
///
/// # Examples
///
/// ```rust
/// use twofold::collect::maybe::present_values;
/// use twofold::control::Maybe;
///
/// let items = vec![Maybe::Present(1), Maybe::Absent, Maybe::Present(3)];
/// assert_eq!(present_values(items), vec![1, 3]);
///
/// let empty: Vec<Maybe<i32>> = vec![];
/// assert_eq!(present_values(empty), Vec::<i32>::new());
/// ```
pub fn present_values<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    items
        .into_iter()
        .filter_map(Maybe::into_option)
        .collect()
}

/// Collects every value only if every element is `Present`.
///
/// Short-circuits to `Absent` on the first `Absent` encountered; no
/// partial result is produced. Empty input yields `Present` of an empty
/// vector.
///
/// # Examples
///
/// ```rust
/// use twofold::collect::maybe::sequence;
/// use twofold::control::Maybe;
///
/// let all = vec![Maybe::Present(1), Maybe::Present(2)];
/// assert_eq!(sequence(all), Maybe::Present(vec![1, 2]));
///
/// let holed = vec![Maybe::Present(1), Maybe::Absent, Maybe::Present(3)];
/// assert_eq!(sequence(holed), Maybe::Absent);
/// ```
pub fn sequence<T, I>(items: I) -> Maybe<Vec<T>>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    let iterator = items.into_iter();
    let mut values = Vec::with_capacity(iterator.size_hint().0);
    for item in iterator {
        match item {
            Maybe::Present(value) => values.push(value),
            Maybe::Absent => return Maybe::Absent,
        }
    }
    Maybe::Present(values)
}

/// Returns the first `Present` element in iteration order, or `Absent` if
/// there is none.
///
/// # Examples
///
/// ```rust
/// use twofold::collect::maybe::first_present;
/// use twofold::control::Maybe;
///
/// let items = vec![Maybe::Absent, Maybe::Present(2), Maybe::Present(3)];
/// assert_eq!(first_present(items), Maybe::Present(2));
///
/// let none: Vec<Maybe<i32>> = vec![Maybe::Absent, Maybe::Absent];
/// assert_eq!(first_present(none), Maybe::Absent);
/// ```
pub fn first_present<T, I>(items: I) -> Maybe<T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    items
        .into_iter()
        .find(Maybe::is_present)
        .unwrap_or(Maybe::Absent)
}

/// Keeps the elements for which the predicate yields `Present`.
///
/// The predicate's result values are discarded; only membership matters.
/// The surviving elements keep their original order.
///
/// # Examples
///
/// ```rust
/// use twofold::collect::maybe::retain_present;
/// use twofold::control::Maybe;
///
/// let words = vec!["one", "", "three"];
/// let non_empty = retain_present(words, |word| {
///     if word.is_empty() {
///         Maybe::Absent
///     } else {
///         Maybe::Present(word.len())
///     }
/// });
/// assert_eq!(non_empty, vec!["one", "three"]);
/// ```
pub fn retain_present<T, U, P>(items: Vec<T>, mut predicate: P) -> Vec<T>
where
    P: FnMut(&T) -> Maybe<U>,
{
    items
        .into_iter()
        .filter(|item| predicate(item).is_present())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_sequence_preserves_order() {
        let items = vec![Maybe::Present(3), Maybe::Present(1), Maybe::Present(2)];
        assert_eq!(sequence(items), Maybe::Present(vec![3, 1, 2]));
    }

    #[rstest]
    fn test_first_present_skips_absent() {
        let items = vec![Maybe::Absent, Maybe::Absent, Maybe::Present(7)];
        assert_eq!(first_present(items), Maybe::Present(7));
    }
}
