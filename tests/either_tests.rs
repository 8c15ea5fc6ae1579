//! Unit tests for the Either<F, S> type.
//!
//! Either represents a disjoint result:
//! - `Failure(reason)`: carries why there is no success value
//! - `Success(value)`: carries the success value
//!
//! The failure side always carries a reason; transformation callbacks
//! must never fire on the Failure branch.

use std::cell::Cell;

use rstest::rstest;
use twofold::control::{Either, Maybe};

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn either_success_is_success() {
    let value: Either<String, i32> = Either::Success(42);
    assert!(value.is_success());
    assert!(!value.is_failure());
}

#[rstest]
fn either_failure_is_failure() {
    let value: Either<String, i32> = Either::Failure("oops".to_string());
    assert!(value.is_failure());
    assert!(!value.is_success());
}

// =============================================================================
// Reference Extraction
// =============================================================================

#[rstest]
fn either_success_ref_extraction() {
    let value: Either<String, i32> = Either::Success(42);
    assert_eq!(value.success_ref(), Some(&42));
    assert_eq!(value.failure_ref(), None);
}

#[rstest]
fn either_failure_ref_extraction() {
    let value: Either<String, i32> = Either::Failure("oops".to_string());
    assert_eq!(value.failure_ref(), Some(&"oops".to_string()));
    assert_eq!(value.success_ref(), None);
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn either_map_on_success() {
    let value: Either<String, i32> = Either::Success(21);
    assert_eq!(value.map(|n| n * 2), Either::Success(42));
}

#[rstest]
fn either_map_on_failure_never_invokes_function() {
    let calls = Cell::new(0);
    let value: Either<String, i32> = Either::Failure("oops".to_string());
    let result = value.map(|n| {
        calls.set(calls.get() + 1);
        n * 2
    });
    assert_eq!(result, Either::Failure("oops".to_string()));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn either_map_failure_on_failure() {
    let value: Either<i32, String> = Either::Failure(42);
    let result = value.map_failure(|n| n * 2);
    assert_eq!(result, Either::Failure(84));
}

#[rstest]
fn either_map_failure_on_success_never_invokes_function() {
    let calls = Cell::new(0);
    let value: Either<i32, String> = Either::Success("hello".to_string());
    let result = value.map_failure(|n| {
        calls.set(calls.get() + 1);
        n * 2
    });
    assert_eq!(result, Either::Success("hello".to_string()));
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn either_bind_on_success_continues() {
    let value: Either<String, i32> = Either::Success(5);
    let result = value.bind(|n| Either::Success(n + 1));
    assert_eq!(result, Either::Success(6));
}

#[rstest]
fn either_bind_on_success_can_fail() {
    let value: Either<String, i32> = Either::Success(5);
    let result: Either<String, i32> = value.bind(|_| Either::Failure("rejected".to_string()));
    assert_eq!(result, Either::Failure("rejected".to_string()));
}

#[rstest]
fn either_bind_on_failure_never_invokes_function() {
    let calls = Cell::new(0);
    let value: Either<String, i32> = Either::Failure("oops".to_string());
    let result = value.bind(|n| {
        calls.set(calls.get() + 1);
        Either::Success(n + 1)
    });
    assert_eq!(result, Either::Failure("oops".to_string()));
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Fold Operations
// =============================================================================

#[rstest]
fn either_fold_on_failure_receives_reason() {
    let value: Either<i32, String> = Either::Failure(42);
    let result = value.fold(|n| n.to_string(), |s| s);
    assert_eq!(result, "42");
}

#[rstest]
fn either_fold_on_success() {
    let value: Either<i32, String> = Either::Success("hello".to_string());
    let result = value.fold(|n: i32| n.to_string(), |s| s);
    assert_eq!(result, "hello");
}

#[rstest]
fn either_fold_or_on_success() {
    let value: Either<String, i32> = Either::Success(21);
    assert_eq!(value.fold_or(0, |n| n * 2), 42);
}

#[rstest]
fn either_fold_or_returns_default_without_inspecting_reason() {
    let calls = Cell::new(0);
    let value: Either<String, i32> = Either::Failure("oops".to_string());
    let result = value.fold_or(7, |n| {
        calls.set(calls.get() + 1);
        n * 2
    });
    assert_eq!(result, 7);
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Terminal Extraction
// =============================================================================

#[rstest]
fn either_otherwise_on_success() {
    let value: Either<String, i32> = Either::Success(42);
    assert_eq!(value.otherwise(0), 42);
}

#[rstest]
fn either_otherwise_on_failure() {
    let value: Either<String, i32> = Either::Failure("oops".to_string());
    assert_eq!(value.otherwise(0), 0);
}

#[rstest]
fn either_success_or_and_failure_or() {
    let success: Either<String, i32> = Either::Success(42);
    assert_eq!(success.clone().success_or(0), 42);
    assert_eq!(success.failure_or("fine".to_string()), "fine".to_string());

    let failure: Either<String, i32> = Either::Failure("oops".to_string());
    assert_eq!(failure.clone().success_or(0), 0);
    assert_eq!(failure.failure_or("fine".to_string()), "oops".to_string());
}

#[rstest]
fn either_unwrap_success_success() {
    let value: Either<String, i32> = Either::Success(42);
    assert_eq!(value.unwrap_success(), 42);
}

#[rstest]
#[should_panic(expected = "called `Either::unwrap_success()` on a `Failure` value")]
fn either_unwrap_success_panic() {
    let value: Either<String, i32> = Either::Failure("oops".to_string());
    value.unwrap_success();
}

#[rstest]
fn either_unwrap_failure_success() {
    let value: Either<String, i32> = Either::Failure("oops".to_string());
    assert_eq!(value.unwrap_failure(), "oops".to_string());
}

#[rstest]
#[should_panic(expected = "called `Either::unwrap_failure()` on a `Success` value")]
fn either_unwrap_failure_panic() {
    let value: Either<String, i32> = Either::Success(42);
    value.unwrap_failure();
}

// =============================================================================
// Side-Effect Hooks
// =============================================================================

#[rstest]
fn either_on_success_fires_and_passes_through() {
    let calls = Cell::new(0);
    let value: Either<String, i32> = Either::Success(42).on_success(|_| calls.set(calls.get() + 1));
    assert_eq!(value, Either::Success(42));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn either_on_success_skipped_on_failure() {
    let calls = Cell::new(0);
    let value: Either<String, i32> =
        Either::Failure("oops".to_string()).on_success(|_| calls.set(calls.get() + 1));
    assert_eq!(value, Either::Failure("oops".to_string()));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn either_on_failure_fires_and_passes_through() {
    let calls = Cell::new(0);
    let value: Either<String, i32> =
        Either::Failure("oops".to_string()).on_failure(|_| calls.set(calls.get() + 1));
    assert_eq!(value, Either::Failure("oops".to_string()));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn either_on_failure_skipped_on_success() {
    let calls = Cell::new(0);
    let value: Either<String, i32> = Either::Success(42).on_failure(|_| calls.set(calls.get() + 1));
    assert_eq!(value, Either::Success(42));
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn either_to_maybe_on_success() {
    let value: Either<String, i32> = Either::Success(42);
    assert_eq!(value.to_maybe(), Maybe::Present(42));
}

#[rstest]
fn either_to_maybe_discards_reason() {
    let value: Either<String, i32> = Either::Failure("oops".to_string());
    assert_eq!(value.to_maybe(), Maybe::Absent);
}

#[rstest]
fn either_swap_exchanges_variants() {
    let success: Either<String, i32> = Either::Success(42);
    assert_eq!(success.swap(), Either::Failure(42));

    let failure: Either<String, i32> = Either::Failure("oops".to_string());
    assert_eq!(failure.swap(), Either::Success("oops".to_string()));
}

#[rstest]
fn either_from_option_with_reason() {
    assert_eq!(
        Either::from_option(Some(42), "missing"),
        Either::Success(42),
    );
    assert_eq!(
        Either::from_option(None::<i32>, "missing"),
        Either::Failure("missing"),
    );
}

#[rstest]
fn either_result_conversion_roundtrip() {
    let ok: Result<i32, String> = Ok(42);
    let either: Either<String, i32> = ok.into();
    let result: Result<i32, String> = either.into();
    assert_eq!(result, Ok(42));

    let err: Result<i32, String> = Err("oops".to_string());
    let either: Either<String, i32> = err.into();
    let result: Result<i32, String> = either.into();
    assert_eq!(result, Err("oops".to_string()));
}

// =============================================================================
// Construction from Fallible Operations
// =============================================================================

#[rstest]
fn either_attempt_ok_becomes_success() {
    let value = Either::attempt(|| "42".parse::<i32>(), "not a number");
    assert_eq!(value, Either::Success(42));
}

#[rstest]
fn either_attempt_err_uses_caller_reason() {
    let value = Either::attempt(|| "nope".parse::<i32>(), "not a number");
    assert_eq!(value, Either::Failure("not a number"));
}

// =============================================================================
// Clone, Debug, Eq, Hash
// =============================================================================

#[rstest]
fn either_clone_preserves_variant() {
    let success: Either<String, i32> = Either::Success(42);
    assert_eq!(success.clone(), success);

    let failure: Either<String, i32> = Either::Failure("oops".to_string());
    assert_eq!(failure.clone(), failure);
}

#[rstest]
fn either_debug_formatting() {
    let success: Either<String, i32> = Either::Success(42);
    assert_eq!(format!("{:?}", success), "Success(42)");

    let failure: Either<String, i32> = Either::Failure("oops".to_string());
    assert_eq!(format!("{:?}", failure), "Failure(\"oops\")");
}

#[rstest]
fn either_eq_distinguishes_variants() {
    let failure: Either<i32, i32> = Either::Failure(42);
    let success: Either<i32, i32> = Either::Success(42);
    assert_ne!(failure, success);
}

#[rstest]
fn either_hash_consistency() {
    use std::collections::HashSet;

    let mut set: HashSet<Either<String, i32>> = HashSet::new();
    set.insert(Either::Success(42));
    set.insert(Either::Failure("oops".to_string()));

    assert!(set.contains(&Either::Success(42)));
    assert!(set.contains(&Either::Failure("oops".to_string())));
    assert!(!set.contains(&Either::Success(43)));
}
