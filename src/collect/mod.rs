//! Free functions aggregating sequences of containers.
//!
//! This module provides the list-level helpers for the two container
//! types, namespaced by container:
//!
//! - [`collect::maybe`](self::maybe): helpers over sequences of
//!   [`Maybe`](crate::control::Maybe)
//! - [`collect::either`](self::either): helpers over sequences of
//!   [`Either`](crate::control::Either)
//!
//! All helpers take `IntoIterator` inputs and preserve the original
//! element order in their outputs.
//!
//! # Examples
//!
//! ## Skimming the successes out of a mixed batch
//!
//! ```rust
//! use twofold::collect;
//! use twofold::control::Either;
//!
//! let results: Vec<Either<String, i32>> = vec![
//!     Either::Success(1),
//!     Either::Failure("bad".to_string()),
//!     Either::Success(3),
//! ];
//! assert_eq!(collect::either::success_values(results), vec![1, 3]);
//! ```
//!
//! ## All-or-nothing aggregation
//!
//! ```rust
//! use twofold::collect;
//! use twofold::control::Maybe;
//!
//! let all = vec![Maybe::Present(1), Maybe::Present(2)];
//! assert_eq!(collect::maybe::sequence(all), Maybe::Present(vec![1, 2]));
//!
//! let holed = vec![Maybe::Present(1), Maybe::Absent];
//! assert_eq!(collect::maybe::sequence(holed), Maybe::Absent);
//! ```

pub mod either;
pub mod maybe;
