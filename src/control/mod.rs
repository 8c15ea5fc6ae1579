//! The two container types and their combinator surfaces.
//!
//! This module provides the core algebra of the crate:
//!
//! - [`Maybe`]: an optional value, `Present(value)` or `Absent`
//! - [`Either`]: a disjoint result, `Success(value)` or `Failure(reason)`
//!
//! Both are immutable tagged unions: every combinator consumes the
//! container and returns a fresh one, and a transformation callback is
//! never invoked on the `Absent`/`Failure` branch.
//!
//! # Examples
//!
//! ## Chaining optional values
//!
//! ```rust
//! use twofold::control::Maybe;
//!
//! let result = Maybe::Present(21)
//!     .map(|n| n * 2)
//!     .bind(|n| if n > 0 { Maybe::Present(n) } else { Maybe::Absent });
//! assert_eq!(result, Maybe::Present(42));
//! ```
//!
//! ## Carrying a failure reason
//!
//! ```rust
//! use twofold::control::Either;
//!
//! let parsed: Either<String, i32> = Either::attempt(
//!     || "42".parse::<i32>(),
//!     "not a number".to_string(),
//! );
//! assert_eq!(parsed, Either::Success(42));
//! ```

mod either;
mod maybe;

pub use either::Either;
pub use maybe::Maybe;
