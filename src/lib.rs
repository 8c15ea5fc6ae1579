//! # twofold
//!
//! Optional-value and disjoint-result containers with a complete
//! combinator surface.
//!
//! ## Overview
//!
//! This library provides two algebraic container types and the operations
//! needed to transform, chain, and extract the values held inside them,
//! without null sentinels or exceptions for control flow:
//!
//! - [`Maybe<T>`](control::Maybe): a value or nothing (`Present` / `Absent`)
//! - [`Either<F, S>`](control::Either): a success value or a typed failure
//!   reason (`Success` / `Failure`)
//! - **Collection helpers**: free functions aggregating sequences of either
//!   container (collect, sequence, first-match, filter)
//! - **Cross-conversions**: `Maybe` ↔ `Either`, plus `Option`/`Result`
//!   boundary adapters
//!
//! Once a chain reaches the `Absent`/`Failure` branch, every subsequent
//! `map`/`bind` is skipped automatically; this short-circuit rule is the
//! sole propagation mechanism.
//!
//! ## Feature Flags
//!
//! - `async`: asynchronous combinators (`map_async`, `bind_async`,
//!   `fold_async`) and async construction helpers (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` implementations for both containers
//!
//! ## Example
//!
//! ```rust
//! use twofold::control::Maybe;
//!
//! let greeting = Maybe::Present("  hello  ")
//!     .map(str::trim)
//!     .bind(|s| {
//!         if s.is_empty() {
//!             Maybe::Absent
//!         } else {
//!             Maybe::Present(s)
//!         }
//!     })
//!     .map(str::to_uppercase);
//!
//! assert_eq!(greeting, Maybe::Present("HELLO".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the two container types and the collection-helper modules.
///
/// # Usage
///
/// ```rust
/// use twofold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collect;
    pub use crate::control::{Either, Maybe};
}

pub mod collect;
pub mod control;
