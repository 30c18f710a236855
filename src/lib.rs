//! # setforge
//!
//! Two in-memory, duplicate-free containers sharing one set contract.
//!
//! ## Overview
//!
//! - **`SortedArraySet`**: strictly ascending elements under an injectable
//!   total order, in a contiguous buffer with positional access, a fixed
//!   growth increment, exact-membership sub-range copies and predicate
//!   queries
//! - **`LinkedPointerSet`**: a doubly linked chain in reverse insertion
//!   order whose membership test scans from both ends at once
//! - **`UniqueSet`**: the contract both implement, with bulk operations
//!   built on the primitive ones
//!
//! ## Feature Flags
//!
//! - `sorted`: `SortedArraySet` (default)
//! - `linked`: `LinkedPointerSet` (default)
//! - `arc`: share custom order functions through `Arc`, making
//!   `SortedArraySet` `Send + Sync`
//! - `fxhash`: `FxHashed`, an element hash for any `std::hash::Hash` type
//!
//! ## Example
//!
//! ```rust
//! use setforge::prelude::*;
//!
//! let mut sorted: SortedArraySet<i32> = [5, 1, 3].into_iter().collect();
//! assert_eq!(sorted.as_slice(), &[1, 3, 5]);
//!
//! let mut linked: LinkedPointerSet<i32> = [5, 1, 3].into_iter().collect();
//! assert_eq!(linked.to_vec(), vec![3, 1, 5]);
//!
//! sorted.retain_all(&linked);
//! linked.remove_all(&[1, 5]);
//! assert_eq!(sorted.len(), 3);
//! assert_eq!(linked.to_vec(), vec![3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the set contract, order functions and the
/// error type.
///
/// # Usage
///
/// ```rust
/// use setforge::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
    pub use crate::error::SetError;
    pub use crate::order::{ElementHash, Order};
    pub use crate::unique_set::UniqueSet;
}

pub mod collections;
pub mod error;
pub mod order;
pub mod unique_set;

pub use error::{InvalidArgumentKind, SetError};
pub use unique_set::UniqueSet;
