//! Mutable, duplicate-free containers.
//!
//! - [`SortedArraySet`]: elements kept strictly ascending under an
//!   injectable [`Order`](crate::order::Order), in a contiguous buffer with
//!   positional access and a fixed growth policy
//! - [`LinkedPointerSet`]: a doubly linked chain, newest member first, with a
//!   symmetric two-ended membership scan
//!
//! Both implement [`UniqueSet`](crate::UniqueSet). Neither synchronizes
//! internally; share one across threads only behind an external lock.
//!
//! # Examples
//!
//! ## `SortedArraySet`
//!
//! ```rust
//! use setforge::collections::SortedArraySet;
//!
//! let set: SortedArraySet<i32> = [8, 1, 5, 3].into_iter().collect();
//! assert_eq!(set.as_slice(), &[1, 3, 5, 8]);
//! assert_eq!(set.get(2), Ok(&5));
//!
//! let evens = set.get_all(|value| value % 2 == 0);
//! assert_eq!(evens.as_slice(), &[8]);
//!
//! let descending: Vec<&i32> = set.iter_rev().collect();
//! assert_eq!(descending, vec![&8, &5, &3, &1]);
//! ```
//!
//! ## `LinkedPointerSet`
//!
//! ```rust
//! use setforge::collections::LinkedPointerSet;
//!
//! let mut set = LinkedPointerSet::new();
//! set.insert("alpha");
//! set.insert("beta");
//! assert!(set.contains(&"alpha"));
//! assert_eq!(set.to_vec(), vec!["beta", "alpha"]);
//! ```

#[cfg(feature = "linked")]
mod linked_pointer_set;
#[cfg(feature = "sorted")]
mod sorted_array_set;

#[cfg(feature = "linked")]
pub use linked_pointer_set::LinkedPointerSet;
#[cfg(feature = "linked")]
pub use linked_pointer_set::LinkedPointerSetCursor;
#[cfg(feature = "linked")]
pub use linked_pointer_set::LinkedPointerSetIntoIterator;
#[cfg(feature = "linked")]
pub use linked_pointer_set::LinkedPointerSetIterator;
#[cfg(feature = "sorted")]
pub use sorted_array_set::ArraySetConfig;
#[cfg(feature = "sorted")]
pub use sorted_array_set::SortedArraySet;
#[cfg(feature = "sorted")]
pub use sorted_array_set::SortedArraySetCursor;
#[cfg(feature = "sorted")]
pub use sorted_array_set::SortedArraySetIntoIterator;
#[cfg(feature = "sorted")]
pub use sorted_array_set::SortedArraySetIterator;
