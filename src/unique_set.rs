//! The duplicate-free container contract shared by every set in this crate.
//!
//! [`UniqueSet`] captures membership mutation, membership queries and the
//! bulk operations built on top of them. Implementors supply the primitive
//! operations; the bulk forms (`insert_all`, `remove_all`, `contains_all`,
//! `retain_all`) are provided.
//!
//! # Examples
//!
//! ```rust
//! use setforge::prelude::*;
//!
//! fn fill<S: UniqueSet<i32>>(set: &mut S) -> bool {
//!     set.insert_all([3, 1, 2, 1])
//! }
//!
//! let mut sorted = SortedArraySet::new();
//! let mut linked = LinkedPointerSet::new();
//! assert!(fill(&mut sorted));
//! assert!(fill(&mut linked));
//! assert_eq!(sorted.len(), 3);
//! assert_eq!(linked.len(), 3);
//! assert!(sorted.contains_all(&[1, 2, 3]));
//! ```

/// A container that never holds two members that its membership rule
/// considers equal.
pub trait UniqueSet<T> {
    /// Adds `element`, returning `false` and leaving the set untouched if an
    /// equal member is already present.
    fn insert(&mut self, element: T) -> bool;

    /// Removes the member equal to `element`, returning whether one existed.
    fn remove(&mut self, element: &T) -> bool;

    /// Returns `true` if a member equal to `element` is present.
    fn contains(&self, element: &T) -> bool;

    /// Returns the number of members.
    fn len(&self) -> usize;

    /// Removes every member.
    fn clear(&mut self);

    /// Keeps only the members for which `predicate` returns `true`,
    /// returning whether anything was removed.
    fn retain<F>(&mut self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// Returns `true` if the set has no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds every element, returning `true` if at least one was new.
    fn insert_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        elements
            .into_iter()
            .fold(false, |changed, element| self.insert(element) | changed)
    }

    /// Removes every given element, returning `true` if at least one was
    /// present.
    fn remove_all<'a, I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        elements
            .into_iter()
            .fold(false, |changed, element| self.remove(element) | changed)
    }

    /// Returns `true` if every given element is a member.
    fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        elements.into_iter().all(|element| self.contains(element))
    }

    /// Keeps only the members that `other` also contains, returning whether
    /// anything was removed.
    fn retain_all<S>(&mut self, other: &S) -> bool
    where
        S: UniqueSet<T> + ?Sized,
    {
        self.retain(|element| other.contains(element))
    }
}
