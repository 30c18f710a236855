//! Array-backed sorted set.
//!
//! This module provides [`SortedArraySet`], a duplicate-free container that
//! keeps its elements in strictly ascending order under an injectable
//! [`Order`], stored contiguously so that elements can also be addressed by
//! position.
//!
//! # Overview
//!
//! - Membership is located with a range-narrowed binary search: the element
//!   is first compared against the middle slot, then the ordinary binary
//!   search runs over the half that can contain it.
//! - Insertion shifts the tail of the buffer one slot to the right; appending
//!   a new maximum skips the search entirely.
//! - The backing buffer grows by a fixed *growth increment* whenever an
//!   insertion would overflow its logical length (the *limit*).
//!
//! # Time Complexity
//!
//! | Operation                    | Complexity          |
//! |------------------------------|---------------------|
//! | `insert` (new maximum)       | O(1) amortized      |
//! | `insert`                     | O(log n) + O(n)     |
//! | `contains` / `search`        | O(log n)            |
//! | `remove` / `remove_at`       | O(n)                |
//! | `get` / `first` / `last`     | O(1)                |
//! | `head_set` / `tail_set`      | O(log n) + O(k)     |
//! | `reverse`                    | O(n)                |
//! | `set_order`                  | O(n log n)          |
//! | `get_any` / `get_all` / ...  | O(n)                |
//!
//! # Examples
//!
//! ```rust
//! use setforge::collections::SortedArraySet;
//!
//! let mut set = SortedArraySet::new();
//! assert!(set.insert(5));
//! assert!(set.insert(1));
//! assert!(set.insert(3));
//! assert!(!set.insert(3));
//!
//! assert_eq!(set.as_slice(), &[1, 3, 5]);
//! assert_eq!(set.index_of(&3), 1);
//! assert_eq!(set.index_of(&4), -3);
//!
//! // Views are exact-membership copies.
//! assert_eq!(set.head_set(&3).unwrap().as_slice(), &[1]);
//! assert!(set.head_set(&2).is_err());
//! ```
//!
//! # Capacity management
//!
//! ```rust
//! use setforge::collections::SortedArraySet;
//!
//! let mut set: SortedArraySet<i32> = (0..4).collect();
//! set.trim();
//! assert_eq!(set.limit(), 4);
//!
//! set.insert(10); // grows by the growth increment
//! assert_eq!(set.limit(), 4 + set.growth_increment());
//!
//! set.clear(); // keeps the buffer
//! assert_eq!(set.limit(), 4 + set.growth_increment());
//!
//! set.free(); // drops the slack
//! assert_eq!(set.limit(), set.growth_increment());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::ops::Range;

use crate::error::{InvalidArgumentKind, SetError};
use crate::order::{ElementHash, Order};
use crate::unique_set::UniqueSet;

/// Multiplier of the running-product [`SortedArraySet::hash_code`].
const HASH_PRIME: i32 = 83;

// =============================================================================
// ArraySetConfig
// =============================================================================

/// Construction-time settings of a [`SortedArraySet`].
///
/// # Examples
///
/// ```rust
/// use setforge::collections::{ArraySetConfig, SortedArraySet};
///
/// let config = ArraySetConfig::new()
///     .with_initial_capacity(64)
///     .with_growth_increment(16);
/// let set: SortedArraySet<u32> = SortedArraySet::with_config(config).unwrap();
/// assert_eq!(set.limit(), 64);
/// assert_eq!(set.growth_increment(), 16);
///
/// assert!(SortedArraySet::<u32>::with_config(config.with_growth_increment(0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArraySetConfig {
    /// Length of the buffer allocated up front.
    pub initial_capacity: usize,
    /// Number of slots added each time the buffer is resized.
    pub growth_increment: usize,
}

impl ArraySetConfig {
    /// Growth increment (and initial capacity) used when none is given.
    pub const DEFAULT_GROWTH_INCREMENT: usize = 10;

    /// Returns the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_GROWTH_INCREMENT,
            growth_increment: Self::DEFAULT_GROWTH_INCREMENT,
        }
    }

    /// Sets the initial buffer length.
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the growth increment.
    #[must_use]
    pub const fn with_growth_increment(mut self, growth_increment: usize) -> Self {
        self.growth_increment = growth_increment;
        self
    }

    /// Rejects zero capacities.
    ///
    /// # Errors
    ///
    /// [`SetError::Configuration`] naming the first zero field.
    pub fn validate(self) -> Result<Self, SetError> {
        SetError::check_positive("initial_capacity", self.initial_capacity)?;
        SetError::check_positive("growth_increment", self.growth_increment)?;
        Ok(self)
    }
}

impl Default for ArraySetConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// SortedArraySet Definition
// =============================================================================

/// A duplicate-free set that keeps its elements sorted in a contiguous
/// buffer.
///
/// Two elements are the same member when the active [`Order`] reports them
/// equal. The default order compares [`ElementHash`] values.
///
/// The buffer has a logical length, the [`limit`](Self::limit), which only
/// changes on [`resize`](Self::resize), [`trim`](Self::trim),
/// [`free`](Self::free) or an insertion into a full buffer.
///
/// # Examples
///
/// ```rust
/// use setforge::collections::SortedArraySet;
/// use setforge::order::Order;
///
/// let mut words = SortedArraySet::with_order(Order::<&str>::natural());
/// words.insert("pear");
/// words.insert("apple");
/// words.insert("fig");
/// assert_eq!(words.to_vec(), vec!["apple", "fig", "pear"]);
///
/// words.reverse();
/// assert_eq!(words.to_vec(), vec!["pear", "fig", "apple"]);
/// ```
#[derive(Clone, Debug)]
pub struct SortedArraySet<T> {
    elements: Vec<T>,
    limit: usize,
    growth_increment: usize,
    order: Order<T>,
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(SortedArraySet<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SortedArraySet<i32>: Send, Sync);

impl<T: ElementHash> SortedArraySet<T> {
    /// Creates an empty set ordered by element hash, with the default
    /// capacity and growth increment.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(ArraySetConfig::new(), Order::by_hash())
    }

    /// Creates an empty set ordered by element hash whose initial buffer
    /// length and growth increment are both `capacity`.
    ///
    /// # Errors
    ///
    /// [`SetError::Configuration`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, SetError> {
        Self::with_config(
            ArraySetConfig::new()
                .with_initial_capacity(capacity)
                .with_growth_increment(capacity),
        )
    }

    /// Creates an empty set ordered by element hash.
    ///
    /// # Errors
    ///
    /// [`SetError::Configuration`] if either capacity in `config` is zero.
    pub fn with_config(config: ArraySetConfig) -> Result<Self, SetError> {
        Self::with_config_and_order(config, Order::by_hash())
    }

    /// Returns the running-product hash of the set.
    ///
    /// Starting from `1`, each element in ascending order multiplies the
    /// result by `83 * element_hash`, wrapping on overflow. The value depends
    /// on element order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setforge::collections::SortedArraySet;
    ///
    /// let set: SortedArraySet<i32> = [2, 3].into_iter().collect();
    /// assert_eq!(set.hash_code(), (83 * 2) * (83 * 3));
    /// ```
    #[must_use]
    pub fn hash_code(&self) -> i32 {
        self.elements.iter().fold(1_i32, |result, element| {
            result.wrapping_mul(HASH_PRIME.wrapping_mul(element.element_hash()))
        })
    }
}

impl<T> SortedArraySet<T> {
    /// Creates an empty set sorted by `order`, with the default capacity and
    /// growth increment.
    #[must_use]
    pub fn with_order(order: Order<T>) -> Self {
        Self::from_config(ArraySetConfig::new(), order)
    }

    /// Creates an empty set sorted by `order`.
    ///
    /// # Errors
    ///
    /// [`SetError::Configuration`] if either capacity in `config` is zero.
    pub fn with_config_and_order(config: ArraySetConfig, order: Order<T>) -> Result<Self, SetError> {
        Ok(Self::from_config(config.validate()?, order))
    }

    fn from_config(config: ArraySetConfig, order: Order<T>) -> Self {
        Self {
            elements: Vec::with_capacity(config.initial_capacity),
            limit: config.initial_capacity,
            growth_increment: config.growth_increment,
            order,
        }
    }

    /// Builds a set around elements that are already strictly sorted under
    /// `order`, with a buffer of exactly their length.
    fn from_sorted_parts(elements: Vec<T>, growth_increment: usize, order: Order<T>) -> Self {
        debug_assert!(
            elements
                .windows(2)
                .all(|pair| order.compare(&pair[0], &pair[1]) == Ordering::Less),
            "elements must be strictly sorted"
        );
        Self {
            limit: elements.len(),
            elements,
            growth_increment,
            order,
        }
    }

    // -------------------------------------------------------------------------
    // Size and capacity
    // -------------------------------------------------------------------------

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the logical length of the backing buffer: the size at which
    /// the next insertion triggers a resize.
    #[inline]
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the number of slots added on each automatic resize.
    #[inline]
    #[must_use]
    pub const fn growth_increment(&self) -> usize {
        self.growth_increment
    }

    /// Replaces the growth increment.
    ///
    /// # Errors
    ///
    /// [`SetError::Configuration`] if `growth_increment` is zero.
    pub fn set_growth_increment(&mut self, growth_increment: usize) -> Result<(), SetError> {
        self.growth_increment = SetError::check_positive("growth_increment", growth_increment)?;
        Ok(())
    }

    /// Grows the buffer by exactly `growth` slots.
    ///
    /// This happens automatically when an insertion finds the buffer full;
    /// calling it ahead of a large batch of insertions avoids repeated
    /// resizing.
    ///
    /// # Errors
    ///
    /// [`SetError::Configuration`] if `growth` is zero.
    pub fn resize(&mut self, growth: usize) -> Result<(), SetError> {
        let growth = SetError::check_positive("growth", growth)?;
        self.grow(growth);
        Ok(())
    }

    fn grow(&mut self, growth: usize) {
        self.limit += growth;
        self.elements.reserve_exact(self.limit - self.elements.len());
        tracing::debug!(
            size = self.elements.len(),
            limit = self.limit,
            growth,
            "sorted array set buffer grown"
        );
    }

    /// Shrinks the buffer to exactly [`len`](Self::len) slots. The next
    /// insertion always resizes.
    pub fn trim(&mut self) {
        self.elements.shrink_to_fit();
        self.limit = self.elements.len();
        tracing::debug!(limit = self.limit, "sorted array set buffer trimmed");
    }

    /// Removes every element and keeps the buffer, so insertions up to the
    /// current [`limit`](Self::limit) do not reallocate.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Removes every element and reallocates the buffer down to the growth
    /// increment.
    pub fn free(&mut self) {
        self.elements = Vec::with_capacity(self.growth_increment);
        self.limit = self.growth_increment;
        tracing::debug!(limit = self.limit, "sorted array set buffer freed");
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Locates `element`: `Ok(index)` of the order-equal member, or
    /// `Err(insertion_index)` where inserting would keep the set sorted.
    ///
    /// Elements outside `[first, last]` are answered without searching.
    /// Otherwise `element` is compared with the middle slot and the binary
    /// search runs over the half that can hold it.
    pub fn search(&self, element: &T) -> Result<usize, usize> {
        let (Some(first), Some(last)) = (self.elements.first(), self.elements.last()) else {
            return Err(0);
        };
        let len = self.elements.len();

        match self.order.compare(element, last) {
            Ordering::Greater => return Err(len),
            Ordering::Equal => return Ok(len - 1),
            Ordering::Less => {}
        }
        match self.order.compare(element, first) {
            Ordering::Less => return Err(0),
            Ordering::Equal => return Ok(0),
            Ordering::Greater => {}
        }

        let middle = len / 2;
        let window = if self.order.compare(element, &self.elements[middle]) == Ordering::Greater {
            middle..len
        } else {
            0..middle + 1
        };
        self.binary_search(window, element)
    }

    fn binary_search(&self, window: Range<usize>, element: &T) -> Result<usize, usize> {
        let offset = window.start;
        self.elements[window]
            .binary_search_by(|probe| self.order.compare(probe, element))
            .map(|index| index + offset)
            .map_err(|index| index + offset)
    }

    /// Returns the index of `element`, or `-(insertion_index) - 1` when it is
    /// absent. The insertion index is recovered as `-result - 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setforge::collections::SortedArraySet;
    ///
    /// let set: SortedArraySet<i32> = [1, 3, 5, 8].into_iter().collect();
    /// assert_eq!(set.index_of(&5), 2);
    /// assert_eq!(set.index_of(&4), -3);
    /// assert_eq!(set.index_of(&0), -1);
    /// assert_eq!(set.index_of(&9), -5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn index_of(&self, element: &T) -> isize {
        match self.search(element) {
            Ok(index) => index as isize,
            Err(insertion) => -(insertion as isize) - 1,
        }
    }

    /// Returns `true` if an order-equal member is present.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.search(element).is_ok()
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Inserts `element`, returning `false` without mutating if an
    /// order-equal member exists.
    ///
    /// A new maximum is appended without searching; anything else is placed
    /// by [`search`](Self::search) and shifts the larger elements right.
    pub fn insert(&mut self, element: T) -> bool {
        let position = match self.elements.last() {
            None => 0,
            Some(last) if self.order.compare(last, &element) == Ordering::Less => {
                self.elements.len()
            }
            Some(_) => match self.search(&element) {
                Ok(_) => return false,
                Err(insertion) => insertion,
            },
        };

        if self.elements.len() == self.limit {
            self.grow(self.growth_increment);
        }
        self.elements.insert(position, element);
        true
    }

    /// Removes the order-equal member of `element`, returning whether one
    /// existed.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.search(element) {
            Ok(index) => {
                self.elements.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes the element at `index`, shifting the larger elements left.
    ///
    /// # Errors
    ///
    /// [`SetError::OutOfRange`] if `index >= len`; the set is left unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<(), SetError> {
        self.extract(index).map(drop)
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SetError::OutOfRange`] if `index >= len`; the set is left unchanged.
    pub fn extract(&mut self, index: usize) -> Result<T, SetError> {
        let index = SetError::check_index(index, self.elements.len())?;
        Ok(self.elements.remove(index))
    }

    // -------------------------------------------------------------------------
    // Positional access
    // -------------------------------------------------------------------------

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SetError::OutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, SetError> {
        let index = SetError::check_index(index, self.elements.len())?;
        Ok(&self.elements[index])
    }

    /// Returns the smallest element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the elements in ascending order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    // -------------------------------------------------------------------------
    // Ordering
    // -------------------------------------------------------------------------

    /// Returns the active order.
    #[inline]
    #[must_use]
    pub const fn order(&self) -> &Order<T> {
        &self.order
    }

    /// Inverts the order and rearranges the elements to match.
    pub fn reverse(&mut self) {
        self.order = self.order.reversed();
        self.elements.reverse();
        tracing::debug!(size = self.elements.len(), "sorted array set reversed");
    }

    /// Replaces the order and re-sorts the elements under it.
    ///
    /// Elements that the new order considers equal collapse to the first of
    /// them in the previous order.
    ///
    /// # Errors
    ///
    /// [`SetError::InvalidArgument`] if `order` is `None`; the set keeps its
    /// current order.
    pub fn set_order(&mut self, order: Option<Order<T>>) -> Result<(), SetError> {
        let order = order.ok_or(SetError::InvalidArgument(InvalidArgumentKind::MissingOrder))?;
        let before = self.elements.len();
        self.elements.sort_by(|left, right| order.compare(left, right));
        self.elements
            .dedup_by(|current, previous| order.compare(current, previous) == Ordering::Equal);
        self.order = order;
        tracing::debug!(
            size = self.elements.len(),
            collapsed = before - self.elements.len(),
            "sorted array set re-sorted"
        );
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Predicate queries
    // -------------------------------------------------------------------------

    /// Returns the smallest element satisfying `predicate`.
    pub fn get_any<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().find(|element| predicate(element))
    }

    /// Returns the largest element satisfying `predicate`.
    pub fn get_last<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().rev().find(|element| predicate(element))
    }

    /// Removes every element that does not satisfy `predicate`, returning
    /// whether anything was removed.
    pub fn retain_if<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.elements.len();
        self.elements.retain(predicate);
        self.elements.len() != before
    }

    // -------------------------------------------------------------------------
    // Iteration
    // -------------------------------------------------------------------------

    /// Returns an iterator in ascending order.
    #[must_use]
    pub fn iter(&self) -> SortedArraySetIterator<'_, T> {
        SortedArraySetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Returns an iterator in descending order.
    #[must_use]
    pub fn iter_rev(&self) -> std::iter::Rev<SortedArraySetIterator<'_, T>> {
        self.iter().rev()
    }

    /// Returns an ascending cursor that can remove the element it last
    /// yielded.
    pub fn cursor(&mut self) -> SortedArraySetCursor<'_, T> {
        SortedArraySetCursor {
            set: self,
            next: 0,
            current: None,
            direction: Direction::Ascending,
        }
    }

    /// Returns a descending cursor that can remove the element it last
    /// yielded.
    pub fn cursor_rev(&mut self) -> SortedArraySetCursor<'_, T> {
        let next = self.elements.len();
        SortedArraySetCursor {
            set: self,
            next,
            current: None,
            direction: Direction::Descending,
        }
    }
}

impl<T: Clone> SortedArraySet<T> {
    fn copy_range(&self, range: Range<usize>) -> Self {
        Self::from_sorted_parts(
            self.elements[range].to_vec(),
            self.growth_increment,
            self.order.clone(),
        )
    }

    fn member_index(&self, boundary: &T) -> Result<usize, SetError> {
        self.search(boundary)
            .map_err(|_| SetError::InvalidArgument(InvalidArgumentKind::BoundaryNotMember))
    }

    /// Returns a copy of the elements strictly before `to`.
    ///
    /// # Errors
    ///
    /// [`SetError::InvalidArgument`] if `to` is not a member.
    pub fn head_set(&self, to: &T) -> Result<Self, SetError> {
        let to = self.member_index(to)?;
        Ok(self.copy_range(0..to))
    }

    /// Returns a copy of the elements from `from` (inclusive) onwards.
    ///
    /// # Errors
    ///
    /// [`SetError::InvalidArgument`] if `from` is not a member.
    pub fn tail_set(&self, from: &T) -> Result<Self, SetError> {
        let from = self.member_index(from)?;
        Ok(self.copy_range(from..self.elements.len()))
    }

    /// Returns a copy of the elements from `from` (inclusive) up to `to`
    /// (exclusive).
    ///
    /// # Errors
    ///
    /// [`SetError::InvalidArgument`] if either boundary is not a member, or
    /// if `from` sorts after `to`.
    pub fn sub_set(&self, from: &T, to: &T) -> Result<Self, SetError> {
        let from = self.member_index(from)?;
        let to = self.member_index(to)?;
        if from > to {
            return Err(SetError::InvalidArgument(InvalidArgumentKind::InvertedRange));
        }
        Ok(self.copy_range(from..to))
    }

    /// Returns a trimmed set of the elements satisfying `predicate`, in the
    /// same order.
    pub fn get_all<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let selected = self
            .elements
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect();
        Self::from_sorted_parts(selected, self.growth_increment, self.order.clone())
    }

    /// Returns the elements in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }

    /// Returns the elements in ascending order, converted to `U`.
    #[must_use]
    pub fn to_vec_as<U>(&self) -> Vec<U>
    where
        T: Into<U>,
    {
        self.elements.iter().cloned().map(Into::into).collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`SortedArraySet`], ascending from the
/// front and descending from the back.
#[derive(Clone, Debug)]
pub struct SortedArraySetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SortedArraySetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedArraySetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedArraySetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SortedArraySetIterator<'_, T> {}

/// An owning iterator over the elements of a [`SortedArraySet`].
#[derive(Debug)]
pub struct SortedArraySetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for SortedArraySetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedArraySetIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedArraySetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Cursor
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Ascending,
    Descending,
}

/// A cursor over a [`SortedArraySet`] that can remove the element it last
/// yielded.
///
/// # Examples
///
/// ```rust
/// use setforge::collections::SortedArraySet;
///
/// let mut set: SortedArraySet<i32> = (1..=6).collect();
/// let mut cursor = set.cursor();
/// while let Some(&value) = cursor.move_next() {
///     if value % 2 == 0 {
///         cursor.remove_current().unwrap();
///     }
/// }
/// assert_eq!(set.as_slice(), &[1, 3, 5]);
/// ```
#[derive(Debug)]
pub struct SortedArraySetCursor<'a, T> {
    set: &'a mut SortedArraySet<T>,
    /// Ascending: index of the next element. Descending: one past it.
    next: usize,
    current: Option<usize>,
    direction: Direction,
}

impl<T> SortedArraySetCursor<'_, T> {
    /// Advances the cursor and returns the element it now points at.
    pub fn move_next(&mut self) -> Option<&T> {
        self.current = match self.direction {
            Direction::Ascending if self.next < self.set.elements.len() => {
                self.next += 1;
                Some(self.next - 1)
            }
            Direction::Descending if self.next > 0 => {
                self.next -= 1;
                Some(self.next)
            }
            _ => None,
        };
        self.current.map(|index| &self.set.elements[index])
    }

    /// Returns the element the cursor points at, if it has not been removed.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current.map(|index| &self.set.elements[index])
    }

    /// Removes the element last returned by [`move_next`](Self::move_next),
    /// locating it again by value.
    ///
    /// # Errors
    ///
    /// [`SetError::IteratorState`] if nothing has been yielded yet, or the
    /// current element was already removed.
    pub fn remove_current(&mut self) -> Result<T, SetError> {
        let index = self.current.take().ok_or(SetError::IteratorState)?;
        let position = self
            .set
            .search(&self.set.elements[index])
            .map_err(|_| SetError::IteratorState)?;
        let removed = self.set.elements.remove(position);
        if self.direction == Direction::Ascending {
            self.next -= 1;
        }
        Ok(removed)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: ElementHash> Default for SortedArraySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ElementHash> FromIterator<T> for SortedArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for SortedArraySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> IntoIterator for SortedArraySet<T> {
    type Item = T;
    type IntoIter = SortedArraySetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SortedArraySetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedArraySet<T> {
    type Item = &'a T;
    type IntoIter = SortedArraySetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for SortedArraySet<T> {
    /// Same length and pairwise-equal elements in iteration order.
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for SortedArraySet<T> {}

impl<T: ElementHash> Hash for SortedArraySet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl<T: fmt::Display> fmt::Display for SortedArraySet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "SortedArraySet[size={},growth={},limit={}] => [",
            self.elements.len(),
            self.growth_increment,
            self.limit
        )?;
        for (position, element) in self.elements.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T> UniqueSet<T> for SortedArraySet<T> {
    fn insert(&mut self, element: T) -> bool {
        Self::insert(self, element)
    }

    fn remove(&mut self, element: &T) -> bool {
        Self::remove(self, element)
    }

    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn retain<F>(&mut self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.retain_if(predicate)
    }
}
