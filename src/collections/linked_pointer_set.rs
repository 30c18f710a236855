//! Doubly linked, insertion-order-biased set.
//!
//! This module provides [`LinkedPointerSet`], a duplicate-free container
//! whose members form a doubly linked chain. New members are prepended, so
//! forward iteration runs from the most recently inserted member to the
//! oldest, like popping a stack.
//!
//! # Overview
//!
//! - Nodes live in an arena and link to each other by index. Vacated slots
//!   go on a free list and are reused by later insertions.
//! - Membership is decided by a symmetric scan: one cursor walks forward
//!   from the front while another walks backward from the rear, so at most
//!   `ceil(len / 2)` steps are taken.
//! - Two values are the same member when their [`ElementHash`] values are
//!   equal. Distinct values with colliding hashes are therefore treated as
//!   one member.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity |
//! |---------------------|------------|
//! | `insert`            | O(n)       |
//! | `contains`          | O(n / 2)   |
//! | `remove`            | O(n / 2)   |
//! | `first` / `last`    | O(1)       |
//! | `len` / `is_empty`  | O(1)       |
//! | `clear`             | O(n)       |
//!
//! # Examples
//!
//! ```rust
//! use setforge::collections::LinkedPointerSet;
//!
//! let mut set = LinkedPointerSet::new();
//! assert!(set.insert('a'));
//! assert!(set.insert('b'));
//! assert!(set.insert('c'));
//! assert!(!set.insert('b'));
//!
//! let order: Vec<char> = set.iter().copied().collect();
//! assert_eq!(order, vec!['c', 'b', 'a']);
//!
//! assert!(set.remove(&'b'));
//! assert_eq!(set.to_vec(), vec!['c', 'a']);
//! ```

use std::fmt;
use std::iter::{FromIterator, FusedIterator};

use smallvec::SmallVec;

use crate::error::SetError;
use crate::order::ElementHash;
use crate::unique_set::UniqueSet;

/// Vacated slots kept inline before the free list spills to the heap.
const INLINE_FREE_SLOTS: usize = 8;

type NodeIndex = usize;

#[derive(Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeIndex>,
    prev: Option<NodeIndex>,
}

// =============================================================================
// LinkedPointerSet Definition
// =============================================================================

/// A duplicate-free set stored as a doubly linked chain, newest member first.
///
/// # Examples
///
/// ```rust
/// use setforge::collections::LinkedPointerSet;
///
/// let set: LinkedPointerSet<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(set.first(), Some(&3));
/// assert_eq!(set.last(), Some(&1));
/// assert_eq!(format!("{set}"), "{3, 2, 1}");
/// ```
#[derive(Clone)]
pub struct LinkedPointerSet<T> {
    nodes: Vec<Option<Node<T>>>,
    free: SmallVec<[NodeIndex; INLINE_FREE_SLOTS]>,
    front: Option<NodeIndex>,
    rear: Option<NodeIndex>,
    len: usize,
}

static_assertions::assert_impl_all!(LinkedPointerSet<i32>: Send, Sync);

impl<T> LinkedPointerSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: SmallVec::new(),
            front: None,
            rear: None,
            len: 0,
        }
    }

    /// Returns the number of members.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set has no members.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the most recently inserted member.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.front.map(|index| &self.node(index).value)
    }

    /// Returns the oldest member.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.rear.map(|index| &self.node(index).value)
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.front = None;
        self.rear = None;
        self.len = 0;
    }

    /// Returns an iterator from the newest member to the oldest.
    #[must_use]
    pub fn iter(&self) -> LinkedPointerSetIterator<'_, T> {
        LinkedPointerSetIterator {
            set: self,
            front: self.front,
            rear: self.rear,
            remaining: self.len,
        }
    }

    /// Returns a cursor, newest member first, that can unlink the member it
    /// last yielded.
    pub fn cursor(&mut self) -> LinkedPointerSetCursor<'_, T> {
        let next = self.front;
        LinkedPointerSetCursor {
            set: self,
            next,
            current: None,
        }
    }

    /// Keeps only the members for which `predicate` returns `true`,
    /// returning whether anything was removed.
    pub fn retain_if<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.len;
        let mut cursor = self.front;
        while let Some(index) = cursor {
            let node = self.node(index);
            cursor = node.next;
            if !predicate(&node.value) {
                self.unlink(index);
            }
        }
        self.len != before
    }

    fn node(&self, index: NodeIndex) -> &Node<T> {
        match &self.nodes[index] {
            Some(node) => node,
            None => unreachable!("link {index} points at a vacant slot"),
        }
    }

    fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        match &mut self.nodes[index] {
            Some(node) => node,
            None => unreachable!("link {index} points at a vacant slot"),
        }
    }

    fn allocate(&mut self, node: Node<T>) -> NodeIndex {
        if let Some(index) = self.free.pop() {
            self.nodes[index] = Some(node);
            index
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    /// Links `value` in as the new front. The caller has ruled out
    /// duplicates.
    fn push_front(&mut self, value: T) {
        let index = self.allocate(Node {
            value,
            next: self.front,
            prev: None,
        });
        match self.front {
            Some(front) => self.node_mut(front).prev = Some(index),
            None => self.rear = Some(index),
        }
        self.front = Some(index);
        self.len += 1;
    }

    /// Detaches the node at `index`, joining its neighbours (or moving the
    /// front/rear when it sits at an end), and returns its value.
    fn unlink(&mut self, index: NodeIndex) -> T {
        let Some(node) = self.nodes[index].take() else {
            unreachable!("link {index} points at a vacant slot");
        };
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.front = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.rear = node.prev,
        }
        self.free.push(index);
        self.len -= 1;
        if self.len == 0 {
            self.nodes.clear();
            self.free.clear();
        }
        node.value
    }
}

impl<T: ElementHash> LinkedPointerSet<T> {
    /// Membership rule: equal element hashes.
    #[inline]
    fn matches(candidate: &T, target_hash: i32) -> bool {
        candidate.element_hash() == target_hash
    }

    /// Symmetric two-ended scan. Each step compares the target against the
    /// forward cursor and then the backward cursor, for at most
    /// `ceil(len / 2)` steps.
    fn find(&self, value: &T) -> Option<NodeIndex> {
        let target_hash = value.element_hash();
        let mut forward = self.front;
        let mut backward = self.rear;

        for _ in 0..self.len.div_ceil(2) {
            let (Some(head), Some(tail)) = (forward, backward) else {
                break;
            };
            let head_node = self.node(head);
            if Self::matches(&head_node.value, target_hash) {
                return Some(head);
            }
            let tail_node = self.node(tail);
            if Self::matches(&tail_node.value, target_hash) {
                return Some(tail);
            }
            forward = head_node.next;
            backward = tail_node.prev;
        }
        None
    }

    /// Prepends `value` unless a member with the same element hash exists.
    pub fn insert(&mut self, value: T) -> bool {
        if self.find(&value).is_some() {
            return false;
        }
        self.push_front(value);
        true
    }

    /// Returns `true` if a member with the same element hash is present.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Unlinks the member with the same element hash as `value`, returning
    /// whether one existed.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Unlinks and returns the member with the same element hash as `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.find(value).map(|index| self.unlink(index))
    }
}

impl<T: Clone> LinkedPointerSet<T> {
    /// Returns the members, newest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns the members, newest first, converted to `U`.
    #[must_use]
    pub fn to_vec_as<U>(&self) -> Vec<U>
    where
        T: Into<U>,
    {
        self.iter().cloned().map(Into::into).collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over a [`LinkedPointerSet`], newest member first. Iterating
/// from the back yields the oldest member first.
pub struct LinkedPointerSetIterator<'a, T> {
    set: &'a LinkedPointerSet<T>,
    front: Option<NodeIndex>,
    rear: Option<NodeIndex>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedPointerSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.set.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for LinkedPointerSetIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.set.node(self.rear?);
        self.rear = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for LinkedPointerSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for LinkedPointerSetIterator<'_, T> {}

/// An owning iterator over a [`LinkedPointerSet`], newest member first.
pub struct LinkedPointerSetIntoIterator<T> {
    set: LinkedPointerSet<T>,
}

impl<T> Iterator for LinkedPointerSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let front = self.set.front?;
        Some(self.set.unlink(front))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.len, Some(self.set.len))
    }
}

impl<T> DoubleEndedIterator for LinkedPointerSetIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let rear = self.set.rear?;
        Some(self.set.unlink(rear))
    }
}

impl<T> ExactSizeIterator for LinkedPointerSetIntoIterator<T> {}

// =============================================================================
// Cursor
// =============================================================================

/// A cursor over a [`LinkedPointerSet`] that can unlink the member it last
/// yielded in O(1).
///
/// # Examples
///
/// ```rust
/// use setforge::collections::LinkedPointerSet;
///
/// let mut set: LinkedPointerSet<i32> = (1..=5).collect();
/// let mut cursor = set.cursor();
/// while let Some(&value) = cursor.move_next() {
///     if value > 3 {
///         cursor.remove_current().unwrap();
///     }
/// }
/// assert_eq!(set.to_vec(), vec![3, 2, 1]);
/// ```
pub struct LinkedPointerSetCursor<'a, T> {
    set: &'a mut LinkedPointerSet<T>,
    next: Option<NodeIndex>,
    current: Option<NodeIndex>,
}

impl<T> LinkedPointerSetCursor<'_, T> {
    /// Advances the cursor and returns the member it now points at.
    pub fn move_next(&mut self) -> Option<&T> {
        self.current = self.next;
        let node = self.set.node(self.current?);
        self.next = node.next;
        Some(&node.value)
    }

    /// Returns the member the cursor points at, if it has not been removed.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current.map(|index| &self.set.node(index).value)
    }

    /// Unlinks the member last returned by [`move_next`](Self::move_next).
    ///
    /// # Errors
    ///
    /// [`SetError::IteratorState`] if nothing has been yielded yet, or the
    /// current member was already removed.
    pub fn remove_current(&mut self) -> Result<T, SetError> {
        let index = self.current.take().ok_or(SetError::IteratorState)?;
        Ok(self.set.unlink(index))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedPointerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ElementHash> FromIterator<T> for LinkedPointerSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: ElementHash> Extend<T> for LinkedPointerSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for LinkedPointerSet<T> {
    type Item = T;
    type IntoIter = LinkedPointerSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        LinkedPointerSetIntoIterator { set: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedPointerSet<T> {
    type Item = &'a T;
    type IntoIter = LinkedPointerSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: ElementHash> PartialEq for LinkedPointerSet<T> {
    /// Same members under the element-hash rule, regardless of chain order.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|value| other.contains(value))
    }
}

impl<T: ElementHash> Eq for LinkedPointerSet<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedPointerSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedPointerSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

impl<T: ElementHash> UniqueSet<T> for LinkedPointerSet<T> {
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
        self.len
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
