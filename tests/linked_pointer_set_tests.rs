//! Unit tests for LinkedPointerSet.
//!
//! Covers stack-order insertion, duplicate rejection, the symmetric scan's
//! comparison bound, removal at both ends, and the element-hash
//! membership rule.

#![cfg(feature = "linked")]

use rstest::rstest;
use setforge::collections::LinkedPointerSet;
use setforge::order::ElementHash;
use setforge::{SetError, UniqueSet};
use std::cell::Cell;
use std::rc::Rc;

fn set_of(values: &[i32]) -> LinkedPointerSet<i32> {
    values.iter().copied().collect()
}

/// Element whose hash calls are counted, one per comparison.
#[derive(Clone)]
struct Counted {
    value: i32,
    calls: Rc<Cell<usize>>,
}

impl ElementHash for Counted {
    fn element_hash(&self) -> i32 {
        self.calls.set(self.calls.get() + 1);
        self.value
    }
}

fn counted_set(size: i32, calls: &Rc<Cell<usize>>) -> LinkedPointerSet<Counted> {
    let mut set = LinkedPointerSet::new();
    for value in 0..size {
        set.insert(Counted {
            value,
            calls: Rc::clone(calls),
        });
    }
    set
}

/// Counts the chain comparisons made by one `contains` call.
fn comparisons_for(set: &LinkedPointerSet<Counted>, calls: &Rc<Cell<usize>>, value: i32) -> (bool, usize) {
    let probe = Counted {
        value,
        calls: Rc::new(Cell::new(0)),
    };
    calls.set(0);
    let found = set.contains(&probe);
    (found, calls.get())
}

// =============================================================================
// Insertion
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: LinkedPointerSet<i32> = LinkedPointerSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.first(), None);
    assert_eq!(set.last(), None);
    assert_eq!(set.iter().next(), None);
}

#[rstest]
fn test_iteration_is_reverse_insertion_order() {
    let mut set = LinkedPointerSet::new();
    set.insert("a");
    set.insert("b");
    set.insert("c");
    let order: Vec<&str> = set.iter().copied().collect();
    assert_eq!(order, vec!["c", "b", "a"]);
    assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[rstest]
fn test_duplicate_insert_returns_false() {
    let mut set = set_of(&[1, 2, 3]);
    assert!(!set.insert(2));
    assert!(!set.insert(3));
    assert!(!set.insert(1));
    assert_eq!(set.len(), 3);
    assert_eq!(set.to_vec(), vec![3, 2, 1]);
}

// =============================================================================
// Membership
// =============================================================================

#[rstest]
#[case(&[], 1, false)]
#[case(&[1], 1, true)]
#[case(&[1, 2], 1, true)]
#[case(&[1, 2], 2, true)]
#[case(&[1, 2, 3, 4, 5], 3, true)]
#[case(&[1, 2, 3, 4, 5], 4, true)]
#[case(&[1, 2, 3, 4, 5], 6, false)]
#[case(&[1, 2, 3, 4, 5, 6], 4, true)]
#[case(&[1, 2, 3, 4, 5, 6], 3, true)]
fn test_contains_finds_every_position(
    #[case] values: &[i32],
    #[case] probe: i32,
    #[case] expected: bool,
) {
    assert_eq!(set_of(values).contains(&probe), expected);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(7)]
#[case(8)]
#[case(101)]
fn test_scan_compares_at_most_half_from_each_end(#[case] size: i32) {
    let calls = Rc::new(Cell::new(0));
    let set = counted_set(size, &calls);
    let steps = (size as usize).div_ceil(2);

    for value in 0..size {
        let (found, comparisons) = comparisons_for(&set, &calls, value);
        assert!(found);
        assert!(comparisons <= 2 * steps, "value {value}: {comparisons}");
    }

    let (found, comparisons) = comparisons_for(&set, &calls, -1);
    assert!(!found);
    assert!(comparisons <= 2 * steps);
}

#[rstest]
fn test_scan_finds_either_end_in_one_step() {
    let calls = Rc::new(Cell::new(0));
    let set = counted_set(1_000, &calls);

    // Newest member sits at the front.
    let (_, front) = comparisons_for(&set, &calls, 999);
    assert_eq!(front, 1);

    // Oldest member sits at the rear.
    let (_, rear) = comparisons_for(&set, &calls, 0);
    assert_eq!(rear, 2);
}

#[rstest]
fn test_membership_is_by_hash_only() {
    // Known limitation: distinct values with equal element hashes are the
    // same member. "Aa" and "BB" collide.
    let mut set = LinkedPointerSet::new();
    assert!(set.insert(String::from("Aa")));
    assert!(!set.insert(String::from("BB")));
    assert!(set.contains(&String::from("BB")));
    assert!(set.remove(&String::from("BB")));
    assert!(set.is_empty());
}

// =============================================================================
// Removal
// =============================================================================

#[rstest]
#[case(5, vec![4, 3, 2, 1])]
#[case(1, vec![5, 4, 3, 2])]
#[case(3, vec![5, 4, 2, 1])]
#[case(2, vec![5, 4, 3, 1])]
fn test_remove_at_every_position(#[case] target: i32, #[case] expected: Vec<i32>) {
    let mut set = set_of(&[1, 2, 3, 4, 5]);
    assert!(set.remove(&target));
    assert_eq!(set.len(), 4);
    assert_eq!(set.to_vec(), expected);

    let mut backward = expected.clone();
    backward.reverse();
    assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), backward);
}

#[rstest]
fn test_remove_front_then_insert_keeps_links() {
    let mut set = set_of(&[1, 2, 3]);
    assert!(set.remove(&3));
    assert!(set.insert(4));
    assert_eq!(set.first(), Some(&4));
    assert_eq!(set.to_vec(), vec![4, 2, 1]);
    assert!(set.contains(&1));
}

#[rstest]
fn test_remove_rear_then_find_new_rear() {
    let mut set = set_of(&[1, 2, 3]);
    assert!(set.remove(&1));
    assert_eq!(set.last(), Some(&2));
    assert!(set.contains(&2));
    assert!(!set.contains(&1));
}

#[rstest]
fn test_remove_absent_returns_false() {
    let mut set = set_of(&[1, 2]);
    assert!(!set.remove(&9));
    assert_eq!(set.len(), 2);
}

#[rstest]
fn test_take_returns_stored_value() {
    let mut set = LinkedPointerSet::new();
    set.insert(String::from("Aa"));
    assert_eq!(set.take(&String::from("BB")), Some(String::from("Aa")));
    assert_eq!(set.take(&String::from("BB")), None);
}

#[rstest]
fn test_clear_then_reuse() {
    let mut set = set_of(&[1, 2, 3]);
    set.clear();
    assert!(set.is_empty());
    assert!(!set.contains(&1));
    assert!(set.insert(1));
    assert_eq!(set.to_vec(), vec![1]);
}

// =============================================================================
// Cursor
// =============================================================================

#[rstest]
fn test_cursor_remove_before_next_fails() {
    let mut set = set_of(&[1]);
    let mut cursor = set.cursor();
    assert_eq!(cursor.remove_current(), Err(SetError::IteratorState));
    assert_eq!(cursor.current(), None);
}

#[rstest]
fn test_cursor_filters_in_place() {
    let mut set = set_of(&[1, 2, 3, 4, 5, 6]);
    let mut cursor = set.cursor();
    while let Some(&value) = cursor.move_next() {
        if value % 2 == 0 {
            assert_eq!(cursor.remove_current(), Ok(value));
        }
    }
    assert_eq!(set.to_vec(), vec![5, 3, 1]);
}

// =============================================================================
// Standard traits and the set contract
// =============================================================================

#[rstest]
fn test_equality_ignores_chain_order() {
    assert_eq!(set_of(&[1, 2, 3]), set_of(&[3, 1, 2]));
    assert_ne!(set_of(&[1, 2]), set_of(&[1, 2, 3]));
    assert_ne!(set_of(&[1, 2]), set_of(&[1, 3]));
}

#[rstest]
fn test_display_and_debug() {
    let set = set_of(&[1, 2, 3]);
    assert_eq!(format!("{set}"), "{3, 2, 1}");
    assert_eq!(format!("{set:?}"), "{3, 2, 1}");
    let empty: LinkedPointerSet<i32> = LinkedPointerSet::default();
    assert_eq!(format!("{empty}"), "{}");
}

#[rstest]
fn test_to_vec_as() {
    let set = set_of(&[1, 2]);
    let widened: Vec<i64> = set.to_vec_as();
    assert_eq!(widened, vec![2_i64, 1]);
}

#[rstest]
fn test_owned_iteration() {
    let set = set_of(&[1, 2, 3]);
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[rstest]
fn test_bulk_operations() {
    let mut set: LinkedPointerSet<i32> = LinkedPointerSet::new();
    assert!(set.insert_all([1, 2, 3, 4]));
    assert!(!set.insert_all([1, 4]));
    assert!(set.contains_all(&[1, 4]));
    assert!(!set.contains_all(&[1, 5]));
    assert!(set.remove_all(&[2, 9]));
    assert_eq!(set.to_vec(), vec![4, 3, 1]);

    let keep = set_of(&[3, 4, 8]);
    assert!(set.retain_all(&keep));
    assert_eq!(set.to_vec(), vec![4, 3]);
    assert!(!set.retain_all(&keep));
}

#[rstest]
fn test_clone_is_independent() {
    let mut original = set_of(&[1, 2]);
    let copy = original.clone();
    original.insert(3);
    assert_eq!(copy.to_vec(), vec![2, 1]);
    assert_eq!(original.to_vec(), vec![3, 2, 1]);
}
