#![cfg(feature = "linked")]
//! Property-based tests for LinkedPointerSet laws.
//!
//! A `Vec` that prepends unseen values is used as the model: every operation
//! on the set must leave it iterating exactly like the model.

use proptest::prelude::*;
use setforge::collections::LinkedPointerSet;

#[derive(Debug, Clone)]
enum Operation {
    Insert(i16),
    Remove(i16),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (-64..64_i16).prop_map(Operation::Insert),
        2 => (-64..64_i16).prop_map(Operation::Remove),
    ]
}

// =============================================================================
// Model Law
// Description: The set behaves like a newest-first list without duplicates
// =============================================================================

proptest! {
    #[test]
    fn prop_matches_newest_first_model(operations in prop::collection::vec(operation(), 0..200)) {
        let mut set = LinkedPointerSet::new();
        let mut model: Vec<i16> = Vec::new();

        for operation in operations {
            match operation {
                Operation::Insert(value) => {
                    let fresh = !model.contains(&value);
                    prop_assert_eq!(set.insert(value), fresh);
                    if fresh {
                        model.insert(0, value);
                    }
                }
                Operation::Remove(value) => {
                    let position = model.iter().position(|&member| member == value);
                    prop_assert_eq!(set.remove(&value), position.is_some());
                    if let Some(position) = position {
                        model.remove(position);
                    }
                }
            }

            prop_assert_eq!(set.len(), model.len());
            prop_assert_eq!(set.first(), model.first());
            prop_assert_eq!(set.last(), model.last());
        }

        prop_assert_eq!(set.to_vec(), model.clone());
        let backward: Vec<i16> = set.iter().rev().copied().collect();
        let mut expected = model;
        expected.reverse();
        prop_assert_eq!(backward, expected);
    }
}

// =============================================================================
// Insert-Contains Law
// Description: An inserted element is always contained in the set
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_contains_law(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        new_element: i32
    ) {
        let mut set: LinkedPointerSet<i32> = elements.into_iter().collect();
        set.insert(new_element);

        prop_assert!(set.contains(&new_element));
        for value in set.to_vec() {
            prop_assert!(set.contains(&value));
        }
    }
}

// =============================================================================
// Duplicate Law
// Description: Re-inserting every member changes nothing
// =============================================================================

proptest! {
    #[test]
    fn prop_reinsert_is_noop(elements in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut set: LinkedPointerSet<i32> = elements.into_iter().collect();
        let before = set.to_vec();

        for value in before.clone() {
            prop_assert!(!set.insert(value));
        }

        prop_assert_eq!(set.to_vec(), before);
    }
}
