#![cfg(test)]

use std::collections::VecDeque;
use std::hash::{BuildHasher, RandomState};
use std::iter;

use rand::prelude::*;

use super::*;
use crate::util::drops::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_empty_list() {
    let mut list: DoublyLinkedList<u8> = DoublyLinkedList::default();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    assert_eq!(list.pop_front(), None, "Popping an empty list should report absence.");
    assert_eq!(list.pop_back(), None, "Popping an empty list should report absence.");
    assert_eq!(list.remove(0), None, "Removing from an empty list should report absence.");
    assert_eq!(list.remove_item(&1), None);
    assert_eq!(list.index_of(&1), None);
    assert_eq!(list.to_string(), "[]");
    assert_eq!(list.display_backward().to_string(), "[]");
    list.verify_links();
}

#[test]
fn test_push_pop_ends() {
    let mut list = DoublyLinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_links();

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    if let Some(front) = list.front_mut() {
        *front = 10;
    }
    if let Some(back) = list.back_mut() {
        *back = 30;
    }
    assert_eq!(list.pop_front(), Some(10), "Mutation through front_mut should stick.");
    assert_eq!(list.pop_back(), Some(30), "Mutation through back_mut should stick.");
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), None, "An emptied list should report absence.");
    list.verify_links();

    list.push_front(7);
    assert_eq!(
        (list.front(), list.back()),
        (Some(&7), Some(&7)),
        "A single element should be both the front and the back."
    );

    let mut list: DoublyLinkedList<u8> = (0..5).collect();
    list.push_front(9);
    assert_eq!(list.pop_front(), Some(9));
    assert_eq!(
        list,
        (0..5).collect::<DoublyLinkedList<u8>>(),
        "A push then pop at the front should restore the list."
    );
    list.push_back(9);
    assert_eq!(list.pop_back(), Some(9));
    assert_eq!(
        list,
        (0..5).collect::<DoublyLinkedList<u8>>(),
        "A push then pop at the back should restore the list."
    );
}

#[test]
fn test_worked_example() {
    // The classic chapter walkthrough: build 1, 2, 3, then poke at it.
    let mut list = DoublyLinkedList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_back(3);

    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert_eq!(list.display_backward().to_string(), "[3, 2, 1]");

    assert_eq!(list.remove(1), Some(2), "Removing index 1 should succeed and return 2.");
    assert_eq!(list.to_string(), "[1, 3]");
    assert_eq!(list.display_backward().to_string(), "[3, 1]");
    list.verify_links();

    assert_eq!(list.index_of(&3), Some(1), "3 should have shifted into index 1.");
    assert_eq!(list.remove_item(&9), None, "Removing an absent key should report absence.");

    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_back(), Some(1));
    assert!(list.is_empty(), "Popping every element should leave the list empty.");
    assert_eq!(list.pop_back(), None);
    list.verify_links();
}

#[test]
fn test_get_and_replace() {
    let mut list: DoublyLinkedList<u8> = (0..5).collect();

    assert_eq!(*list.get(0), 0);
    assert_eq!(*list.get(4), 4, "Seeking from the tail end should find the element.");
    assert_eq!(list[2], 2, "Index operator should match get.");

    *list.get_mut(1) = 10;
    list[3] = 30;
    assert_eq!(list.to_string(), "[0, 10, 2, 30, 4]");

    assert_eq!(
        list.try_get(5),
        Err(IndexOutOfBounds { index: 5, len: 5 }),
        "try_get should report the index and length."
    );
    assert_panics!({
        let list: DoublyLinkedList<u8> = (0..5).collect();
        let _ = list[5];
    });

    assert_eq!(list.replace(0, 9), 0, "Replace should return the old element.");
    assert_eq!(list.front(), Some(&9));
    assert!(list.try_replace(5, 0).is_err());
    list.verify_links();
}

#[test]
fn test_insert() {
    let mut list = DoublyLinkedList::new();
    list.insert(0, 1);
    list.insert(1, 3);
    list.insert(1, 2);
    list.insert(0, 0);
    list.verify_links();
    assert_eq!(list.to_string(), "[0, 1, 2, 3]");

    list.insert(4, 4);
    assert_eq!(list.back(), Some(&4), "Inserting at the length should append.");

    assert_eq!(
        list.try_insert(6, 9),
        Err(IndexOutOfBounds { index: 6, len: 5 }),
        "Inserting past the length should be refused."
    );
    assert_eq!(list.to_string(), "[0, 1, 2, 3, 4]", "A refused insert should change nothing.");
    list.verify_links();

    list.insert(2, 9);
    assert_eq!(
        list.index_of(&9),
        Some(2),
        "A fresh element should be found at its insertion index."
    );

    assert_panics!({
        let mut list: DoublyLinkedList<u8> = (0..3).collect();
        list.insert(4, 9)
    }, "Inserting past the length should panic.");
}

#[test]
fn test_remove() {
    let mut list: DoublyLinkedList<u8> = (0..5).collect();

    assert_eq!(list.remove(2), Some(2), "Removing an interior element should succeed.");
    list.verify_links();
    assert_eq!(list.remove(0), Some(0), "Removing the head should succeed.");
    assert_eq!(list.remove(2), Some(4), "Removing the tail should succeed.");
    list.verify_links();
    assert_eq!(list.to_string(), "[1, 3]");

    assert_eq!(list.remove(2), None, "An out-of-bounds removal should never panic.");
    assert_eq!(list.remove(100), None);
    assert_eq!(list.len(), 2, "A refused removal should change nothing.");

    assert_eq!(list.remove(1), Some(3));
    assert_eq!(list.remove(0), Some(1));
    assert!(list.is_empty());
    assert_eq!(list.remove(0), None);
    list.verify_links();
}

#[test]
fn test_remove_item_and_find() {
    let mut list: DoublyLinkedList<u8> = [5, 1, 2, 1, 4].into_iter().collect();

    assert_eq!(list.index_of(&1), Some(1), "index_of should find the first match.");
    assert!(list.contains(&4));
    assert!(!list.contains(&9));

    assert_eq!(list.remove_item(&1), Some(1), "Only the first match should be removed.");
    assert_eq!(list.to_string(), "[5, 2, 1, 4]");
    list.verify_links();

    assert_eq!(list.remove_item(&5), Some(5), "Removing the head by key should work.");
    assert_eq!(list.remove_item(&4), Some(4), "Removing the tail by key should work.");
    list.verify_links();
    assert_eq!(list.to_string(), "[2, 1]");

    assert_eq!(list.remove_item(&9), None, "An absent key should report absence.");
    assert_eq!(list.len(), 2, "A refused removal should change nothing.");

    assert_eq!(list.remove_item(&2), Some(2));
    assert_eq!(list.remove_item(&1), Some(1));
    assert!(list.is_empty());
    list.verify_links();
}

#[test]
fn test_emptied_list_is_reusable() {
    let mut list = DoublyLinkedList::new();
    for round in 0..3 {
        for i in 0..10 {
            list.push_back(round * 10 + i);
        }
        list.verify_links();
        for i in 0..10 {
            assert_eq!(list.pop_front(), Some(round * 10 + i));
        }
        assert!(list.is_empty(), "Each round should drain the list completely.");
    }

    // Interleaved removals force vacated slots to be reused mid-chain.
    let mut list: DoublyLinkedList<u8> = (0..8).collect();
    for i in 0..4 {
        assert_eq!(list.remove(i), Some(i as u8 * 2));
    }
    list.verify_links();
    for i in 8..12 {
        list.push_back(i);
        list.verify_links();
    }
    assert_eq!(list.to_string(), "[1, 3, 5, 7, 8, 9, 10, 11]");
}

#[test]
fn test_iterators() {
    let list: DoublyLinkedList<usize> = (0..5).collect();
    let collected: DoublyLinkedList<usize> = list.iter().copied().collect();
    assert_eq!(list, collected, "Collected iter should be equal.");
    assert_eq!(list.iter().len(), 5, "Iter should know its exact length.");

    let rev: Vec<usize> = list.iter().rev().copied().collect();
    assert_eq!(rev, [4, 3, 2, 1, 0], "Reverse iteration should follow the back links.");

    let mut list = list;
    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(list.to_string(), "[0, 2, 4, 6, 8]");
    let doubled_back: Vec<usize> = list.iter_mut().rev().map(|v| *v).collect();
    assert_eq!(doubled_back, [8, 6, 4, 2, 0]);

    let mut iter = list.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None, "Meeting in the middle should end iteration.");
    assert_eq!(iter.next_back(), None);

    let counter = CountedDrop::new();
    let list: DoublyLinkedList<CountedDrop> =
        iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(list.into_iter());
    assert_eq!(counter.count(), 10, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_drop_lifecycle() {
    let counter = CountedDrop::new();
    let mut list: DoublyLinkedList<CountedDrop> =
        iter::repeat_with(|| counter.clone()).take(10).collect();

    assert_eq!(counter.count(), 0, "Stored elements shouldn't drop early.");

    drop(list.pop_front());
    drop(list.remove(4));
    assert_eq!(counter.count(), 2, "Each removal should release exactly one element.");

    drop(list);
    assert_eq!(counter.count(), 10, "Dropping the list should release the rest.");
}

#[test]
fn test_equality_and_hash() {
    let built: DoublyLinkedList<u8> = (0..5).collect();

    let mut pushed = DoublyLinkedList::new();
    for i in (0..5).rev() {
        pushed.push_front(i);
    }

    // A different op history leaves nodes in different arena slots.
    let mut reworked: DoublyLinkedList<u8> = [9, 0, 1, 2, 3, 4].into_iter().collect();
    assert_eq!(reworked.remove_item(&9), Some(9));

    assert_eq!(built, pushed, "Differently built lists with equal contents should be equal.");
    assert_eq!(built, reworked, "Slot layout shouldn't leak into equality.");
    assert_ne!(built, (0..4).collect::<DoublyLinkedList<u8>>());
    assert_ne!(built, (1..6).collect::<DoublyLinkedList<u8>>());

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&built),
        state.hash_one(&reworked),
        "Equal lists should produce the same hash."
    );
}

#[test]
fn test_extend_and_clone() {
    let mut list: DoublyLinkedList<u8> = (0..3).collect();
    list.extend(3..6);
    assert_eq!(list.to_string(), "[0, 1, 2, 3, 4, 5]", "Extending should append in order.");
    list.verify_links();

    let copy = list.clone();
    assert_eq!(copy, list, "A clone should hold the same sequence.");
    copy.verify_links();

    list.pop_front();
    assert_eq!(copy.len(), 6, "A clone should be independent of the original.");
}

#[test]
fn test_display() {
    let mut list = DoublyLinkedList::new();
    list.push_back("alpha");
    list.push_back("beta");
    assert_eq!(list.to_string(), r#"["alpha", "beta"]"#);
    assert_eq!(list.display_backward().to_string(), r#"["beta", "alpha"]"#);
    assert_eq!(format!("{list:?}"), r#"["alpha", "beta"]"#);
}

#[test]
fn test_zst_support() {
    let mut list: DoublyLinkedList<()> = iter::repeat(()).take(5).collect();
    assert_eq!(list.len(), 5);
    assert_eq!(list.pop_front(), Some(()));
    assert_eq!(list.remove(3), Some(()));
    assert_eq!(list.len(), 3);
    list.verify_links();
}

#[test]
fn test_random_ops_match_vecdeque() {
    let mut rng = StdRng::seed_from_u64(0x1157);
    let mut list: DoublyLinkedList<u32> = DoublyLinkedList::new();
    let mut model: VecDeque<u32> = VecDeque::new();

    for step in 0..1000_u32 {
        match rng.gen_range(0..7) {
            0 => {
                list.push_front(step);
                model.push_front(step);
            },
            1 => {
                list.push_back(step);
                model.push_back(step);
            },
            2 => assert_eq!(list.pop_front(), model.pop_front(), "Pops must match the model."),
            3 => assert_eq!(list.pop_back(), model.pop_back(), "Pops must match the model."),
            4 => {
                let index = rng.gen_range(0..=model.len());
                list.insert(index, step);
                model.insert(index, step);
            },
            5 => {
                // Often out of bounds on purpose; both sides must agree either way.
                let index = rng.gen_range(0..model.len() + 2);
                assert_eq!(
                    list.remove(index),
                    model.remove(index),
                    "Removals must match the model."
                );
            },
            _ => {
                if !model.is_empty() {
                    let index = rng.gen_range(0..model.len());
                    assert_eq!(list[index], model[index], "Reads must match the model.");
                }
            },
        }
        list.verify_links();
        assert_eq!(list.len(), model.len(), "Lengths must match the model.");
    }

    assert!(list.iter().eq(model.iter()), "Final contents must match the model.");
    assert!(list.iter().rev().eq(model.iter().rev()), "Backwards walk must match the model.");
}
