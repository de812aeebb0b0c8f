#![cfg(test)]

use super::arena::NodeArena;
use super::state::ListState;

#[test]
fn test_arena_insert_and_remove() {
    let mut arena: NodeArena<u8> = NodeArena::new();
    assert_eq!(arena.len(), 0);

    let a = arena.insert(10);
    let b = arena.insert(20);
    let c = arena.insert(30);
    assert_eq!(arena.len(), 3);
    assert_eq!(arena[a], 10);
    assert_eq!(arena[c], 30);

    arena[b] = 21;
    assert_eq!(arena[b], 21, "Writes through a handle should stick.");

    assert_eq!(arena.remove(b), 21);
    assert_eq!(arena.len(), 2);
    assert_eq!(arena[a], 10, "Other handles must survive a removal.");
    assert_eq!(arena[c], 30, "Other handles must survive a removal.");
}

#[test]
fn test_arena_reuses_vacated_slots() {
    let mut arena: NodeArena<u8> = NodeArena::new();
    let a = arena.insert(1);
    let b = arena.insert(2);
    let _c = arena.insert(3);

    arena.remove(a);
    arena.remove(b);

    // Most recently vacated first.
    assert_eq!(arena.insert(4), b, "Vacated slots should be reused before the table grows.");
    assert_eq!(arena.insert(5), a);
    assert_eq!(arena.len(), 3);
    assert_eq!(arena[a], 5);
    assert_eq!(arena[b], 4);
}

#[test]
fn test_state_single() {
    let mut arena: NodeArena<u8> = NodeArena::new();
    let only = arena.insert(1);

    let state = ListState::single(only);
    assert!(state.is_full());
    assert!(!state.is_empty());
    assert!(ListState::default().is_empty(), "The default state should be empty.");
}
