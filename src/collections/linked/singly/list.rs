use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use ListState::*;

use super::super::arena::{Link, NodeArena, NodeIndex};
use super::super::state::{ListEnds, ListState};
use super::{Iter, IterMut};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A list with forward links only, backed by the same arena storage as
/// [`DoublyLinkedList`](super::super::DoublyLinkedList).
///
/// Keeping a tail handle still makes pushes at both ends `O(1)`, but without backward links every
/// walk runs head-first: `pop_back` has to traverse the whole chain to find the new tail, and
/// seeking can't start from the nearer end. This type exists to make that trade visible next to
/// its doubly linked sibling; when in doubt, use the sibling.
///
/// The error channels match the sibling too: out-of-range reads and insertions panic (with `try_`
/// forms available), while removals report absence through [`Option`] and never panic.
///
/// # Time Complexity
/// - `push_front`, `push_back`, `pop_front`, `front`, `back`: `O(1)`
/// - `pop_back`: `O(n)`
/// - `get`, `insert`, `remove`, `replace`: `O(i)`
/// - `index_of`, `remove_item`: `O(n)`
///
/// # Examples
/// ```
/// # use textbook_lib::collections::linked::SinglyLinkedList;
/// let mut list: SinglyLinkedList<u8> = (1..=3).collect();
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// assert_eq!(list.pop_back(), Some(3));
/// assert_eq!(list.remove(5), None);
/// ```
pub struct SinglyLinkedList<T> {
    pub(crate) arena: NodeArena<Node<T>>,
    pub(crate) state: ListState,
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link,
}

impl<T> Node<T> {
    pub const fn solo(value: T) -> Node<T> {
        Node { value, next: None }
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new list with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            arena: NodeArena::new(),
            state: Empty,
        }
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ends) => Some(&self.arena[ends.head].value),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ends) => Some(&mut self.arena[ends.head].value),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ends) => Some(&self.arena[ends.tail].value),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ends) => Some(&mut self.arena[ends.tail].value),
        }
    }

    /// Adds the provided element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(self.arena.insert(Node::solo(value))),
            Full(ends) => {
                let head = ends.head;
                let node = self.arena.insert(Node {
                    value,
                    next: Some(head),
                });
                ends.head = node;
            },
        }
    }

    /// Adds the provided element to the back of the list. Still `O(1)`, because the list keeps a
    /// tail handle.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(self.arena.insert(Node::solo(value))),
            Full(ends) => {
                let tail = ends.tail;
                let node = self.arena.insert(Node::solo(value));
                self.arena[tail].next = Some(node);
                ends.tail = node;
            },
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ends) => {
                let node = self.arena.remove(ends.head);
                match node.next {
                    Some(next) => ends.head = next,
                    None => self.state = Empty,
                }
                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    ///
    /// Without backward links the predecessor of the tail can only be found by walking from the
    /// head, so this costs `O(n)`.
    pub fn pop_back(&mut self) -> Option<T> {
        let Full(ends) = self.state else {
            return None;
        };
        if ends.head == ends.tail {
            self.state = Empty;
            return Some(self.arena.remove(ends.tail).value);
        }
        let prev = self.seek(ends, self.len() - 2);
        self.arena[prev].next = None;
        let node = self.arena.remove(ends.tail);
        let Full(ends) = &mut self.state else {
            unreachable!("a list with two or more elements is populated");
        };
        ends.tail = prev;
        Some(node.value)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let ends = self.checked_ends_for_index(index)?;
        Ok(&self.arena[self.seek(ends, index)].value)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`]
    /// on a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let ends = self.checked_ends_for_index(index)?;
        let target = self.seek(ends, index);
        Ok(&mut self.arena[target].value)
    }

    /// Adds the provided element at `index`, shifting everything from `index` onwards one
    /// position towards the back.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list. Nothing is inserted in that
    /// case; use [`try_insert`](SinglyLinkedList::try_insert) to handle the failure instead.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Adds the provided element at `index`, returning an [`Err`] on a failure rather than
    /// panicking. On a failure the list is left untouched.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }
        if index == 0 {
            self.push_front(value);
        } else if index == len {
            self.push_back(value);
        } else {
            // Splice after the node at index - 1.
            let Full(ends) = self.state else {
                unreachable!("interior indices only exist in a populated list");
            };
            let prev = self.seek(ends, index - 1);
            let next = self.arena[prev].next;
            let node = self.arena.insert(Node { value, next });
            self.arena[prev].next = Some(node);
        }
        Ok(())
    }

    /// Removes the element at `index`, shifting everything after it one position towards the
    /// front. Returns [`None`] without touching the list if `index` is out of bounds; an
    /// out-of-range removal is never a panic.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let ends = self.checked_ends_for_index(index).ok()?;
        if index == 0 {
            return self.pop_front();
        }
        if index == self.len() - 1 {
            return self.pop_back();
        }
        let prev = self.seek(ends, index - 1);
        let Some(target) = self.arena[prev].next else {
            unreachable!("interior nodes always have a successor");
        };
        let node = self.arena.remove(target);
        self.arena[prev].next = node.next;
        Some(node.value)
    }

    /// Replaces the element at `index` with `new_value`, returning the old element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index` with `new_value`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        let ends = self.checked_ends_for_index(index)?;
        let target = self.seek(ends, index);
        Ok(mem::replace(&mut self.arena[target].value, new_value))
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Eq> SinglyLinkedList<T> {
    /// Returns the position of the first element equal to `item`, or [`None`] if there is no such
    /// element.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if element == item {
                return Some(index);
            }
        }
        None
    }

    /// Returns true if the list contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        for i in self.iter() {
            if i == item {
                return true;
            }
        }
        false
    }

    /// Removes and returns the first element equal to `item`, or returns [`None`] and leaves the
    /// list untouched if there is no such element.
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        let Full(ends) = self.state else {
            return None;
        };
        if self.arena[ends.head].value == *item {
            return self.pop_front();
        }
        let mut prev = ends.head;
        while let Some(current) = self.arena[prev].next {
            if self.arena[current].value == *item {
                let node = self.arena.remove(current);
                self.arena[prev].next = node.next;
                if node.next.is_none() {
                    // The removed node was the tail, so its predecessor takes over.
                    let Full(ends) = &mut self.state else {
                        unreachable!("a list being removed from is populated");
                    };
                    ends.tail = prev;
                }
                return Some(node.value);
            }
            prev = current;
        }
        None
    }
}

impl<T> SinglyLinkedList<T> {
    const fn checked_ends_for_index(&self, index: usize) -> Result<ListEnds, IndexOutOfBounds> {
        match self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(ends) => {
                if index < self.arena.len() {
                    Ok(ends)
                } else {
                    Err(IndexOutOfBounds { index, len: self.arena.len() })
                }
            },
        }
    }

    /// Walks `count` hops forward from the head. The destination must be in bounds.
    fn seek(&self, ends: ListEnds, count: usize) -> NodeIndex {
        let mut node = ends.head;
        for _ in 0..count {
            let Some(next) = self.arena[node].next else {
                unreachable!("an in-bounds seek stays within the chain");
            };
            node = next;
        }
        node
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match self.state {
            Empty => assert_eq!(self.arena.len(), 0, "an empty list must have no live nodes"),
            Full(ends) => {
                assert!(self.arena[ends.tail].next.is_none(), "the tail must have no successor");
                let mut count = 1;
                let mut current = ends.head;
                while let Some(next) = self.arena[current].next {
                    current = next;
                    count += 1;
                }
                assert_eq!(current, ends.tail, "the forward walk must end at the tail");
                assert_eq!(count, self.arena.len(), "the length must match the reachable nodes");
            },
        }
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        for item in iter.into_iter() {
            list.push_back(item);
        }
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::new();

        for value in self.iter() {
            list.push_back(value.clone());
        }

        list
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Sequence equality, exactly as for the doubly linked sibling.
impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        for (a, b) in self.iter().zip(other.iter()) {
            if a != b {
                return false;
            }
        }
        true
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}
