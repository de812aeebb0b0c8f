use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use ListState::*;

use super::super::arena::{Link, NodeArena, NodeIndex};
use super::super::state::{ListEnds, ListState};
use super::{DisplayBackward, Iter, IterMut};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A list with links in both directions, backed by an arena of nodes.
///
/// Instead of allocating each node separately and wiring the allocations together with pointers,
/// the list keeps every node in one growable arena it owns and links them by stable slot handles.
/// Traversal still hops link to link like any linked list; only the storage strategy changes. No
/// handle to a node ever leaves the list, so elements are addressed from the outside by position
/// (`0` to `len - 1`) or by value.
///
/// Out-of-range reads and insertions are treated as caller bugs: `get`, `insert` and `replace`
/// panic, and each has a `try_` form returning a [`Result`] for callers that want to handle the
/// failure. Out-of-range removals are expected events, not bugs: `pop_front`, `pop_back`, `remove`
/// and `remove_item` report absence through [`Option`] and never panic, so a drain loop can call
/// them blindly.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the list.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `replace` | `O(min(i, n-i))` |
/// | `index_of` | `O(n)` |
/// | `remove_item` | `O(n)` |
///
/// # Examples
/// ```
/// # use textbook_lib::collections::linked::DoublyLinkedList;
/// let mut list: DoublyLinkedList<u32> = (1..=3).collect();
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// assert_eq!(list.display_backward().to_string(), "[3, 2, 1]");
///
/// assert_eq!(list.remove(1), Some(2));
/// assert_eq!(list.index_of(&3), Some(1));
/// assert_eq!(list.remove_item(&9), None);
///
/// assert_eq!(list.pop_back(), Some(3));
/// assert_eq!(list.pop_back(), Some(1));
/// assert!(list.is_empty());
/// ```
pub struct DoublyLinkedList<T> {
    pub(crate) arena: NodeArena<Node<T>>,
    pub(crate) state: ListState,
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link,
    pub next: Link,
}

impl<T> Node<T> {
    pub const fn solo(value: T) -> Node<T> {
        Node {
            value,
            prev: None,
            next: None,
        }
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new list with no elements. Nothing is allocated until the first push.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
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
    ///
    /// # Examples
    /// ```
    /// # use textbook_lib::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(self.arena.insert(Node::solo(value))),
            Full(ends) => {
                let head = ends.head;
                let node = self.arena.insert(Node {
                    value,
                    prev: None,
                    next: Some(head),
                });
                self.arena[head].prev = Some(node);
                ends.head = node;
            },
        }
    }

    /// Adds the provided element to the back of the list.
    ///
    /// # Examples
    /// ```
    /// # use textbook_lib::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(self.arena.insert(Node::solo(value))),
            Full(ends) => {
                let tail = ends.tail;
                let node = self.arena.insert(Node {
                    value,
                    prev: Some(tail),
                    next: None,
                });
                self.arena[tail].next = Some(node);
                ends.tail = node;
            },
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use textbook_lib::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList<u8> = (1..=2).collect();
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        match self.state {
            Empty => None,
            Full(ends) => Some(self.unlink(ends.head)),
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use textbook_lib::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList<u8> = (1..=2).collect();
    /// assert_eq!(list.pop_back(), Some(2));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        match self.state {
            Empty => None,
            Full(ends) => Some(self.unlink(ends.tail)),
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(&self.arena[self.checked_seek(index)?].value)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let target = self.checked_seek(index)?;
        Ok(&mut self.arena[target].value)
    }

    /// Adds the provided element at `index`, shifting everything from `index` onwards one position
    /// towards the back. `insert(0, ..)` is equivalent to `push_front` and `insert(len, ..)` to
    /// `push_back`.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list. Nothing is inserted in that case;
    /// use [`try_insert`](DoublyLinkedList::try_insert) to handle the failure instead.
    ///
    /// # Examples
    /// ```
    /// # use textbook_lib::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList<u8> = (1..=3).collect();
    /// list.insert(1, 9);
    /// assert_eq!(list.to_string(), "[1, 9, 2, 3]");
    /// ```
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
            let Full(ends) = self.state else {
                unreachable!("interior indices only exist in a populated list");
            };
            let next = self.seek(ends, index);
            let Some(prev) = self.arena[next].prev else {
                unreachable!("interior nodes always have a predecessor");
            };
            let node = self.arena.insert(Node {
                value,
                prev: Some(prev),
                next: Some(next),
            });
            self.arena[prev].next = Some(node);
            self.arena[next].prev = Some(node);
        }
        Ok(())
    }

    /// Removes the element at `index`, shifting everything after it one position towards the
    /// front. Returns [`None`] without touching the list if `index` is out of bounds; unlike an
    /// out-of-range `insert`, an out-of-range removal is never a panic.
    ///
    /// # Examples
    /// ```
    /// # use textbook_lib::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList<u8> = (1..=3).collect();
    /// assert_eq!(list.remove(1), Some(2));
    /// assert_eq!(list.remove(5), None);
    /// assert_eq!(list.to_string(), "[1, 3]");
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let ends = self.checked_ends_for_index(index).ok()?;
        let target = self.seek(ends, index);
        Some(self.unlink(target))
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
        let target = self.checked_seek(index)?;
        Ok(mem::replace(&mut self.arena[target].value, new_value))
    }

    /// A view that formats the list back-to-front, exercising the backwards links. The default
    /// [`Display`] implementation formats front-to-back.
    ///
    /// # Examples
    /// ```
    /// # use textbook_lib::collections::linked::DoublyLinkedList;
    /// let list: DoublyLinkedList<u8> = (1..=3).collect();
    /// assert_eq!(list.display_backward().to_string(), "[3, 2, 1]");
    /// ```
    pub const fn display_backward(&self) -> DisplayBackward<'_, T> {
        DisplayBackward { inner: self }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Eq> DoublyLinkedList<T> {
    /// Returns the position of the first element equal to `item`, or [`None`] if there is no such
    /// element.
    ///
    /// # Examples
    /// ```
    /// # use textbook_lib::collections::linked::DoublyLinkedList;
    /// let list: DoublyLinkedList<u8> = (1..=3).collect();
    /// assert_eq!(list.index_of(&3), Some(2));
    /// assert_eq!(list.index_of(&9), None);
    /// ```
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
    ///
    /// # Examples
    /// ```
    /// # use textbook_lib::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList<u8> = (1..=3).collect();
    /// assert_eq!(list.remove_item(&2), Some(2));
    /// assert_eq!(list.remove_item(&2), None);
    /// ```
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        let Full(ends) = self.state else {
            return None;
        };
        let mut current = Some(ends.head);
        while let Some(index) = current {
            if self.arena[index].value == *item {
                return Some(self.unlink(index));
            }
            current = self.arena[index].next;
        }
        None
    }
}

impl<T> DoublyLinkedList<T> {
    fn checked_seek(&self, index: usize) -> Result<NodeIndex, IndexOutOfBounds> {
        Ok(self.seek(self.checked_ends_for_index(index)?, index))
    }

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

    /// Walks to the node at `index` from whichever end is nearer. `index` must be in bounds.
    fn seek(&self, ends: ListEnds, index: usize) -> NodeIndex {
        if index < self.len() / 2 {
            self.seek_fwd(ends.head, index)
        } else {
            self.seek_bwd(ends.tail, self.len() - 1 - index)
        }
    }

    fn seek_fwd(&self, from: NodeIndex, count: usize) -> NodeIndex {
        let mut node = from;
        for _ in 0..count {
            let Some(next) = self.arena[node].next else {
                unreachable!("an in-bounds seek stays within the chain");
            };
            node = next;
        }
        node
    }

    fn seek_bwd(&self, from: NodeIndex, count: usize) -> NodeIndex {
        let mut node = from;
        for _ in 0..count {
            let Some(prev) = self.arena[node].prev else {
                unreachable!("an in-bounds seek stays within the chain");
            };
            node = prev;
        }
        node
    }

    /// Removes the node at `index` from both the chain and the arena, repairing the neighbouring
    /// links and the end handles, and returns its element. The node must be in the chain.
    pub(crate) fn unlink(&mut self, index: NodeIndex) -> T {
        let Full(ends) = &mut self.state else {
            unreachable!("only a populated list has nodes to unlink");
        };
        let node = self.arena.remove(index);
        match (node.prev, node.next) {
            (None, None) => self.state = Empty,
            (Some(prev), None) => {
                self.arena[prev].next = None;
                ends.tail = prev;
            },
            (None, Some(next)) => {
                self.arena[next].prev = None;
                ends.head = next;
            },
            (Some(prev), Some(next)) => {
                self.arena[prev].next = Some(next);
                self.arena[next].prev = Some(prev);
            },
        }
        node.value
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match self.state {
            Empty => assert_eq!(self.arena.len(), 0, "an empty list must have no live nodes"),
            Full(ends) => {
                assert!(self.arena[ends.head].prev.is_none(), "the head must have no predecessor");
                assert!(self.arena[ends.tail].next.is_none(), "the tail must have no successor");
                let mut count = 1;
                let mut current = ends.head;
                while let Some(next) = self.arena[current].next {
                    assert_eq!(
                        self.arena[next].prev,
                        Some(current),
                        "every forward link must be mirrored by a backward link",
                    );
                    current = next;
                    count += 1;
                }
                assert_eq!(current, ends.tail, "the forward walk must end at the tail");
                assert_eq!(count, self.arena.len(), "the length must match the reachable nodes");
            },
        }
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for item in iter.into_iter() {
            list.push_back(item);
        }
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::new();

        for value in self.iter() {
            list.push_back(value.clone());
        }

        list
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Equality is sequence equality: two lists whose nodes sit in different arena slots (because
// their op histories differ) still compare equal when they hold the same elements in order.
impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
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

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    // The forward listing reads the same as Debug; display_backward is the one that differs.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}
