use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::super::arena::{Link, NodeArena, RawNodes};
use super::super::state::ListState;
use super::list::{Node, SinglyLinkedList};

// None of these iterators implement DoubleEndedIterator: walking backwards over forward links
// would cost O(n) per step, which an iterator shouldn't hide.

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    pub(crate) list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            arena: &self.arena,
            front: match self.state {
                Empty => None,
                Full(ends) => Some(ends.head),
            },
            remaining: self.len(),
        }
    }
}

pub struct Iter<'a, T> {
    arena: &'a NodeArena<Node<T>>,
    front: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.front?;
        let node = &self.arena[index];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let front = match self.state {
            Empty => None,
            Full(ends) => Some(ends.head),
        };
        IterMut {
            remaining: self.len(),
            nodes: self.arena.raw_nodes(),
            front,
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    nodes: RawNodes<Node<T>>,
    front: Link,
    remaining: usize,
    _phantom: PhantomData<&'a mut SinglyLinkedList<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.front?;
        // SAFETY: The list is exclusively borrowed for 'a, so the arena cannot be touched while
        // the iterator is live, and the forward walk visits each node exactly once.
        let node = unsafe { self.nodes.node_mut(index) };
        self.front = node.next;
        self.remaining -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}
