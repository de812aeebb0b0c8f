use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::super::arena::{Link, NodeArena, RawNodes};
use super::super::state::ListState;
use super::list::{DoublyLinkedList, Node};

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    // Owned iteration is just popping from the chosen end until nothing is left.
    pub(crate) list: DoublyLinkedList<T>,
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

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (front, back) = match self.state {
            Empty => (None, None),
            Full(ends) => (Some(ends.head), Some(ends.tail)),
        };
        Iter {
            arena: &self.arena,
            front,
            back,
            remaining: self.len(),
        }
    }
}

pub struct Iter<'a, T> {
    // The cursors are inclusive and converge; `remaining` is what actually terminates iteration,
    // so the two ends never walk past each other.
    arena: &'a NodeArena<Node<T>>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
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

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.back?;
        let node = &self.arena[index];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (front, back) = match self.state {
            Empty => (None, None),
            Full(ends) => (Some(ends.head), Some(ends.tail)),
        };
        IterMut {
            remaining: self.len(),
            nodes: self.arena.raw_nodes(),
            front,
            back,
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    nodes: RawNodes<Node<T>>,
    front: Link,
    back: Link,
    remaining: usize,
    _phantom: PhantomData<&'a mut DoublyLinkedList<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front?;
        // SAFETY: The list is exclusively borrowed for 'a, so the arena cannot be touched while
        // the iterator is live, and `remaining` ensures each node is yielded at most once.
        let node = unsafe { self.nodes.node_mut(index) };
        self.front = node.next;
        self.remaining -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.back?;
        // SAFETY: As in next; the converging cursors never name the same node twice.
        let node = unsafe { self.nodes.node_mut(index) };
        self.back = node.prev;
        self.remaining -= 1;
        Some(&mut node.value)
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}
