use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

/// A stable handle to a node slot in a [`NodeArena`].
///
/// Handles are plain positions into the arena's slot table, so they stay valid when other nodes
/// are inserted or removed. They are never exposed outside the crate; a list hands out element
/// references and positional indices only, which is what lets the whole structure work without
/// reference-counted nodes or link-juggling unsafe code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeIndex(usize);

/// A link between nodes: either the handle of a neighbour or the end of the chain.
pub(crate) type Link = Option<NodeIndex>;

/// The backing store for a linked list's nodes.
///
/// All nodes live in one growable slot table owned by the arena. Removing a node vacates its slot
/// and threads it onto an internal free list; the next insertion reuses the most recently vacated
/// slot before the table grows. Slots therefore never move, which keeps every outstanding
/// [`NodeIndex`] stable, and dropping the arena drops every live node with it.
pub(crate) struct NodeArena<N> {
    slots: Vec<Slot<N>>,
    first_free: Link,
    len: usize,
}

enum Slot<N> {
    Occupied(N),
    Vacant { next_free: Link },
}

impl<N> NodeArena<N> {
    pub const fn new() -> NodeArena<N> {
        NodeArena {
            slots: Vec::new(),
            first_free: None,
            len: 0,
        }
    }

    /// The number of live nodes, not the size of the slot table.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Stores `node` in a vacant slot and returns its handle, growing the table only when no
    /// vacant slot is available.
    pub fn insert(&mut self, node: N) -> NodeIndex {
        self.len += 1;
        match self.first_free {
            Some(index) => {
                let slot = mem::replace(&mut self.slots[index.0], Slot::Occupied(node));
                let Slot::Vacant { next_free } = slot else {
                    unreachable!("free list entries are always vacant slots");
                };
                self.first_free = next_free;
                index
            },
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeIndex(self.slots.len() - 1)
            },
        }
    }

    /// Vacates the slot at `index` and returns the node it held. The slot goes onto the free list
    /// for reuse; the handle must not be used again.
    pub fn remove(&mut self, index: NodeIndex) -> N {
        let slot = mem::replace(
            &mut self.slots[index.0],
            Slot::Vacant { next_free: self.first_free },
        );
        let Slot::Occupied(node) = slot else {
            unreachable!("live node handles never name a vacant slot");
        };
        self.first_free = Some(index);
        self.len -= 1;
        node
    }

    /// A raw view of the slot table for the mutable iterators, which need to hand out `&mut`
    /// borrows of several nodes at once.
    pub fn raw_nodes(&mut self) -> RawNodes<N> {
        RawNodes {
            // Never null: `as_mut_ptr` returns a dangling pointer for an empty table.
            ptr: NonNull::new(self.slots.as_mut_ptr()).unwrap_or(NonNull::dangling()),
        }
    }
}

impl<N> Index<NodeIndex> for NodeArena<N> {
    type Output = N;

    fn index(&self, index: NodeIndex) -> &N {
        match &self.slots[index.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("live node handles never name a vacant slot"),
        }
    }
}

impl<N> IndexMut<NodeIndex> for NodeArena<N> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut N {
        match &mut self.slots[index.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("live node handles never name a vacant slot"),
        }
    }
}

/// An unchecked pointer into an arena's slot table, created by [`NodeArena::raw_nodes`].
pub(crate) struct RawNodes<N> {
    ptr: NonNull<Slot<N>>,
}

impl<N> RawNodes<N> {
    /// Produces a `&mut` borrow of the node at `index` with a caller-chosen lifetime.
    ///
    /// # Safety
    /// `index` must be occupied in the arena this view was created from, the arena must not have
    /// been touched since [`NodeArena::raw_nodes`] was called, and the caller must not hold any
    /// other borrow of the same node for as long as `'a` lasts.
    pub unsafe fn node_mut<'a>(&self, index: NodeIndex) -> &'a mut N {
        // SAFETY: `index` is in bounds of the slot table per the contract, so the offset stays
        // within the arena's allocation, and the caller guarantees no aliasing borrow exists.
        let slot = unsafe { &mut *self.ptr.as_ptr().add(index.0) };
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("live node handles never name a vacant slot"),
        }
    }
}
