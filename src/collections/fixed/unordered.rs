use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::mem;
use std::slice;
use std::vec;

use super::error::{CapacityExhausted, GetError, IndexOutOfBounds, SlotVacant};
use crate::util::result::ResultExtension;

/// A fixed-capacity array of slots, each either occupied or vacant, with no ordering maintained.
///
/// Inserts take the first vacant slot and removals leave one behind, so after enough churn the
/// occupied slots are scattered. Every operation that looks for an element has to walk the slots,
/// which is the trade this structure makes against [`OrderedArray`](super::OrderedArray): cheap
/// inserts, linear searches.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(n)` |
/// | `remove_item` | `O(n)` |
/// | `index_of` | `O(n)` |
/// | `get` | `O(1)` |
/// | `resize` | `O(n)` |
///
/// # Examples
/// ```
/// # use textbook_lib::collections::fixed::UnorderedArray;
/// let mut arr = UnorderedArray::with_cap(3);
/// arr.insert('a');
/// arr.insert('b');
/// arr.insert('c');
/// assert_eq!(arr.remove_item(&'a'), Some('a'));
/// // The vacated slot is the first to be refilled.
/// arr.insert('d');
/// assert_eq!(arr.index_of(&'d'), Some(0));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UnorderedArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> UnorderedArray<T> {
    /// Creates a new array with the provided number of slots, all vacant.
    pub fn with_cap(cap: usize) -> UnorderedArray<T> {
        UnorderedArray {
            slots: (0..cap).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Returns the number of elements in the array.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots in the array, occupied or not.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the array contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every slot is occupied, meaning the next insert will fail.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Every slot in the array, vacant ones included.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Places the provided element in the first vacant slot, panicking if there is none.
    ///
    /// # Panics
    /// Panics if every slot is already occupied. Nothing is inserted in that case; use
    /// [`try_insert`](UnorderedArray::try_insert) to handle the failure instead.
    pub fn insert(&mut self, value: T) {
        self.try_insert(value).throw()
    }

    /// Places the provided element in the first vacant slot, or returns an [`Err`] if the array
    /// is full. On a failure the array is left untouched.
    pub fn try_insert(&mut self, value: T) -> Result<(), CapacityExhausted> {
        for slot in self.slots.iter_mut() {
            if slot.is_none() {
                *slot = Some(value);
                self.len += 1;
                return Ok(());
            }
        }
        Err(CapacityExhausted { cap: self.slots.len() })
    }

    /// Returns a reference to the element in slot `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is outside the array or names a vacant slot.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element in slot `index`, returning an [`Err`] on a failure
    /// rather than panicking. The error distinguishes an index outside the array from a slot
    /// inside it that holds nothing.
    pub fn try_get(&self, index: usize) -> Result<&T, GetError> {
        match self.slots.get(index) {
            None => Err(IndexOutOfBounds {
                index,
                len: self.slots.len(),
            }
            .into()),
            Some(None) => Err(SlotVacant { index }.into()),
            Some(Some(value)) => Ok(value),
        }
    }

    /// Returns a mutable reference to the element in slot `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is outside the array or names a vacant slot.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element in slot `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, GetError> {
        let cap = self.slots.len();
        match self.slots.get_mut(index) {
            None => Err(IndexOutOfBounds { index, len: cap }.into()),
            Some(None) => Err(SlotVacant { index }.into()),
            Some(Some(value)) => Ok(value),
        }
    }

    /// Grows or shrinks the array to `new_cap` slots. Elements keep their slots, so shrinking
    /// discards whatever sat in the slots past the new capacity, occupied or not.
    pub fn resize(&mut self, new_cap: usize) {
        let mut slots = Vec::from(mem::take(&mut self.slots));
        slots.resize_with(new_cap, || None);
        self.slots = slots.into_boxed_slice();
        self.len = self.slots.iter().flatten().count();
    }

    /// Visits the occupied slots in position order.
    pub fn iter(&self) -> iter::Flatten<slice::Iter<'_, Option<T>>> {
        self.slots.iter().flatten()
    }
}

impl<T: Eq> UnorderedArray<T> {
    /// Returns the position of the first slot holding an element equal to `item`, or [`None`] if
    /// there is no such element.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.slots.iter().position(|slot| slot.as_ref() == Some(item))
    }

    /// Returns true if the array contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes and returns the first element equal to `item`, leaving its slot vacant, or returns
    /// [`None`] and leaves the array untouched if there is no such element.
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        for slot in self.slots.iter_mut() {
            if slot.as_ref() == Some(item) {
                self.len -= 1;
                return slot.take();
            }
        }
        None
    }
}

impl<T> std::ops::Index<usize> for UnorderedArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> std::ops::IndexMut<usize> for UnorderedArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Default for UnorderedArray<T> {
    fn default() -> Self {
        UnorderedArray::with_cap(0)
    }
}

/// Collects into an exactly-full array: the capacity matches the number of elements, so the next
/// insert needs a resize first.
impl<T> FromIterator<T> for UnorderedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let slots: Box<[Option<T>]> = iter.into_iter().map(Some).collect();
        let len = slots.len();
        UnorderedArray { slots, len }
    }
}

impl<'a, T> IntoIterator for &'a UnorderedArray<T> {
    type Item = &'a T;

    type IntoIter = iter::Flatten<slice::Iter<'a, Option<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().flatten()
    }
}

impl<T> IntoIterator for UnorderedArray<T> {
    type Item = T;

    type IntoIter = iter::Flatten<vec::IntoIter<Option<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self.slots).into_iter().flatten()
    }
}

impl<T: Debug> Debug for UnorderedArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnorderedArray")
            .field("slots", &self.slots)
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for UnorderedArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
