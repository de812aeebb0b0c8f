use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::slice;
use std::vec;

use super::error::{CapacityExhausted, GetError, IndexOutOfBounds, SlotVacant};
use crate::util::result::ResultExtension;

/// A fixed-capacity array that keeps its elements sorted so they can be found by binary search.
///
/// Elements occupy a sorted prefix of the capacity; the remaining slots are vacant. Capacity only
/// changes through [`resize`](OrderedArray::resize), never behind the caller's back, because the
/// whole point of the exercise is to feel the cost of a full array.
///
/// There is deliberately no mutable element access: writing through to an element could silently
/// break the sort order that `index_of` depends on. Replace an element by removing and
/// reinserting it.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(n)` |
/// | `remove_item` | `O(n)` |
/// | `index_of` | `O(log n)` |
/// | `get` | `O(1)` |
/// | `resize` | `O(n)` |
///
/// # Examples
/// ```
/// # use textbook_lib::collections::fixed::OrderedArray;
/// let mut arr = OrderedArray::with_cap(4);
/// arr.insert(30);
/// arr.insert(10);
/// arr.insert(20);
/// assert_eq!(arr.as_slice(), [10, 20, 30]);
/// assert_eq!(arr.index_of(&20), Some(1));
/// assert_eq!(arr.remove_item(&10), Some(10));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OrderedArray<T> {
    items: Vec<T>,
    cap: usize,
}

impl<T> OrderedArray<T> {
    /// Creates a new array with the provided number of slots, all vacant.
    pub fn with_cap(cap: usize) -> OrderedArray<T> {
        OrderedArray {
            items: Vec::with_capacity(cap),
            cap,
        }
    }

    /// Returns the number of elements in the array.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of slots in the array, occupied or not.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns true if the array contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if every slot is occupied, meaning the next insert will fail.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.cap
    }

    /// The sorted elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
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
        if index >= self.cap {
            return Err(IndexOutOfBounds { index, len: self.cap }.into());
        }
        match self.items.get(index) {
            Some(value) => Ok(value),
            None => Err(SlotVacant { index }.into()),
        }
    }

    /// Grows or shrinks the array to `new_cap` slots. Shrinking discards the elements past the
    /// new capacity, which for a sorted array means the largest ones.
    pub fn resize(&mut self, new_cap: usize) {
        self.items.truncate(new_cap);
        self.items.reserve_exact(new_cap - self.items.len());
        self.cap = new_cap;
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Ord> OrderedArray<T> {
    /// Adds the provided element, keeping the array sorted. Equal elements end up after the ones
    /// already present.
    ///
    /// # Panics
    /// Panics if every slot is already occupied. Nothing is inserted in that case; use
    /// [`try_insert`](OrderedArray::try_insert) to handle the failure instead.
    pub fn insert(&mut self, value: T) {
        self.try_insert(value).throw()
    }

    /// Adds the provided element, keeping the array sorted, or returns an [`Err`] if the array
    /// is full. On a failure the array is left untouched.
    pub fn try_insert(&mut self, value: T) -> Result<(), CapacityExhausted> {
        if self.is_full() {
            return Err(CapacityExhausted { cap: self.cap });
        }
        let at = self.insertion_point(&value);
        self.items.insert(at, value);
        Ok(())
    }

    /// Returns the position of an element equal to `item`, found by binary search, or [`None`] if
    /// there is no such element. With duplicates present, any one of their positions may be
    /// returned.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        let mut left = 0;
        let mut right = self.items.len();
        while left < right {
            let mid = left + (right - left) / 2;
            match self.items[mid].cmp(item) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => left = mid + 1,
                Ordering::Greater => right = mid,
            }
        }
        None
    }

    /// Returns true if the array contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes and returns an element equal to `item`, shifting everything above it down one
    /// slot, or returns [`None`] and leaves the array untouched if there is no such element.
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        Some(self.items.remove(index))
    }

    /// The first position whose element is greater than `value`; the position `value` should be
    /// inserted at to keep the array sorted.
    fn insertion_point(&self, value: &T) -> usize {
        let mut left = 0;
        let mut right = self.items.len();
        while left < right {
            let mid = left + (right - left) / 2;
            if self.items[mid] <= *value {
                left = mid + 1;
            } else {
                right = mid;
            }
        }
        left
    }
}

impl<T> std::ops::Index<usize> for OrderedArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> Default for OrderedArray<T> {
    fn default() -> Self {
        OrderedArray::with_cap(0)
    }
}

/// Collects into an exactly-full array: the capacity matches the number of elements, so the next
/// insert needs a resize first.
impl<T: Ord> FromIterator<T> for OrderedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        items.sort();
        let cap = items.len();
        OrderedArray { items, cap }
    }
}

impl<'a, T> IntoIterator for &'a OrderedArray<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for OrderedArray<T> {
    type Item = T;

    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Debug> Debug for OrderedArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedArray")
            .field("items", &self.items)
            .field("cap", &self.cap)
            .finish()
    }
}

impl<T: Debug> Display for OrderedArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
