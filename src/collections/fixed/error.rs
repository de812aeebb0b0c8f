use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

/// Every slot of a fixed-capacity array is occupied, so nothing more fits until an element is
/// removed or the array is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExhausted {
    pub cap: usize,
}

impl Display for CapacityExhausted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Array is full, cannot insert into {} slots!", self.cap)
    }
}

impl Error for CapacityExhausted {}

/// The indexed slot is inside the array but holds no element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotVacant {
    pub index: usize,
}

impl Display for SlotVacant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No element in slot {}!", self.index)
    }
}

impl Error for SlotVacant {}

/// The ways a positional read of a fixed-capacity array can fail: the index can miss the array
/// entirely, or land on a slot with nothing in it.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum GetError {
    IndexOutOfBounds(IndexOutOfBounds),
    SlotVacant(SlotVacant),
}
