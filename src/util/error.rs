use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error};

/// An index fell outside the valid range of a collection.
///
/// Only the fault-channel operations (`insert`, `get`, `replace` and their `try_` forms) raise
/// this; the reporting operations (`pop_front`, `remove`, `remove_item`, `index_of`) never do and
/// return [`None`] for absent values instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} slots!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A computation produced a value too large for its integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Result too large for the output type!")]
pub struct ValueOverflow;
