//! Fixed-capacity arrays with caller-visible slots. Both keep their capacity until told
//! otherwise: a full array rejects inserts rather than growing, and [`resize`] is the only way
//! to change the slot count.
//!
//! [`OrderedArray`] pays on insert to keep its elements sorted and searches by binary search;
//! [`UnorderedArray`] inserts into the first vacant slot and searches by walking them.
//!
//! [`resize`]: OrderedArray::resize

mod error;
mod ordered;
mod unordered;

pub use error::*;
pub use ordered::*;
pub use unordered::*;
