//! Classic textbook data structures, written out properly.
//!
//! # Purpose
//! This crate is a learning project: the structures every data-structures text walks through
//! (fixed-capacity arrays, linked lists, the recursion warm-ups), implemented the way I would
//! want to find them in a real library rather than as whiteboard sketches. Writing them end to
//! end, iterators, error types and all, is most of the lesson; nobody should reach for this in
//! production while [`std`] exists.
//!
//! # Method
//! The textbook renditions of these structures lean on raw node references and magic sentinel
//! values. Here the lists keep their nodes in an arena addressed by stable handles instead,
//! which keeps the crate safe except for one well-fenced corner of the mutable iterator, and
//! absence is always an explicit [`Option`], never a sentinel.
//!
//! # Error Handling
//! Every fallible operation picks one of two channels, and the choice is part of the API:
//! - Absence a caller can reasonably expect (popping an empty list, removing an index that
//!   isn't there) is an [`Option`].
//! - Misuse (inserting past the length, reading a vacant slot) panics, and every panicking
//!   method has a `try_` sibling returning a strongly typed error for callers that would
//!   rather decide for themselves.
//!
//! Errors are structs implementing [`Error`](std::error::Error), grouped into enums where an
//! operation can fail more than one way.
//!
//! # Dependencies
//! The exercises are about the structures' observable behavior, not about allocation, so the
//! backing storage is std's ([`Vec`] and boxed slices) and `derive_more` handles the
//! repetitive trait impls. `rand` drives the randomized test sequences and nothing else.
//!
//! # Potential Future Additions
//! - The binary tree chapter, over the same arena scheme
//! - Stack / queue adapters on top of the lists
//! - Sorting the contents of an `UnorderedArray` in place, to contrast with `OrderedArray`

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "recursion")]
pub mod recursion;

pub(crate) mod util;
