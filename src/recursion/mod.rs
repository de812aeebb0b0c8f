//! Paired renditions of the classic induction exercises. Every function in [`iterative`] has a
//! twin in [`recursive`] with the same signature, and the pair agree on every input, overflow
//! included; only the evaluation strategy differs.
//!
//! Results that can outgrow their integer type are reported as [`ValueOverflow`] rather than
//! capped at a magic cut-off input, so the boundary is a property of the arithmetic instead of
//! a constant to keep in sync.


pub mod iterative;
pub mod recursive;

#[doc(inline)]
pub use crate::util::error::ValueOverflow;
