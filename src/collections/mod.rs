//! The collection chapters: fixed-capacity arrays and linked lists.
//!
//! # Purpose
//! I wrote these types to learn the classic structures properly, but also the Rust that has to
//! carry them: ownership through an arena, iterators in all three flavors, and how a public API
//! decides between panicking and returning an error.
//!
//! # Method
//! Every structure here keeps its churn observable. The arrays expose their slots, vacancies
//! included, and the lists can be walked from either end, because watching where elements land
//! is most of the lesson. Where [`std`] has a polished equivalent, the unpolished one is the
//! point.

#[cfg(feature = "fixed")]
pub mod fixed;
#[cfg(feature = "linked")]
pub mod linked;
