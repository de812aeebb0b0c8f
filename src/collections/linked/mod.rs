//! Linked list types built over a shared node arena. Primarily revolves around
//! [`DoublyLinkedList`]; [`SinglyLinkedList`] is the stripped-back variant it is usually
//! contrasted with.

mod arena;
mod state;
mod tests;

pub mod doubly;
pub mod singly;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;
