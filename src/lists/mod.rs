//! Positional linked lists.
//!
//! Nodes live in an arena, and are referred to by [`Position`](crate::Position)s that
//! stay valid until their node is removed or the list is cleared.

pub mod circular;
pub mod doubly;
pub mod singly;

pub use circular::CircularlyLinkedList;
pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;
