//! Small generic containers: a handle-based doubly linked list and
//! single-slot atomic reference cells for publishing state to readers.
#![no_std]

extern crate alloc;

#[macro_use]
mod assert;

pub mod atomic;
pub mod linked_list;

pub mod prelude {
    pub use crate::atomic::{AtomicRef, AtomicShared, PublishCell};
    pub use crate::linked_list::{ElementToken, HandleList, LinkedList, ListElement, ListId};
}
