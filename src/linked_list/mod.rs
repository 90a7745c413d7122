//! A doubly linked list with stable element handles.
//!
//! [`LinkedList`] is circular with a sentinel root, so pushes and removals at
//! either end or in the middle are the same constant-time relink. Every push
//! returns a [`ListElement`] handle that stays usable until the element is
//! removed. After that the handle still reads its value, but navigating or
//! removing through it is a no-op that yields `None` or `false`.
//!
//! # Examples
//!
//! ```
//! use mola_chain::linked_list::{HandleList, LinkedList};
//!
//! let mut list = LinkedList::new();
//! list.push_back(1);
//! let two = list.push_back(2);
//! list.push_back(3);
//!
//! assert!(list.remove(&two));
//! assert!(!list.remove(&two));
//! assert_eq!(*two, 2);
//!
//! let mut values = vec![];
//! let mut current = list.front();
//! while let Some(elem) = current {
//!     values.push(*elem.value());
//!     current = list.next(&elem);
//! }
//! assert_eq!(values, vec![1, 3]);
//! assert_eq!(list.len(), 2);
//! ```
//!
//! The list does not synchronize itself. Concurrent calls on one list must be
//! serialized by the caller, for example with a mutex held across each call.

mod element;
mod iter;
mod list;
mod traits;


pub use element::{ElementToken, ListElement, ListId};
pub use iter::{Iter, Values};
pub use list::LinkedList;
pub use traits::HandleList;
