use alloc::sync::Arc;
use core::fmt;

use slab::Slab;
use tracing::trace;

use super::element::{ElementToken, ListElement, ListId};
use super::iter::{Iter, Values};
use super::traits::HandleList;

/// Slab key of the sentinel root. It is allocated first and never freed.
pub(crate) const ROOT: usize = 0;

pub(crate) struct Node<T> {
    pub(crate) prev: usize,
    pub(crate) next: usize,
    stamp: u64,
    /// `None` only for the sentinel root.
    pub(crate) value: Option<Arc<T>>,
}

/// A circular doubly linked list with a sentinel root.
///
/// Nodes live in a slab arena and link to each other by slab key, so the
/// cycle through the root needs neither reference counting nor raw pointers.
/// Every handle carries the list's [`ListId`] and a stamp; both are checked
/// before a handle is used to navigate or unlink.
///
/// The list does no locking of its own. Share it between threads only behind
/// an external lock held for the whole of each call.
pub struct LinkedList<T> {
    id: ListId,
    slab: Slab<Node<T>>,
    /// Last stamp handed out.
    stamp: u64,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slab = Slab::with_capacity(capacity + 1);
        let root = slab.insert(Node {
            prev: ROOT,
            next: ROOT,
            stamp: 0,
            value: None,
        });
        debug_assert_eq!(root, ROOT);
        Self {
            id: ListId::new_unique(),
            slab,
            stamp: 0,
            len: 0,
        }
    }

    /// Get the id that every handle from this list carries.
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Check if `elem` is currently linked into this list.
    pub fn contains(&self, elem: &ListElement<T>) -> bool {
        self.resolve(&elem.token).is_some()
    }

    /// Link a new element holding `value` right after `mark`.
    ///
    /// Returns `None`, dropping `value`, if `mark` is not a member.
    pub fn insert_after(&mut self, mark: &ListElement<T>, value: T) -> Option<ListElement<T>> {
        let at = self.resolve(&mark.token)?;
        Some(self.link_after(at, value))
    }

    /// Link a new element holding `value` right before `mark`.
    ///
    /// Returns `None`, dropping `value`, if `mark` is not a member.
    pub fn insert_before(&mut self, mark: &ListElement<T>, value: T) -> Option<ListElement<T>> {
        let at = self.resolve(&mark.token)?;
        let prev = self.slab[at].prev;
        Some(self.link_after(prev, value))
    }

    /// Unlink every element.
    ///
    /// Outstanding handles keep their values but are no longer members.
    pub fn clear(&mut self) {
        trace!(list = ?self.id, len = self.len, "clear linked list");
        self.slab.retain(|key, _| key == ROOT);
        let root = &mut self.slab[ROOT];
        root.prev = ROOT;
        root.next = ROOT;
        self.len = 0;
    }

    /// Iterate over element handles from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterate over values from front to back.
    pub fn values(&self) -> Values<'_, T> {
        Values::new(self)
    }

    pub(crate) fn node(&self, key: usize) -> &Node<T> {
        &self.slab[key]
    }

    /// Map a token to its slab key if the element is still linked here.
    fn resolve(&self, token: &ElementToken) -> Option<usize> {
        strict_assert!(
            token.list == self.id,
            "element of list {:?} used with list {:?}",
            token.list,
            self.id
        );
        if token.list != self.id {
            trace!(list = ?self.id, owner = ?token.list, "reject element of another list");
            return None;
        }
        match self.slab.get(token.key) {
            Some(node) if token.key != ROOT && node.stamp == token.stamp => Some(token.key),
            _ => {
                trace!(list = ?self.id, key = token.key, stamp = token.stamp, "reject unlinked element");
                None
            }
        }
    }

    /// Build the handle for `key`, or `None` if `key` is the root.
    pub(crate) fn element(&self, key: usize) -> Option<ListElement<T>> {
        if key == ROOT {
            return None;
        }
        let node = &self.slab[key];
        let value = Arc::clone(node.value.as_ref()?);
        Some(ListElement {
            token: ElementToken {
                list: self.id,
                key,
                stamp: node.stamp,
            },
            value,
        })
    }

    fn link_after(&mut self, at: usize, value: T) -> ListElement<T> {
        self.stamp += 1;
        let stamp = self.stamp;
        let next = self.slab[at].next;
        let value = Arc::new(value);

        let key = self.slab.insert(Node {
            prev: at,
            next,
            stamp,
            value: Some(Arc::clone(&value)),
        });
        self.slab[at].next = key;
        self.slab[next].prev = key;
        self.len += 1;

        ListElement {
            token: ElementToken {
                list: self.id,
                key,
                stamp,
            },
            value,
        }
    }

    /// Unlink and free the node at `key`. Dropping the node releases the
    /// list's share of the value and its links.
    fn unlink(&mut self, key: usize) {
        let node = self.slab.remove(key);
        self.slab[node.prev].next = node.next;
        self.slab[node.next].prev = node.prev;
        self.len -= 1;
    }
}

impl<T> HandleList for LinkedList<T> {
    type Value = T;
    type Handle = ListElement<T>;

    fn front(&self) -> Option<ListElement<T>> {
        self.element(self.slab[ROOT].next)
    }

    fn back(&self) -> Option<ListElement<T>> {
        self.element(self.slab[ROOT].prev)
    }

    fn push_front(&mut self, value: T) -> ListElement<T> {
        self.link_after(ROOT, value)
    }

    fn push_back(&mut self, value: T) -> ListElement<T> {
        let last = self.slab[ROOT].prev;
        self.link_after(last, value)
    }

    fn remove(&mut self, elem: &ListElement<T>) -> bool {
        match self.resolve(&elem.token) {
            Some(key) => {
                self.unlink(key);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn next(&self, elem: &ListElement<T>) -> Option<ListElement<T>> {
        let key = self.resolve(&elem.token)?;
        self.element(self.slab[key].next)
    }

    fn prev(&self, elem: &ListElement<T>) -> Option<ListElement<T>> {
        let key = self.resolve(&elem.token)?;
        self.element(self.slab[key].prev)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = ListElement<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}
