use alloc::sync::Arc;
use core::fmt;
use core::ops::Deref;
use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT_LIST_ID: AtomicUsize = AtomicUsize::new(1);

/// Identifies one [`LinkedList`](super::LinkedList) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(usize);

impl ListId {
    pub(crate) fn new_unique() -> Self {
        Self(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The position part of an element handle.
///
/// A token is only ever compared against the list's arena, never followed.
/// The stamp is unique per list, so a token whose slot has been reused by a
/// later push no longer validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementToken {
    pub(crate) list: ListId,
    pub(crate) key: usize,
    pub(crate) stamp: u64,
}

impl ElementToken {
    /// The list this element was linked into.
    pub fn list(&self) -> ListId {
        self.list
    }
}

/// A handle to an element of a [`LinkedList`](super::LinkedList).
///
/// The handle shares ownership of the value with the list while the element
/// is linked. Once the element is removed the list drops its share, and the
/// value lives on only as long as the handle (and its clones) do.
///
/// The value is held in an `Arc`, so a handle is `Send` and `Sync` only when
/// `T: Send + Sync`.
pub struct ListElement<T> {
    pub(crate) token: ElementToken,
    pub(crate) value: Arc<T>,
}

impl<T> ListElement<T> {
    /// Get a reference to the value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Get a shared pointer to the value.
    pub fn shared(&self) -> Arc<T> {
        Arc::clone(&self.value)
    }

    /// Get the list id, slab key and stamp this handle was issued with.
    pub fn token(&self) -> ElementToken {
        self.token
    }

    /// Take the value back out of the handle.
    ///
    /// Succeeds only when no list and no other handle still shares the value,
    /// e.g. after the element was removed and the handle was not cloned.
    /// Otherwise the handle is returned unchanged.
    pub fn try_into_inner(self) -> Result<T, Self> {
        let token = self.token;
        Arc::try_unwrap(self.value).map_err(|value| Self { token, value })
    }
}

impl<T> Clone for ListElement<T> {
    fn clone(&self) -> Self {
        Self {
            token: self.token,
            value: Arc::clone(&self.value),
        }
    }
}

impl<T> Deref for ListElement<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> PartialEq for ListElement<T> {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl<T> Eq for ListElement<T> {}

impl<T: fmt::Debug> fmt::Debug for ListElement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListElement")
            .field("token", &self.token)
            .field("value", &self.value)
            .finish()
    }
}
