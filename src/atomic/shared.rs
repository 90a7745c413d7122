use alloc::sync::Arc;
use core::fmt;

use arc_swap::ArcSwapOption;

use super::traits::PublishCell;

/// An atomic slot holding an optional `Arc<T>`.
///
/// Readers get their own `Arc`, so a value stays alive for as long as any
/// reader holds it, even after a newer value has been stored. Backed by
/// [`ArcSwapOption`], whose loads do not take locks.
pub struct AtomicShared<T> {
    inner: ArcSwapOption<T>,
}

impl<T> AtomicShared<T> {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self {
            inner: ArcSwapOption::empty(),
        }
    }

    /// Creates a cell holding `value`.
    pub fn from_pointee(value: T) -> Self {
        Self {
            inner: ArcSwapOption::from_pointee(value),
        }
    }

    /// Load the current value.
    pub fn load(&self) -> Option<Arc<T>> {
        self.inner.load_full()
    }

    /// Replace the current value. The previous value is released once its
    /// last reader drops it.
    pub fn store(&self, value: Option<Arc<T>>) {
        self.inner.store(value);
    }
}

impl<T> PublishCell for AtomicShared<T> {
    type Ref = Arc<T>;

    fn load(&self) -> Option<Arc<T>> {
        AtomicShared::load(self)
    }

    fn store(&self, value: Option<Arc<T>>) {
        AtomicShared::store(self, value)
    }
}

impl<T> Default for AtomicShared<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicShared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicShared").field(&self.load()).finish()
    }
}
