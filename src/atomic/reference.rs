use core::fmt;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};
use core::sync::atomic::{AtomicPtr, Ordering};

use crossbeam_utils::CachePadded;

use super::traits::PublishCell;

/// An atomic slot holding an optional `&'a T`.
///
/// The slot is one pointer-sized word, padded to its own cache line so hot
/// cells placed next to each other do not false-share. Loads are `Acquire`
/// and stores are `Release`.
///
/// # Examples
///
/// ```
/// use mola_chain::atomic::AtomicRef;
///
/// let config = String::from("v1");
/// let cell = AtomicRef::new();
/// assert!(cell.load().is_none());
///
/// cell.store(Some(&config));
/// assert_eq!(cell.load().map(String::as_str), Some("v1"));
/// ```
///
/// The cell is invariant in `'a`, so a cell of long-lived references cannot
/// be viewed as a cell of shorter ones and handed a reference that dies first:
///
/// ```compile_fail
/// use mola_chain::atomic::AtomicRef;
///
/// fn shorten<'s>(cell: &'s AtomicRef<'static, u64>) -> &'s AtomicRef<'s, u64> {
///     cell
/// }
///
/// static CELL: AtomicRef<'static, u64> = AtomicRef::new();
/// {
///     let local = 7u64;
///     shorten(&CELL).store(Some(&local));
/// }
/// let _escaped: &'static u64 = CELL.load().unwrap();
/// ```
pub struct AtomicRef<'a, T> {
    ptr: CachePadded<AtomicPtr<T>>,
    _marker: PhantomData<fn(&'a T) -> &'a T>,
}

impl<'a, T> AtomicRef<'a, T> {
    /// Creates an empty cell.
    pub const fn new() -> Self {
        Self {
            ptr: CachePadded::new(AtomicPtr::new(ptr::null_mut())),
            _marker: PhantomData,
        }
    }

    /// Creates a cell already holding `value`.
    pub const fn from_ref(value: &'a T) -> Self {
        Self {
            ptr: CachePadded::new(AtomicPtr::new(value as *const T as *mut T)),
            _marker: PhantomData,
        }
    }

    /// Load the current reference.
    pub fn load(&self) -> Option<&'a T> {
        let ptr = NonNull::new(self.ptr.load(Ordering::Acquire))?;
        // Every non-null pointer in the slot came from a `&'a T` passed to
        // `store` or `from_ref`. The cell is invariant in `'a`, so no caller
        // can have stored a reference that lives shorter than `'a`.
        Some(unsafe { ptr.as_ref() })
    }

    /// Replace the current reference with `value`.
    pub fn store(&self, value: Option<&'a T>) {
        let ptr = value.map_or(ptr::null_mut(), |value| NonNull::from(value).as_ptr());
        self.ptr.store(ptr, Ordering::Release);
    }
}

impl<'a, T> PublishCell for AtomicRef<'a, T> {
    type Ref = &'a T;

    fn load(&self) -> Option<&'a T> {
        AtomicRef::load(self)
    }

    fn store(&self, value: Option<&'a T>) {
        AtomicRef::store(self, value)
    }
}

impl<T> Default for AtomicRef<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicRef").field(&self.load()).finish()
    }
}

// The marker is `Send + Sync` for any `T`; these impls add the `T: Sync`
// bound that sharing `&'a T` across threads requires.
unsafe impl<T: Sync> Send for AtomicRef<'_, T> {}
unsafe impl<T: Sync> Sync for AtomicRef<'_, T> {}
