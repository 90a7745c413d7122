/// A doubly linked list that hands out stable element handles.
///
/// Absence is always reported as `None`, and removal tolerates handles that
/// are no longer (or never were) members of the list.
pub trait HandleList {
    /// The type of value stored in each element.
    type Value;

    /// The handle returned for each linked element.
    type Handle: Clone;

    /// Get the first element, or `None` if the list is empty.
    fn front(&self) -> Option<Self::Handle>;

    /// Get the last element, or `None` if the list is empty.
    fn back(&self) -> Option<Self::Handle>;

    /// Link a new element holding `value` at the front of the list.
    fn push_front(&mut self, value: Self::Value) -> Self::Handle;

    /// Link a new element holding `value` at the back of the list.
    fn push_back(&mut self, value: Self::Value) -> Self::Handle;

    /// Unlink the first element and return its handle.
    fn pop_front(&mut self) -> Option<Self::Handle> {
        let front = self.front()?;
        self.remove(&front);
        Some(front)
    }

    /// Unlink the last element and return its handle.
    fn pop_back(&mut self) -> Option<Self::Handle> {
        let back = self.back()?;
        self.remove(&back);
        Some(back)
    }

    /// Unlink `elem` from the list.
    ///
    /// Returns `true` if the element was a member and has been unlinked.
    /// Calling this again with the same handle is a no-op returning `false`.
    fn remove(&mut self, elem: &Self::Handle) -> bool;

    /// Get the number of linked elements.
    fn len(&self) -> usize;

    /// Check if the list has no linked elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the element after `elem`.
    ///
    /// Returns `None` when `elem` is the last element or is not a member.
    fn next(&self, elem: &Self::Handle) -> Option<Self::Handle>;

    /// Get the element before `elem`.
    ///
    /// Returns `None` when `elem` is the first element or is not a member.
    fn prev(&self, elem: &Self::Handle) -> Option<Self::Handle>;
}
