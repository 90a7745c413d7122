use core::iter::FusedIterator;

use super::element::ListElement;
use super::list::{LinkedList, ROOT};
use super::traits::HandleList;

/// Iterator over the handles of a [`LinkedList`], front to back.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Self {
        let root = list.node(ROOT);
        Self {
            list,
            front: root.next,
            back: root.prev,
            remaining: list.len(),
        }
    }

    fn next_key(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front;
        self.front = self.list.node(key).next;
        self.remaining -= 1;
        Some(key)
    }

    fn next_back_key(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.back;
        self.back = self.list.node(key).prev;
        self.remaining -= 1;
        Some(key)
    }
}

impl<T> Iterator for Iter<'_, T> {
    type Item = ListElement<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next_key()?;
        self.list.element(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.next_back_key()?;
        self.list.element(key)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over the values of a [`LinkedList`], front to back.
pub struct Values<'a, T> {
    inner: Iter<'a, T>,
}

impl<'a, T> Values<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            inner: Iter::new(list),
        }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.inner.next_key()?;
        let list = self.inner.list;
        list.node(key).value.as_deref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Values<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.inner.next_back_key()?;
        let list = self.inner.list;
        list.node(key).value.as_deref()
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}

impl<T> FusedIterator for Values<'_, T> {}
