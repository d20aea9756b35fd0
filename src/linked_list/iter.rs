use core::{fmt, iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{
    list::SingleLinkedList,
    node::{ListNode, SingleLink},
};

/// An iterator over shared references to the elements of a list.
pub struct Iter<'a, T> {
    next: Option<NonNull<ListNode<T>>>,
    len: usize,
    _marker: PhantomData<&'a ListNode<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: &'a SingleLink<T>, len: usize) -> Self {
        Iter {
            next: head.next(),
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| unsafe {
            let node = &*node.as_ptr();
            self.next = node.link.next();
            self.len -= 1;
            &node.data
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// An iterator over mutable references to the elements of a list.
pub struct IterMut<'a, T> {
    next: Option<NonNull<ListNode<T>>>,
    len: usize,
    _marker: PhantomData<&'a mut ListNode<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: &'a mut SingleLink<T>, len: usize) -> Self {
        IterMut {
            next: head.next(),
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.next.map(|node| unsafe {
            let node = &mut *node.as_ptr();
            self.next = node.link.next();
            self.len -= 1;
            &mut node.data
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator that pops elements off the front of a list.
pub struct IntoIter<T> {
    list: SingleLinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: SingleLinkedList<T>) -> Self {
        IntoIter { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}
