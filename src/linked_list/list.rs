use alloc::boxed::Box;
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
};

use super::{
    cursor::{Cursor, CursorMut, Position},
    iter::{IntoIter, Iter, IterMut},
    node::{ListNode, SingleLink},
};

/// A singly linked list with a before-begin sentinel.
///
/// The list owns every node. Positions handed out by [`before_begin`],
/// [`begin`] and [`end`] borrow the list, so they can never outlive a node
/// they refer to.
///
/// [`before_begin`]: SingleLinkedList::before_begin
/// [`begin`]: SingleLinkedList::begin
/// [`end`]: SingleLinkedList::end
pub struct SingleLinkedList<T> {
    pub(super) head: SingleLink<T>,
    pub(super) len: usize,
    _marker: PhantomData<Box<ListNode<T>>>,
}

impl<T> SingleLinkedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        SingleLinkedList {
            head: SingleLink::new(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.head
            .next()
            .map(|node| unsafe { &(*node.as_ptr()).data })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head
            .next()
            .map(|node| unsafe { &mut (*node.as_ptr()).data })
    }

    /// Links `value` in front of the current first element.
    pub fn push_front(&mut self, value: T) {
        self.head.attach(ListNode::alloc(value));
        self.len += 1;
    }

    /// Appends `value` after the last element.
    ///
    /// This walks the chain from the sentinel to the tail, so it costs O(n).
    pub fn push_back(&mut self, value: T) {
        let node = ListNode::alloc(value);
        let mut tail = &mut self.head;
        while let Some(next) = tail.next() {
            tail = unsafe { &mut (*next.as_ptr()).link };
        }
        tail.attach(node);
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.detach_next().map(|node| {
            self.len -= 1;
            unsafe { ListNode::into_data(node) }
        })
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        debug_assert!(self.head.next().is_none());
    }

    /// Exchanges the contents of two lists without touching any element.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.len, &mut other.len);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head, self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.head, self.len)
    }

    /// Position of the sentinel, in front of the first element.
    ///
    /// It never refers to an element, but it is a valid anchor for
    /// [`Cursor::peek_next`] and, through [`before_begin_mut`], for insertion
    /// at the head.
    ///
    /// [`before_begin_mut`]: SingleLinkedList::before_begin_mut
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::BeforeBegin)
    }

    /// Position of the first element, equal to [`end`](Self::end) when empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::from_next(self.head.next()))
    }

    /// Position one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::End)
    }

    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, Position::BeforeBegin)
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let position = Position::from_next(self.head.next());
        CursorMut::new(self, position)
    }

    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, Position::End)
    }

    /// Cursor on the last element, or on the sentinel when empty.
    fn last_mut(&mut self) -> CursorMut<'_, T> {
        let mut cursor = self.before_begin_mut();
        while cursor.peek_next().is_some() {
            cursor.move_next();
        }
        cursor
    }
}

/// Exchanges the contents of two lists.
pub fn swap<T>(lhs: &mut SingleLinkedList<T>, rhs: &mut SingleLinkedList<T>) {
    lhs.swap(rhs);
}

impl<T> Default for SingleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SingleLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SingleLinkedList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        let mut tail = copy.before_begin_mut();
        for value in self {
            tail.insert_after(value.clone());
        }
        copy
    }

    /// Builds the copy on the side and swaps it in, so a panicking
    /// `T::clone` leaves `self` as it was.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Extend<T> for SingleLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.last_mut();
        for value in iter {
            tail.insert_after(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SingleLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for SingleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for SingleLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_iter(values)
    }
}

impl<T> IntoIterator for SingleLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SingleLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SingleLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for SingleLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SingleLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for SingleLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for SingleLinkedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for SingleLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in self {
            value.hash(state);
        }
        self.len.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for SingleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

unsafe impl<T: Send> Send for SingleLinkedList<T> {}
unsafe impl<T: Sync> Sync for SingleLinkedList<T> {}
