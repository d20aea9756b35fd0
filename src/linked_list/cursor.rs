use core::{fmt, ptr, ptr::NonNull};

use super::{
    list::SingleLinkedList,
    node::{ListNode, SingleLink},
};

/// Where a cursor stands in the chain.
pub(crate) enum Position<T> {
    /// The sentinel in front of the first element.
    BeforeBegin,
    Node(NonNull<ListNode<T>>),
    /// One past the last element.
    End,
}

impl<T> Position<T> {
    /// The position a `next` pointer leads to.
    #[inline]
    pub(crate) fn from_next(next: Option<NonNull<ListNode<T>>>) -> Self {
        next.map_or(Position::End, Position::Node)
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

/// Identity comparison of two positions.
///
/// Element positions match by node address and end positions always match.
/// Sentinels only match within the same list, since each list owns its own.
fn same_position<T>(
    lhs_list: &SingleLinkedList<T>,
    lhs: Position<T>,
    rhs_list: &SingleLinkedList<T>,
    rhs: Position<T>,
) -> bool {
    match (lhs, rhs) {
        (Position::BeforeBegin, Position::BeforeBegin) => ptr::eq(lhs_list, rhs_list),
        (Position::Node(a), Position::Node(b)) => a == b,
        (Position::End, Position::End) => true,
        _ => false,
    }
}

/// A read-only position in a [`SingleLinkedList`].
///
/// Cursors are plain values: copying one and advancing the copy leaves the
/// original where it was, so a traversal can be restarted at will.
pub struct Cursor<'a, T> {
    list: &'a SingleLinkedList<T>,
    position: Position<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a SingleLinkedList<T>, position: Position<T>) -> Self {
        Cursor { list, position }
    }

    pub fn is_before_begin(&self) -> bool {
        matches!(self.position, Position::BeforeBegin)
    }

    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }

    /// The element under the cursor, `None` on the sentinel or at the end.
    pub fn current(&self) -> Option<&'a T> {
        match self.position {
            Position::Node(node) => Some(unsafe { &(*node.as_ptr()).data }),
            Position::BeforeBegin | Position::End => None,
        }
    }

    /// The element right after the cursor without moving.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.link()?
            .next()
            .map(|node| unsafe { &(*node.as_ptr()).data })
    }

    /// Steps to the following position. At the end the cursor stays put.
    pub fn move_next(&mut self) {
        if let Some(link) = self.link() {
            self.position = Position::from_next(link.next());
        }
    }

    fn link(&self) -> Option<&'a SingleLink<T>> {
        match self.position {
            Position::BeforeBegin => Some(&self.list.head),
            Position::Node(node) => Some(unsafe { &(*node.as_ptr()).link }),
            Position::End => None,
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'b, T> PartialEq<Cursor<'b, T>> for Cursor<'_, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        same_position(self.list, self.position, other.list, other.position)
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        same_position(self.list, self.position, &*other.list, other.position)
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current()).finish()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

/// A position in a [`SingleLinkedList`] that can edit the chain after itself.
///
/// The cursor holds the exclusive borrow of the list, so no other position
/// can observe a node while it is being unlinked.
pub struct CursorMut<'a, T> {
    list: &'a mut SingleLinkedList<T>,
    position: Position<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut SingleLinkedList<T>, position: Position<T>) -> Self {
        CursorMut { list, position }
    }

    pub fn is_before_begin(&self) -> bool {
        matches!(self.position, Position::BeforeBegin)
    }

    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }

    pub fn current(&mut self) -> Option<&mut T> {
        match self.position {
            Position::Node(node) => Some(unsafe { &mut (*node.as_ptr()).data }),
            Position::BeforeBegin | Position::End => None,
        }
    }

    pub fn peek_next(&mut self) -> Option<&mut T> {
        self.link_mut()?
            .next()
            .map(|node| unsafe { &mut (*node.as_ptr()).data })
    }

    /// Steps to the following position. At the end the cursor stays put.
    pub fn move_next(&mut self) {
        if let Some(next) = self.link_mut().map(|link| link.next()) {
            self.position = Position::from_next(next);
        }
    }

    /// A read-only view of the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.list, self.position)
    }

    /// Links `value` right after the cursor and moves the cursor onto it.
    ///
    /// Inserting from [`before_begin_mut`] is the same as `push_front`, and
    /// repeated inserts keep their order since each one lands after the
    /// previous.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of the list.
    ///
    /// [`before_begin_mut`]: SingleLinkedList::before_begin_mut
    pub fn insert_after(&mut self, value: T) {
        let link = self
            .link_mut()
            .expect("cannot insert after the end of the list");
        let node = ListNode::alloc(value);
        link.attach(node);
        self.list.len += 1;
        self.position = Position::Node(node);
    }

    /// Unlinks the element right after the cursor and returns it.
    ///
    /// The cursor does not move, so [`peek_next`](Self::peek_next) now sees
    /// the element that followed the removed one. Returns `None` when the
    /// cursor is on the last element or at the end.
    pub fn erase_after(&mut self) -> Option<T> {
        let node = self.link_mut()?.detach_next()?;
        self.list.len -= 1;
        Some(unsafe { ListNode::into_data(node) })
    }

    fn link_mut(&mut self) -> Option<&mut SingleLink<T>> {
        match self.position {
            Position::BeforeBegin => Some(&mut self.list.head),
            Position::Node(node) => Some(unsafe { &mut (*node.as_ptr()).link }),
            Position::End => None,
        }
    }
}

impl<'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        same_position(&*self.list, self.position, other.list, other.position)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut")
            .field(&self.as_cursor().current())
            .finish()
    }
}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
