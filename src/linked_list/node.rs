use alloc::boxed::Box;
use core::ptr::NonNull;

/// The "next" slot of a singly linked list.
///
/// Every list embeds one as its before-begin sentinel and every element node
/// embeds one, so linking after the sentinel and linking after an element are
/// the same operation.
pub(crate) struct SingleLink<T> {
    next: Option<NonNull<ListNode<T>>>,
}

impl<T> SingleLink<T> {
    pub(crate) const fn new() -> Self {
        Self { next: None }
    }

    #[inline]
    pub(crate) fn next(&self) -> Option<NonNull<ListNode<T>>> {
        self.next
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Option<NonNull<ListNode<T>>>) {
        self.next = next;
    }

    /// Link a detached node directly after this link.
    #[inline]
    pub(crate) fn attach(&mut self, node: NonNull<ListNode<T>>) {
        unsafe {
            let node_ref = &mut *node.as_ptr();
            debug_assert!(node_ref.link.next.is_none(), "node is already linked");
            node_ref.link.set_next(self.next);
        }
        self.next = Some(node);
    }

    /// Unlink the node directly after this link, leaving it detached.
    #[inline]
    pub(crate) fn detach_next(&mut self) -> Option<NonNull<ListNode<T>>> {
        self.next.inspect(|next| unsafe {
            let next_ref = &mut *next.as_ptr();
            self.next = next_ref.link.next.take();
        })
    }
}

/// A heap-allocated list element.
pub(crate) struct ListNode<T> {
    pub(crate) link: SingleLink<T>,
    pub(crate) data: T,
}

impl<T> ListNode<T> {
    /// Allocate a detached node holding `data`.
    pub(crate) fn alloc(data: T) -> NonNull<Self> {
        let node = Box::new(ListNode {
            link: SingleLink::new(),
            data,
        });
        NonNull::from(Box::leak(node))
    }

    /// Free a detached node and hand back its data.
    ///
    /// # Safety
    ///
    /// `node` must come from [`ListNode::alloc`], must be detached and must
    /// not be used again afterwards.
    pub(crate) unsafe fn into_data(node: NonNull<Self>) -> T {
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        node.data
    }
}
