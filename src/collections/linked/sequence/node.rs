use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with Box and then leaked into a NonNull, so that a node can be moved
// back out of the heap by value with take_node. Each node is owned by exactly one link: the `next`
// of the node before it, or the sequence itself for the head. The sequence's tail pointer is the
// only other handle to a node and never frees it.

pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back out of its allocation and frees it.
    ///
    /// # Safety
    /// The pointer must not be used again after this call, and neither may any copies of it.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by Box::leak in from_node and the caller guarantees that
        // it hasn't already been freed.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodePtr is only reachable through a live sequence, which ties the returned
        // lifetime to a borrow of itself.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for value, with a mutable borrow of the owning sequence.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Only called while the owning sequence is mutably borrowed.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
