use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{IntoIter, Iter, IterMut, Length, Node, NodePtr, ONE};
#[cfg(feature = "traits")]
use crate::collections::traits::{Queue, Stack};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// An ordered sequence of elements, linked in a single direction from front to back.
///
/// The front of the sequence owns the first node, and every node owns the node after it. The
/// sequence also keeps a pointer to its last node, so that elements can be added at either end in
/// constant time. This means an OrderedSequence can be used as a queue (push back, pop front), a
/// stack (push and pop at the back) or just as a list that is appended to and iterated over.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the OrderedSequence.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `replace` | `O(i)` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// Nodes only link forwards, so `pop_back` has to walk from the front to find the node that will
/// become the new back. A doubly linked list could pop from the back in `O(1)`, at the cost of an
/// extra pointer in every node. If the back is popped often, pushing and popping at the front is
/// the cheaper way to get a stack. The `Stack` implementation still treats the back as the top, so
/// that iterating a stack runs from the bottom to the top.
#[derive(PartialEq, Eq, Hash)]
pub struct OrderedSequence<T> {
    pub(crate) state: SeqState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(PartialEq, Eq, Hash, IsVariant)]
pub(crate) enum SeqState<T> {
    Empty,
    Full(SeqContents<T>),
}

use SeqState::*;

pub(crate) struct SeqContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> OrderedSequence<T> {
    /// Creates a new OrderedSequence with no elements.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::linked::OrderedSequence;
    /// let seq: OrderedSequence<u8> = OrderedSequence::new();
    /// assert!(seq.is_empty());
    /// ```
    pub const fn new() -> OrderedSequence<T> {
        OrderedSequence {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the OrderedSequence.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the OrderedSequence contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(SeqContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(SeqContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element, if it exists.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(SeqContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(SeqContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Adds the provided element to the front of the OrderedSequence.
    ///
    /// # Panics
    /// Panics if the length of the OrderedSequence would exceed [`usize::MAX`].
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = SeqState::single(value),
            Full(contents) => contents.push_front(value).throw(),
        }
    }

    /// Adds the provided element to the back of the OrderedSequence.
    ///
    /// # Panics
    /// Panics if the length of the OrderedSequence would exceed [`usize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::linked::OrderedSequence;
    /// let mut seq = OrderedSequence::new();
    /// seq.push_back(1);
    /// seq.push_back(2);
    /// assert_eq!(seq.back(), Some(&2));
    /// ```
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = SeqState::single(value),
            Full(contents) => contents.push_back(value).throw(),
        }
    }

    /// Removes the first element and returns it, or [`None`] if the OrderedSequence is empty.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::linked::OrderedSequence;
    /// let mut seq = OrderedSequence::from(["Hamilton", "Verstappen"]);
    /// assert_eq!(seq.pop_front(), Some("Hamilton"));
    /// assert_eq!(seq.pop_front(), Some("Verstappen"));
    /// assert_eq!(seq.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(SeqContents { len, head, .. }) => {
                // SAFETY: The head is unlinked below and never read again through this pointer.
                let node = unsafe { head.take_node() };

                match len.decrement() {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        *head = unsafe { node.next.unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element and returns it, or [`None`] if the OrderedSequence is empty.
    ///
    /// This walks the OrderedSequence to find the second last element, see the
    /// [type level documentation](OrderedSequence#time-complexity) for details.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(contents) => match contents.len.decrement() {
                Some(new_len) => {
                    let new_tail = contents.seek(new_len.last_index());
                    // SAFETY: The old tail is unlinked from new_tail and replaced as the tail
                    // pointer before anything else can read it.
                    let node = unsafe { contents.tail.take_node() };

                    *new_tail.next_mut() = None;
                    contents.tail = new_tail;
                    contents.len = new_len;

                    Some(node.value)
                },
                None => {
                    let tail = contents.tail;
                    self.state = Empty;
                    // SAFETY: The only element was also the head, which is now forgotten.
                    Some(unsafe { tail.take_node() }.value)
                },
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the OrderedSequence.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the OrderedSequence.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` so that it ends up at `index`, shifting all following elements back by one.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the OrderedSequence.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at `index`, returning an [`Err`] rather than panicking if `index` is greater
    /// than the length or the length would overflow.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len }.into());
        }

        match &mut self.state {
            Empty => self.state = SeqState::single(value),
            Full(contents) => match index {
                0 => contents.push_front(value)?,
                val if val == len => contents.push_back(value)?,
                val => {
                    let new_len = contents.len.checked_add(1)?;
                    let prev_node = contents.seek(val - 1);

                    let node = NodePtr::from_node(Node {
                        value,
                        next: *prev_node.next(),
                    });

                    *prev_node.next_mut() = Some(node);
                    contents.len = new_len;
                },
            },
        }
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the OrderedSequence.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] rather than panicking
    /// if `index` is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let last_index = self.checked_contents_for_index(index)?.len.last_index();

        if index == 0 {
            // SAFETY: The index was checked above, so the OrderedSequence isn't empty.
            Ok(unsafe { self.pop_front().unwrap_unchecked() })
        } else if index == last_index {
            // SAFETY: The index was checked above, so the OrderedSequence isn't empty.
            Ok(unsafe { self.pop_back().unwrap_unchecked() })
        } else {
            Ok(self.checked_contents_for_index_mut(index)?.remove_inner(index))
        }
    }

    /// Replaces the element at `index` with `new_value`, returning the old element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the OrderedSequence.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index` with `new_value`, returning an [`Err`] rather than panicking
    /// if `index` is out of bounds.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(
            self.checked_seek(index)?.value_mut(),
            new_value,
        ))
    }

    /// Moves all elements of `other` onto the back of this OrderedSequence, in order.
    ///
    /// # Panics
    /// Panics if the combined length would exceed [`usize::MAX`].
    pub fn append(&mut self, mut other: OrderedSequence<T>) {
        let Full(other_contents) = mem::replace(&mut other.state, Empty) else {
            return;
        };

        match &mut self.state {
            Empty => self.state = Full(other_contents),
            Full(self_contents) => {
                self_contents.len = self_contents.len
                    .checked_add(other_contents.len.get())
                    .throw();

                *self_contents.tail.next_mut() = Some(other_contents.head);
                self_contents.tail = other_contents.tail;
            },
        }
    }

    /// Drops every element, leaving the OrderedSequence empty.
    pub fn clear(&mut self) {
        *self = OrderedSequence::new();
    }

    /// Returns an iterator over references to each element, from front to back.
    ///
    /// Every call starts a new traversal from the front, and iterating never modifies the
    /// OrderedSequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::linked::OrderedSequence;
    /// let seq = OrderedSequence::from([1, 2, 3, 4]);
    /// assert!(seq.iter().eq(&[1, 2, 3, 4]));
    /// assert_eq!(seq.iter().sum::<i32>(), 10);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to each element, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> OrderedSequence<T> {
    /// Returns the index of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if element == item { return Some(index); }
        }
        None
    }

    /// Returns true if any element is equal to `item`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::linked::OrderedSequence;
    /// let seq = OrderedSequence::from(["Sneaker: Jordan 1", "Sneaker: Jordan 3"]);
    /// assert!(seq.contains(&"Sneaker: Jordan 3"));
    /// assert!(!seq.contains(&"Sneaker: Jordan 2"));
    /// ```
    pub fn contains(&self, item: &T) -> bool {
        for i in self.iter() {
            if i == item { return true; }
        }
        false
    }
}

impl<T> OrderedSequence<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        Ok(self.checked_contents_for_index(index)?.seek(index))
    }

    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&SeqContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    pub(crate) fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut SeqContents<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Walks the links from the front and checks that they agree with the length and tail.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(SeqContents { len, head, tail }) => {
                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    count += 1;
                    curr = *next;
                }
                assert_eq!(count, len.get(), "Length should match the number of linked nodes.");
                assert!(curr == *tail, "The last linked node should be the tail.");
            },
        }
    }
}

impl<T> SeqContents<T> {
    /// Returns the node at `index`, which must be less than `len`.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index == self.len.last_index() {
            return self.tail;
        }

        let mut node = self.head;
        for _ in 0..index {
            // SAFETY: index is less than the last index, so every node visited has a successor.
            node = unsafe { node.next().unwrap_unchecked() };
        }
        node
    }

    pub fn push_front(&mut self, value: T) -> Result<(), CapacityOverflow> {
        self.len = self.len.checked_add(1)?;

        self.head = NodePtr::from_node(Node {
            value,
            next: Some(self.head),
        });
        Ok(())
    }

    pub fn push_back(&mut self, value: T) -> Result<(), CapacityOverflow> {
        self.len = self.len.checked_add(1)?;

        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
        Ok(())
    }

    /// Unlinks the node at `index`, which must be neither the head nor the tail.
    pub fn remove_inner(&mut self, index: usize) -> T {
        let prev_node = self.seek(index - 1);

        // SAFETY: The node at index isn't the tail, so prev_node has a successor and it is
        // relinked past before anything else can read it.
        let node = unsafe { prev_node.next().unwrap_unchecked().take_node() };
        *prev_node.next_mut() = node.next;

        // SAFETY: Removing an inner node still leaves the head and the tail.
        self.len = unsafe { self.len.decrement().unwrap_unchecked() };

        node.value
    }

    pub fn wrap_one(value: T) -> SeqContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        SeqContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> SeqState<T> {
    pub fn single(value: T) -> SeqState<T> {
        Full(SeqContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(SeqContents { len, .. }) => len.get(),
        }
    }
}

// Shallow copies, used by the borrowed iterators to walk the nodes without owning them.
impl<T> Clone for SeqContents<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SeqContents<T> {}

impl<T> Clone for SeqState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SeqState<T> {}

impl<T: PartialEq> PartialEq for SeqContents<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len { return false; }
        let mut node_a = self.head;
        let mut node_b = other.head;

        loop {
            if node_a.value() != node_b.value() {
                break false;
            }
            match (node_a.next(), node_b.next()) {
                (Some(next_a), Some(next_b)) => {
                    node_a = *next_a;
                    node_b = *next_b;
                },
                // Both sides have the same length, so if they aren't both Some, they are both None.
                _ => break true,
            }
        }
    }
}

impl<T: Eq> Eq for SeqContents<T> {}

impl<T: Hash> Hash for SeqContents<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        let mut node = self.head;

        loop {
            node.value().hash(state);
            match node.next() {
                Some(next) => node = *next,
                None => break,
            }
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

// SAFETY: An OrderedSequence owns all of its nodes, so sending it sends every element with it.
unsafe impl<T: Send> Send for OrderedSequence<T> {}

// SAFETY: Shared references only ever give out shared references to elements.
unsafe impl<T: Sync> Sync for OrderedSequence<T> {}

impl<T> Index<usize> for OrderedSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for OrderedSequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for OrderedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = OrderedSequence::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for OrderedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedSequence<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone> Clone for OrderedSequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Default for OrderedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedSequence<T> {
    fn drop(&mut self) {
        if let Full(SeqContents { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                // SAFETY: Each node is visited once, and its successor is read before it is freed.
                let node = unsafe { ptr.take_node() };
                curr = node.next;
            }
        }
    }
}

impl<T> IntoIterator for OrderedSequence<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            seq: self,
        }
    }
}

#[cfg(feature = "traits")]
impl<T> Stack<T> for OrderedSequence<T> {
    fn push(&mut self, value: T) {
        self.push_back(value)
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    fn peek(&self) -> Option<&T> {
        self.back()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "traits")]
impl<T> Queue<T> for OrderedSequence<T> {
    fn enqueue(&mut self, value: T) {
        self.push_back(value)
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn peek_front(&self) -> Option<&T> {
        self.front()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: Debug> Debug for OrderedSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedSequence")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

/// Formats each element followed by an arrow, ending with `nil`: `1 -> 2 -> 3 -> nil`.
impl<T: Display> Display for OrderedSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        write!(f, "nil")
    }
}
