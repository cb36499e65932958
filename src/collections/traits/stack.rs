use std::marker::PhantomData;

/// A last-in-first-out collection. The most recently pushed element is always the next one popped.
///
/// # Examples
/// ```
/// # use sequence_lib::collections::linked::OrderedSequence;
/// # use sequence_lib::collections::traits::Stack;
/// let mut garage = OrderedSequence::new();
/// garage.push("Ferrari");
/// garage.push("Mercedes");
/// assert_eq!(Stack::peek(&garage), Some(&"Mercedes"));
/// assert_eq!(Stack::pop(&mut garage), Some("Mercedes"));
/// assert_eq!(Stack::pop(&mut garage), Some("Ferrari"));
/// assert_eq!(Stack::pop(&mut garage), None);
/// ```
pub trait Stack<T> {
    /// Places `value` on top of the stack.
    fn push(&mut self, value: T);

    /// Removes the top element and returns it, or [`None`] if the stack is empty.
    fn pop(&mut self) -> Option<T>;

    /// Returns a reference to the top element without removing it.
    fn peek(&self) -> Option<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pops every element, yielding them from the top of the stack to the bottom.
    fn drain_top(&mut self) -> DrainTop<'_, Self, T> where Self: Sized {
        DrainTop {
            stack: self,
            _phantom: PhantomData,
        }
    }
}

/// Iterator returned by [`Stack::drain_top`].
pub struct DrainTop<'a, S: Stack<T>, T> {
    stack: &'a mut S,
    _phantom: PhantomData<T>,
}

impl<'a, S: Stack<T>, T> Iterator for DrainTop<'a, S, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl<'a, S: Stack<T>, T> ExactSizeIterator for DrainTop<'a, S, T> {}
