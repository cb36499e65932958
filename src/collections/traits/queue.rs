use std::marker::PhantomData;

/// A first-in-first-out collection. Elements are dequeued in the same order that they were
/// enqueued.
///
/// # Examples
/// ```
/// # use sequence_lib::collections::linked::OrderedSequence;
/// # use sequence_lib::collections::traits::Queue;
/// let mut pit_lane = OrderedSequence::new();
/// pit_lane.enqueue("Hamilton");
/// pit_lane.enqueue("Verstappen");
/// assert_eq!(pit_lane.peek_front(), Some(&"Hamilton"));
/// assert_eq!(pit_lane.dequeue(), Some("Hamilton"));
/// assert_eq!(pit_lane.dequeue(), Some("Verstappen"));
/// assert_eq!(pit_lane.dequeue(), None);
/// ```
pub trait Queue<T> {
    /// Adds `value` to the back of the queue.
    fn enqueue(&mut self, value: T);

    /// Removes the element at the front of the queue and returns it, or [`None`] if the queue is
    /// empty.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns a reference to the element that will be dequeued next.
    fn peek_front(&self) -> Option<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dequeues every element, in order.
    fn drain_front(&mut self) -> DrainFront<'_, Self, T> where Self: Sized {
        DrainFront {
            queue: self,
            _phantom: PhantomData,
        }
    }
}

/// Iterator returned by [`Queue::drain_front`].
pub struct DrainFront<'a, Q: Queue<T>, T> {
    queue: &'a mut Q,
    _phantom: PhantomData<T>,
}

impl<'a, Q: Queue<T>, T> Iterator for DrainFront<'a, Q, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<'a, Q: Queue<T>, T> ExactSizeIterator for DrainFront<'a, Q, T> {}
