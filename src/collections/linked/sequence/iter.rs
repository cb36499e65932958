use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use SeqState::*;

use super::{OrderedSequence, SeqContents, SeqState};

pub struct IntoIter<T> {
    // There is no point rewriting all of this when the iterator can just hold the sequence and
    // call pop_front.
    pub(crate) seq: OrderedSequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.seq.len()
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.seq).finish()
    }
}

impl<'a, T> IntoIterator for &'a mut OrderedSequence<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            state: self.state,
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    // A shallow copy of the sequence's state. The nodes are never modified through it, len just
    // tracks the number of items left to yield.
    pub(crate) state: SeqState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(SeqContents { len, head, .. }) => {
                let value = head.value_mut();

                match len.decrement() {
                    Some(new_len) => {
                        // SAFETY: More than one item was left, so the current node has a
                        // successor.
                        *head = unsafe { head.next().unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSequence<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            state: self.state,
            _phantom: PhantomData,
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) state: SeqState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(SeqContents { len, head, .. }) => {
                let value = head.value();

                match len.decrement() {
                    Some(new_len) => {
                        // SAFETY: More than one item was left, so the current node has a
                        // successor.
                        *head = unsafe { head.next().unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            state: self.state,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T: Debug> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
