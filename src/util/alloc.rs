//! Test helpers for observing when values are dropped.
#![allow(unused)]

use std::cell::Cell;
use std::rc::Rc;

/// A value that increments a shared counter when dropped. Clones share the counter, so a single
/// counter can track every element handed to a collection.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    pub id: usize,
    drops: Rc<Cell<usize>>,
}

impl CountedDrop {
    /// Creates a new counter, starting at zero drops.
    pub fn counter() -> Rc<Cell<usize>> {
        Rc::new(Cell::new(0))
    }

    /// Creates a value which reports its drop to `drops`.
    pub fn new(id: usize, drops: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
