//! Linked collection types. Currently just [`OrderedSequence`], a singly linked list with a cached
//! tail.

pub mod sequence;

#[doc(inline)]
pub use sequence::OrderedSequence;
#[doc(inline)]
pub use sequence::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
