//! Traits describing the order in which a collection gives its elements back.

pub mod queue;
pub mod stack;

#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
