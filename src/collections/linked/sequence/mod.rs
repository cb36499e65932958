mod iter;
mod length;
mod node;
mod ordered_sequence;
mod tests;

pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
pub use ordered_sequence::*;
