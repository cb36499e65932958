use derive_more::{Display, Error, From, IsVariant};

/// An index was outside of the valid range for a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

/// The length of a collection would have exceeded [`usize::MAX`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Error for operations which both take an index and grow the collection.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrCapOverflow {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}
