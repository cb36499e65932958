use std::num::NonZero;

use crate::util::error::CapacityOverflow;

/// The length of a non-empty sequence. Empty sequences are represented by their state instead, so
/// this can never be zero.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(NonZero<usize>);

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);

impl Length {
    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn checked_add(self, other: usize) -> Result<Length, CapacityOverflow> {
        match self.0.checked_add(other) {
            Some(res) => Ok(Length(res)),
            None => Err(CapacityOverflow),
        }
    }

    /// Returns the length after removing one element, or None if no elements would remain.
    pub const fn decrement(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    pub const fn last_index(self) -> usize {
        self.0.get() - 1
    }
}
