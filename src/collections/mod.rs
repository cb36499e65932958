//! General-purpose collection types.
//!
//! # Purpose
//! These types exist to learn about the data structures themselves, but also about pointers,
//! ownership and iterators.

#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
