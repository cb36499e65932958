//! A small collections crate built around one structure: [`OrderedSequence`], a singly linked
//! sequence which can be used as a queue, a stack or a plain append-only list.
//!
//! [`OrderedSequence`]: collections::linked::OrderedSequence
//!
//! # Purpose
//! This crate is a learning exercise, not intended for production use. It is about ownership: every
//! node in a sequence belongs to exactly one link, and unlinking a node hands its value back to
//! the caller and frees the node in the same step. There are no dangling links to worry about once
//! a node is gone.
//!
//! # Error Handling
//! Taking an element out of an empty collection isn't an error, it is just an absent value, so
//! methods like [`pop_front`](collections::linked::OrderedSequence::pop_front) return an
//! [`Option`]. Nothing here returns a placeholder value to mean "nothing".
//!
//! Methods which take an index come in pairs. The `try_` form returns a [`Result`] with a
//! strongly typed error (see [`IndexOutOfBounds`](collections::linked::IndexOutOfBounds)) and the
//! plain form panics with that error's message. Pushing only fails if the length would overflow a
//! `usize`, so it panics rather than making every caller handle a [`Result`].
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
