//! Positional collections: sequences addressed through opaque positions, the generic algorithms
//! written against them, and the hash dictionaries built on top.
//!
//! # Purpose
//! The core of this crate is [`PositionalSequence`](collections::traits::PositionalSequence), an
//! abstract contract for an ordered container where every element is reached through a position.
//! Two structurally different realizations satisfy it:
//! - [`ArraySequence`](collections::contiguous::ArraySequence), a growable contiguous buffer where
//!   positions are 1-based indices.
//! - [`LinkedSequence`](collections::linked::LinkedSequence), a doubly linked chain of nodes where
//!   positions are node handles.
//!
//! Everything else is written once against the contract and runs unmodified on both: linear
//! search, reversal, the palindrome check and both sorts in
//! [`SequenceAlgorithms`](collections::traits::SequenceAlgorithms), as well as the chained buckets of
//! [`OpenHashDictionary`](collections::hash::OpenHashDictionary).
//!
//! # Method
//! Positions are plain `Copy` values rather than borrowing cursors, so they can be stored, compared
//! and handed back to the sequence at any time. The sequence validates every position it receives,
//! which keeps the API free of `unsafe` at the cost of a check per call.
//!
//! # Error Handling
//! Errors are strongly typed, using enums for static dispatch with structs (mostly ZSTs) that
//! implement [`Error`](std::error::Error). Each fallible method returns the narrowest error it can
//! produce, e.g. [`InvalidPosition`](collections::traits::InvalidPosition) for positional access or
//! [`DictionaryError`](collections::hash::DictionaryError) for dictionary operations.
//!
//! A failed operation never leaves a collection partially modified. Where the crate itself
//! guarantees that an error can't occur (such as the algorithms driving a correct realization),
//! methods panic with the error's message instead of returning it, and document this under
//! `# Panics`.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. Diagnostics (buffer reallocation, table growth) are emitted through
//! [`tracing`] events, so they cost nothing unless a subscriber is installed.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
