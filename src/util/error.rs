use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The provided position is outside of the range accepted by the operation, or is the end
/// position passed to an operation that requires an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPosition;

impl Display for InvalidPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Position is not valid for this collection!")
    }
}

impl Error for InvalidPosition {}

/// The operation requires at least one element, but the collection is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty collection!")
    }
}

impl Error for EmptyCollection {}

/// Any error produced by a [`PositionalSequence`](crate::collections::traits::PositionalSequence)
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum SequenceError {
    /// See [`InvalidPosition`].
    InvalidPosition(InvalidPosition),
    /// See [`EmptyCollection`].
    EmptyCollection(EmptyCollection),
}
