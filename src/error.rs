//! Error types for the set containers.
//!
//! Every failure in this crate is synchronous and fail-fast: the operation
//! checks its arguments before touching the container, so an `Err` always
//! leaves the container exactly as it was.

use std::fmt;

/// The reason an argument was rejected with [`SetError::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgumentKind {
    /// An absent order function was supplied.
    MissingOrder,
    /// A sub-range boundary is not an element of the set.
    BoundaryNotMember,
    /// The lower sub-range boundary sorts after the upper one.
    InvertedRange,
}

impl fmt::Display for InvalidArgumentKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOrder => write!(formatter, "order function cannot be absent"),
            Self::BoundaryNotMember => write!(formatter, "boundary is not an element of this set"),
            Self::InvertedRange => write!(formatter, "lower boundary sorts after upper boundary"),
        }
    }
}

/// Errors raised by [`SortedArraySet`](crate::collections::SortedArraySet)
/// and [`LinkedPointerSet`](crate::collections::LinkedPointerSet).
///
/// # Examples
///
/// ```rust
/// use setforge::SetError;
///
/// let error = SetError::OutOfRange { index: 7, len: 3 };
/// assert_eq!(format!("{error}"), "index 7 is out of range [0, 3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// A capacity or growth increment of zero was supplied.
    Configuration {
        /// The name of the rejected parameter.
        parameter: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// Positional access outside `[0, len)`.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The number of elements at the time of the call.
        len: usize,
    },
    /// An argument that is structurally valid but not acceptable here.
    InvalidArgument(InvalidArgumentKind),
    /// Removal through a cursor that has no current element.
    IteratorState,
}

impl fmt::Display for SetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { parameter, value } => {
                write!(formatter, "{parameter} must be > 0, got {value}")
            }
            Self::OutOfRange { index, len } => {
                write!(formatter, "index {index} is out of range [0, {len})")
            }
            Self::InvalidArgument(kind) => write!(formatter, "invalid argument: {kind}"),
            Self::IteratorState => {
                write!(formatter, "the cursor has no current element to remove")
            }
        }
    }
}

impl std::error::Error for SetError {}

impl SetError {
    pub(crate) const fn check_positive(
        parameter: &'static str,
        value: usize,
    ) -> Result<usize, Self> {
        if value == 0 {
            Err(Self::Configuration { parameter, value })
        } else {
            Ok(value)
        }
    }

    pub(crate) const fn check_index(index: usize, len: usize) -> Result<usize, Self> {
        if index < len {
            Ok(index)
        } else {
            Err(Self::OutOfRange { index, len })
        }
    }
}
