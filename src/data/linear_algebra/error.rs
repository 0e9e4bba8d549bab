//! # Errors of the linear algebra containers
//!
//! Every fallible operation on a vector or matrix reports one of these. They are contract
//! violations by the caller: nothing is retried and no operand is changed when one is returned.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A `LinearAlgebraError` is returned when a container operation can't be carried out.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LinearAlgebraError {
    /// A container was requested with a size (or start index) it can't have.
    ///
    /// Only returned at construction.
    InvalidSize {
        /// The size that was asked for.
        requested: usize,
        /// The largest size that would have been accepted.
        maximum: usize,
    },
    /// An index fell outside of the valid offsets `0..len` of a container.
    OutOfRange {
        /// The index that was used.
        index: usize,
        /// Length of the container at the time of access.
        len: usize,
    },
    /// The operands of a binary operation differ in size.
    SizeMismatch {
        /// Size of the left operand (or expected size).
        left: usize,
        /// Size of the right operand (or actual size).
        right: usize,
    },
}

impl Display for LinearAlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearAlgebraError::InvalidSize { requested, maximum } => {
                write!(f, "invalid size {}, should be at most {}", requested, maximum)
            },
            LinearAlgebraError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            },
            LinearAlgebraError::SizeMismatch { left, right } => {
                write!(f, "size mismatch: {} and {}", left, right)
            },
        }
    }
}

impl Error for LinearAlgebraError {}
