//! # Traits for elements of the containers
//!
//! Storage, indexing and comparison work for any element type. Arithmetic needs a few operators
//! and an additive identity to initialise storage with; those are collected in `Element`.
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

/// Element of a `IndexedVector` or `TriangularMatrix` that supports arithmetic.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Element:
    Zero + // Additive identity, used for fresh storage
    Add<Self, Output=Self> +
    Sub<Self, Output=Self> +
    Mul<Self, Output=Self> +
    // Practicalities
    PartialEq +
    Clone +
    Display +
    Debug +
{
}
impl<T> Element for T
where
    T: Zero + Add<T, Output=T> + Sub<T, Output=T> + Mul<T, Output=T> + PartialEq + Clone + Display + Debug,
{
}
