//! # Arithmetic on indexed vectors
//!
//! Scalar operations can't fail. Operations between two vectors check the lengths first, and so
//! return a `Result` as their output. Neither kind changes a borrowed operand.
use std::ops::{Add, Mul, Sub};

use itertools::Itertools;

use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::IndexedVector;

impl<T: Element> IndexedVector<T> {
    /// Apply `operation` to every value and a scalar, producing a new vector.
    fn map_scalar<O: Fn(T, T) -> T>(&self, scalar: &T, operation: O) -> Self {
        Self {
            data: self.data.iter()
                .map(|value| operation(value.clone(), scalar.clone()))
                .collect(),
            start_index: self.start_index,
        }
    }

    /// Same as `map_scalar`, but reusing the storage of `self`.
    fn into_map_scalar<O: Fn(T, T) -> T>(self, scalar: T, operation: O) -> Self {
        Self {
            data: self.data.into_iter()
                .map(|value| operation(value, scalar.clone()))
                .collect(),
            start_index: self.start_index,
        }
    }

    /// Combine two vectors of equal length element by element.
    ///
    /// The result is addressed like `self`.
    fn zip_map<O: Fn(T, T) -> T>(&self, other: &Self, operation: O) -> Result<Self, LinearAlgebraError> {
        self.check_same_len(other)?;

        Ok(Self {
            data: self.data.iter().zip_eq(other.data.iter())
                .map(|(left, right)| operation(left.clone(), right.clone()))
                .collect(),
            start_index: self.start_index,
        })
    }

    /// Compute the inner product with another vector.
    ///
    /// # Return value
    ///
    /// The sum of the products of the values at equal offsets, zero for empty vectors. A
    /// `SizeMismatch` if the lengths differ.
    pub fn inner_product(&self, other: &Self) -> Result<T, LinearAlgebraError> {
        self.check_same_len(other)?;

        Ok(self.data.iter().zip_eq(other.data.iter())
            .fold(T::zero(), |total, (left, right)| total + left.clone() * right.clone()))
    }
}

impl<T: Element> Add<T> for &IndexedVector<T> {
    type Output = IndexedVector<T>;

    fn add(self, rhs: T) -> Self::Output {
        self.map_scalar(&rhs, |value, scalar| value + scalar)
    }
}

impl<T: Element> Sub<T> for &IndexedVector<T> {
    type Output = IndexedVector<T>;

    fn sub(self, rhs: T) -> Self::Output {
        self.map_scalar(&rhs, |value, scalar| value - scalar)
    }
}

impl<T: Element> Mul<T> for &IndexedVector<T> {
    type Output = IndexedVector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map_scalar(&rhs, |value, scalar| value * scalar)
    }
}

impl<T: Element> Add<T> for IndexedVector<T> {
    type Output = IndexedVector<T>;

    fn add(self, rhs: T) -> Self::Output {
        self.into_map_scalar(rhs, |value, scalar| value + scalar)
    }
}

impl<T: Element> Sub<T> for IndexedVector<T> {
    type Output = IndexedVector<T>;

    fn sub(self, rhs: T) -> Self::Output {
        self.into_map_scalar(rhs, |value, scalar| value - scalar)
    }
}

impl<T: Element> Mul<T> for IndexedVector<T> {
    type Output = IndexedVector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.into_map_scalar(rhs, |value, scalar| value * scalar)
    }
}

impl<T: Element> Add<&IndexedVector<T>> for &IndexedVector<T> {
    type Output = Result<IndexedVector<T>, LinearAlgebraError>;

    fn add(self, rhs: &IndexedVector<T>) -> Self::Output {
        self.zip_map(rhs, |left, right| left + right)
    }
}

impl<T: Element> Sub<&IndexedVector<T>> for &IndexedVector<T> {
    type Output = Result<IndexedVector<T>, LinearAlgebraError>;

    fn sub(self, rhs: &IndexedVector<T>) -> Self::Output {
        self.zip_map(rhs, |left, right| left - right)
    }
}

/// Inner product.
impl<T: Element> Mul<&IndexedVector<T>> for &IndexedVector<T> {
    type Output = Result<T, LinearAlgebraError>;

    fn mul(self, rhs: &IndexedVector<T>) -> Self::Output {
        self.inner_product(rhs)
    }
}
