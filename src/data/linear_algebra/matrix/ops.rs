//! # Arithmetic on upper triangles
//!
//! Matrices of equal size have rows of equal lengths, so they are combined row by row using the
//! vector operations.
use std::ops::{Add, Sub};

use itertools::Itertools;

use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::matrix::TriangularMatrix;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::IndexedVector;

type RowResult<T> = Result<IndexedVector<T>, LinearAlgebraError>;

impl<T: Element> TriangularMatrix<T> {
    /// Combine the rows of two matrices of equal size.
    fn zip_rows<O>(&self, other: &Self, operation: O) -> Result<Self, LinearAlgebraError>
    where
        O: Fn(&IndexedVector<T>, &IndexedVector<T>) -> RowResult<T>,
    {
        self.rows.check_same_len(&other.rows)?;

        let rows = self.rows.iter().zip_eq(other.rows.iter())
            .map(|(left, right)| operation(left, right))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows: IndexedVector::from_values(rows, 0)?, })
    }
}

impl<T: Element> Add<&TriangularMatrix<T>> for &TriangularMatrix<T> {
    type Output = Result<TriangularMatrix<T>, LinearAlgebraError>;

    fn add(self, rhs: &TriangularMatrix<T>) -> Self::Output {
        self.zip_rows(rhs, |left, right| left + right)
    }
}

impl<T: Element> Sub<&TriangularMatrix<T>> for &TriangularMatrix<T> {
    type Output = Result<TriangularMatrix<T>, LinearAlgebraError>;

    fn sub(self, rhs: &TriangularMatrix<T>) -> Self::Output {
        self.zip_rows(rhs, |left, right| left - right)
    }
}
