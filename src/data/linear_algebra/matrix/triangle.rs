//! # Upper triangle
//!
//! A square matrix of which only the diagonal and the values above it are stored. Row `i` is an
//! `IndexedVector` of length `size - i` that is addressed from `i`, the column of its diagonal
//! value.
use std::fmt;
use std::fmt::Display;
use std::ops::{Deref, Index, IndexMut};
use std::slice::{Iter, IterMut};

use itertools::Itertools;
use log::{debug, trace};

use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::MAX_MATRIX_SIZE;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::IndexedVector;

/// Stores the rows of the upper triangle in an `IndexedVector` of `IndexedVector`s.
///
/// Row lengths are derived from the size and the row index only. Rows can't be replaced from the
/// outside, only their values can be changed, see `RowMut`.
#[derive(Debug, Eq, PartialEq)]
pub struct UpperTriangle<T> {
    pub(super) rows: IndexedVector<IndexedVector<T>>,
}

impl<T: Element> UpperTriangle<T> {
    /// Create a matrix of zeros.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of rows and columns, at most `MAX_MATRIX_SIZE`.
    ///
    /// # Return value
    ///
    /// A zero matrix, or an `InvalidSize` error.
    pub fn new(size: usize) -> Result<Self, LinearAlgebraError> {
        check_size(size)?;

        let rows = (0..size)
            .map(|i| IndexedVector::with_start_index(size - i, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows: IndexedVector::from_values(rows, 0)?, })
    }

    /// Value at position (`row`, `column`) of the full square matrix.
    ///
    /// Values below the diagonal are not stored and are zero.
    pub fn value(&self, row: usize, column: usize) -> Result<T, LinearAlgebraError> {
        let values = self.row(row)?;
        if column >= self.size() {
            return Err(LinearAlgebraError::OutOfRange { index: column, len: self.size(), });
        }

        if column < row {
            Ok(T::zero())
        } else {
            values.get(column - row).cloned()
        }
    }
}

impl<T> UpperTriangle<T> {
    /// Create a matrix from the values on and above the diagonal.
    ///
    /// # Arguments
    ///
    /// * `rows`: Row `i` should have `rows.len() - i` values. Start indices are set to the row
    /// index.
    ///
    /// # Return value
    ///
    /// A matrix, `InvalidSize` when there are too many rows and `SizeMismatch` when a row has the
    /// wrong length.
    pub fn from_rows(rows: Vec<IndexedVector<T>>) -> Result<Self, LinearAlgebraError> {
        let size = rows.len();
        check_size(size)?;

        let rows = rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() == size - i {
                    IndexedVector::from_values(row.into_values(), i)
                } else {
                    debug!("Row {} has length {}, expected {}", i, row.len(), size - i);
                    Err(LinearAlgebraError::SizeMismatch { left: size - i, right: row.len(), })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows: IndexedVector::from_values(rows, 0)?, })
    }

    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// The stored part of row `i`.
    pub fn row(&self, i: usize) -> Result<&IndexedVector<T>, LinearAlgebraError> {
        self.rows.get(i)
    }

    /// Write access to the values of row `i`.
    pub fn row_mut(&mut self, i: usize) -> Result<RowMut<'_, T>, LinearAlgebraError> {
        self.rows.get_mut(i).map(|row| RowMut { row, })
    }

    /// Value at offset `offset` within the stored part of row `row`.
    ///
    /// Both indices are checked by the vectors they index.
    pub fn get(&self, row: usize, offset: usize) -> Result<&T, LinearAlgebraError> {
        self.rows.get(row)?.get(offset)
    }

    /// Mutable reference to the value at offset `offset` within the stored part of row `row`.
    pub fn get_mut(&mut self, row: usize, offset: usize) -> Result<&mut T, LinearAlgebraError> {
        self.rows.get_mut(row)?.get_mut(offset)
    }

    /// Iterate over the stored rows.
    pub fn rows(&self) -> Iter<'_, IndexedVector<T>> {
        self.rows.iter()
    }
}

fn check_size(size: usize) -> Result<(), LinearAlgebraError> {
    if size > MAX_MATRIX_SIZE {
        debug!("Rejecting matrix of size {}", size);
        Err(LinearAlgebraError::InvalidSize { requested: size, maximum: MAX_MATRIX_SIZE, })
    } else {
        Ok(())
    }
}

impl<T: Clone> Clone for UpperTriangle<T> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone(), }
    }

    /// Assignment: adopts the size and all rows of `source`.
    fn clone_from(&mut self, source: &Self) {
        if self.size() != source.size() {
            trace!("Resizing matrix from {} to {} on assignment", self.size(), source.size());
        }

        self.rows.clone_from(&source.rows);
    }
}

impl<T> Index<usize> for UpperTriangle<T> {
    type Output = IndexedVector<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

/// Indexed by (`row`, `offset`), with `offset` relative to the diagonal.
impl<T> Index<(usize, usize)> for UpperTriangle<T> {
    type Output = T;

    fn index(&self, (row, offset): (usize, usize)) -> &Self::Output {
        &self.rows[row][offset]
    }
}

impl<T> IndexMut<(usize, usize)> for UpperTriangle<T> {
    fn index_mut(&mut self, (row, offset): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][offset]
    }
}

/// One line per row, zeros included, such that the full square is shown.
impl<T: Display> Display for UpperTriangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.rows.iter().join("\n"))
    }
}

/// Mutable access to the values of a matrix row.
///
/// The row itself can't be replaced through this reference, such that its length stays tied to
/// its index.
#[derive(Debug)]
pub struct RowMut<'a, T> {
    row: &'a mut IndexedVector<T>,
}

impl<'a, T> RowMut<'a, T> {
    /// Mutable reference to the value at offset `index` from the diagonal.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, LinearAlgebraError> {
        self.row.get_mut(index)
    }

    /// Iterate mutably over the values of this row.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.row.iter_mut()
    }

    /// Overwrite all values with those of `values`, which has to have the same length.
    pub fn assign(&mut self, values: &IndexedVector<T>) -> Result<(), LinearAlgebraError>
    where
        T: Clone,
    {
        self.row.check_same_len(values)?;

        for (target, source) in self.row.iter_mut().zip_eq(values.iter()) {
            target.clone_from(source);
        }

        Ok(())
    }
}

impl<'a, T> Deref for RowMut<'a, T> {
    type Target = IndexedVector<T>;

    fn deref(&self) -> &Self::Target {
        self.row
    }
}

impl<'a, T> Index<usize> for RowMut<'a, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.row[index]
    }
}

impl<'a, T> IndexMut<usize> for RowMut<'a, T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.row[index]
    }
}
