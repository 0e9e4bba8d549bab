//! # Indexed vector
//!
//! Wrapping a `Vec` such that it has a fixed size, an addressing offset and checked access.
use std::fmt;
use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use itertools::{Itertools, repeat_n};
use log::{debug, trace};

use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::MAX_VECTOR_SIZE;
use crate::data::linear_algebra::traits::Element;

/// Uses a `Vec` as underlying data structure. Length is fixed at creation.
///
/// The start index is carried along for addressing and display. Access is by raw offset into the
/// stored values, and equality ignores the start index.
#[derive(Debug)]
pub struct Indexed<T> {
    pub(super) data: Vec<T>,
    pub(super) start_index: usize,
}

impl<T: Element> Indexed<T> {
    /// Create a vector of zeros.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements, at most `MAX_VECTOR_SIZE`.
    ///
    /// # Return value
    ///
    /// A zero vector with start index `0`, or an `InvalidSize` error.
    pub fn new(len: usize) -> Result<Self, LinearAlgebraError> {
        Self::with_start_index(len, 0)
    }

    /// Create a vector of zeros that is addressed from `start_index` onwards.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements, at most `MAX_VECTOR_SIZE`.
    /// * `start_index`: Offset of the first element. The positions `start_index..start_index + len`
    /// need to be representable.
    pub fn with_start_index(len: usize, start_index: usize) -> Result<Self, LinearAlgebraError> {
        check_size(len, start_index)?;

        Ok(Self { data: repeat_n(T::zero(), len).collect(), start_index, })
    }
}

impl<T> Indexed<T> {
    /// Wrap existing values in a vector.
    ///
    /// The size is validated the same way as for `with_start_index`.
    pub fn from_values(data: Vec<T>, start_index: usize) -> Result<Self, LinearAlgebraError> {
        check_size(data.len(), start_index)?;

        Ok(Self { data, start_index, })
    }

    /// Value at raw offset `index`.
    ///
    /// The start index is not subtracted: valid offsets are `0..self.len()`.
    pub fn get(&self, index: usize) -> Result<&T, LinearAlgebraError> {
        let len = self.len();
        self.data.get(index).ok_or(LinearAlgebraError::OutOfRange { index, len, })
    }

    /// Mutable reference to the value at raw offset `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, LinearAlgebraError> {
        let len = self.len();
        self.data.get_mut(index).ok_or(LinearAlgebraError::OutOfRange { index, len, })
    }

    /// The number of elements in this vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The offset this vector is addressed from.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Iterate over the values of this vector.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the values of this vector.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Take the values out of this vector.
    pub fn into_values(self) -> Vec<T> {
        self.data
    }

    /// Error if the lengths of `self` and `other` differ.
    pub(crate) fn check_same_len<U>(&self, other: &Indexed<U>) -> Result<(), LinearAlgebraError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            debug!("Operands of lengths {} and {} are incompatible", self.len(), other.len());
            Err(LinearAlgebraError::SizeMismatch { left: self.len(), right: other.len(), })
        }
    }
}

fn check_size(len: usize, start_index: usize) -> Result<(), LinearAlgebraError> {
    if len > MAX_VECTOR_SIZE {
        debug!("Rejecting vector of length {}", len);
        return Err(LinearAlgebraError::InvalidSize { requested: len, maximum: MAX_VECTOR_SIZE, });
    }
    // The end of the addressed range, `start_index + len`, has to be representable.
    if start_index.checked_add(len).is_none() {
        debug!("Rejecting start index {} for vector of length {}", start_index, len);
        return Err(LinearAlgebraError::InvalidSize { requested: start_index, maximum: usize::MAX - len, });
    }

    Ok(())
}

impl<T: Clone> Clone for Indexed<T> {
    fn clone(&self) -> Self {
        Self { data: self.data.clone(), start_index: self.start_index, }
    }

    /// Assignment: adopts the length, start index and values of `source`.
    fn clone_from(&mut self, source: &Self) {
        if self.len() != source.len() {
            trace!("Resizing vector from {} to {} on assignment", self.len(), source.len());
        }

        self.data.clone_from(&source.data);
        self.start_index = source.start_index;
    }
}

impl<T: PartialEq> PartialEq for Indexed<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Indexed<T> {}

impl<T> Index<usize> for Indexed<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for Indexed<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, T> IntoIterator for &'a Indexed<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes a zero for every position before the start index, followed by the values.
impl<T: Display> Display for Indexed<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let padding = repeat_n(String::from("0"), self.start_index);
        let values = self.data.iter().map(ToString::to_string);

        write!(f, "{}", padding.chain(values).join(" "))
    }
}
