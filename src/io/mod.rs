//! # Reading and writing of vectors and matrices
//!
//! This module provides read functionality for a plain text format. Writing happens through the
//! `Display` implementations of the containers. Their output can be read back with `read_matrix`,
//! and with `read_into_vector` for a vector that has the start index of the printed one.
use std::io::Read;
use std::str::FromStr;

use crate::data::linear_algebra::matrix::TriangularMatrix;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::IndexedVector;
use crate::io::error::ImportError;

pub mod error;
pub mod text;

pub use text::{parse_into_vector, parse_matrix, parse_vector};

/// Read all of a reader into a `String`.
fn read_to_string<R: Read>(mut reader: R) -> Result<String, ImportError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents).map_err(ImportError::IO)?;

    Ok(contents)
}

/// Read a vector of whitespace separated values.
///
/// # Errors
///
/// When the reader fails or a value can't be parsed.
pub fn read_vector<T: FromStr, R: Read>(reader: R) -> Result<IndexedVector<T>, ImportError> {
    let contents = read_to_string(reader)?;

    Ok(parse_vector(&contents)?)
}

/// Read values into an existing vector, which keeps its start index.
///
/// Accepts the output of `Display`, see `text::parse_into_vector`.
///
/// # Errors
///
/// When the reader fails, a value can't be parsed or the number of values doesn't fit the
/// vector. In those cases, the vector is unchanged.
pub fn read_into_vector<T: Element + FromStr, R: Read>(
    vector: &mut IndexedVector<T>,
    reader: R,
) -> Result<(), ImportError> {
    let contents = read_to_string(reader)?;

    Ok(parse_into_vector(vector, &contents)?)
}

/// Read a matrix with one row per line, see `text::parse_matrix` for the accepted layouts.
///
/// # Errors
///
/// When the reader fails, a value can't be parsed or the rows don't form an upper triangle.
pub fn read_matrix<T: Element + FromStr, R: Read>(reader: R) -> Result<TriangularMatrix<T>, ImportError> {
    let contents = read_to_string(reader)?;

    Ok(parse_matrix(&contents)?)
}
