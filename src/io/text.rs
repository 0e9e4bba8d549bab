//! # Plain text
//!
//! Values are separated by whitespace. A vector may span any number of lines. A matrix has one row
//! per line, either with only the values on and above the diagonal, or with all values of the
//! square, in which case the values below the diagonal need to be zero.
//!
//! Writing is done by the `Display` implementations of the containers, which produce the square
//! form.
use std::str::FromStr;

use itertools::Itertools;
use log::debug;

use crate::data::linear_algebra::matrix::TriangularMatrix;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::IndexedVector;
use crate::io::error::ParseError;

/// Lines that contain values, with their line numbers counted from one.
fn value_lines(text: &str) -> impl Iterator<Item=(u64, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i as u64 + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Parse all whitespace separated values on a line.
fn parse_line<T: FromStr>((line_number, line): (u64, &str)) -> Result<Vec<T>, ParseError> {
    line.split_whitespace()
        .map(|token| token.parse::<T>().map_err(|_| ParseError::with_file_location(
            format!("Could not parse value \"{}\"", token),
            (line_number, line),
        )))
        .collect()
}

/// Parse all values in a text, regardless of the lines they are on.
fn parse_values<T: FromStr>(text: &str) -> Result<Vec<T>, ParseError> {
    value_lines(text)
        .map(parse_line::<T>)
        .flatten_ok()
        .collect()
}

/// Read a vector with start index `0` from whitespace separated values.
///
/// Every value is stored, so leading zeros written for a start index become elements. Use
/// `parse_into_vector` to read such text back into a vector with that start index.
pub fn parse_vector<T: FromStr>(text: &str) -> Result<IndexedVector<T>, ParseError> {
    let values = parse_values(text)?;

    IndexedVector::from_values(values, 0)
        .map_err(|error| ParseError::with_container_error("Could not create vector", error))
}

/// Overwrite the values of an existing vector with whitespace separated values.
///
/// Either `vector.len()` values should be present, or the `start_index() + len()` values written
/// by `Display`, the first `start_index()` of which need to be zero. The vector is not changed if
/// reading fails.
pub fn parse_into_vector<T: Element + FromStr>(
    vector: &mut IndexedVector<T>,
    text: &str,
) -> Result<(), ParseError> {
    let mut values = parse_values::<T>(text)?;

    let padding = vector.start_index();
    if padding > 0 && values.len() == padding + vector.len() {
        if values[..padding].iter().any(|value| !value.is_zero()) {
            return Err(ParseError::new(format!("Nonzero value before start index {}", padding)));
        }
        values = values.split_off(padding);
    }

    if values.len() != vector.len() {
        debug!("Read {} values into a vector of length {}", values.len(), vector.len());
        let expected = if padding > 0 {
            format!("{} or {}", vector.len(), padding + vector.len())
        } else {
            vector.len().to_string()
        };
        return Err(ParseError::new(format!("Expected {} values, but read {}", expected, values.len())));
    }

    for (target, value) in vector.iter_mut().zip_eq(values) {
        *target = value;
    }

    Ok(())
}

/// Read a matrix with one row per line.
///
/// The number of lines determines the size. Line `i` (counting from zero) contains either
/// `size - i` values, or `size` values of which the first `i` are zero.
pub fn parse_matrix<T: Element + FromStr>(text: &str) -> Result<TriangularMatrix<T>, ParseError> {
    let lines = value_lines(text).collect::<Vec<_>>();
    let size = lines.len();

    let rows = lines.into_iter()
        .enumerate()
        .map(|(i, location)| parse_row::<T>(i, size, location)
            .map_err(|error| ParseError::with_cause(format!("Could not read row {}", i), error)))
        .collect::<Result<Vec<_>, _>>()?;

    TriangularMatrix::from_rows(rows)
        .map_err(|error| ParseError::with_container_error("Could not create matrix", error))
}

/// Read row `i` of a matrix of size `size`.
fn parse_row<T: Element + FromStr>(
    i: usize,
    size: usize,
    location: (u64, &str),
) -> Result<IndexedVector<T>, ParseError> {
    let mut values = parse_line::<T>(location)?;

    if values.len() == size && i > 0 {
        if values[..i].iter().any(|value| !value.is_zero()) {
            return Err(ParseError::with_file_location("Nonzero value below the diagonal", location));
        }
        values = values.split_off(i);
    }

    if values.len() != size - i {
        return Err(ParseError::with_file_location(
            format!("Expected {} or {} values, but read {}", size - i, size, values.len()),
            location,
        ));
    }

    IndexedVector::from_values(values, i)
        .map_err(|error| ParseError::with_container_error("Could not create row", error))
}

impl<T: FromStr> FromStr for IndexedVector<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vector(s)
    }
}

impl<T: Element + FromStr> FromStr for TriangularMatrix<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_matrix(s)
    }
}
