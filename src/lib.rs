//! # Bounds-checked vectors and upper triangular matrices
//!
//! An `IndexedVector` is a vector of fixed length that carries a start index. A
//! `TriangularMatrix` is a square matrix of which only the diagonal and the values above it are
//! stored, one `IndexedVector` per row. Every access and every operation between two containers
//! is checked, and reported through `LinearAlgebraError` instead of being trusted.
#![warn(missing_docs)]

pub mod data;
pub mod io;

pub use data::linear_algebra::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
pub use data::linear_algebra::error::LinearAlgebraError;
pub use data::linear_algebra::matrix::{RowMut, TriangularMatrix};
pub use data::linear_algebra::traits::Element;
pub use data::linear_algebra::vector::IndexedVector;
