//! # Linear algebra primitives
//!
//! A dense vector with an addressing offset and an upper triangular matrix built from such
//! vectors. Both check their bounds and sizes instead of trusting the caller.

pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;

/// Largest number of elements an `IndexedVector` may be created with.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
/// Largest side length a `TriangularMatrix` may be created with.
pub const MAX_MATRIX_SIZE: usize = 10_000;
