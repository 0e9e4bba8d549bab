//! # Vector type
//!
//! A dense vector of fixed length that is addressed from a start index. Written by hand, because
//! every access has to be checked and the matrix type reuses it for its rows.
pub use indexed::Indexed as IndexedVector;

mod indexed;
mod ops;
