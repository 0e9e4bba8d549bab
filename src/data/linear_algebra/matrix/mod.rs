//! # Matrix type
//!
//! Square matrices that are upper triangular. Each row is an `IndexedVector`, so all of the access
//! checks of that type apply to the rows and their values.
pub use triangle::RowMut;
pub use triangle::UpperTriangle as TriangularMatrix;

mod ops;
mod triangle;
