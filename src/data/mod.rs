//! # Storing of vectors and matrices in memory
//!
//! This module provides the data structures. Reading them from text is done in `io`.

pub mod linear_algebra;
