//! # Sorting the rows of sparse matrices
//!
//! Matrices are read from Matrix Market coordinate files, their rows are reordered by a key that
//! is computed per row, and they are written back in the same format. Column indices and values
//! are never changed.
//!
//! ```
//! use mtx_sort::algorithm::{sort_rows, SortMethod};
//! use mtx_sort::io::mtx::parse;
//!
//! let matrix = parse("%%MatrixMarket matrix coordinate real general
//! 3 3 4
//! 1 1 5.0
//! 2 2 1.0
//! 3 1 2.0
//! 3 3 2.0
//! ").unwrap();
//!
//! let sorted = sort_rows(&matrix, SortMethod::Nnz);
//! assert_eq!(sorted.row_nnzs(), vec![2, 1, 1]);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
