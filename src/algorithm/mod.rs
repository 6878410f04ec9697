//! # Algorithms
//!
//! Computing a new order for the rows of a matrix, and applying it.
use crate::data::matrix::CoordinateMatrix;

pub use row_order::{compute_order, compute_order_by_name, SortMethod, UnsupportedMethod};

pub mod row_order;

/// Reorder the rows of a matrix by the key that `method` describes.
///
/// # Arguments
///
/// * `matrix`: Matrix to reorder, it is not modified.
/// * `method`: Key to sort the rows by.
///
/// # Return value
///
/// A new matrix with the same shape and entries, with the rows in their new order.
pub fn sort_rows(matrix: &CoordinateMatrix, method: SortMethod) -> CoordinateMatrix {
    let permutation = compute_order(matrix, method);
    matrix.permute_rows(&permutation)
}
