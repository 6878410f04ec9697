//! # Row orders
//!
//! Computing a permutation of the rows of a matrix from a key that is derived from each row.
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::data::matrix::CoordinateMatrix;
use crate::data::permutation::Permutation;

/// The key by which rows are ordered.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SortMethod {
    /// Keep the current order.
    #[default]
    Index,
    /// Most entries first.
    Nnz,
    /// Largest sum of values first.
    RowSum,
}

impl SortMethod {
    /// All methods, in the order in which they are listed to users.
    pub const ALL: [SortMethod; 3] = [SortMethod::Index, SortMethod::Nnz, SortMethod::RowSum];

    /// Name by which the method is selected.
    pub fn name(self) -> &'static str {
        match self {
            SortMethod::Index => "index",
            SortMethod::Nnz => "nnz",
            SortMethod::RowSum => "rowsum",
        }
    }
}

impl FromStr for SortMethod {
    type Err = UnsupportedMethod;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        SortMethod::ALL.into_iter()
            .find(|method| method.name() == text)
            .ok_or_else(|| UnsupportedMethod { name: text.to_string() })
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sort method name that isn't known.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnsupportedMethod {
    /// The name that was provided.
    pub name: String,
}

impl fmt::Display for UnsupportedMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UnsupportedMethod: \"{}\", choose from: {}",
            self.name,
            SortMethod::ALL.iter().map(|method| method.name()).join(", "),
        )
    }
}

impl Error for UnsupportedMethod {}

/// Compute a new order for the rows of a matrix.
///
/// Sorting is stable: rows with an equal key keep their relative order.
///
/// # Arguments
///
/// * `matrix`: Matrix whose rows are ordered.
/// * `method`: Which key to sort by.
///
/// # Return value
///
/// A permutation of which the forward direction maps a new row position to the original row.
pub fn compute_order(matrix: &CoordinateMatrix, method: SortMethod) -> Permutation {
    let forward = match method {
        SortMethod::Index => return Permutation::identity(matrix.nr_rows()),
        SortMethod::Nnz => {
            let counts = matrix.row_nnzs();
            descending_by(counts.len(), |i, j| counts[i].cmp(&counts[j]))
        },
        SortMethod::RowSum => {
            let sums = matrix.row_sums();
            descending_by(sums.len(), |i, j| sums[i].total_cmp(&sums[j]))
        },
    };

    // Sorting `0..n` can only produce a permutation of `0..n`.
    debug_assert_eq!(forward.len(), matrix.nr_rows());
    Permutation::new(forward)
        .unwrap_or_else(|error| unreachable!("sorting produced {}", error))
}

/// Compute a new order for the rows of a matrix, selecting the method by its name.
///
/// # Errors
///
/// If the name is not one of `index`, `nnz` or `rowsum`.
pub fn compute_order_by_name(
    matrix: &CoordinateMatrix,
    name: &str,
) -> Result<Permutation, UnsupportedMethod> {
    name.parse().map(|method| compute_order(matrix, method))
}

/// Stable sort of the indices `0..len`, largest key first.
///
/// # Arguments
///
/// * `len`: Number of indices.
/// * `compare`: Compares the keys of two indices.
fn descending_by(len: usize, compare: impl Fn(usize, usize) -> Ordering) -> Vec<usize> {
    (0..len).sorted_by(|&i, &j| compare(j, i)).collect()
}
