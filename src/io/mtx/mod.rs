//! # Matrix Market files
//!
//! Reading and writing of `.mtx` files in the coordinate format, as described at
//! <https://math.nist.gov/MatrixMarket/formats.html>.
//!
//! Only real, integer and pattern matrices are supported. Symmetric storage is expanded while
//! reading; writing always produces an explicit `coordinate real general` file.
pub use parse::parse;
pub use write::write;

mod number;
mod parse;
pub(crate) mod token;
mod write;

/// Contents of the first line of the file.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Banner {
    field: Field,
    symmetry: Symmetry,
}

impl Default for Banner {
    fn default() -> Self {
        Self { field: Field::Real, symmetry: Symmetry::General }
    }
}

/// The type of the values that are stored.
///
/// # Note
///
/// Complex values are not supported.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Field {
    Real,
    Integer,
    /// Only coordinates are stored, every value is one.
    Pattern,
}

/// Which entries are stored explicitly.
///
/// # Note
///
/// Hermitian matrices are not supported, as they are complex.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Symmetry {
    General,
    /// Every entry `(i, j, v)` with `i != j` also stands for `(j, i, v)`.
    Symmetric,
    /// Every entry `(i, j, v)` also stands for `(j, i, -v)`, the diagonal is zero.
    SkewSymmetric,
}

/// Shape and number of entries, as declared on the size line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Size {
    nr_rows: usize,
    nr_columns: usize,
    nnz: usize,
}
