//! # Writing Matrix Market files
use std::fmt;
use std::io;
use std::io::Write;

use crate::data::matrix::CoordinateMatrix;
use crate::io::mtx::token::{BANNER, COORDINATE, GENERAL, MATRIX, REAL};

/// Write a matrix in the coordinate format.
///
/// Entries are written in storage order, with 1-based indices. Values are written such that reading
/// them back gives exactly the same `f64`.
///
/// # Arguments
///
/// * `matrix`: Matrix to write.
/// * `out`: Destination, ideally buffered.
///
/// # Errors
///
/// Only when writing to `out` fails.
pub fn write(matrix: &CoordinateMatrix, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "{} {} {} {} {}", BANNER, MATRIX, COORDINATE, REAL, GENERAL)?;
    writeln!(out, "{} {} {}", matrix.nr_rows(), matrix.nr_columns(), matrix.nnz())?;
    for entry in matrix.entries() {
        writeln!(out, "{} {} {}", entry.row + 1, entry.column + 1, Value(entry.value))?;
    }

    Ok(())
}

/// Shortest text that reads back as the same value.
///
/// Plain decimal notation for the usual magnitudes, scientific notation for the others to avoid
/// writing hundreds of digits.
struct Value(f64);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.abs();
        if magnitude == 0_f64 || !magnitude.is_finite() || (1e-5..1e16).contains(&magnitude) {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{:e}", self.0)
        }
    }
}
