//! # Coordinate matrix
//!
//! A sparse matrix stored as a list of `(row, column, value)` entries, together with a row index
//! that groups the entries by row.
use std::collections::TryReserveError;
use std::ops::Range;

use crate::data::permutation::{InvalidPermutation, Permutation};
use crate::io::error::InconsistencyError;

/// A single stored value of a sparse matrix. Indices start at `0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entry {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub column: usize,
    /// Stored value.
    pub value: f64,
}

impl Entry {
    /// Create a new entry.
    pub fn new(row: usize, column: usize, value: f64) -> Self {
        Self { row, column, value }
    }
}

/// Sparse matrix in coordinate form. Dimensions are fixed at creation.
///
/// Entries are kept in the order in which they were provided. Repeated coordinates are stored as
/// separate entries, they are never summed.
///
/// There is no mutable access to the entries; operations that change the matrix create a new
/// instance, so the row index is always consistent with the entries.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateMatrix {
    entries: Vec<Entry>,
    row_index: RowIndex,
    nr_rows: usize,
    nr_columns: usize,
}

impl CoordinateMatrix {
    /// Create a new matrix.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows.
    /// * `nr_columns`: Number of columns.
    /// * `entries`: Stored values, in any order.
    ///
    /// # Errors
    ///
    /// If an entry lies outside of the `nr_rows` by `nr_columns` shape, or when there are too many
    /// rows to index.
    pub fn new(
        nr_rows: usize,
        nr_columns: usize,
        entries: Vec<Entry>,
    ) -> Result<Self, InconsistencyError> {
        if let Some((i, entry)) = entries.iter().enumerate()
            .find(|(_, entry)| entry.row >= nr_rows || entry.column >= nr_columns) {
            return Err(InconsistencyError::new(format!(
                "Entry {} at ({}, {}) lies outside of the {} x {} matrix.",
                i, entry.row, entry.column, nr_rows, nr_columns,
            )));
        }

        Self::new_unchecked(nr_rows, nr_columns, entries).map_err(|error| InconsistencyError::new(
            format!("Can't index {} rows: {}", nr_rows, error),
        ))
    }

    /// Create a new matrix from entries that are known to be within bounds.
    ///
    /// # Errors
    ///
    /// If the row index for `nr_rows` rows can't be allocated.
    pub(crate) fn new_unchecked(
        nr_rows: usize,
        nr_columns: usize,
        entries: Vec<Entry>,
    ) -> Result<Self, TryReserveError> {
        debug_assert!(entries.iter().all(|e| e.row < nr_rows && e.column < nr_columns));

        let row_index = RowIndex::build(nr_rows, &entries)?;

        Ok(Self { entries, row_index, nr_rows, nr_columns })
    }

    /// Reorder the rows.
    ///
    /// Row `i` of the result is row `order[i]` of this matrix. Within a row, entries keep their
    /// relative order.
    ///
    /// # Arguments
    ///
    /// * `order`: New order of the original row indices.
    ///
    /// # Errors
    ///
    /// If `order` is not a permutation of `0..self.nr_rows()`. Nothing is copied in that case.
    pub fn apply_row_permutation(&self, order: &[usize]) -> Result<Self, InvalidPermutation> {
        if order.len() != self.nr_rows {
            return Err(InvalidPermutation::Length { expected: self.nr_rows, actual: order.len() });
        }
        let permutation = Permutation::new(order.to_vec())?;

        Ok(self.permute_rows(&permutation))
    }

    /// Reorder the rows according to a permutation that was already validated.
    ///
    /// Row `i` of the result is row `permutation.forward(i)` of this matrix. The entries of the
    /// result are grouped by row, except for the identity permutation, which leaves the entry
    /// order exactly as it is.
    ///
    /// # Panics
    ///
    /// If the permutation doesn't have length `self.nr_rows()`.
    pub fn permute_rows(&self, permutation: &Permutation) -> Self {
        assert_eq!(
            permutation.len(), self.nr_rows,
            "row permutation of length {} applied to a matrix with {} rows",
            permutation.len(), self.nr_rows,
        );
        if permutation.is_identity() {
            return self.clone();
        }

        let mut entries = Vec::with_capacity(self.entries.len());
        for new_row in 0..self.nr_rows {
            let old_row = permutation.forward(new_row);
            entries.extend(self.row(old_row).map(|entry| Entry { row: new_row, ..*entry }));
        }
        debug_assert_eq!(entries.len(), self.entries.len());

        // An index of this size already exists for `self`.
        let row_index = RowIndex::count(vec![0; self.nr_rows + 1], &entries);

        Self { entries, row_index, nr_rows: self.nr_rows, nr_columns: self.nr_columns }
    }

    /// All entries, in storage order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Get the entries of row `i`, in storage order.
    pub fn row(&self, i: usize) -> impl ExactSizeIterator<Item = &Entry> + '_ {
        debug_assert!(i < self.nr_rows);

        self.row_index.positions(i).iter().map(move |&position| &self.entries[position])
    }

    /// Number of entries in row `i`, counting repeated coordinates separately.
    pub fn row_nnz(&self, i: usize) -> usize {
        debug_assert!(i < self.nr_rows);

        self.row_index.len(i)
    }

    /// Sum of the values stored in row `i`.
    ///
    /// Values are added in storage order, starting from `+0.0`. An empty row sums to `0.0`.
    pub fn row_sum(&self, i: usize) -> f64 {
        // Not `Iterator::sum`, which starts from `-0.0`.
        self.row(i).fold(0_f64, |total, entry| total + entry.value)
    }

    /// Number of entries for every row.
    pub fn row_nnzs(&self) -> Vec<usize> {
        (0..self.nr_rows).map(|i| self.row_nnz(i)).collect()
    }

    /// Sum of the values for every row.
    pub fn row_sums(&self) -> Vec<f64> {
        (0..self.nr_rows).map(|i| self.row_sum(i)).collect()
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the number of stored entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }
}

/// Positions of the entries of each row, grouped by row.
///
/// The positions of row `i` are `positions[starts[i]..starts[i + 1]]`, in increasing order. This
/// is derived data and is rebuilt from scratch whenever a matrix is created.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RowIndex {
    starts: Vec<usize>,
    positions: Vec<usize>,
}

impl RowIndex {
    /// Group entry positions by row using a counting sort.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows, all entries should have a row index below this value.
    /// * `entries`: Entries to index.
    ///
    /// # Errors
    ///
    /// If memory for `nr_rows + 1` offsets can't be reserved, which includes the case where that
    /// number doesn't fit in a `usize`.
    pub fn build(nr_rows: usize, entries: &[Entry]) -> Result<Self, TryReserveError> {
        let mut starts = Vec::new();
        starts.try_reserve_exact(nr_rows.saturating_add(1))?;
        starts.resize(nr_rows + 1, 0);

        Ok(Self::count(starts, entries))
    }

    /// Counting sort on zero-initialized `starts` of length `nr_rows + 1`.
    fn count(mut starts: Vec<usize>, entries: &[Entry]) -> Self {
        debug_assert!(starts.iter().all(|&start| start == 0));
        let nr_rows = starts.len() - 1;

        for entry in entries {
            starts[entry.row + 1] += 1;
        }
        for i in 0..nr_rows {
            starts[i + 1] += starts[i];
        }

        let mut next = starts[..nr_rows].to_vec();
        let mut positions = vec![0; entries.len()];
        for (position, entry) in entries.iter().enumerate() {
            positions[next[entry.row]] = position;
            next[entry.row] += 1;
        }

        Self { starts, positions }
    }

    fn range(&self, i: usize) -> Range<usize> {
        self.starts[i]..self.starts[i + 1]
    }

    /// Positions in the entry list of the entries of row `i`.
    pub fn positions(&self, i: usize) -> &[usize] {
        &self.positions[self.range(i)]
    }

    /// Number of entries in row `i`.
    pub fn len(&self, i: usize) -> usize {
        self.starts[i + 1] - self.starts[i]
    }

    /// Number of rows that are indexed.
    pub fn nr_rows(&self) -> usize {
        self.starts.len() - 1
    }
}
