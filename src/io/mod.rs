//! # Reading and writing of matrices
//!
//! This module provides read and write functionality for the Matrix Market coordinate format.
use std::fs::File;
use std::io;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::data::matrix::CoordinateMatrix;
use crate::io::error::{ExportError, ImportError};

pub mod error;
pub mod mtx;

/// Import a matrix from a file.
///
/// The file is read completely before parsing starts, and closed before this function returns.
///
/// # Errors
///
/// When a file cannot be found or read, or when it is not a valid Matrix Market coordinate file.
pub fn import(file_path: &Path) -> Result<CoordinateMatrix, ImportError> {
    let io_error = |error| ImportError::IO { path: file_path.to_path_buf(), error };

    // Open and read the file
    let mut program = String::new();
    File::open(file_path)
        .map_err(io_error)?
        .read_to_string(&mut program)
        .map_err(io_error)?;

    let matrix = mtx::parse(&program)?;
    debug!(
        path = %file_path.display(),
        rows = matrix.nr_rows(),
        columns = matrix.nr_columns(),
        nnz = matrix.nnz(),
        "Parsed matrix"
    );

    Ok(matrix)
}

/// Export a matrix to a file in the coordinate format.
///
/// The matrix is written to a temporary file in the same directory, which then replaces the file
/// at `file_path`. When writing fails, an existing file at `file_path` is left untouched.
///
/// # Errors
///
/// When the temporary file can't be created or written, or when it can't be moved into place.
pub fn export(matrix: &CoordinateMatrix, file_path: &Path) -> Result<(), ExportError> {
    let io_error = |error| ExportError { path: file_path.to_path_buf(), error };

    let directory = match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(directory).map_err(io_error)?;

    write_buffered(matrix, &mut file).map_err(io_error)?;
    file.persist(file_path).map_err(|error| io_error(error.error))?;
    debug!(path = %file_path.display(), nnz = matrix.nnz(), "Wrote matrix");

    Ok(())
}

fn write_buffered(matrix: &CoordinateMatrix, out: impl Write) -> io::Result<()> {
    let mut writer = BufWriter::new(out);
    mtx::write(matrix, &mut writer)?;
    writer.flush()
}

#[cfg(test)]
mod test {
    use std::fs;

    use crate::data::matrix::{CoordinateMatrix, Entry};
    use crate::io::{export, import};
    use crate::io::error::ImportError;

    #[test]
    fn export_then_import() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("matrix.mtx");
        let matrix = CoordinateMatrix::new(3, 2, vec![
            Entry::new(2, 1, 0.1),
            Entry::new(0, 0, 1e-300),
            Entry::new(2, 1, -7.0),
        ]).unwrap();

        export(&matrix, &path).unwrap();
        assert_eq!(import(&path).unwrap(), matrix);
        // No temporary files are left behind.
        assert_eq!(fs::read_dir(directory.path()).unwrap().count(), 1);
    }

    #[test]
    fn export_overwrites() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("matrix.mtx");
        fs::write(&path, "old contents").unwrap();

        let matrix = CoordinateMatrix::new(1, 1, vec![]).unwrap();
        export(&matrix, &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "%%MatrixMarket matrix coordinate real general\n1 1 0\n",
        );
    }

    #[test]
    fn missing_file() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing.mtx");

        match import(&path) {
            Err(error @ ImportError::IO { .. }) => assert!(error.to_string().contains("missing.mtx")),
            other => panic!("expected an IO error, got {:?}", other),
        }
    }

    #[test]
    fn unwritable_destination() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("no_such_directory").join("out.mtx");
        let matrix = CoordinateMatrix::new(1, 1, vec![]).unwrap();

        let error = export(&matrix, &path).unwrap_err();
        assert_eq!(error.path, path);
    }
}
