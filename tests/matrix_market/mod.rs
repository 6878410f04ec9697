//! # Small Matrix Market files
//!
//! Hand-written files covering the parts of the format that are supported.
use std::path::{Path, PathBuf};

/// # Library and command line tests
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the mtx files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("mtx")
}
