use std::fs;
use std::path::Path;
use std::process::Command;

use mtx_sort::algorithm::{compute_order, compute_order_by_name, sort_rows, SortMethod};
use mtx_sort::data::matrix::CoordinateMatrix;
use mtx_sort::data::permutation::InvalidPermutation;
use mtx_sort::io::error::ImportError;
use mtx_sort::io::{export, import};

use super::get_test_file_path;

fn load(name: &str) -> CoordinateMatrix {
    import(&get_test_file_path(name)).unwrap()
}

/// Sort a file with the command line tool, returning whether it succeeded and what it printed to
/// stderr.
fn run(input: &Path, output: &Path, method: Option<&str>) -> (bool, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_mtx-sort"));
    command.arg(input).arg(output);
    if let Some(method) = method {
        command.args(["--method", method]);
    }
    let result = command.output().unwrap();

    (result.status.success(), String::from_utf8_lossy(&result.stderr).into_owned())
}

#[test]
fn scenario() {
    let matrix = load("scenario");

    assert_eq!(matrix.nr_rows(), 3);
    assert_eq!(matrix.nnz(), 4);
    assert_eq!(compute_order(&matrix, SortMethod::Nnz).as_slice(), &[2, 0, 1]);
    assert_eq!(compute_order(&matrix, SortMethod::RowSum).as_slice(), &[0, 2, 1]);
    assert_eq!(sort_rows(&matrix, SortMethod::Nnz).row_nnzs(), vec![2, 1, 1]);
}

#[test]
fn interleaved() {
    let matrix = load("interleaved");

    assert_eq!(matrix.row_nnzs(), vec![2, 3, 2, 0, 2]);
    assert_eq!(compute_order(&matrix, SortMethod::Nnz).as_slice(), &[1, 0, 2, 4, 3]);
    assert_eq!(compute_order(&matrix, SortMethod::RowSum).as_slice(), &[0, 1, 4, 3, 2]);
}

#[test]
fn pattern() {
    let matrix = load("pattern");

    assert!(matrix.entries().iter().all(|entry| entry.value == 1_f64));
    assert_eq!(compute_order_by_name(&matrix, "nnz").unwrap().as_slice(), &[3, 0, 1, 2]);
    assert_eq!(compute_order_by_name(&matrix, "rowsum").unwrap().as_slice(), &[3, 0, 1, 2]);
    assert!(compute_order_by_name(&matrix, "random").is_err());
}

#[test]
fn sorted_orders_are_descending_and_stable() {
    for name in ["scenario", "interleaved", "pattern"] {
        let matrix = load(name);

        let order = compute_order(&matrix, SortMethod::Nnz);
        let counts = matrix.row_nnzs();
        for w in order.as_slice().windows(2) {
            assert!(counts[w[0]] > counts[w[1]] || (counts[w[0]] == counts[w[1]] && w[0] < w[1]));
        }

        let order = compute_order(&matrix, SortMethod::RowSum);
        let sums = matrix.row_sums();
        for w in order.as_slice().windows(2) {
            assert!(sums[w[0]] > sums[w[1]] || (sums[w[0]] == sums[w[1]] && w[0] < w[1]));
        }
    }
}

#[test]
fn shape_and_entries_preserved() {
    for name in ["scenario", "interleaved", "pattern"] {
        let matrix = load(name);

        for method in SortMethod::ALL {
            let order = compute_order(&matrix, method);
            let sorted = matrix.permute_rows(&order);
            assert_eq!(sorted.nr_rows(), matrix.nr_rows());
            assert_eq!(sorted.nr_columns(), matrix.nr_columns());
            assert_eq!(sorted.nnz(), matrix.nnz());

            // Row `i` of the result is row `order[i]` of the input, entry for entry.
            for i in 0..sorted.nr_rows() {
                let new = sorted.row(i).map(|e| (e.column, e.value)).collect::<Vec<_>>();
                let old = matrix.row(order.forward(i)).map(|e| (e.column, e.value)).collect::<Vec<_>>();
                assert_eq!(new, old);
            }
        }
    }
}

#[test]
fn identity_is_a_no_op() {
    let matrix = load("interleaved");
    let order = (0..matrix.nr_rows()).collect::<Vec<_>>();

    let permuted = matrix.apply_row_permutation(&order).unwrap();
    assert_eq!(permuted.entries(), matrix.entries());
}

#[test]
fn invalid_permutation_rejected() {
    let matrix = load("scenario");

    assert!(matches!(matrix.apply_row_permutation(&[2, 0]), Err(InvalidPermutation::Length { .. })));
    assert!(matches!(matrix.apply_row_permutation(&[2, 0, 2]), Err(InvalidPermutation::Repeated { .. })));
    assert!(matches!(matrix.apply_row_permutation(&[2, 0, 5]), Err(InvalidPermutation::OutOfRange { .. })));
}

#[test]
fn round_trip() {
    let directory = tempfile::tempdir().unwrap();

    for name in ["scenario", "interleaved", "pattern"] {
        let matrix = load(name);
        for method in SortMethod::ALL {
            let path = directory.path().join(format!("{}_{}.mtx", name, method));
            let sorted = sort_rows(&matrix, method);

            export(&sorted, &path).unwrap();
            assert_eq!(import(&path).unwrap(), sorted);
        }
    }
}

#[test]
fn malformed() {
    match import(&get_test_file_path("truncated")) {
        Err(ImportError::Parse(error)) => assert!(error.to_string().contains("declares 5 entries")),
        other => panic!("expected a parse error, got {:?}", other),
    }
    match import(&get_test_file_path("out_of_range")) {
        Err(ImportError::Parse(error)) => {
            assert!(error.to_string().contains("line 4: \"3 1 1.0\""));
            assert!(error.to_string().contains("not in the range [1, 2]"));
        },
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn command_line() {
    let directory = tempfile::tempdir().unwrap();
    let output = directory.path().join("sorted.mtx");

    let (success, _) = run(&get_test_file_path("scenario"), &output, Some("nnz"));
    assert!(success);
    assert_eq!(fs::read_to_string(&output).unwrap(), "%%MatrixMarket matrix coordinate real general
3 3 4
1 1 2
1 3 2
2 1 5
3 2 1
");

    let (success, _) = run(&get_test_file_path("scenario"), &output, None);
    assert!(success);
    assert_eq!(import(&output).unwrap(), load("scenario"));
}

#[test]
fn command_line_failures() {
    let directory = tempfile::tempdir().unwrap();
    let output = directory.path().join("sorted.mtx");

    let (success, stderr) = run(&get_test_file_path("scenario"), &output, Some("colsum"));
    assert!(!success);
    assert!(stderr.contains("colsum"));

    let (success, stderr) = run(&get_test_file_path("truncated"), &output, Some("nnz"));
    assert!(!success);
    assert!(stderr.contains("truncated.mtx"));

    let (success, _) = run(&directory.path().join("missing.mtx"), &output, None);
    assert!(!success);

    // Nothing was written by the failed runs.
    assert!(!output.exists());
}
