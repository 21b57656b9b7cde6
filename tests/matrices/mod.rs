//! # Small matrices stored as comma separated values
//!
//! Each file holds one matrix; the expected results of the operations on it are written out in
//! the tests.
use std::path::PathBuf;

/// # Reading and solving
mod test;

/// Folder where the csv files are stored.
fn problem_file_directory() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("matrices")
}

/// Compute the path of a matrix file, based on its name.
///
/// # Arguments
///
/// * `name`: Matrix name without extension.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("csv")
}
