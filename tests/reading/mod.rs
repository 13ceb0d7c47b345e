//! # Reading problem files from disk
//!
//! Small problems covering the features of the LP format, one per file.
use std::path::{Path, PathBuf};

/// # Reading and checking
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("problem_files")
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("lp")
}
