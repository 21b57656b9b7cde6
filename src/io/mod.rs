//! # Reading and writing of matrices
//!
//! This module provides read and write functionality for matrix formats. Currently, only comma
//! separated values are supported.
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::data::linear_algebra::matrix::{Matrix, SparseMatrix};
use crate::data::number_types::traits::Scalar;
use crate::error::LinalgError;
use crate::io::error::ImportError;

pub mod csv;
pub mod error;

/// Import a matrix from a file.
///
/// Currently only supports files with the `csv` extension.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, or the contents are not a
/// matrix, a `MalformedInput` error is returned.
pub fn import<F: Scalar>(file_path: &Path) -> Result<SparseMatrix<F>, LinalgError> {
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("csv" | "CSV") => import_csv(file_path),
            Some(extension_string) => Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            )).into()),
            None => Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            )).into()),
        },
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        )).into()),
    }
}

/// Import a matrix from a file with comma separated values, regardless of its extension.
pub fn import_csv<F: Scalar>(file_path: &Path) -> Result<SparseMatrix<F>, LinalgError> {
    let mut text = String::new();
    File::open(file_path)
        .map_err(ImportError::IO)?
        .read_to_string(&mut text)
        .map_err(ImportError::IO)?;

    parse_csv(&text)
}

/// Parse a matrix from comma separated values, see `csv::parse`.
pub fn parse_csv<F: Scalar>(text: &str) -> Result<SparseMatrix<F>, LinalgError> {
    let matrix = csv::parse(text).map_err(ImportError::from)?;
    Ok(matrix)
}

/// Write a matrix to a file as comma separated values.
///
/// An existing file is overwritten.
pub fn export_csv<F: Scalar>(matrix: &impl Matrix<F>, file_path: &Path) -> Result<(), LinalgError> {
    let file = File::create(file_path).map_err(ImportError::IO)?;
    write_csv(matrix, &mut BufWriter::new(file))
}

/// Write a matrix as comma separated values, see `csv::write`.
pub fn write_csv<F: Scalar>(matrix: &impl Matrix<F>, writer: &mut impl Write) -> Result<(), LinalgError> {
    csv::write::<F, _, _>(matrix, writer).map_err(ImportError::IO)?;

    Ok(())
}
