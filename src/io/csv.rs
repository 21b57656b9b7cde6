//! # Comma separated values
//!
//! One matrix row per record, read and written with the `csv` crate. Values are parsed with the
//! `FromStr` implementation of the scalar and written with its `Display` implementation, so for
//! rationals a line looks like `1/2,0,-3`. Quoted fields are accepted.
use std::io;
use std::io::Write;

use ::csv::{ErrorKind, ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};

use crate::data::linear_algebra::matrix::{Matrix, SparseMatrix};
use crate::data::linear_algebra::vector::SparseVector;
use crate::data::number_types::traits::Scalar;
use crate::io::error::{FileLocation, ParseError};

/// Parse a matrix from text.
///
/// Empty lines are skipped and whitespace around values is ignored.
///
/// # Errors
///
/// When a value can't be parsed, when the rows are not all of the same length, or when there are
/// no rows at all. The error contains the offending line, if there is one.
pub fn parse<F: Scalar>(text: &str) -> Result<SparseMatrix<F>, ParseError> {
    let lines = text.lines().collect::<Vec<_>>();

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows: Vec<SparseVector<F>> = Vec::new();
    let mut nr_columns = None;
    for record in reader.records() {
        let record = record.map_err(|error| {
            let description = match error.kind() {
                ErrorKind::UnequalLengths { expected_len, len, .. } => {
                    format!("expected {} values, found {}", expected_len, len)
                },
                _ => error.to_string(),
            };
            match error.position() {
                Some(position) => ParseError::with_file_location(description, locate(&lines, position.line())),
                None => ParseError::new(description),
            }
        })?;

        let row = parse_record(&record).map_err(|description| {
            let line_number = record.position().map_or(0, |position| position.line());
            ParseError::with_file_location(description, locate(&lines, line_number))
        })?;

        nr_columns = Some(row.len());
        rows.push(row.into_iter().collect());
    }

    let nr_columns = nr_columns.ok_or_else(|| ParseError::new("no rows found"))?;
    SparseMatrix::from_rows(rows, nr_columns)
        .map_err(|error| ParseError::new(error.to_string()))
}

/// Find the line a record starts on.
///
/// A record position may point at the empty lines that precede the record.
fn locate<'a>(lines: &[&'a str], line_number: u64) -> FileLocation<'a> {
    let start = line_number.saturating_sub(1) as usize;
    lines.iter()
        .enumerate()
        .skip(start)
        .find(|(_, line)| !line.is_empty())
        .map_or((line_number, ""), |(index, line)| (index as u64 + 1, *line))
}

fn parse_record<F: Scalar>(record: &StringRecord) -> Result<Vec<F>, String> {
    record.iter()
        .map(|field| field.parse::<F>()
            .map_err(|error| format!("invalid value \"{}\": {}", field, error)))
        .collect()
}

/// Write a matrix as comma separated values.
///
/// Every row is written, including rows that are entirely zero.
pub fn write<F: Scalar, M: Matrix<F>, W: Write>(matrix: &M, writer: &mut W) -> io::Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    let dense = matrix.to_dense();
    for i in 0..dense.nr_rows() {
        csv_writer.write_record(dense.row(i).iter().map(ToString::to_string))?;
    }

    csv_writer.flush()
}
