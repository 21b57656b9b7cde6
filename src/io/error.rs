//! # Error reporting for reading of matrix files
//!
//! A collection of enums and structures describing any problems encountered during reading,
//! parsing and writing.
use std::io;

use thiserror::Error;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file to read isn't found, or the reading or writing of a file couldn't start or was
    /// interrupted.
    #[error("could not read or write: {0}")]
    IO(#[from] io::Error),
    /// The file extension doesn't correspond to a known format.
    #[error("{0}")]
    FileExtension(String),
    /// Contents of the file could not be parsed into a matrix.
    ///
    /// This variant is created for syntactically incorrect files and for files of which the rows
    /// don't have a consistent length.
    #[error("could not parse: {0}")]
    Parse(#[from] ParseError),
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may recursively hold another `ParseError` to provide more detail. At the end of this chain,
/// there may be a file location containing a line number and line, at which the error was caused.
#[derive(Debug, Error)]
#[error("{description}")]
pub struct ParseError {
    description: String,
    location: Option<(u64, String)>,
    #[source]
    cause: Option<Box<ParseError>>,
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None, cause: None }
    }

    /// Create a new `ParseError` instance with a file location.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A line number and line that caused the error.
    pub fn with_file_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;
        Self {
            description: description.into(),
            location: Some((line_number, line.to_string())),
            cause: None,
        }
    }

    /// Wrap a new `ParseError` around an existing one.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `parse_error`: What caused this `ParseError`.
    pub fn with_cause(description: impl Into<String>, parse_error: ParseError) -> Self {
        Self {
            description: description.into(),
            location: None,
            cause: Some(Box::new(parse_error)),
        }
    }

    /// Line number and contents of the line where the error was detected, if known.
    ///
    /// Searches the chain of causes.
    pub fn file_location(&self) -> Option<(u64, &str)> {
        match (&self.location, &self.cause) {
            (Some((line_number, line)), _) => Some((*line_number, line.as_str())),
            (None, Some(cause)) => cause.file_location(),
            (None, None) => None,
        }
    }

    /// Get all errors in the chain, leading up to this one.
    pub fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        if let Some((line_number, line)) = &self.location {
            descriptions.push(format!("\tCaused at line\t{}:\t{}", line_number, line));
        }
        if let Some(cause) = &self.cause {
            descriptions.append(&mut cause.chain_description());
        }

        descriptions
    }
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub type FileLocation<'a> = (u64, &'a str);

#[cfg(test)]
mod test {
    use std::error::Error;

    use crate::io::error::ParseError;

    #[test]
    fn chain() {
        let inner = ParseError::with_file_location("unknown literal \"x\"", (3, "1,x"));
        let outer = ParseError::with_cause("could not read row", inner);

        assert_eq!(outer.to_string(), "could not read row");
        assert_eq!(outer.file_location(), Some((3, "1,x")));
        assert!(outer.source().is_some());
        assert_eq!(
            outer.chain_description(),
            vec![
                "could not read row".to_string(),
                "unknown literal \"x\"".to_string(),
                "\tCaused at line\t3:\t1,x".to_string(),
            ],
        );
    }
}
