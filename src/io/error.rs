//! # Error reporting for reading of vectors and matrices
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;

use crate::data::linear_algebra::error::LinearAlgebraError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The reading of the input couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the input could not be parsed into a vector or matrix.
    Parse(ParseError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::IO(error) => error.fmt(f),
            ImportError::Parse(error) => error.fmt(f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
        }
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// At the end of its chain, there may be a location containing a line number and line at which the
/// error was caused, or the container error that rejected the parsed values.
#[derive(Debug)]
pub struct ParseError {
    description: String,
    source: Option<ParseErrorSource>,
}

/// A `ParseErrorSource` can be used with a `ParseError` to describe its cause.
#[derive(Debug)]
enum ParseErrorSource {
    FileLocation(u64, String),
    Nested(Box<ParseError>),
    Container(LinearAlgebraError),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.chain_description().join("\n"))
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(ParseErrorSource::Nested(error)) => Some(error.as_ref()),
            Some(ParseErrorSource::Container(error)) => Some(error),
            Some(ParseErrorSource::FileLocation(..)) | None => None,
        }
    }
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    ///
    /// # Return value
    ///
    /// * A `ParseError` instance without a cause.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), source: None, }
    }

    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    ///
    /// # Return value
    ///
    /// A new `ParseError` instance with a `FileLocation` cause.
    pub fn with_file_location(
        description: impl Into<String>,
        file_location: FileLocation,
    ) -> ParseError {
        let (line_number, line) = file_location;
        ParseError {
            description: description.into(),
            source: Some(ParseErrorSource::FileLocation(line_number, line.to_string())),
        }
    }

    /// Wrap a new `ParseError` around an existing one.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `parse_error`: What caused this `ParseError`.
    ///
    /// # Return value
    ///
    /// A new `ParseError` instance with a `ParseError` cause.
    pub fn with_cause(description: impl Into<String>, parse_error: ParseError) -> ParseError {
        ParseError {
            description: description.into(),
            source: Some(ParseErrorSource::Nested(Box::new(parse_error))),
        }
    }

    /// Wrap a new `ParseError` around a container that rejected the parsed values.
    pub fn with_container_error(description: impl Into<String>, error: LinearAlgebraError) -> ParseError {
        ParseError {
            description: description.into(),
            source: Some(ParseErrorSource::Container(error)),
        }
    }

    /// The line number at the end of the chain of causes, if any.
    pub fn line_number(&self) -> Option<u64> {
        match &self.source {
            Some(ParseErrorSource::FileLocation(line_number, _)) => Some(*line_number),
            Some(ParseErrorSource::Nested(error)) => error.line_number(),
            Some(ParseErrorSource::Container(_)) | None => None,
        }
    }

    /// Get all errors in the chain, leading up to this one.
    ///
    /// # Return value
    ///
    /// The descriptions, starting with that of this error.
    fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        if let Some(ref source) = self.source {
            match source {
                ParseErrorSource::FileLocation(line_number, line) => {
                    descriptions.push(format!("\tCaused at line\t{}:\t{}", line_number, line));
                }
                ParseErrorSource::Nested(error) => {
                    descriptions.append(&mut error.chain_description());
                }
                ParseErrorSource::Container(error) => {
                    descriptions.push(format!("\tRejected:\t{}", error));
                }
            }
        }

        descriptions
    }
}

/// A `FileLocation` references a line in the input by its line number, counting from one. It
/// contains a reference to the line itself.
pub(super) type FileLocation<'a> = (u64, &'a str);
