//! # Error reporting for reading and writing of matrix files
//!
//! A collection of enums and structures describing any problems encountered during reading,
//! parsing and writing.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;
use std::path::PathBuf;

/// Result of a parsing step.
pub type ParseResult<T> = Result<T, ParseError>;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO {
        /// File that was being read.
        path: PathBuf,
        /// What went wrong.
        error: io::Error,
    },
    /// Contents of the file could not be parsed into a matrix.
    ///
    /// # Note
    ///
    /// This variant should only be created for syntactically incorrect files.
    Parse(ParseError),
    /// The file is syntactically correct, but describes something that isn't a matrix.
    ///
    /// For example, an entry might lie outside of the declared shape.
    Inconsistency(InconsistencyError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::IO { path, error } => {
                write!(f, "Could not read \"{}\": {}", path.display(), error)
            },
            ImportError::Parse(error) => error.fmt(f),
            ImportError::Inconsistency(error) => error.fmt(f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::IO { error, .. } => Some(error),
            ImportError::Parse(error) => Some(error),
            ImportError::Inconsistency(error) => Some(error),
        }
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

impl From<InconsistencyError> for ImportError {
    fn from(error: InconsistencyError) -> Self {
        ImportError::Inconsistency(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may recursively hold more ParseErrors to provide more detail. At the end of this chain, there
/// may be a file location containing a line number and line, at which the error was caused.
#[derive(Debug)]
pub struct ParseError {
    description: String,
    source: Option<ParseErrorSource>,
}

/// A `ParseErrorSource` can be used with a `ParseError` to describe its cause.
///
/// It can be either a file line number and line contents, another `ParseError` with its own
/// description and optionally, a cause, or an error from outside this crate (e.g. from parsing a
/// number).
#[derive(Debug)]
enum ParseErrorSource {
    FileLocation(usize, String),
    Nested(Box<ParseError>),
    Other(Box<dyn Error + Send + Sync>),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut descriptions = self.chain_description().into_iter();
        if let Some(first) = descriptions.next() {
            write!(f, "ParseError: {}", first)?;
        }
        for description in descriptions {
            write!(f, "\n{}", description)?;
        }

        Ok(())
    }
}

impl Error for ParseError {
    /// Find out what caused this error.
    ///
    /// # Return value
    ///
    /// `Option<&Error>` which may be a nested `ParseError` or a foreign error.
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(ParseErrorSource::Nested(error)) => Some(error.as_ref()),
            Some(ParseErrorSource::Other(error)) => Some(error.as_ref()),
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
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None, }
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
    pub fn with_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::FileLocation(line_number, line.to_string())),
        }
    }

    /// Wrap a new `ParseError` around this one.
    ///
    /// # Arguments
    ///
    /// * `description`: What went wrong one level up.
    ///
    /// # Return value
    ///
    /// A new `ParseError` instance with this instance as its cause.
    pub fn wrap(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::Nested(Box::new(self))),
        }
    }

    /// Wrap a `ParseError` around an error that didn't originate in this crate.
    ///
    /// # Arguments
    ///
    /// * `error`: Foreign error, for example from parsing a number.
    /// * `description`: What was being done when the error occurred.
    pub fn wrap_other(
        error: impl Error + Send + Sync + 'static,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::Other(Box::new(error))),
        }
    }

    /// Line number at which the error was caused, if known.
    ///
    /// Follows the chain of nested errors until a file location is found.
    pub fn line_number(&self) -> Option<usize> {
        match &self.source {
            Some(ParseErrorSource::FileLocation(line_number, _)) => Some(*line_number),
            Some(ParseErrorSource::Nested(error)) => error.line_number(),
            Some(ParseErrorSource::Other(_)) | None => None,
        }
    }

    /// Get all errors in the chain, leading up to this one.
    fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        match &self.source {
            Some(ParseErrorSource::FileLocation(line_number, line)) => {
                descriptions.push(format!("\tCaused at line\t{}:\t{}", line_number, line));
            },
            Some(ParseErrorSource::Nested(error)) => {
                descriptions.append(&mut error.chain_description());
            },
            Some(ParseErrorSource::Other(error)) => descriptions.push(format!("\t{}", error)),
            None => {},
        }

        descriptions
    }
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub type FileLocation<'a> = (usize, &'a str);

/// An `InconsistencyError` is created when the matrix is inconsistently represented in the file.
///
/// It is meant only for descriptions of matrices, and should not be used after the importing
/// process.
#[derive(Debug)]
pub struct InconsistencyError {
    description: String,
}

impl InconsistencyError {
    /// Wrap a text in an `InconsistencyError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), }
    }
}

impl Display for InconsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InconsistencyError: {}", self.description)
    }
}

impl Error for InconsistencyError {}

/// An `ExportError` is created when a matrix could not be written to its destination.
#[derive(Debug)]
pub struct ExportError {
    /// File that was being written.
    pub path: PathBuf,
    /// What went wrong.
    pub error: io::Error,
}

impl Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not write \"{}\": {}", self.path.display(), self.error)
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
