//! # Error reporting for reading of problem files
//!
//! Reading either succeeds or fails: there is no recovery and no partial model. A failure is
//! either an IO problem or a parse problem. Parse errors describe what was expected, but carry
//! no position in the file.
use std::error::Error;
use std::fmt;
use std::io;

use thiserror::Error;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum Import {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read the problem file: {0}")]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a model.
    #[error(transparent)]
    Parse(#[from] Parse),
}

/// A `Parse` error represents all errors encountered during parsing.
///
/// It may recursively hold more `Parse` errors to provide more detail.
#[derive(Debug, PartialEq, Eq)]
pub struct Parse {
    description: String,
    source: Option<Box<Parse>>,
}

/// Result of a parsing step.
pub type ParseResult<T> = Result<T, Parse>;

impl Parse {
    /// Create a new `Parse` error with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None }
    }

    /// Wrap a new `Parse` error around this one.
    ///
    /// # Arguments
    ///
    /// * `description`: Context in which this error occurred.
    #[must_use]
    pub fn wrap(self, description: impl Into<String>) -> Self {
        Self { description: description.into(), source: Some(Box::new(self)) }
    }

    /// Description of this error, without its causes.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Descriptions of this error and all errors leading up to it, outermost first.
    fn chain_description(&self) -> Vec<&str> {
        let mut descriptions = vec![self.description.as_str()];
        if let Some(source) = &self.source {
            descriptions.extend(source.chain_description());
        }

        descriptions
    }
}

impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParseError: {}", self.chain_description().join(": "))
    }
}

impl Error for Parse {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|error| error as &(dyn Error + 'static))
    }
}
