//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Errors that can occur while generating a board. See
/// [Generator](../generator/struct.Generator.html) for the operations that
/// raise them.
#[derive(Debug, Eq, PartialEq)]
pub enum GenError {

    /// An error that is raised when the entire search space has been
    /// exhausted without finding a complete assignment. This cannot happen
    /// for a board with the standard 9x9 peer geometry, but degenerate peer
    /// structures can provoke it.
    Unsatisfiable
}

/// Syntactic sugar for `Result<V, GenError>`.
pub type GenResult<V> = Result<V, GenError>;

/// An enumeration of the errors that may occur when parsing a board code.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {

    /// Indicates that the code does not contain exactly 81 cell entries.
    WrongNumberOfCells,

    /// Indicates that one of the entries in a pipe-delimited code could not
    /// be parsed as a number.
    NumberFormatError,

    /// Indicates that a cell entry is a number outside the range 0 to 9.
    InvalidDigit
}

/// Syntactic sugar for `Result<V, ParseError>`.
pub type ParseResult<V> = Result<V, ParseError>;

impl From<ParseIntError> for ParseError {
    fn from(_: ParseIntError) -> Self {
        ParseError::NumberFormatError
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongNumberOfCells =>
                write!(f, "code does not contain exactly 81 cells"),
            ParseError::NumberFormatError =>
                write!(f, "cell entry is not a number"),
            ParseError::InvalidDigit =>
                write!(f, "cell entry is outside the range 0 to 9")
        }
    }
}
