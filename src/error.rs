//! This module contains some error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](crate). This does not exclude errors that occur when parsing
/// a grid, see [SudokuParseError] for that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the dimensions specified for a created grid are
    /// invalid. This is the case if the size is less than 1 or not a perfect
    /// square, since every grid is divided into square boxes.
    InvalidDimensions,

    /// Indicates that the rows given for a grid do not form a square, that
    /// is, some row has a length different from the total number of rows.
    WrongShape,

    /// Indicates that some number is invalid for the size of the grid in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the size.
    OutOfBounds
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidDimensions =>
                write!(f, "grid size is not a positive perfect square"),
            SudokuError::WrongShape =>
                write!(f, "rows do not form a square grid"),
            SudokuError::InvalidNumber =>
                write!(f, "number is outside the valid range for this grid"),
            SudokuError::OutOfBounds =>
                write!(f, "cell coordinates lie outside the grid")
        }
    }
}

impl Error for SudokuError { }

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a [SudokuGrid]
/// code.
///
/// [SudokuGrid]: crate::SudokuGrid
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: size and
    /// cells (separated by ';'), so if the code does not contain exactly one
    /// semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the square of the size.
    WrongNumberOfCells,

    /// Indicates that the provided size is invalid, that is, zero or not a
    /// perfect square.
    InvalidDimensions,

    /// Indicates that one of the numbers (size or cell content) could not be
    /// parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than the grid size).
    InvalidNumber
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfParts =>
                write!(f, "expected exactly one ';' separating size and cells"),
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "number of cells does not match the grid size"),
            SudokuParseError::InvalidDimensions =>
                write!(f, "grid size is not a positive perfect square"),
            SudokuParseError::NumberFormatError =>
                write!(f, "malformed number"),
            SudokuParseError::InvalidNumber =>
                write!(f, "cell contains a number outside the valid range")
        }
    }
}

impl Error for SudokuParseError { }

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}
