//! Errors
//!
//! Custom error types used throughout the `arbor` crate.
use thiserror::Error;

/// Errors that can occur while reading a dataset or evaluating a tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArborError {
    /// A character no lexer rule recognizes.
    #[error("unexpected character {0:?} on line {1}, column {2}")]
    UnexpectedCharacter(char, usize, usize),
    /// The current token does not match what the grammar requires.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// The `@data` marker never appeared.
    #[error("no data section found")]
    NoDataSection,
    /// A data row whose value count does not match the declared attributes.
    #[error("data row {row} has {found} values, expected {expected}")]
    RowMismatch { row: usize, expected: usize, found: usize },
    /// An example carries a value the tree never branched on.
    #[error("no branch for value {value:?} of attribute {attribute:?}")]
    UnknownValue { attribute: String, value: String },
}
