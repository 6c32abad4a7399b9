//! Error types shared by the validator and both solvers.

use thiserror::Error;

/// Structural defects in a raw field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or the first row has no cells.
    #[error("field is empty")]
    Empty,

    /// A row whose length differs from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell that is neither `.` nor `X`.
    #[error("invalid character {found:?} at row {row}, column {column}")]
    InvalidCharacter {
        row: usize,
        column: usize,
        found: char,
    },
}

/// Errors surfaced by the solver entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] GridError),

    /// The exhaustive solver encodes each candidate as the low `moves` bits of
    /// a counter, which only works up to `max` moves.
    #[error("candidate space too large: n = {moves} exceeds the limit of {max}")]
    CandidateSpaceTooLarge { moves: usize, max: usize },
}

impl SolveError {
    /// True for malformed-field errors, false for size-limit errors.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SolveError::InvalidInput(_))
    }
}
