//! Error types for the lexorder engine.

use crate::Digit;
use thiserror::Error;

/// All possible errors from the lexorder engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Construction errors
    #[error("symbol table contains duplicate symbols: {0}")]
    DuplicateSymbols(String),

    #[error("symbol table needs at least two symbols, got {0}")]
    TooFewSymbols(usize),

    // Conversion errors
    #[error("unknown symbol: {0:?}")]
    UnknownSymbol(char),

    #[error("digit {digit} out of range for base {base}")]
    DigitOutOfRange { digit: Digit, base: usize },

    #[error("number does not fit in 64 bits: {0}")]
    NumberOverflow(String),

    // Ordering precondition errors
    #[error("end key {end:?} sorts before start key {start:?}")]
    OrderViolation { start: String, end: String },

    #[error("start and end denote the same position")]
    IdenticalBounds,

    #[error("requested {requested} keys, at most {limit} per call")]
    TooManyKeys { requested: usize, limit: usize },

    // Arithmetic invariant violations
    #[error("digit sequences differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("subtraction ran out of digits to borrow from")]
    BorrowExhausted,

    #[error("interpolated value overflowed past the radix point")]
    AdditionOverflow,
}

impl Error {
    /// True for arithmetic invariant violations, which validated inputs never reach.
    ///
    /// Everything else is a caller error: a bad alphabet, foreign data, or
    /// neighbours passed in the wrong order.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            Error::LengthMismatch { .. } | Error::BorrowExhausted | Error::AdditionOverflow
        )
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
