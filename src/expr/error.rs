//! Failure kinds for validation and evaluation.

use serde::Serialize;
use thiserror::Error;

/// Every way an evaluation can fail.
///
/// The `Display` text is the short uppercase message shown on the calculator
/// display in place of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Error)]
pub enum CalcError {
    /// The equation ends in an operator or a bare decimal point.
    #[error("INCOMPLETE EQUATION")]
    IncompleteEquation,

    /// A divisor is a literal zero or evaluates to zero.
    #[error("DIVISION BY ZERO")]
    DivisionByZero,

    /// Two operators follow each other.
    #[error("INVALID OPERATOR SEQUENCE")]
    InvalidOperatorSequence,

    /// The equation does not parse.
    #[error("SYNTAX ERROR")]
    SyntaxError,

    /// The magnitude of the result exceeds 1e100.
    #[error("NUMBER TOO LARGE")]
    NumberTooLarge,

    /// The result left the real line. Real four-operator arithmetic never
    /// produces this; it is kept so front-ends can map every failure.
    #[error("COMPLEX RESULT")]
    ComplexResult,

    /// Anything else, including NaN results and unknown characters.
    #[error("INVALID INPUT")]
    InvalidInput,
}
