//! Error types for tokenizing, parsing and checking sentences.

use thiserror::Error;

use crate::token::Token;

/// Fatal conditions raised while reading a pair of sentences.
///
/// None of these are recoverable: the component that detects one stops and
/// returns it, and no evaluation is attempted afterwards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Character that does not start any lexeme.
    #[error("invalid character {ch:?} at offset {offset}")]
    InvalidCharacter { ch: char, offset: usize },

    /// Sentence produced more tokens than allowed.
    #[error("maximum tokens exceeded ({0})")]
    TokenCapacityExceeded(usize),

    /// More distinct variable names than allowed across both sentences.
    #[error("maximum variables exceeded ({0})")]
    VariableCapacityExceeded(usize),

    /// Token found where an operand was expected.
    #[error("unexpected {found} at token {position}")]
    UnexpectedToken { found: Token, position: usize },

    /// Parenthesized group without its closing `)`.
    #[error("missing ')' at token {position}")]
    UnterminatedGroup { position: usize },

    /// Tokens after a complete sentence, when trailing input is rejected.
    #[error("trailing {found} at token {position}")]
    TrailingInput { found: Token, position: usize },

    /// Negations and groups nested deeper than allowed.
    #[error("maximum nesting depth exceeded ({0})")]
    DepthExceeded(usize),

    /// Parsed tree taller than allowed.
    #[error("maximum tree height exceeded ({0})")]
    HeightExceeded(usize),

    /// Storage for tokens or names could not be reserved.
    #[error("allocation failed")]
    AllocationFailure,
}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::AllocationFailure
    }
}
