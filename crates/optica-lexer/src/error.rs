//! Error types for the Optica lexer

use thiserror::Error;

/// Result type for lexer operations
pub type Result<T> = std::result::Result<T, LexicalError>;

/// A fatal scanning error with the 1-based position it was detected at.
///
/// Every error aborts the scan; there is no recovery and at most one
/// error is reported per call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{kind} at line {line}, column {column}")]
pub struct LexicalError {
    /// What went wrong
    pub kind: LexicalErrorKind,
    /// Source line (1-based)
    pub line: usize,
    /// Source column (1-based)
    pub column: usize,
}

impl LexicalError {
    /// Creates a new error at the given position.
    pub fn new(kind: LexicalErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// The human-readable message without the position suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// The kinds of lexical errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LexicalErrorKind {
    /// Input ended before the closing quote; reported at the opening quote
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A raw newline appeared before the closing quote; reported at the newline
    #[error("unterminated string literal: newline before closing quote")]
    NewlineInString,

    /// A character that starts no token
    #[error("unrecognized character {0:?}")]
    UnrecognizedCharacter(char),

    /// A dedent landed between two open indentation levels
    #[error("inconsistent dedent: width {width} does not match enclosing level {enclosing}")]
    InconsistentDedent {
        /// Width of the offending line
        width: usize,
        /// Nearest open level below that width
        enclosing: usize,
    },

    /// A numeric literal that does not fit its type
    #[error("numeric literal out of range")]
    NumberOutOfRange,
}

impl LexicalErrorKind {
    /// Returns true for both ways a string literal can be left open.
    pub fn is_unterminated_string(&self) -> bool {
        matches!(
            self,
            LexicalErrorKind::UnterminatedString | LexicalErrorKind::NewlineInString
        )
    }
}
