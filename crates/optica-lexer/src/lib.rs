// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # optica-lexer
//!
//! The tokenizer for Optica, a small declarative language for
//! optimization models (sets, parameters, decision variables,
//! objectives and constraints).
//!
//! ## Overview
//!
//! Optica delimits blocks with indentation, so besides literals,
//! identifiers, keywords and operators the lexer emits `NEWLINE`,
//! `INDENT` and `DEDENT` markers, and terminates every token sequence
//! with exactly one `END`. A parser can treat the output like a
//! brace-delimited stream.
//!
//! ## Quick Start
//!
//! ```rust
//! use optica_lexer::{tokenize, lexer::TokenKind};
//!
//! let tokens = tokenize("forall s in STUDENTS:\n    x[s] <= 1\n")?;
//! assert_eq!(tokens[0].kind, TokenKind::Forall);
//! assert!(tokens.iter().any(|t| matches!(t.kind, TokenKind::Indent(4))));
//! # Ok::<(), optica_lexer::LexicalError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod lexer;

// Re-exports for convenience
pub use error::{LexicalError, LexicalErrorKind, Result};
pub use lexer::{Scanner, Token, TokenKind};

/// Tokenizes a complete source text.
///
/// Returns the full token sequence, whose last element is always
/// [`TokenKind::End`], or the first lexical error encountered.
///
/// # Examples
///
/// ```rust
/// use optica_lexer::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("1..5")?.into_iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Integer(1), TokenKind::DotDot, TokenKind::Integer(5), TokenKind::End]
/// );
/// # Ok::<(), optica_lexer::LexicalError>(())
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).tokenize()
}

/// Tokenizes independent sources on the rayon thread pool.
///
/// Each source gets its own scanner; results are returned in input
/// order.
#[cfg(feature = "parallel")]
pub fn tokenize_all<S>(sources: &[S]) -> Vec<Result<Vec<Token>>>
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    sources
        .par_iter()
        .map(|source| tokenize(source.as_ref()))
        .collect()
}
