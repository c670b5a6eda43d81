//! Lexical analysis (tokenization) for Optica source code.
//!
//! The lexer transforms Optica source text into a flat token sequence
//! that can be consumed by a parser. Block structure is expressed by
//! indentation, so the lexer also synthesizes `INDENT`/`DEDENT` markers.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that drives tokenization
//! - `cursor.rs` - Character cursor with line/column tracking
//! - `indent.rs` - The indentation stack
//! - `token.rs` - `Token` and `TokenKind` definitions
//!
//! ## Documentation Submodules
//!
//! - `operators` - Operator and punctuation scanning
//! - `literals` - Number, string, and identifier literals
//!
//! ## Usage
//!
//! ```rust
//! use optica_lexer::lexer::{Scanner, TokenKind};
//!
//! let tokens = Scanner::new("set SLOTS = 1..5").tokenize().unwrap();
//!
//! for token in &tokens {
//!     println!("{:?}", token.kind);
//! }
//! assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::End));
//! ```

mod cursor;
mod indent;
mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use indent::TAB_WIDTH;
pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};
