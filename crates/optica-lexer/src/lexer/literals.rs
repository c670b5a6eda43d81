//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//! The lexer handles numeric, string, and identifier literals.
//!
//! ## Numeric Literals
//!
//! Method: `scan_number`
//!
//! ```text
//! 42        -> INTEGER(42)
//! 2.75      -> REAL(2.75)
//! 1..5      -> INTEGER(1) DOTDOT INTEGER(5)
//! 1.        -> INTEGER(1), then '.' is rejected
//! ```
//!
//! Only ASCII digits are accepted. A `.` begins a fractional part only
//! when a digit follows it. Integers are `i64`; a longer digit run is a
//! `NumberOutOfRange` error, as is a real too large to be a finite `f64`.
//! There is no sign, exponent, or base prefix:
//! `-3` is `MINUS INTEGER(3)`.
//!
//! ## String Literals
//!
//! Method: `scan_string`
//!
//! ### Quote Styles
//!
//! ```text
//! 'single'  -> Single quotes
//! "double"  -> Double quotes
//! ```
//!
//! ### Escape Sequences
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\n` | Newline |
//! | `\t` | Tab |
//! | `\\` | Backslash |
//! | `\'` | Single quote |
//! | `\"` | Double quote |
//!
//! Any other escaped character is kept as-is (`\q` is `q`).
//!
//! ### Errors
//!
//! - End of input before the closing quote: `UnterminatedString`, at the
//!   opening quote.
//! - A raw newline before the closing quote: `NewlineInString`, at the
//!   newline.
//!
//! ## Identifiers and Keywords
//!
//! Method: `scan_identifier`
//!
//! ### Identifier Rules
//!
//! - Start: letters, `_`
//! - Continue: Start chars + digits
//!
//! ### Keyword Detection
//!
//! The whole identifier is looked up, so keywords never match a prefix:
//!
//! ```text
//! "set"   -> TokenKind::Set
//! "sett"  -> TokenKind::Identifier("sett")
//! "real"  -> TokenKind::RealType
//! "Set"   -> TokenKind::Identifier("Set")
//! ```

// This module serves as documentation. The actual implementation is in scanner.rs.
