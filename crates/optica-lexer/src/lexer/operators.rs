//! Operator scanning documentation.
//!
//! This module documents the operator scanning logic in `scanner.rs`.
//! Operators are matched by maximal munch: the two-character table is
//! consulted before the single-character table.
//!
//! ## Two-Character Operators
//!
//! | Text | Kind |
//! |------|------|
//! | `..` | `DotDot` |
//! | `<=` | `Le` |
//! | `>=` | `Ge` |
//! | `==` | `EqEq` |
//! | `!=` | `NotEq` |
//!
//! ## Single-Character Operators
//!
//! | Text | Kind | Text | Kind |
//! |------|------|------|------|
//! | `=` | `Eq` | `{` | `LeftBrace` |
//! | `<` | `Lt` | `}` | `RightBrace` |
//! | `>` | `Gt` | `[` | `LeftBracket` |
//! | `+` | `Plus` | `]` | `RightBracket` |
//! | `-` | `Minus` | `(` | `LeftParen` |
//! | `*` | `Star` | `)` | `RightParen` |
//! | `/` | `Slash` | `,` | `Comma` |
//! |     |         | `:` | `Colon` |
//!
//! `!` and `.` only exist as the first half of `!=` and `..`; alone they
//! are unrecognized characters.
//!
//! ## Lookahead Logic
//!
//! ```text
//! // For input "<=5"
//! scan_symbol('<'):
//!   peek_nth(1) returns '='  -> ('<', '=') is in the two-character table
//!   advance() twice
//!   return Le
//! ```
//!
//! ## Range vs. Real Literal
//!
//! `1..5` must scan as `INTEGER DOTDOT INTEGER`. The number scanner only
//! consumes a `.` when a digit follows it, so the dot is left for the
//! operator scanner, which then sees `..`.
//!
//! ## Comments
//!
//! `#` starts a comment that runs to the end of the line. The newline
//! itself is not part of the comment and still produces `NEWLINE`.

// This module serves as documentation. The actual implementation is in scanner.rs.
