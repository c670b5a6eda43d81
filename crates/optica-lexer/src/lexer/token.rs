//! Token definitions for the Optica lexer.

use std::fmt;

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at `offset`, used by synthetic tokens.
    pub fn empty(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A token produced by the lexer.
///
/// `line` and `column` are 1-based and point at the token's first
/// character. Columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The kind of token, carrying its decoded value
    pub kind: TokenKind,
    /// The byte range in the source code
    pub span: Span,
    /// Source line (1-based)
    pub line: usize,
    /// Source column (1-based)
    pub column: usize,
    /// The exact source slice; empty for INDENT, DEDENT and END
    pub raw_text: String,
}

impl Token {
    /// Creates a new token.
    pub fn new(
        kind: TokenKind,
        span: Span,
        line: usize,
        column: usize,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            span,
            line,
            column,
            raw_text: raw_text.into(),
        }
    }

    /// Creates a synthetic token with an empty span and no raw text.
    pub fn synthetic(kind: TokenKind, offset: usize, line: usize, column: usize) -> Self {
        Self::new(kind, Span::empty(offset), line, column, String::new())
    }

    /// Returns the `(line, column)` pair for ordering checks.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Integer(n) => write!(f, "{}({})", self.kind, n),
            TokenKind::Real(n) => write!(f, "{}({:?})", self.kind, n),
            TokenKind::String(s) => write!(f, "{}({:?})", self.kind, s),
            TokenKind::Identifier(s) => write!(f, "{}({})", self.kind, s),
            TokenKind::Indent(width) => write!(f, "{}({})", self.kind, width),
            kind => write!(f, "{}", kind),
        }?;
        write!(f, " @ L{}:{}", self.line, self.column)
    }
}

/// The different kinds of tokens in Optica.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Literals
    /// Integer literal
    Integer(i64),
    /// Real literal (digits, a dot, digits)
    Real(f64),
    /// String literal with escapes resolved
    String(String),

    /// Identifier
    Identifier(String),

    // Keywords
    /// `model`
    Model,
    /// `set`
    Set,
    /// `param`
    Param,
    /// `var`
    Var,
    /// `maximize`
    Maximize,
    /// `minimize`
    Minimize,
    /// `subject`
    Subject,
    /// `to`
    To,
    /// `forall`
    Forall,
    /// `sum`
    Sum,
    /// `in`
    In,
    /// `binary`
    Binary,
    /// `int`
    Int,
    /// `real` used as a type name
    RealType,

    // Comparison
    /// =
    Eq,
    /// ==
    EqEq,
    /// !=
    NotEq,
    /// <
    Lt,
    /// >
    Gt,
    /// <=
    Le,
    /// >=
    Ge,

    // Arithmetic
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,

    /// ..
    DotDot,

    // Punctuation
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// :
    Colon,

    // Structural
    /// End of a source line
    Newline,
    /// Start of a deeper block; carries the new indentation width
    Indent(usize),
    /// End of a block
    Dedent,
    /// End of input, always the last token
    End,
}

impl TokenKind {
    /// Resolves an identifier against the keyword table.
    ///
    /// Matching is case-sensitive and exact: `sett` is not `set`.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "model" => TokenKind::Model,
            "set" => TokenKind::Set,
            "param" => TokenKind::Param,
            "var" => TokenKind::Var,
            "maximize" => TokenKind::Maximize,
            "minimize" => TokenKind::Minimize,
            "subject" => TokenKind::Subject,
            "to" => TokenKind::To,
            "forall" => TokenKind::Forall,
            "sum" => TokenKind::Sum,
            "in" => TokenKind::In,
            "binary" => TokenKind::Binary,
            "int" => TokenKind::Int,
            "real" => TokenKind::RealType,
            _ => return None,
        };
        Some(kind)
    }

    /// Looks up a two-character operator.
    pub fn double_symbol(first: char, second: char) -> Option<TokenKind> {
        let kind = match (first, second) {
            ('.', '.') => TokenKind::DotDot,
            ('<', '=') => TokenKind::Le,
            ('>', '=') => TokenKind::Ge,
            ('=', '=') => TokenKind::EqEq,
            ('!', '=') => TokenKind::NotEq,
            _ => return None,
        };
        Some(kind)
    }

    /// Looks up a single-character operator or punctuation mark.
    pub fn single_symbol(ch: char) -> Option<TokenKind> {
        let kind = match ch {
            '=' => TokenKind::Eq,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns the canonical upper-case name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Integer(_) => "INTEGER",
            TokenKind::Real(_) => "REAL",
            TokenKind::String(_) => "STRING",
            TokenKind::Identifier(_) => "IDENTIFIER",
            TokenKind::Model => "MODEL",
            TokenKind::Set => "SET",
            TokenKind::Param => "PARAM",
            TokenKind::Var => "VAR",
            TokenKind::Maximize => "MAXIMIZE",
            TokenKind::Minimize => "MINIMIZE",
            TokenKind::Subject => "SUBJECT",
            TokenKind::To => "TO",
            TokenKind::Forall => "FORALL",
            TokenKind::Sum => "SUM",
            TokenKind::In => "IN",
            TokenKind::Binary => "BINARY",
            TokenKind::Int => "INT",
            TokenKind::RealType => "REAL_TYPE",
            TokenKind::Eq => "EQ",
            TokenKind::EqEq => "EQEQ",
            TokenKind::NotEq => "NEQ",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Le => "LE",
            TokenKind::Ge => "GE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::DotDot => "DOTDOT",
            TokenKind::LeftBrace => "LBRACE",
            TokenKind::RightBrace => "RBRACE",
            TokenKind::LeftBracket => "LBRACKET",
            TokenKind::RightBracket => "RBRACKET",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent(_) => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::End => "END",
        }
    }

    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Model
                | TokenKind::Set
                | TokenKind::Param
                | TokenKind::Var
                | TokenKind::Maximize
                | TokenKind::Minimize
                | TokenKind::Subject
                | TokenKind::To
                | TokenKind::Forall
                | TokenKind::Sum
                | TokenKind::In
                | TokenKind::Binary
                | TokenKind::Int
                | TokenKind::RealType
        )
    }

    /// Returns true if this token is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Integer(_) | TokenKind::Real(_) | TokenKind::String(_)
        )
    }

    /// Returns true if this token is an operator or punctuation mark.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Le
                | TokenKind::Ge
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::DotDot
                | TokenKind::LeftBrace
                | TokenKind::RightBrace
                | TokenKind::LeftBracket
                | TokenKind::RightBracket
                | TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::Comma
                | TokenKind::Colon
        )
    }

    /// Returns true for NEWLINE, INDENT, DEDENT and END.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Indent(_) | TokenKind::Dedent | TokenKind::End
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
