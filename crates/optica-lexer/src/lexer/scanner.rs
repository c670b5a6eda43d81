//! The scanner that produces tokens from source text.

use tracing::debug;

use super::cursor::Cursor;
use super::indent::{IndentChange, IndentStack, blank_width};
use super::{Span, Token, TokenKind};
use crate::error::{LexicalError, LexicalErrorKind, Result};

/// A scanner that tokenizes Optica source code.
///
/// A scanner is single-use: [`Scanner::tokenize`] consumes it and
/// returns the whole token sequence, always terminated by exactly one
/// [`TokenKind::End`].
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    indents: IndentStack,
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            indents: IndentStack::new(),
            finished: false,
        }
    }

    /// Scans the entire source.
    ///
    /// Fails on the first lexical error; no partial token list is
    /// returned.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        while !self.finished {
            if let Err(err) = self.scan_step(&mut tokens) {
                debug!(%err, "scan aborted");
                return Err(err);
            }
        }

        debug!(
            tokens = tokens.len(),
            lines = self.cursor.line(),
            "scan finished"
        );
        Ok(tokens)
    }

    /// Appends the tokens of one lexical step to `out`.
    ///
    /// A step yields a single token, a run of INDENT/DEDENT markers, or
    /// at end of input the pending DEDENTs followed by END.
    fn scan_step(&mut self, out: &mut Vec<Token>) -> Result<()> {
        if self.cursor.at_line_start() && !matches!(self.cursor.current(), None | Some('\n')) {
            let before = out.len();
            self.scan_indentation(out)?;
            self.cursor.clear_line_start();
            if out.len() > before {
                return Ok(());
            }
        }

        self.skip_blanks();
        if self.cursor.current() == Some('#') {
            self.skip_comment();
        }
        self.skip_blanks();

        let Some(ch) = self.cursor.current() else {
            self.finish(out);
            return Ok(());
        };

        let token = match ch {
            '\n' => {
                let (start, line, column) = self.mark();
                self.cursor.advance();
                self.token_from(TokenKind::Newline, start, line, column)
            }

            // String literals
            '"' | '\'' => self.scan_string(ch)?,

            // Numbers
            '0'..='9' => self.scan_number()?,

            // Identifiers and keywords
            _ if is_ident_start(ch) => self.scan_identifier(),

            // Operators and punctuation
            _ => self.scan_symbol(ch)?,
        };

        out.push(token);
        Ok(())
    }

    /// Measures the leading blanks of a line and emits INDENT/DEDENT.
    ///
    /// Lines holding only blanks or a comment leave the stack untouched.
    fn scan_indentation(&mut self, out: &mut Vec<Token>) -> Result<()> {
        let (start, line, column) = self.mark();

        let mut width = 0;
        while let Some(w) = self.cursor.current().and_then(blank_width) {
            width += w;
            self.cursor.advance();
        }

        if matches!(self.cursor.current(), None | Some('\n' | '#')) {
            return Ok(());
        }

        match self.indents.adjust(width) {
            Ok(IndentChange::Unchanged) => {}
            Ok(IndentChange::Indent(width)) => {
                out.push(Token::synthetic(TokenKind::Indent(width), start, line, column));
            }
            Ok(IndentChange::Dedent(closed)) => {
                for _ in 0..closed {
                    out.push(Token::synthetic(TokenKind::Dedent, start, line, column));
                }
            }
            Err(mismatch) => {
                return Err(LexicalError::new(
                    LexicalErrorKind::InconsistentDedent {
                        width: mismatch.width,
                        enclosing: mismatch.enclosing,
                    },
                    line,
                    column,
                ));
            }
        }

        Ok(())
    }

    /// Closes every open block and emits the terminal END.
    fn finish(&mut self, out: &mut Vec<Token>) {
        let (offset, line, column) = self.mark();

        for _ in 0..self.indents.close_all() {
            out.push(Token::synthetic(TokenKind::Dedent, offset, line, column));
        }
        out.push(Token::synthetic(TokenKind::End, offset, line, column));
        self.finished = true;
    }

    fn skip_blanks(&mut self) {
        self.cursor.eat_while(|ch| ch == ' ' || ch == '\t');
    }

    /// Skips from `#` up to, but not including, the end of the line.
    fn skip_comment(&mut self) {
        self.cursor.eat_while(|ch| ch != '\n');
    }

    fn scan_string(&mut self, quote: char) -> Result<Token> {
        let (start, line, column) = self.mark();
        self.cursor.advance();

        let mut value = String::new();

        loop {
            match self.cursor.current() {
                None => {
                    return Err(LexicalError::new(
                        LexicalErrorKind::UnterminatedString,
                        line,
                        column,
                    ));
                }
                Some('\n') => {
                    return Err(LexicalError::new(
                        LexicalErrorKind::NewlineInString,
                        self.cursor.line(),
                        self.cursor.column(),
                    ));
                }
                Some(ch) if ch == quote => {
                    self.cursor.advance();
                    break;
                }
                Some('\\') => {
                    self.cursor.advance();
                    match self.cursor.advance() {
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        // Backslash, quotes and unknown escapes pass through
                        Some(escaped) => value.push(escaped),
                        None => {
                            return Err(LexicalError::new(
                                LexicalErrorKind::UnterminatedString,
                                line,
                                column,
                            ));
                        }
                    }
                }
                Some(ch) => {
                    value.push(ch);
                    self.cursor.advance();
                }
            }
        }

        Ok(self.token_from(TokenKind::String(value), start, line, column))
    }

    fn scan_number(&mut self) -> Result<Token> {
        let (start, line, column) = self.mark();

        // Integer part
        self.cursor.eat_while(|ch| ch.is_ascii_digit());

        // Fractional part, unless the dot belongs to `..`
        let is_real = self.cursor.current() == Some('.')
            && self.cursor.peek_nth(1).is_some_and(|ch| ch.is_ascii_digit());
        if is_real {
            self.cursor.advance();
            self.cursor.eat_while(|ch| ch.is_ascii_digit());
        }

        let text = self.cursor.slice_from(start);
        let kind = if is_real {
            // Past f64::MAX the parse yields infinity rather than an error
            text.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(TokenKind::Real)
        } else {
            text.parse::<i64>().map(TokenKind::Integer).ok()
        };

        match kind {
            Some(kind) => Ok(self.token_from(kind, start, line, column)),
            None => Err(LexicalError::new(
                LexicalErrorKind::NumberOutOfRange,
                line,
                column,
            )),
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let (start, line, column) = self.mark();
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(start);
        let kind = TokenKind::keyword(text).unwrap_or_else(|| TokenKind::Identifier(text.to_string()));

        self.token_from(kind, start, line, column)
    }

    /// Matches two-character operators before single ones.
    fn scan_symbol(&mut self, first: char) -> Result<Token> {
        let (start, line, column) = self.mark();

        let double = self
            .cursor
            .peek_nth(1)
            .and_then(|second| TokenKind::double_symbol(first, second));
        if let Some(kind) = double {
            self.cursor.advance();
            self.cursor.advance();
            return Ok(self.token_from(kind, start, line, column));
        }

        if let Some(kind) = TokenKind::single_symbol(first) {
            self.cursor.advance();
            return Ok(self.token_from(kind, start, line, column));
        }

        Err(LexicalError::new(
            LexicalErrorKind::UnrecognizedCharacter(first),
            line,
            column,
        ))
    }

    /// The current byte offset, line and column.
    fn mark(&self) -> (usize, usize, usize) {
        (self.cursor.offset(), self.cursor.line(), self.cursor.column())
    }

    /// Builds a token spanning from `start` to the current offset.
    fn token_from(&self, kind: TokenKind, start: usize, line: usize, column: usize) -> Token {
        Token::new(
            kind,
            Span::new(start, self.cursor.offset()),
            line,
            column,
            self.cursor.slice_from(start),
        )
    }
}

/// Checks if a character can start an identifier.
fn is_ident_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

/// Checks if a character can continue an identifier.
fn is_ident_continue(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}
