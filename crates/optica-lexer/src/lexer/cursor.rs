//! Character cursor with line/column tracking.

use std::iter::Peekable;
use std::str::CharIndices;

/// Walks the source one character at a time, tracking the byte offset,
/// the 1-based line and column, and whether the cursor is at the start
/// of a line.
pub(crate) struct Cursor<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    offset: usize,
    line: usize,
    column: usize,
    at_line_start: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            offset: 0,
            line: 1,
            column: 1,
            at_line_start: true,
        }
    }

    /// The current character, or `None` at end of input.
    pub(crate) fn current(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    /// The character `n` positions after the current one.
    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, ch)| ch)
    }

    /// Consumes the current character and updates the position.
    ///
    /// A newline moves to column 1 of the next line and marks the line
    /// start; any other non-blank character clears the mark.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let (pos, ch) = self.chars.next()?;
        self.offset = pos + ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
            self.at_line_start = true;
        } else {
            self.column += 1;
            if ch != ' ' && ch != '\t' {
                self.at_line_start = false;
            }
        }

        Some(ch)
    }

    /// Consumes characters while `pred` holds.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(ch) = self.current() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn column(&self) -> usize {
        self.column
    }

    pub(crate) fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    pub(crate) fn clear_line_start(&mut self) {
        self.at_line_start = false;
    }

    /// The source text between `start` and the current offset.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }
}
