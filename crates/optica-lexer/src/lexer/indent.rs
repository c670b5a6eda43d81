//! The indentation stack behind INDENT/DEDENT synthesis.

use tracing::trace;

/// Width of one tab in indentation units. A space is one unit.
pub const TAB_WIDTH: usize = 4;

/// Returns the indentation width contributed by a leading blank.
pub(crate) fn blank_width(ch: char) -> Option<usize> {
    match ch {
        ' ' => Some(1),
        '\t' => Some(TAB_WIDTH),
        _ => None,
    }
}

/// What a logical line's indentation did to the block structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndentChange {
    /// Same level as the enclosing block
    Unchanged,
    /// One level deeper, pushed at this width
    Indent(usize),
    /// Closed this many levels
    Dedent(usize),
}

/// A dedent that does not land on an open level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DedentMismatch {
    pub(crate) width: usize,
    pub(crate) enclosing: usize,
}

/// Open block levels, bottom to top. The sentinel `0` is never popped
/// and widths strictly increase towards the top.
#[derive(Debug)]
pub(crate) struct IndentStack {
    levels: Vec<usize>,
}

impl IndentStack {
    pub(crate) fn new() -> Self {
        Self { levels: vec![0] }
    }

    pub(crate) fn top(&self) -> usize {
        self.levels.last().copied().unwrap_or(0)
    }

    /// Number of open levels above the sentinel.
    pub(crate) fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Adjusts the stack for a line indented to `width`.
    pub(crate) fn adjust(&mut self, width: usize) -> Result<IndentChange, DedentMismatch> {
        let top = self.top();

        if width > top {
            self.levels.push(width);
            trace!(width, depth = self.depth(), "indent");
            return Ok(IndentChange::Indent(width));
        }

        if width == top {
            return Ok(IndentChange::Unchanged);
        }

        let mut closed = 0;
        while self.levels.len() > 1 && self.top() > width {
            self.levels.pop();
            closed += 1;
        }
        trace!(width, closed, depth = self.depth(), "dedent");

        if self.top() != width {
            return Err(DedentMismatch {
                width,
                enclosing: self.top(),
            });
        }

        Ok(IndentChange::Dedent(closed))
    }

    /// Pops every open level, returning how many were closed.
    pub(crate) fn close_all(&mut self) -> usize {
        let closed = self.depth();
        self.levels.truncate(1);
        closed
    }
}
