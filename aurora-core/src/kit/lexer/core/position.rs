//! Source position tracking
//!
//! Two coordinate systems, both byte based:
//! - line/column: human-readable error display (1-based)
//! - cursor: absolute byte offset into the input (0-based)
//!
//! Columns count bytes, not code points.

use std::fmt;

/// Position of a token's first byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    /// Line number, 1-based
    pub line: usize,
    /// Byte column within the line, 1-based
    pub column: usize,
    /// Absolute byte offset, 0-based
    pub cursor: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, cursor: usize) -> Self {
        Self {
            line,
            column,
            cursor,
        }
    }

    /// Start of input
    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// Step past a run of `len` bytes.
    ///
    /// A line break resets the column to 1 whatever its length, so the bytes
    /// of a `\r\n` pair never show up in the next line's columns.
    pub fn advance(&mut self, len: usize, line_break: bool) {
        self.cursor += len;
        if line_break {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += len;
        }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
