//! Cursor bookkeeping for the typist.

use crate::screen::displayed_char;

/// Where the simulated cursor is.
///
/// `line` is 1-based and counts document lines. `column` counts characters
/// typed on the current line and may exceed the region width when the line
/// soft-wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    /// Position before anything has been typed.
    pub fn start() -> Self {
        Self { line: 1, column: 0 }
    }

    /// One character was typed.
    pub fn advance(&mut self) {
        self.column += 1;
    }

    /// The current line is finished.
    pub fn next_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    /// Line number shown in the status line. An untouched buffer reads 0.
    pub fn display_line(&self) -> usize {
        if self.line == 1 && self.column == 0 {
            0
        } else {
            self.line
        }
    }
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::start()
    }
}

/// Tracks the screen column of the current row so the gutter can follow the
/// content region's soft wraps.
///
/// Counts cells, not characters: a double-width character takes two. Wraps
/// lazily, the same way [`TermRegion`](crate::screen::TermRegion) does.
#[derive(Debug, Clone, Copy)]
pub struct SoftWrap {
    width: u16,
    col: u16,
}

impl SoftWrap {
    pub fn new(width: u16) -> Self {
        Self { width, col: 0 }
    }

    /// Account for `c` being drawn. Returns true if it lands on a new row.
    pub fn place(&mut self, c: char) -> bool {
        if self.width == 0 {
            return false;
        }
        let (_, cells) = displayed_char(c, self.width);
        let wraps = self.col + cells > self.width;
        if wraps {
            self.col = 0;
        }
        self.col += cells;
        wraps
    }

    /// The line ended.
    pub fn reset(&mut self) {
        self.col = 0;
    }
}
