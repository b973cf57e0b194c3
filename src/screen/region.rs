//! Region abstraction and the terminal-backed implementation.

use std::io::Write;

use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::style::Color;
use unicode_width::UnicodeWidthChar;

use crate::theme::{color_to_ansi, ANSI_RESET};

/// A rectangular drawing surface with its own cursor.
///
/// Text written with [`append`](Region::append) lands at the cursor and only
/// becomes visible after [`refresh`](Region::refresh).
pub trait Region {
    /// Width in columns.
    fn cols(&self) -> u16;

    /// Height in rows (including any rows hidden below the visible area).
    fn rows(&self) -> u16;

    /// Move the cursor. Out-of-range positions are clamped.
    fn move_to(&mut self, row: u16, col: u16);

    /// Write text at the cursor, advancing it. `\n` starts a new row.
    fn append(&mut self, text: &str);

    /// Color used for text appended from now on.
    fn set_color(&mut self, color: Color);

    /// Push pending changes to the screen.
    fn refresh(&mut self) -> Result<()>;

    /// Start a new row.
    fn newline(&mut self) {
        self.append("\n");
    }

    /// Move to `(row, col)` and write `text` there.
    fn put_str(&mut self, row: u16, col: u16, text: &str) {
        self.move_to(row, col);
        self.append(text);
    }
}

/// One character cell of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
    /// Right half of a double-width character; never drawn on its own
    pub wide_tail: bool,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        color: Color::Reset,
        wide_tail: false,
    };
}

/// Screen cells `c` occupies in a region `cols` wide, together with the
/// character actually drawn.
///
/// Control characters and characters too wide for the region are drawn as
/// a single `?`.
pub fn displayed_char(c: char, cols: u16) -> (char, u16) {
    if c.is_control() {
        return ('?', 1);
    }
    let width = c.width().unwrap_or(1).max(1) as u16;
    if width > cols {
        ('?', 1)
    } else {
        (c, width)
    }
}

/// A region of the real terminal.
///
/// Keeps a cell grid in memory and repaints changed rows on refresh using
/// absolute cursor moves, so several regions can share one output stream.
/// Behaves like a curses window: a line feed clears the rest of the row and
/// long text wraps onto the next row. With scrolling enabled the region
/// scrolls when the cursor runs off the bottom.
pub struct TermRegion<W: Write> {
    out: W,
    area: Rect,
    cells: Vec<Vec<Cell>>,
    dirty: Vec<bool>,
    row: u16,
    col: u16,
    color: Color,
    scrolling: bool,
}

impl<W: Write> TermRegion<W> {
    /// Create a blank region covering `area` of the screen.
    pub fn new(out: W, area: Rect) -> Self {
        let rows = area.height.max(1) as usize;
        Self {
            out,
            area,
            cells: vec![vec![Cell::BLANK; area.width as usize]; rows],
            dirty: vec![false; rows],
            row: 0,
            col: 0,
            color: Color::Reset,
            scrolling: false,
        }
    }

    /// Enable or disable scrolling when the cursor passes the last row.
    pub fn scrolling(mut self, enabled: bool) -> Self {
        self.scrolling = enabled;
        self
    }

    /// Set the initial text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Add rows below the visible area. They take part in wrapping and
    /// scrolling but are never painted.
    pub fn with_overscan(mut self, extra: u16) -> Self {
        for _ in 0..extra {
            self.cells.push(self.blank_row());
            self.dirty.push(false);
        }
        self
    }

    /// Current cursor as `(row, col)`.
    pub fn cursor(&self) -> (u16, u16) {
        (self.row, self.col)
    }

    pub fn cell(&self, row: u16, col: u16) -> Option<&Cell> {
        self.cells.get(row as usize)?.get(col as usize)
    }

    /// Text of a row with trailing blanks removed.
    pub fn row_text(&self, row: u16) -> String {
        self.cells
            .get(row as usize)
            .map(|cells| {
                cells
                    .iter()
                    .filter(|cell| !cell.wide_tail)
                    .map(|cell| cell.ch)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .unwrap_or_default()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn blank_row(&self) -> Vec<Cell> {
        vec![Cell::BLANK; self.area.width as usize]
    }

    fn put_char(&mut self, c: char) {
        if c == '\n' {
            self.line_feed();
        } else {
            self.print(c);
        }
    }

    fn print(&mut self, c: char) {
        let cols = self.cols();
        if cols == 0 {
            return;
        }
        let (c, width) = displayed_char(c, cols);

        // Wrap only once there is something to put on the next row
        if self.col + width > cols {
            self.col = 0;
            self.advance_row();
        }

        let row = self.row as usize;
        let col = self.col as usize;
        self.clear_wide_remnants(row, col, width as usize);

        self.cells[row][col] = Cell {
            ch: c,
            color: self.color,
            wide_tail: false,
        };
        if width == 2 {
            self.cells[row][col + 1] = Cell {
                ch: ' ',
                color: self.color,
                wide_tail: true,
            };
        }
        self.dirty[row] = true;
        self.col += width;
    }

    /// Blank the halves of any double-width character that a write at
    /// `col..col + width` would split.
    fn clear_wide_remnants(&mut self, row: usize, col: usize, width: usize) {
        let cells = &mut self.cells[row];
        if cells[col].wide_tail && col > 0 {
            cells[col - 1] = Cell::BLANK;
        }
        let end = col + width;
        if end < cells.len() && cells[end].wide_tail {
            cells[end] = Cell::BLANK;
        }
    }

    fn line_feed(&mut self) {
        let row = self.row as usize;
        let from = self.col as usize;
        if from < self.cells[row].len() {
            for cell in &mut self.cells[row][from..] {
                *cell = Cell::BLANK;
            }
            self.dirty[row] = true;
        }
        self.col = 0;
        self.advance_row();
    }

    fn advance_row(&mut self) {
        if self.row + 1 < self.rows() {
            self.row += 1;
        } else if self.scrolling {
            self.scroll_up();
        }
    }

    fn scroll_up(&mut self) {
        self.cells.remove(0);
        self.cells.push(self.blank_row());
        self.dirty.iter_mut().for_each(|d| *d = true);
    }
}

impl<W: Write> Region for TermRegion<W> {
    fn cols(&self) -> u16 {
        self.area.width
    }

    fn rows(&self) -> u16 {
        self.cells.len() as u16
    }

    fn move_to(&mut self, row: u16, col: u16) {
        self.row = row.min(self.rows().saturating_sub(1));
        self.col = col.min(self.cols().saturating_sub(1));
    }

    fn append(&mut self, text: &str) {
        for c in text.chars() {
            self.put_char(c);
        }
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn refresh(&mut self) -> Result<()> {
        // Build the whole update as one string to minimize syscalls
        let mut output = String::new();
        let visible = self.area.height as usize;

        for (row, cells) in self.cells.iter().enumerate().take(visible) {
            if !self.dirty[row] {
                continue;
            }
            output.push_str(&format!(
                "\x1b[{};{}H",
                self.area.y as usize + row + 1,
                self.area.x as usize + 1
            ));

            let mut current: Option<Color> = None;
            for cell in cells.iter().filter(|cell| !cell.wide_tail) {
                if current != Some(cell.color) {
                    output.push_str(&color_to_ansi(cell.color));
                    current = Some(cell.color);
                }
                output.push(cell.ch);
            }
            output.push_str(ANSI_RESET);
        }
        self.dirty.iter_mut().for_each(|d| *d = false);

        if !output.is_empty() {
            write!(self.out, "{}", output)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
