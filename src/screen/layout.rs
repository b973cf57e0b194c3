//! Screen layout: line-number gutter and content above a one-row status line.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Errors from computing the layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Terminal too small: {cols}x{rows} (need at least {min_cols}x2)")]
    TooSmall { cols: u16, rows: u16, min_cols: u16 },
}

/// The three screen rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub gutter: Rect,
    pub content: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    /// Split `area` into gutter | content on top and the status line below.
    pub fn split(area: Rect, gutter_width: u16) -> Result<Self, LayoutError> {
        let min_cols = gutter_width + 1;
        if area.width < min_cols || area.height < 2 {
            return Err(LayoutError::TooSmall {
                cols: area.width,
                rows: area.height,
                min_cols,
            });
        }

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(gutter_width), Constraint::Min(1)])
            .split(vertical[0]);

        Ok(Self {
            gutter: horizontal[0],
            content: horizontal[1],
            status: vertical[1],
        })
    }
}

/// Count digits in a number (for width calculation).
#[inline]
pub fn count_digits(n: usize) -> usize {
    if n == 0 {
        1
    } else {
        (n as f64).log10().floor() as usize + 1
    }
}

/// Gutter width for a document of `line_count` lines.
///
/// Wide enough for the largest number shown (one past the last line) plus a
/// separating space, and never narrower than `min_width`.
pub fn gutter_width(line_count: usize, min_width: u16) -> u16 {
    let needed = (count_digits(line_count + 1) + 1) as u16;
    needed.max(min_width)
}
