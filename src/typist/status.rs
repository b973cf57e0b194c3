//! Status line rendering.
//!
//! Mimics vim's insert-mode status line: a mode marker on the left, the
//! cursor position towards the right and a scroll indicator at the far right.
//!
//! ```text
//! -- INSERT --                                              12,40         All
//! ```

use anyhow::Result;

use crate::screen::Region;
use crate::typist::state::CursorPosition;

/// Mode marker drawn at the left edge.
pub const INSERT_MARKER: &str = "-- INSERT --";

/// The position field starts this many columns from the right edge.
const POSITION_OFFSET: u16 = 20;

/// The scroll indicator starts this many columns from the right edge.
const INDICATOR_OFFSET: u16 = 4;

/// Columns blanked before the position is redrawn.
const POSITION_FIELD_WIDTH: usize = (POSITION_OFFSET - INDICATOR_OFFSET - 1) as usize;

/// Format the `line,column` field.
pub fn format_position(pos: CursorPosition) -> String {
    format!("{},{}", pos.display_line(), pos.column)
}

/// `Bot` once the line number no longer fits in the visible rows.
pub fn scroll_indicator(line: usize, visible_rows: usize) -> &'static str {
    if line > visible_rows {
        "Bot"
    } else {
        "All"
    }
}

/// Redraw the status line for `pos` and refresh it.
///
/// # Arguments
/// * `status` - The status line region
/// * `pos` - Current cursor position
/// * `visible_rows` - Rows of the content region that are on screen
pub fn draw_status<R: Region>(
    status: &mut R,
    pos: CursorPosition,
    visible_rows: usize,
) -> Result<()> {
    let cols = status.cols();
    let position_col = cols.saturating_sub(POSITION_OFFSET);

    status.put_str(0, 0, INSERT_MARKER);
    status.put_str(
        0,
        cols.saturating_sub(INDICATOR_OFFSET),
        scroll_indicator(pos.line, visible_rows),
    );

    // Blank first so a shorter value doesn't leave digits behind
    status.put_str(0, position_col, &" ".repeat(POSITION_FIELD_WIDTH));
    status.put_str(0, position_col, &format_position(pos));

    status.refresh()
}

/// Blank the whole status line and refresh it.
pub fn clear_status<R: Region>(status: &mut R) -> Result<()> {
    let cols = status.cols();
    status.put_str(0, 0, &" ".repeat(cols as usize));
    status.move_to(0, 0);
    status.refresh()
}
