//! The full playback sequence.

use anyhow::Result;

use crate::config::TimingConfig;
use crate::document::Document;
use crate::screen::Region;
use crate::theme::Theme;
use crate::typist::simulator::{Panes, Typist};
use crate::typist::state::CursorPosition;
use crate::typist::status::clear_status;
use crate::typist::timing::{DelayPolicy, Pause};

/// Fill every gutter row with a `~` marker, like vim past the end of a buffer,
/// then home the cursor and switch to the line-number color.
pub fn draw_placeholders<G: Region>(gutter: &mut G, theme: &Theme) -> Result<()> {
    let marker = format!("{:<width$}", "~", width = gutter.cols() as usize);

    gutter.set_color(theme.placeholder);
    for _ in 0..gutter.rows() {
        gutter.append(&marker);
    }
    gutter.move_to(0, 0);
    gutter.set_color(theme.line_number);
    gutter.refresh()
}

/// Play a document from the first keystroke to the final hold.
///
/// 1. pause, then type the document
/// 2. pause, clear the status line and type `save_command` into it
/// 3. hold the finished screen
///
/// Returns the cursor position reached at the end of the document.
pub fn play<C, G, S, D, P>(
    document: &Document,
    panes: &mut Panes<C, G, S>,
    typist: &mut Typist<D, P>,
    timing: &TimingConfig,
    save_command: &str,
) -> Result<CursorPosition>
where
    C: Region,
    G: Region,
    S: Region,
    D: DelayPolicy,
    P: Pause,
{
    typist.pause(timing.start_pause());

    let pos = typist.type_document(document, panes)?;
    tracing::info!(
        lines = document.len(),
        chars = document.char_count(),
        final_line = pos.line,
        "typing finished"
    );

    typist.pause(timing.end_pause());

    clear_status(&mut panes.status)?;
    typist.type_command(&mut panes.status, save_command)?;

    typist.pause(timing.hold());
    Ok(pos)
}
