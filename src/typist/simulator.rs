//! The typist: paints a document character by character.

use std::time::Duration;

use anyhow::Result;

use crate::document::Document;
use crate::screen::Region;
use crate::typist::state::{CursorPosition, SoftWrap};
use crate::typist::status::draw_status;
use crate::typist::timing::{DelayPolicy, Pause};

/// The three regions the typist draws into.
pub struct Panes<C, G, S> {
    /// Where the document text appears
    pub content: C,
    /// Line numbers, kept row-aligned with the content
    pub gutter: G,
    /// Mode marker, position and scroll indicator
    pub status: S,
}

/// Replays text with per-character delays.
pub struct Typist<D, P> {
    delays: D,
    pauser: P,
    visible_rows: usize,
}

impl<D: DelayPolicy, P: Pause> Typist<D, P> {
    /// # Arguments
    /// * `delays` - Chooses the delay after each character
    /// * `pauser` - Carries out delays and pauses
    /// * `visible_rows` - Content rows on screen (for the scroll indicator)
    pub fn new(delays: D, pauser: P, visible_rows: usize) -> Self {
        Self {
            delays,
            pauser,
            visible_rows,
        }
    }

    /// Block for `duration`.
    pub fn pause(&mut self, duration: Duration) {
        self.pauser.pause(duration);
    }

    /// Type the whole document.
    ///
    /// The gutter gets the number of each line before any of its characters,
    /// plus an extra row break whenever the content soft-wraps. The status
    /// line is redrawn after every character and every finished line.
    ///
    /// Returns the final cursor position, which is one line past the last
    /// document line.
    pub fn type_document<C, G, S>(
        &mut self,
        document: &Document,
        panes: &mut Panes<C, G, S>,
    ) -> Result<CursorPosition>
    where
        C: Region,
        G: Region,
        S: Region,
    {
        let mut wrap = SoftWrap::new(panes.content.cols());
        let mut pos = CursorPosition::start();

        draw_status(&mut panes.status, pos, self.visible_rows)?;
        emit_line_number(&mut panes.gutter, pos.line)?;

        let mut buf = [0u8; 4];
        for line in document.lines() {
            for c in line.chars() {
                if wrap.place(c) {
                    panes.gutter.newline();
                    panes.gutter.refresh()?;
                }

                panes.content.append(c.encode_utf8(&mut buf));
                panes.content.refresh()?;

                let delay = self.delays.delay_for(c);
                self.pauser.pause(delay);

                pos.advance();
                draw_status(&mut panes.status, pos, self.visible_rows)?;
            }

            panes.content.newline();
            panes.content.refresh()?;

            pos.next_line();
            wrap.reset();
            emit_line_number(&mut panes.gutter, pos.line)?;
            draw_status(&mut panes.status, pos, self.visible_rows)?;
        }

        tracing::debug!(line = pos.line, column = pos.column, "document typed");
        Ok(pos)
    }

    /// Type `command` at the start of the status line, one character at a time.
    pub fn type_command<S: Region>(&mut self, status: &mut S, command: &str) -> Result<()> {
        status.move_to(0, 0);

        let mut buf = [0u8; 4];
        for c in command.chars() {
            status.append(c.encode_utf8(&mut buf));
            status.refresh()?;

            let delay = self.delays.delay_for(c);
            self.pauser.pause(delay);
        }
        Ok(())
    }
}

/// Write `line` followed by a row break into the gutter.
fn emit_line_number<G: Region>(gutter: &mut G, line: usize) -> Result<()> {
    gutter.append(&format!("{}\n", line));
    gutter.refresh()
}
