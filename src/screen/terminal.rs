//! Full-screen terminal session.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};

/// Owns the alternate screen while the document is being typed.
///
/// Raw mode stays off; Ctrl-C still raises SIGINT.
/// The terminal is restored on [`restore`](Self::restore) or on drop.
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    /// Enter the alternate screen, hide the cursor and clear.
    pub fn enter() -> Result<Self> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
        .context("Failed to initialize the terminal screen")?;
        tracing::debug!("entered alternate screen");
        Ok(Self { active: true })
    }

    /// Terminal size as `(cols, rows)`.
    pub fn size() -> Result<(u16, u16)> {
        terminal::size().context("Failed to query terminal size")
    }

    /// Leave the alternate screen and show the cursor again.
    pub fn restore(&mut self) -> Result<()> {
        if self.active {
            self.active = false;
            restore_terminal()?;
            tracing::debug!("terminal restored");
        }
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Undo [`TerminalSession::enter`]. Safe to call from an interrupt handler.
pub fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    stdout.flush()
}
