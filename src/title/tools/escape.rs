//! OSC 0 escape sequence.

use std::io;

use crossterm::{execute, terminal::SetTitle};

use crate::title::tool::{TitleMethod, TitleTool, TitleToolError};

/// Sets the title by writing `ESC ] 0 ; <title> BEL` to stdout.
///
/// Works in practically every terminal emulator, including Windows Terminal.
pub struct EscapeSequence;

impl EscapeSequence {
    pub fn new() -> Self {
        Self
    }

    /// Whether the environment looks like a terminal emulator.
    fn supports_escapes(term: Option<&str>, windows_terminal: bool) -> bool {
        match term {
            Some(term) => !term.is_empty() && term != "dumb",
            None => windows_terminal,
        }
    }
}

impl TitleTool for EscapeSequence {
    fn method(&self) -> TitleMethod {
        TitleMethod::EscapeSequence
    }

    fn is_available(&self) -> bool {
        let term = std::env::var("TERM").ok();
        let windows_terminal = std::env::var_os("WT_SESSION").is_some();
        atty::is(atty::Stream::Stdout) && Self::supports_escapes(term.as_deref(), windows_terminal)
    }

    fn try_set(&self, title: &str) -> Result<(), TitleToolError> {
        let mut stdout = io::stdout();
        execute!(stdout, SetTitle(title)).map_err(|e| TitleToolError::Failed(e.to_string()))
    }
}

impl Default for EscapeSequence {
    fn default() -> Self {
        Self::new()
    }
}
