//! Wiring the typist to the real terminal.

use std::io;

use anyhow::Result;
use ratatui::layout::Rect;

use crate::config::Config;
use crate::document::Document;
use crate::screen::{gutter_width, restore_terminal, ScreenLayout, TermRegion, TerminalSession};
use crate::theme::Theme;
use crate::title::TitleSetter;
use crate::typist::{draw_placeholders, play, HumanDelay, Panes, ThreadSleep, Typist};

/// Exit status used when interrupted with Ctrl-C.
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Play `document` on the current terminal.
///
/// Sets the title, takes over the screen, types the document and the save
/// command, then gives the terminal back.
#[cfg(not(tarpaulin_include))]
pub fn run(config: &Config, document: &Document) -> Result<()> {
    let theme = Theme::detect();

    match TitleSetter::new().set(&config.display.title) {
        Ok(method) => tracing::debug!(method = method.name(), "title set"),
        Err(e) => tracing::warn!("{}", e),
    }

    install_interrupt_handler();

    let (cols, rows) = TerminalSession::size()?;
    let gutter = gutter_width(document.len(), config.display.min_gutter_width);
    let layout = ScreenLayout::split(Rect::new(0, 0, cols, rows), gutter)?;
    tracing::debug!(cols, rows, ?layout, "layout computed");

    let mut session = TerminalSession::enter()?;

    let mut panes = Panes {
        content: TermRegion::new(io::stdout(), layout.content)
            .scrolling(true)
            .with_color(theme.text),
        // One hidden row under the status line keeps the gutter scrolling in
        // step with the content
        gutter: TermRegion::new(io::stdout(), layout.gutter)
            .scrolling(true)
            .with_overscan(1),
        status: TermRegion::new(io::stdout(), layout.status).with_color(theme.status),
    };
    draw_placeholders(&mut panes.gutter, &theme)?;

    let mut typist = Typist::new(
        HumanDelay::new(&config.timing),
        ThreadSleep,
        layout.content.height as usize,
    );
    play(
        document,
        &mut panes,
        &mut typist,
        &config.timing,
        &config.display.save_command,
    )?;

    session.restore()
}

/// Restore the terminal if the user hits Ctrl-C mid-playback.
#[cfg(not(tarpaulin_include))]
fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        tracing::info!("interrupted");
        let _ = restore_terminal();
        std::process::exit(INTERRUPTED_EXIT_CODE);
    });
    if let Err(e) = result {
        tracing::warn!("Could not install Ctrl-C handler: {}", e);
    }
}
