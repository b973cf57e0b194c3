//! Colors for the simulated editor
//!
//! Holds the handful of colors the screen uses and converts them to ANSI
//! escape codes for the raw output written by [`crate::screen::TermRegion`].

use std::borrow::Cow;

use ratatui::style::Color;

/// The vim-ish yellow used for line numbers on true-color terminals.
const LINE_NUMBER_RGB: Color = Color::Rgb(250, 233, 79);

/// Colors used by each screen region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Typed document text
    pub text: Color,
    /// Line numbers in the gutter
    pub line_number: Color,
    /// `~` markers on gutter rows without a line yet
    pub placeholder: Color,
    /// Status line text
    pub status: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ansi()
    }
}

impl Theme {
    /// Theme for terminals that understand 24-bit color.
    pub fn truecolor() -> Self {
        Self {
            line_number: LINE_NUMBER_RGB,
            ..Self::ansi()
        }
    }

    /// Theme restricted to the 16 standard ANSI colors.
    pub fn ansi() -> Self {
        Self {
            text: Color::Reset,
            line_number: Color::Yellow,
            placeholder: Color::Blue,
            status: Color::Reset,
        }
    }

    /// No colors at all (`NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            text: Color::Reset,
            line_number: Color::Reset,
            placeholder: Color::Reset,
            status: Color::Reset,
        }
    }

    /// Pick a theme from the environment.
    pub fn detect() -> Self {
        let theme = Self::from_env(
            std::env::var_os("NO_COLOR").is_some(),
            std::env::var("COLORTERM").ok().as_deref(),
        );
        tracing::debug!(?theme, "theme selected");
        theme
    }

    fn from_env(no_color: bool, colorterm: Option<&str>) -> Self {
        if no_color {
            return Self::plain();
        }
        match colorterm {
            Some(value) if value.contains("truecolor") || value.contains("24bit") => {
                Self::truecolor()
            }
            _ => Self::ansi(),
        }
    }
}

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI foreground escape code.
pub fn color_to_ansi(color: Color) -> Cow<'static, str> {
    let code = match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => ANSI_RESET,
        Color::Rgb(r, g, b) => return Cow::Owned(format!("\x1b[38;2;{};{};{}m", r, g, b)),
        Color::Indexed(i) => return Cow::Owned(format!("\x1b[38;5;{}m", i)),
    };
    Cow::Borrowed(code)
}
