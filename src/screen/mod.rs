//! Drawing surfaces for the simulated editor.
//!
//! The screen is split into three regions (content, line-number gutter and
//! status line). Each region is an independent [`Region`] that supports
//! appending text and an explicit refresh, so the typist can paint one
//! character at a time.
//!
//! - `region`: the [`Region`] trait and the terminal-backed [`TermRegion`]
//! - `layout`: splitting the terminal into the three rectangles
//! - `terminal`: entering and leaving the alternate screen

mod layout;
mod region;
mod terminal;

pub use layout::{count_digits, gutter_width, LayoutError, ScreenLayout};
pub use region::{displayed_char, Cell, Region, TermRegion};
pub use terminal::{restore_terminal, TerminalSession};
