//! ghostwrite - replay a text file as if it were typed live
//!
//! Renders a file into a vim-looking screen one character at a time with
//! human-ish delays, keeps a line-number gutter and an insert-mode status line
//! in sync, and finishes by "typing" a save command. Meant for screen
//! recordings.
//!
//! The interesting part is the [`typist`] module; [`screen`] provides the
//! drawing surfaces it paints on.

pub mod app;
pub mod cli;
pub mod config;
pub mod document;
pub mod logging;
pub mod screen;
pub mod theme;
pub mod title;
pub mod typist;

pub use config::Config;
pub use document::{Document, LoadError};
pub use screen::{Region, TermRegion};
pub use theme::Theme;
pub use typist::{CursorPosition, Panes, Typist};
