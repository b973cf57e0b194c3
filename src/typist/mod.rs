//! The typing simulator.
//!
//! Replays a [`Document`](crate::Document) onto the content region one
//! character at a time, keeping the line-number gutter and the status line in
//! step, then "types" the save command.
//!
//! # Architecture
//!
//! - `state`: [`CursorPosition`] and soft-wrap tracking for the gutter
//! - `status`: formatting and drawing the status line
//! - `timing`: per-character delays ([`DelayPolicy`]) and sleeping ([`Pause`])
//! - `simulator`: [`Typist`] and the [`Panes`] it draws into
//! - `session`: the full sequence from first keystroke to the final hold

mod session;
mod simulator;
mod state;
pub mod status;
mod timing;

pub use session::{draw_placeholders, play};
pub use simulator::{Panes, Typist};
pub use state::CursorPosition;
pub use timing::{DelayPolicy, HumanDelay, Pause, ThreadSleep};
