//! Terminal window/tab title.
//!
//! The title is set once on startup. How that works depends on the host:
//! terminals that understand escape sequences get an OSC 0 sequence, while
//! a classic Windows console is driven through its `title` builtin. The
//! available mechanism is detected at runtime, not chosen at build time.

mod error;
mod setter;
mod tool;
pub mod tools;

pub use error::TitleError;
pub use setter::TitleSetter;
pub use tool::{TitleMethod, TitleTool, TitleToolError};
