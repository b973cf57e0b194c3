//! Concrete title mechanisms.

mod console;
mod escape;

pub use console::ConsoleCommand;
pub use escape::EscapeSequence;

use super::tool::TitleTool;

/// All mechanisms in priority order. Availability is decided at runtime.
pub fn platform_tools() -> Vec<Box<dyn TitleTool>> {
    vec![
        Box::new(EscapeSequence::new()),
        Box::new(ConsoleCommand::new()),
    ]
}
