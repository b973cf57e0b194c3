//! Title operation errors.

/// Errors that can occur while setting the terminal title.
#[derive(Debug, thiserror::Error)]
pub enum TitleError {
    #[error("No way to set the terminal title was detected")]
    NoToolAvailable,

    #[error("Setting the title with '{tool}' failed: {message}")]
    ToolFailed { tool: &'static str, message: String },
}
