//! TitleTool trait and related types.

/// A mechanism that can set the terminal title.
pub trait TitleTool: Send + Sync {
    /// The method identifier for this tool.
    fn method(&self) -> TitleMethod;

    /// Human-readable name for logs and errors.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Whether this mechanism works in the current environment.
    ///
    /// Should be fast; only inspects the environment and stdout.
    fn is_available(&self) -> bool;

    /// Set the title.
    fn try_set(&self, title: &str) -> Result<(), TitleToolError>;
}

/// Error from a specific tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleToolError {
    /// Tool execution failed
    Failed(String),
    /// Tool not found on the system
    NotFound,
}

/// Which mechanism set the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleMethod {
    /// OSC 0 escape sequence written to stdout
    EscapeSequence,
    /// Windows console `title` builtin
    ConsoleCommand,
}

impl TitleMethod {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EscapeSequence => "escape-sequence",
            Self::ConsoleCommand => "console-command",
        }
    }
}
