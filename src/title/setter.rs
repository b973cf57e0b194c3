//! Title orchestrator.

use super::error::TitleError;
use super::tool::{TitleMethod, TitleTool, TitleToolError};
use super::tools::platform_tools;

/// Sets the terminal title using the first mechanism that works.
pub struct TitleSetter {
    tools: Vec<Box<dyn TitleTool>>,
}

impl TitleSetter {
    /// Create with every known mechanism, in priority order.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn TitleTool>>) -> Self {
        Self { tools }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn TitleTool>] {
        &self.tools
    }

    /// Set the title, returning the mechanism that did it.
    ///
    /// Unavailable tools are skipped; a failing tool falls through to the next.
    pub fn set(&self, title: &str) -> Result<TitleMethod, TitleError> {
        let mut last_failure: Option<(&'static str, String)> = None;

        for tool in self.tools.iter().filter(|tool| tool.is_available()) {
            match tool.try_set(title) {
                Ok(()) => {
                    tracing::debug!(tool = tool.name(), title, "terminal title set");
                    return Ok(tool.method());
                }
                Err(TitleToolError::NotFound) => continue,
                Err(TitleToolError::Failed(message)) => {
                    tracing::debug!(tool = tool.name(), %message, "title tool failed");
                    last_failure = Some((tool.name(), message));
                }
            }
        }

        match last_failure {
            Some((tool, message)) => Err(TitleError::ToolFailed { tool, message }),
            None => Err(TitleError::NoToolAvailable),
        }
    }
}

impl Default for TitleSetter {
    fn default() -> Self {
        Self::new()
    }
}
