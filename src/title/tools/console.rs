//! Windows console `title` builtin.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::title::tool::{TitleMethod, TitleTool, TitleToolError};

/// Sets the title by running `%ComSpec% /C title <text>`.
///
/// The child shares the console with us, so the title sticks after it exits.
pub struct ConsoleCommand {
    shell: Option<PathBuf>,
}

impl ConsoleCommand {
    /// Create using the shell named by `ComSpec`.
    pub fn new() -> Self {
        Self {
            shell: std::env::var_os("ComSpec").map(PathBuf::from),
        }
    }

    /// Create with an explicit shell (for testing).
    pub fn with_shell(shell: Option<PathBuf>) -> Self {
        Self { shell }
    }

    /// Drop characters that `cmd` would treat as operators.
    fn sanitize(title: &str) -> String {
        title
            .chars()
            .filter(|c| !matches!(c, '&' | '|' | '<' | '>' | '^' | '%' | '"'))
            .filter(|c| !c.is_control())
            .collect()
    }
}

impl TitleTool for ConsoleCommand {
    fn method(&self) -> TitleMethod {
        TitleMethod::ConsoleCommand
    }

    fn is_available(&self) -> bool {
        self.shell.as_deref().is_some_and(|shell| shell.is_file())
    }

    fn try_set(&self, title: &str) -> Result<(), TitleToolError> {
        let shell = self.shell.as_ref().ok_or(TitleToolError::NotFound)?;

        let status = Command::new(shell)
            .arg("/C")
            .arg(format!("title {}", Self::sanitize(title)))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| TitleToolError::Failed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(TitleToolError::Failed(format!("title exited with {}", status)))
        }
    }
}

impl Default for ConsoleCommand {
    fn default() -> Self {
        Self::new()
    }
}
