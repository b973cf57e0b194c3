//! Input loading.
//!
//! A [`Document`] is the text file to be typed, held as an ordered list of
//! lines without their terminators. It is read once and never modified.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading a document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The text to replay, one entry per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Read a file into a document.
    ///
    /// Invalid UTF-8 is replaced rather than rejected and tabs are expanded
    /// to `tab_width` columns.
    pub fn load(path: &Path, tab_width: usize) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::from_text(&String::from_utf8_lossy(&bytes), tab_width);
        tracing::info!(
            path = %path.display(),
            lines = document.len(),
            chars = document.char_count(),
            "document loaded"
        );
        Ok(document)
    }

    /// Build a document from in-memory text.
    pub fn from_text(text: &str, tab_width: usize) -> Self {
        Self {
            lines: text
                .lines()
                .map(|line| expand_tabs(line, tab_width))
                .collect(),
        }
    }

    /// Build a document from lines taken verbatim.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total characters across all lines, terminators excluded.
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).sum()
    }
}

/// Replace tabs with spaces up to the next multiple of `tab_width`.
fn expand_tabs(line: &str, tab_width: usize) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }

    let tab_width = tab_width.max(1);
    let mut out = String::with_capacity(line.len() + tab_width * 2);
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let fill = tab_width - column % tab_width;
            out.extend(std::iter::repeat(' ').take(fill));
            column += fill;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}
