/*!
 * Core types and data structures for the dirclip application
 */

use std::path::PathBuf;

/// What could be read out of a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Full file content decoded as UTF-8
    Text(String),
    /// Reading or decoding failed; holds the reason
    Unreadable(String),
}

impl FileContent {
    /// Whether the file was read successfully
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

/// A file discovered below the scan root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Relative path from scan root
    pub relative_path: PathBuf,
    /// File content or failure description
    pub content: FileContent,
}

impl FileEntry {
    /// Create a new entry
    pub fn new(relative_path: impl Into<PathBuf>, content: FileContent) -> Self {
        Self {
            relative_path: relative_path.into(),
            content,
        }
    }

    /// Relative path as it is shown in the report
    pub fn display_path(&self) -> String {
        self.relative_path.to_string_lossy().into_owned()
    }
}
