/*!
 * Directory and file scanning functionality
 */

use std::fs;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::ReadFailure;
use crate::report::Report;
use crate::types::{FileContent, FileEntry};

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress spinner
    pub progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Scanner that draws nothing, for library use and tests
    pub fn hidden(config: Config) -> Self {
        Self::new(config, Arc::new(ProgressBar::hidden()))
    }

    /// Walk the configured root and collect one entry per file
    ///
    /// The root must already be validated. Entries come back in the order
    /// the filesystem yields them. Files that cannot be read still produce
    /// an entry carrying the failure reason; unreadable directories are
    /// logged and skipped.
    pub fn scan(&self) -> Report {
        let root = self.config.root.as_path();
        let mut report = Report::default();

        for entry in WalkDir::new(root).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error walking {}: {}", root.display(), e);
                    continue;
                }
            };

            if !is_file_entry(&entry) {
                continue;
            }

            report.push(self.process_file(root, &entry));
        }

        report
    }

    /// Read a single file into an entry
    fn process_file(&self, root: &Path, entry: &DirEntry) -> FileEntry {
        self.progress.inc(1);

        // WalkDir yields paths prefixed with the root it was given
        let relative_path = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path())
            .to_path_buf();

        self.progress
            .set_message(format!("Current file: {}", relative_path.display()));

        let content = match read_text(entry.path()) {
            Ok(text) => FileContent::Text(text),
            Err(e) => {
                debug!("Could not read {}: {}", entry.path().display(), e);
                FileContent::Unreadable(e.to_string())
            }
        };

        FileEntry::new(relative_path, content)
    }
}

/// Whether a walk entry is reported as a file
///
/// Symlinks are not followed for recursion. A link that resolves to a
/// directory counts as a directory; every other link is read as a file.
fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}

/// Read a whole file and decode it as UTF-8
pub fn read_text(path: &Path) -> std::result::Result<String, ReadFailure> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
