/*!
 * Directory reporter: validate the root, build the report, deliver it
 */

use std::io::{self, Write};
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::error::Result;
use crate::report::{Report, ScanSummary};
use crate::scanner::Scanner;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Root was not a directory; only the diagnostic was printed
    InvalidRoot,
    /// Root was a directory without files; nothing was delivered
    NoFiles,
    /// Report was printed, and copied to the clipboard if `copied`
    Delivered {
        /// Whether the clipboard accepted the report
        copied: bool,
        /// Totals of the delivered report
        summary: ScanSummary,
    },
}

/// Reports every file under a root directory to a clipboard and a console
pub struct DirectoryReporter<C> {
    config: Config,
    clipboard: C,
    progress: Arc<ProgressBar>,
}

impl<C: Clipboard> DirectoryReporter<C> {
    /// Create a reporter without a visible progress spinner
    pub fn new(config: Config, clipboard: C) -> Self {
        Self {
            config,
            clipboard,
            progress: Arc::new(ProgressBar::hidden()),
        }
    }

    /// Use `progress` to show scan progress
    pub fn with_progress(mut self, progress: Arc<ProgressBar>) -> Self {
        self.progress = progress;
        self
    }

    /// Walk the root and collect the report
    ///
    /// Fails with `InvalidRoot` before any traversal when the root is not
    /// a directory.
    pub fn build_report(&self) -> Result<Report> {
        self.config.validate_root()?;

        info!("Scanning {}", self.config.root.display());
        let scanner = Scanner::new(self.config.clone(), Arc::clone(&self.progress));
        let report = scanner.scan();
        self.progress.finish_and_clear();

        info!("Collected {} files", report.len());
        Ok(report)
    }

    /// Copy `text` to the clipboard (when enabled) and print it to `out`
    ///
    /// Empty text is not delivered at all. Returns whether the clipboard
    /// accepted the text.
    pub fn deliver<W: Write>(&self, text: &str, out: &mut W) -> io::Result<bool> {
        if text.is_empty() {
            return Ok(false);
        }

        let mut copied = false;
        if self.config.clip {
            match self.clipboard.copy_text(text) {
                Ok(()) => {
                    copied = true;
                    writeln!(out, "Report copied to clipboard.")?;
                }
                Err(e) => {
                    warn!("Clipboard copy failed: {}", e);
                    writeln!(out, "Could not copy to clipboard: {}", e)?;
                }
            }
        }

        // The console always gets the report, clipboard or not
        writeln!(out, "{}", text)?;
        out.flush()?;

        Ok(copied)
    }

    /// Validate, build and deliver in one pass
    ///
    /// Failures of the root, of single files and of the clipboard all end
    /// up as text on `out`; only writing to `out` itself can fail.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<RunOutcome> {
        let report = match self.build_report() {
            Ok(report) => report,
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(RunOutcome::InvalidRoot);
            }
        };

        if report.is_empty() {
            return Ok(RunOutcome::NoFiles);
        }

        let copied = self.deliver(&report.render(), out)?;
        Ok(RunOutcome::Delivered {
            copied,
            summary: report.summary(),
        })
    }
}
