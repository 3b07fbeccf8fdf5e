/*!
 * dirclip - Dump every file under a directory into one text report
 *
 * This library walks a directory tree, writes the relative path and text
 * content of each file into a single report and hands the report to a
 * clipboard and the console.
 */

pub mod clipboard;
pub mod config;
pub mod error;
pub mod report;
pub mod reporter;
pub mod scanner;
pub mod types;


// Re-export main components for easier access
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use config::Config;
pub use error::{DirClipError, Result};
pub use report::{Report, ScanSummary, SEPARATOR};
pub use reporter::{DirectoryReporter, RunOutcome};
pub use scanner::Scanner;
pub use types::{FileContent, FileEntry};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
