/*!
 * Configuration handling for dirclip
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::{DirClipError, Result};

/// Root used when no directory is given on the command line
pub const DEFAULT_ROOT: &str = "../src";

/// Command-line arguments for dirclip
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dirclip",
    version = crate::VERSION,
    about = "Dump every file under a directory into one text report and copy it to the clipboard",
    long_about = "Walks a directory recursively, writes the relative path and text content of every file into a single report, copies the report to the system clipboard and prints it."
)]
pub struct Args {
    /// Directory to process
    #[clap(default_value = DEFAULT_ROOT)]
    pub directory_path: String,

    /// Do not touch the clipboard, only print the report
    #[clap(long)]
    pub no_clip: bool,

    /// Print a summary table to stderr after delivery
    #[clap(long)]
    pub summary: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Directory to process
    pub root: PathBuf,

    /// Copy output to clipboard
    pub clip: bool,

    /// Print the summary table
    pub summary: bool,

    /// Log verbosity level
    pub verbosity: u8,
}

impl Config {
    /// Configuration for `root` with clipboard delivery enabled
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            clip: true,
            summary: false,
            verbosity: 0,
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            root: PathBuf::from(args.directory_path),
            clip: !args.no_clip,
            summary: args.summary,
            verbosity: args.verbose,
        }
    }

    /// Check that the root names an existing directory
    pub fn validate_root(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(DirClipError::InvalidRoot(self.root.clone()));
        }
        Ok(())
    }

    /// Default tracing filter directive for the configured verbosity
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_command_line() {
        let args = Args::parse_from(["dirclip"]);
        let config = Config::from_args(args);

        assert_eq!(config.root, PathBuf::from(DEFAULT_ROOT));
        assert!(config.clip);
        assert!(!config.summary);
        assert_eq!(config.log_directive(), "warn");
    }

    #[test]
    fn version_comes_from_the_crate() {
        use clap::CommandFactory;

        assert_eq!(Args::command().get_version(), Some(crate::VERSION));
    }

    #[test]
    fn flags_map_onto_config() {
        let args = Args::parse_from(["dirclip", "some/dir", "--no-clip", "--summary", "-vv"]);
        let config = Config::from_args(args);

        assert_eq!(config.root, PathBuf::from("some/dir"));
        assert!(!config.clip);
        assert!(config.summary);
        assert_eq!(config.log_directive(), "debug");
    }

    #[test]
    fn validate_root_accepts_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::new(dir.path()).validate_root().is_ok());
    }

    #[test]
    fn validate_root_rejects_missing_and_file_paths() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        for path in [dir.path().join("missing"), file] {
            match Config::new(&path).validate_root() {
                Err(DirClipError::InvalidRoot(p)) => assert_eq!(p, path),
                other => panic!("expected InvalidRoot, got {:?}", other),
            }
        }
    }
}
