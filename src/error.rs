//! Global error handling for dirclip
//!
//! This module provides the crate error type returned by root validation,
//! plus the per-file read failure that ends up inline in the report.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Global error type for dirclip operations
#[derive(Error, Debug)]
pub enum DirClipError {
    /// Root path does not name an existing directory
    #[error("The given path '{}' is not a directory.", .0.display())]
    InvalidRoot(PathBuf),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for dirclip operations
pub type Result<T> = std::result::Result<T, DirClipError>;

/// Why a single file could not be turned into text
///
/// The `Display` output is what appears in the report in place of the
/// file content.
#[derive(Error, Debug)]
pub enum ReadFailure {
    /// Opening or reading the file failed
    #[error("{0}")]
    Io(#[from] io::Error),

    /// The bytes are not valid UTF-8
    #[error("content is not valid UTF-8 ({0})")]
    Decode(#[from] FromUtf8Error),
}
