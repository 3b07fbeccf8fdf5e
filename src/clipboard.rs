/*!
 * Clipboard support for dirclip
 *
 * The reporter only needs one capability from a clipboard: take a string.
 * `SystemClipboard` provides it by piping text into whichever clipboard
 * command the platform offers; `MemoryClipboard` records text in memory so
 * callers can substitute it for the real thing.
 */

use std::cell::RefCell;
use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use thiserror::Error;
use tracing::debug;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Anything that can receive the report text
pub trait Clipboard {
    /// Copy text to the clipboard
    fn copy_text(&self, text: &str) -> Result<()>;
}

impl<C: Clipboard + ?Sized> Clipboard for &C {
    fn copy_text(&self, text: &str) -> Result<()> {
        (**self).copy_text(text)
    }
}

/// Available clipboard providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClipboardProvider {
    /// tmux clipboard
    Tmux,
    /// X11 clipboard with xclip
    Xclip,
    /// X11 clipboard with xsel
    Xsel,
    /// Wayland clipboard
    Wayland,
    /// macOS clipboard
    MacOS,
    /// Windows clipboard (native or via WSL)
    Windows,
    /// Termux clipboard
    Termux,
}

impl ClipboardProvider {
    /// Command and arguments that read clipboard text from stdin
    fn command(self) -> (&'static str, Vec<&'static str>) {
        match self {
            Self::Tmux => ("tmux", vec!["load-buffer", "-w", "-"]),
            Self::Xclip => ("xclip", vec!["-selection", "clipboard", "-in"]),
            Self::Xsel => ("xsel", vec!["-b", "-i"]),
            Self::Wayland => ("wl-copy", vec![]),
            Self::MacOS => ("pbcopy", vec![]),
            Self::Windows => ("clip.exe", vec![]),
            Self::Termux => ("termux-clipboard-set", vec![]),
        }
    }
}

impl Clipboard for ClipboardProvider {
    fn copy_text(&self, text: &str) -> Result<()> {
        let (cmd, args) = self.command();
        execute_clipboard_command(cmd, &args, text)
    }
}

//--------------------------------------------------------------------
// Public API
//--------------------------------------------------------------------

/// The platform clipboard
///
/// Provider detection happens on every copy, so a clipboard that appears
/// after startup (e.g. a tmux server) is picked up. Providers are tried in
/// order of preference and the first one that succeeds wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<()> {
        let providers = determine_clipboard_providers();
        let mut last_error = None;

        for provider in providers {
            debug!("Trying clipboard provider {:?}", provider);
            match provider.copy_text(text) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    debug!("Clipboard provider {:?} failed: {}", provider, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(ClipboardError::NoClipboardFound))
    }
}

/// In-memory clipboard that records every copy
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    copies: RefCell<Vec<String>>,
    fail: bool,
}

impl MemoryClipboard {
    /// A clipboard that accepts every copy
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every copy as if no provider existed
    pub fn failing() -> Self {
        Self {
            copies: RefCell::default(),
            fail: true,
        }
    }

    /// Texts copied so far, oldest first
    pub fn copies(&self) -> Vec<String> {
        self.copies.borrow().clone()
    }

    /// Number of copy attempts that reached this clipboard
    pub fn copy_count(&self) -> usize {
        self.copies.borrow().len()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy_text(&self, text: &str) -> Result<()> {
        // Failed attempts are recorded too so callers can see the call happened
        self.copies.borrow_mut().push(text.to_string());
        if self.fail {
            return Err(ClipboardError::NoClipboardFound);
        }
        Ok(())
    }
}

/// Check if a command exists on the system
pub fn command_exists(command: &str) -> bool {
    if let Some(paths) = env::var_os("PATH") {
        for dir in env::split_paths(&paths) {
            if Path::new(&dir).join(command).exists() {
                return true;
            }
        }
    }

    // Try to run the command with '--version' flag as fallback
    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

//--------------------------------------------------------------------
// Internal Implementation
//--------------------------------------------------------------------

/// Spawn a clipboard command, feed it the text and wait for it
fn execute_clipboard_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(format!("Failed to spawn {}: {}", cmd, e)))?;

    // Dropping stdin closes the pipe so the command sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()).map_err(|e| {
            ClipboardError::CommandFailed(format!("Failed to write to {}: {}", cmd, e))
        }),
        None => Err(ClipboardError::CommandFailed(format!(
            "Failed to open stdin for {}",
            cmd
        ))),
    };

    // Reap the child even when feeding it failed
    let status = child.wait()?;
    written?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}

/// Platform detection cache
static PLATFORM: OnceLock<&'static str> = OnceLock::new();

/// Determine the platform (cached)
fn get_platform() -> &'static str {
    PLATFORM.get_or_init(|| {
        if cfg!(target_os = "macos") {
            "macos"
        } else if cfg!(target_os = "windows") {
            "windows"
        } else if cfg!(target_os = "android") {
            "android"
        } else if cfg!(target_os = "linux") {
            if env::var("WSL_DISTRO_NAME").is_ok() {
                "wsl"
            } else {
                "linux"
            }
        } else {
            "unknown"
        }
    })
}

/// Determine which clipboard providers to try based on platform and preference
fn determine_clipboard_providers() -> Vec<ClipboardProvider> {
    let mut providers = Vec::with_capacity(3);

    // tmux first when a session is active
    if env::var("TMUX").is_ok() && command_exists("tmux") {
        providers.push(ClipboardProvider::Tmux);
    }

    match get_platform() {
        "macos" => {
            if command_exists("pbcopy") {
                providers.push(ClipboardProvider::MacOS);
            }
        }
        "windows" | "wsl" => {
            if command_exists("clip.exe") {
                providers.push(ClipboardProvider::Windows);
            }
        }
        "linux" => {
            if env::var("WAYLAND_DISPLAY").is_ok() && command_exists("wl-copy") {
                providers.push(ClipboardProvider::Wayland);
            }
            if command_exists("xsel") {
                providers.push(ClipboardProvider::Xsel);
            }
            if command_exists("xclip") {
                providers.push(ClipboardProvider::Xclip);
            }
        }
        "android" => {
            if command_exists("termux-clipboard-set") {
                providers.push(ClipboardProvider::Termux);
            }
        }
        _ => {}
    }

    providers
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(!command_exists("nonexistentcommandxyz"));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_exists_for_shell() {
        assert!(command_exists("sh"));
    }

    #[test]
    fn test_get_platform() {
        let platform = get_platform();

        assert!(matches!(
            platform,
            "macos" | "windows" | "wsl" | "linux" | "android" | "unknown"
        ));

        // Cached value is stable
        assert_eq!(platform, get_platform());
    }

    #[test]
    fn memory_clipboard_records_copies() {
        let clipboard = MemoryClipboard::new();
        clipboard.copy_text("first").unwrap();
        clipboard.copy_text("second").unwrap();

        assert_eq!(clipboard.copies(), vec!["first", "second"]);
    }

    #[test]
    fn failing_memory_clipboard_reports_error() {
        let clipboard = MemoryClipboard::failing();
        let err = clipboard.copy_text("text").unwrap_err();

        assert!(matches!(err, ClipboardError::NoClipboardFound));
        assert_eq!(clipboard.copy_count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn clipboard_command_failure_is_reported() {
        // `false` may exit before reading, so either a write or status error is fine
        assert!(execute_clipboard_command("false", &[], "ignored").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn clipboard_command_receives_text() {
        assert!(execute_clipboard_command("cat", &[], "piped text").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn write_failure_is_reported_after_child_exits() {
        // More than a pipe buffer, so the write hits the closed pipe
        let text = "x".repeat(1 << 20);
        let err = execute_clipboard_command("true", &[], &text).unwrap_err();
        assert!(err.to_string().contains("Failed to write to true"));
    }

    #[test]
    fn missing_command_cannot_spawn() {
        let err = execute_clipboard_command("nonexistentcommandxyz", &[], "x").unwrap_err();
        assert!(err.to_string().contains("Failed to spawn nonexistentcommandxyz"));
    }

    #[test]
    #[ignore] // This test requires tmux to be installed and running
    fn test_tmux_clipboard() {
        if env::var("TMUX").is_err() || !command_exists("tmux") {
            return;
        }

        let test_text = "Test text for tmux clipboard";
        ClipboardProvider::Tmux
            .copy_text(test_text)
            .expect("Failed to copy to tmux clipboard");

        let output = Command::new("tmux")
            .args(["show-buffer"])
            .output()
            .expect("Failed to execute tmux show-buffer");

        let clipboard_content = String::from_utf8_lossy(&output.stdout);
        assert_eq!(clipboard_content.trim(), test_text);
    }
}
