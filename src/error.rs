//! Error types for shellout.
//!
//! Uses thiserror for derive macros. Three failure kinds matter to callers
//! and stay distinguishable:
//! - [`ValidationError`]: input that would need quoting was used where a
//!   [`SafeString`](crate::SafeString) is required
//! - [`ShellOutError`]: the process ran and exited non-zero
//! - [`Error::Spawn`]: the process could not be started at all

use crate::exit_codes;
use crate::output::strip_trailing_newline;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Returned when a string cannot be used unquoted in a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An empty string disappears from the command line when left unquoted.
    #[error("an empty string cannot be used unquoted in a command line")]
    Empty,

    /// The input contains a character the shell would interpret.
    #[error("'{input}' contains {found:?}, which must be quoted before use in a command line")]
    UnsafeCharacter { input: String, found: char },

    /// The input would be read as a variable assignment when placed first
    /// on a command line.
    #[error("'{input}' would be read as a variable assignment, not a command")]
    Assignment { input: String },

    /// A program or verbatim argument relies on shell parsing but the
    /// command was asked to run without a shell.
    #[error("'{argument}' needs a shell to be interpreted")]
    NeedsShell { argument: String },
}

/// A process that ran to completion but exited with a non-zero status.
///
/// Both output streams are kept in full, so a caller can still read what
/// the process printed before it failed. [`message`](Self::message) and
/// [`output`](Self::output) decode on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutError {
    exit_code: i32,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl ShellOutError {
    /// Create an error from an exit code and the raw captured streams.
    pub fn new(exit_code: i32, stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Exit status of the process. Negative when the process was killed
    /// by a signal (the value is the negated signal number).
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Everything the process wrote to standard output.
    pub fn stdout_bytes(&self) -> &[u8] {
        &self.stdout
    }

    /// Everything the process wrote to standard error.
    pub fn stderr_bytes(&self) -> &[u8] {
        &self.stderr
    }

    /// Standard error as text, with one trailing newline removed.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD.
    pub fn message(&self) -> String {
        decode(&self.stderr)
    }

    /// Standard output as text, with one trailing newline removed.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD.
    pub fn output(&self) -> String {
        decode(&self.stdout)
    }
}

fn decode(bytes: &[u8]) -> String {
    strip_trailing_newline(String::from_utf8_lossy(bytes).into_owned())
}

impl fmt::Display for ShellOutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ShellOut encountered an error\nStatus code: {}\nMessage: \"{}\"\nOutput: \"{}\"",
            self.exit_code,
            self.message(),
            self.output()
        )
    }
}

impl std::error::Error for ShellOutError {}

/// Main error type for shellout operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A string failed safe-string validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The process exited with a non-zero status.
    #[error(transparent)]
    Failed(#[from] ShellOutError),

    /// The process could not be started.
    #[error("failed to spawn '{program}' in '{}': {source}", .directory.display())]
    Spawn {
        program: String,
        directory: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The process was killed after exceeding its deadline.
    #[error("'{command}' timed out after {}s", .timeout.as_secs_f64())]
    TimedOut {
        command: String,
        timeout: Duration,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },

    /// Reading a pipe or waiting for the process failed after spawning.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// A flat command line could not be split into words.
    #[error("failed to parse command line: {0}")]
    Parse(String),

    /// The configuration is unreadable or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A background run did not deliver a result.
    #[error("background run failed: {0}")]
    Background(String),
}

impl Error {
    /// Returns the process exit code the CLI should use for this error.
    ///
    /// A failed child's own status is passed through when it fits in a
    /// process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Failed(e) if (1..=255).contains(&e.exit_code()) => e.exit_code(),
            Error::Failed(_) => exit_codes::FAILURE,
            Error::Validation(_) | Error::Parse(_) | Error::Config(_) => exit_codes::USAGE_ERROR,
            Error::Spawn { .. } => exit_codes::SPAWN_FAILURE,
            Error::TimedOut { .. } => exit_codes::TIMED_OUT,
            Error::Io { .. } | Error::Background(_) => exit_codes::FAILURE,
        }
    }

    /// The non-zero exit error, if this is one.
    pub fn as_shell_out_error(&self) -> Option<&ShellOutError> {
        match self {
            Error::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for shellout operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_has_status_message_and_output() {
        let err = ShellOutError::new(7, "Some output", "Hey, I'm an error!");
        assert_eq!(
            err.to_string(),
            "ShellOut encountered an error\n\
             Status code: 7\n\
             Message: \"Hey, I'm an error!\"\n\
             Output: \"Some output\""
        );
    }

    #[test]
    fn message_and_output_strip_one_trailing_newline() {
        let err = ShellOutError::new(1, "out\n\n", "err\n");
        assert_eq!(err.message(), "err");
        assert_eq!(err.output(), "out\n");
    }

    #[test]
    fn raw_bytes_are_kept_untouched() {
        let err = ShellOutError::new(2, b"partial\n".to_vec(), b"boom\n".to_vec());
        assert_eq!(err.stdout_bytes(), b"partial\n");
        assert_eq!(err.stderr_bytes(), b"boom\n");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_panicking() {
        let err = ShellOutError::new(1, vec![0x66, 0xff, 0x6f], vec![0xc3]);
        assert_eq!(err.output(), "f\u{fffd}o");
        assert_eq!(err.message(), "\u{fffd}");
    }

    #[test]
    fn validation_error_names_the_input() {
        let err = ValidationError::UnsafeCharacter {
            input: "rm -rf".to_string(),
            found: ' ',
        };
        assert!(err.to_string().contains("'rm -rf'"));
    }

    #[test]
    fn failed_exit_code_is_passed_through() {
        let err = Error::from(ShellOutError::new(42, "", ""));
        assert_eq!(err.exit_code(), 42);

        let err = Error::from(ShellOutError::new(-9, "", ""));
        assert_eq!(err.exit_code(), exit_codes::FAILURE);

        let err = Error::from(ShellOutError::new(300, "", ""));
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn other_errors_map_to_fixed_exit_codes() {
        assert_eq!(
            Error::from(ValidationError::Empty).exit_code(),
            exit_codes::USAGE_ERROR
        );

        let spawn = Error::Spawn {
            program: "missing".to_string(),
            directory: PathBuf::from("."),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(spawn.exit_code(), exit_codes::SPAWN_FAILURE);
        assert!(spawn.to_string().contains("failed to spawn 'missing'"));

        let timed_out = Error::TimedOut {
            command: "sleep 10".to_string(),
            timeout: Duration::from_secs(1),
            stdout: Vec::new(),
            stderr: Vec::new(),
        };
        assert_eq!(timed_out.exit_code(), exit_codes::TIMED_OUT);
    }

    #[test]
    fn as_shell_out_error_only_matches_failures() {
        let err = Error::from(ShellOutError::new(1, "", "nope"));
        assert_eq!(err.as_shell_out_error().map(|e| e.message()), Some("nope".to_string()));
        assert!(Error::Parse("x".to_string()).as_shell_out_error().is_none());
    }
}
